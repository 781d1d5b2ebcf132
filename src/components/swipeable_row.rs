//! Swipeable Row Component
//!
//! Wraps list-row content with swipe-to-act gestures: background action
//! panes are revealed while the content pane translates with the drag.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_swipe::{
    create_swipe_signals, make_on_pointerdown, make_on_pointermove, make_on_pointerup,
    SwipeController,
};

/// Row wrapper with commit-right / commit-left swipe actions.
///
/// An omitted callback makes that direction untakeable: the row snaps
/// back instead of committing. Callbacks run after the commit animation
/// finishes, at most once per gesture.
#[component]
pub fn SwipeableRow(
    #[prop(optional)] on_swipe_right: Option<Callback<()>>,
    #[prop(optional)] on_swipe_left: Option<Callback<()>>,
    #[prop(into, default = "#10b981".to_string())] right_color: String,
    #[prop(into, default = "#ef4444".to_string())] left_color: String,
    #[prop(into, default = "✓".to_string())] right_icon: String,
    #[prop(into, default = "🗑".to_string())] left_icon: String,
    children: Children,
) -> impl IntoView {
    let signals = create_swipe_signals();

    let right_action: Option<Rc<dyn Fn()>> =
        on_swipe_right.map(|cb| Rc::new(move || cb.run(())) as Rc<dyn Fn()>);
    let left_action: Option<Rc<dyn Fn()>> =
        on_swipe_left.map(|cb| Rc::new(move || cb.run(())) as Rc<dyn Fn()>);

    let ctrl = SwipeController::new(signals, right_action, left_action);

    let on_down = make_on_pointerdown(ctrl.clone());
    let on_move = make_on_pointermove(ctrl.clone());
    let on_up = make_on_pointerup(ctrl.clone());
    let on_cancel = make_on_pointerup(ctrl);

    let offset = signals.offset_read;
    let dragging = signals.dragging_read;

    view! {
        <div class="swipe-row">
            // Background actions, revealed as the content pane moves
            <div class="swipe-actions">
                <div class="swipe-action" style:background-color=right_color>
                    <span class="swipe-action-icon">{right_icon}</span>
                </div>
                <div class="swipe-action" style:background-color=left_color>
                    <span class="swipe-action-icon">{left_icon}</span>
                </div>
            </div>

            <div
                class=move || if dragging.get() { "swipe-content dragging" } else { "swipe-content" }
                style:transform=move || format!("translateX({}px)", offset.get())
                on:pointerdown=on_down
                on:pointermove=on_move
                on:pointerup=on_up
                on:pointercancel=on_cancel
            >
                {children()}
            </div>
        </div>
    }
}
