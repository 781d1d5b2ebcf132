//! Leptos Swipe Utilities
//!
//! Swipe-to-act gestures for list rows using pointer events.
//! Uses a movement threshold to distinguish a horizontal swipe from a
//! vertical scroll, and commits an action only after the off-screen
//! animation finishes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

pub mod machine;

pub use machine::{
    SwipeDirection, SwipeMachine, SwipePhase, ACTIVATION_DISTANCE, COMMIT_DURATION_MS,
    COMMIT_THRESHOLD, OFFSCREEN_OFFSET,
};

/// Animation frame step in ms
const FRAME_MS: f64 = 16.0;

/// Swipe state signals
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Horizontal offset of the row content in px - read
    pub offset_read: ReadSignal<f64>,
    pub offset_write: WriteSignal<f64>,
    /// Whether a horizontal drag is currently claimed - read
    pub dragging_read: ReadSignal<bool>,
    pub dragging_write: WriteSignal<bool>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (offset_read, offset_write) = signal(0.0f64);
    let (dragging_read, dragging_write) = signal(false);
    SwipeSignals {
        offset_read,
        offset_write,
        dragging_read,
        dragging_write,
    }
}

/// Per-row gesture controller tying pointer events to a [`SwipeMachine`].
///
/// Clone is cheap; all clones share the same machine and signals.
#[derive(Clone)]
pub struct SwipeController {
    machine: Rc<RefCell<SwipeMachine>>,
    signals: SwipeSignals,
    start: Rc<Cell<(f64, f64)>>,
    animating: Rc<Cell<bool>>,
    on_right: Option<Rc<dyn Fn()>>,
    on_left: Option<Rc<dyn Fn()>>,
}

impl SwipeController {
    /// Directions without an action are untakeable and snap back.
    pub fn new(
        signals: SwipeSignals,
        on_right: Option<Rc<dyn Fn()>>,
        on_left: Option<Rc<dyn Fn()>>,
    ) -> Self {
        let machine = SwipeMachine::new(on_right.is_some(), on_left.is_some());
        Self {
            machine: Rc::new(RefCell::new(machine)),
            signals,
            start: Rc::new(Cell::new((0.0, 0.0))),
            animating: Rc::new(Cell::new(false)),
            on_right,
            on_left,
        }
    }

    pub fn signals(&self) -> SwipeSignals {
        self.signals
    }

    fn publish(&self) {
        let (offset, dragging) = {
            let m = self.machine.borrow();
            (m.offset(), m.phase() == SwipePhase::Dragging)
        };
        // try_* so a row discarded mid-gesture just drops the update
        self.signals.offset_write.try_set(offset);
        self.signals.dragging_write.try_set(dragging);
    }
}

/// Create pointerdown handler for a swipeable row
pub fn make_on_pointerdown(ctrl: SwipeController) -> impl Fn(web_sys::PointerEvent) + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ctrl.machine.borrow_mut().begin() {
            return;
        }
        ctrl.start.set((ev.client_x() as f64, ev.client_y() as f64));
        // Keep receiving moves even when the pointer leaves the row
        if let Some(target) = ev.target() {
            if let Some(el) = target.dyn_ref::<web_sys::Element>() {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
        }
    }
}

/// Create pointermove handler for a swipeable row
pub fn make_on_pointermove(ctrl: SwipeController) -> impl Fn(web_sys::PointerEvent) + 'static {
    move |ev: web_sys::PointerEvent| {
        let (sx, sy) = ctrl.start.get();
        let dx = ev.client_x() as f64 - sx;
        let dy = ev.client_y() as f64 - sy;
        ctrl.machine.borrow_mut().drag(dx, dy);
        ctrl.publish();
    }
}

/// Create pointerup/pointercancel handler for a swipeable row.
/// Resolves the gesture and drives the commit or snap-back animation.
pub fn make_on_pointerup(ctrl: SwipeController) -> impl Fn(web_sys::PointerEvent) + 'static {
    move |_ev: web_sys::PointerEvent| {
        ctrl.machine.borrow_mut().release();
        ctrl.publish();
        if ctrl.machine.borrow().is_animating() {
            run_animation(ctrl.clone());
        }
    }
}

/// Tick the machine on a frame timer until it settles. The registered
/// action runs exactly once, after the commit animation completes.
fn run_animation(ctrl: SwipeController) {
    if ctrl.animating.get() {
        return;
    }
    ctrl.animating.set(true);

    spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(FRAME_MS as u32).await;
            let fired = ctrl.machine.borrow_mut().tick(FRAME_MS);
            ctrl.publish();

            if let Some(direction) = fired {
                let action = match direction {
                    SwipeDirection::Right => ctrl.on_right.as_ref(),
                    SwipeDirection::Left => ctrl.on_left.as_ref(),
                };
                if let Some(action) = action {
                    action();
                }
            }

            if ctrl.machine.borrow().is_idle() {
                break;
            }
        }
        ctrl.animating.set(false);
    });
}
