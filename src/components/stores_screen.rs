//! Stores Screen
//!
//! Store management: list with per-store item counts, add/edit modal
//! with preset color and icon pickers, and delete with a cascade warning.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::dialog;
use crate::models::{Store as ShopStore, StoreCreate, StoreUpdate};
use crate::store::{
    store_remove_store, store_upsert_store, use_app_store, AppStore, AppStateStoreFields,
};

/// Preset swatches for the add/edit modal
const PRESET_COLORS: &[&str] = &[
    "#ef4444", "#f59e0b", "#10b981", "#3b82f6", "#6366f1", "#8b5cf6", "#ec4899",
];
const PRESET_ICONS: &[&str] = &["🏪", "🛒", "🥬", "🎯", "🍎", "🧺", "🏬", "🍞", "🥩", "🧀"];

fn delete_store(store: AppStore, target: &ShopStore) {
    let prompt = format!(
        "Delete \"{}\"? All items in this store will be deleted.",
        target.name
    );
    if !dialog::confirm(&prompt) {
        return;
    }
    let store_id = target.id;
    spawn_local(async move {
        match api::stores::delete(store_id).await {
            Ok(_) => store_remove_store(&store, store_id),
            Err(_) => dialog::alert("Failed to delete store"),
        }
    });
}

/// Store management screen
#[component]
pub fn StoresScreen() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    // None = closed, Some(None) = adding, Some(Some(id)) = editing
    let (editing, set_editing) = signal::<Option<Option<u32>>>(None);
    let (name, set_name) = signal(String::new());
    let (color, set_color) = signal(PRESET_COLORS[0].to_string());
    let (icon, set_icon) = signal(PRESET_ICONS[0].to_string());

    let open_add = move |_| {
        set_name.set(String::new());
        set_color.set(PRESET_COLORS[0].to_string());
        set_icon.set(PRESET_ICONS[0].to_string());
        set_editing.set(Some(None));
    };

    let open_edit = move |s: ShopStore| {
        set_name.set(s.name);
        set_color.set(s.color);
        set_icon.set(s.icon);
        set_editing.set(Some(Some(s.id)));
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let trimmed = name.get().trim().to_string();
        if trimmed.is_empty() {
            return;
        }
        let Some(target) = editing.get() else {
            return;
        };
        let selected_color = color.get();
        let selected_icon = icon.get();

        spawn_local(async move {
            let result = match target {
                Some(id) => {
                    let patch = StoreUpdate {
                        name: Some(trimmed),
                        color: Some(selected_color),
                        icon: Some(selected_icon),
                    };
                    api::stores::update(id, &patch).await
                }
                None => {
                    let payload = StoreCreate {
                        name: trimmed,
                        color: selected_color,
                        icon: selected_icon,
                    };
                    api::stores::create(&payload).await
                }
            };
            match result {
                Ok(saved) => store_upsert_store(&store, saved),
                Err(_) => dialog::alert("Failed to save store"),
            }
        });

        set_editing.set(None);
    };

    let item_count = move |store_id: u32| {
        store
            .items()
            .get()
            .iter()
            .filter(|i| i.store_id == store_id)
            .count()
    };

    view! {
        <div class="screen">
            <header class="screen-header">
                <div class="screen-title-row">
                    <h1>"My Stores"</h1>
                    <button class="refresh-btn" on:click=move |_| ctx.reload()>"⟳"</button>
                </div>
                <p class="subtitle">
                    {move || {
                        let n = store.stores().get().len();
                        format!("{} store{}", n, if n == 1 { "" } else { "s" })
                    }}
                </p>
            </header>

            <div class="screen-content">
                <For
                    each=move || store.stores().get()
                    key=|s| s.id
                    children=move |s| {
                        let edit_target = s.clone();
                        let delete_target = s.clone();
                        let store_id = s.id;
                        view! {
                            <div class="store-card">
                                <span class="store-card-icon" style:background-color=s.color.clone()>
                                    {s.icon.clone()}
                                </span>
                                <div class="store-card-body">
                                    <div class="store-card-name">{s.name.clone()}</div>
                                    <div class="store-card-count">
                                        {move || format!("{} items", item_count(store_id))}
                                    </div>
                                </div>
                                <button class="edit-btn" on:click=move |_| open_edit(edit_target.clone())>
                                    "Edit"
                                </button>
                                <button class="delete-btn" on:click=move |_| delete_store(store, &delete_target)>
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            <button class="fab" on:click=open_add>"+"</button>

            <Show when=move || editing.get().is_some()>
                <div class="modal-overlay" on:click=move |_| set_editing.set(None)>
                    <form
                        class="modal-sheet"
                        on:click=move |ev| ev.stop_propagation()
                        on:submit=submit
                    >
                        <h2>
                            {move || {
                                if matches!(editing.get(), Some(Some(_))) { "Edit Store" } else { "Add Store" }
                            }}
                        </h2>

                        <input
                            type="text"
                            class="form-input"
                            placeholder="Store name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />

                        <label class="form-label">"Color:"</label>
                        <div class="swatch-row">
                            {PRESET_COLORS.iter().map(|&preset| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if color.get() == preset { "color-swatch selected" } else { "color-swatch" }
                                        }
                                        style:background-color=preset
                                        on:click=move |_| set_color.set(preset.to_string())
                                    />
                                }
                            }).collect_view()}
                        </div>

                        <label class="form-label">"Icon:"</label>
                        <div class="swatch-row">
                            {PRESET_ICONS.iter().map(|&preset| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if icon.get() == preset { "icon-swatch selected" } else { "icon-swatch" }
                                        }
                                        on:click=move |_| set_icon.set(preset.to_string())
                                    >
                                        {preset}
                                    </button>
                                }
                            }).collect_view()}
                        </div>

                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(None)>
                                "Cancel"
                            </button>
                            <button type="submit" class="submit-btn" disabled=move || name.get().trim().is_empty()>
                                "Save"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
