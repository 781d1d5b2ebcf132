//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload items and stores from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload items and stores from the backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Whether the initial load (or a refresh) is in flight - read
    pub loading: ReadSignal<bool>,
    set_loading: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        loading: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            loading: loading.0,
            set_loading: loading.1,
        }
    }

    /// Trigger a refresh of both collections
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn set_loading(&self, loading: bool) {
        // try_set: a load finishing after teardown is simply ignored
        self.set_loading.try_set(loading);
    }
}
