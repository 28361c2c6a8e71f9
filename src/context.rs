//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::{ApiClient, ApiError};
use crate::host::HostBridge;
use crate::store::{store_navigate, AppStateStoreFields, AppStore, View};
use crate::toast::{Notifier, Severity};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    api: StoredValue<ApiClient, LocalStorage>,
    bridge: StoredValue<Rc<dyn HostBridge>, LocalStorage>,
    pub notifier: Notifier,
    pub store: AppStore,
}

impl AppContext {
    pub fn new(api: ApiClient, bridge: Rc<dyn HostBridge>, notifier: Notifier, store: AppStore) -> Self {
        Self {
            api: StoredValue::new_local(api),
            bridge: StoredValue::new_local(bridge),
            notifier,
            store,
        }
    }

    /// Client carrying the session token
    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn bridge(&self) -> Rc<dyn HostBridge> {
        self.bridge.get_value()
    }

    pub fn set_bridge(&self, bridge: Rc<dyn HostBridge>) {
        self.bridge.set_value(bridge);
    }

    /// Current user id without subscribing; screens only mount once signed in
    pub fn user_id_untracked(&self) -> Option<u32> {
        self.store.user().with_untracked(|u| u.as_ref().map(|u| u.id))
    }

    pub fn navigate(&self, view: View) {
        store_navigate(&self.store, view);
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        self.notifier.notify(message, severity);
    }

    pub fn success(&self, message: &str) {
        self.notify(message, Severity::Success);
    }

    /// Toast an error with a fixed message
    pub fn fail(&self, message: &str) {
        self.notify(message, Severity::Error);
    }

    /// Toast the backend detail when present, else `fallback`
    pub fn report_failure(&self, error: &ApiError, fallback: &str) {
        log::error!("[Api] {}: {}", fallback, error);
        self.notify(error.user_message(fallback), Severity::Error);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
