//! Toast Notifications
//!
//! One toast at a time; a newer toast replaces the current one and each
//! hides itself after the configured duration unless replaced first.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Info => "toast toast-info",
            Self::Warning => "toast toast-warning",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Hide `current` only if it is still the toast with `id`
fn expire(current: &mut Option<Toast>, id: u64) {
    if current.as_ref().is_some_and(|t| t.id == id) {
        *current = None;
    }
}

#[derive(Clone, Copy)]
pub struct Notifier {
    current: RwSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl Notifier {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
            duration_ms,
        }
    }

    pub fn current(&self) -> Option<Toast> {
        self.current.get()
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);

        let toast = Toast { id, message: message.into(), severity };
        log::debug!("[Toast] {:?}: {}", toast.severity, toast.message);
        self.current.set(Some(toast));

        let current = self.current;
        let duration = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            current.try_update(|slot| expire(slot, id));
        });
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast { id, message: format!("toast {}", id), severity: Severity::Info }
    }

    #[test]
    fn test_expire_matching_toast() {
        let mut current = Some(toast(1));
        expire(&mut current, 1);
        assert_eq!(current, None);
    }

    #[test]
    fn test_expire_ignores_replaced_toast() {
        let mut current = Some(toast(2));
        expire(&mut current, 1);
        assert_eq!(current, Some(toast(2)));
    }

    #[test]
    fn test_css_class() {
        assert_eq!(Severity::Error.css_class(), "toast toast-error");
        assert_eq!(Severity::Success.css_class(), "toast toast-success");
    }
}
