//! Transient toast notifications.
//!
//! Pages push messages through a [`Notifier`]; [`ToastContainer`] draws them
//! in the corner and each one removes itself after the configured duration.

use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleInfo, FaTriangleExclamation};
use crate::platform::sleep;
use crate::Icon;

const NOTIFICATIONS_CSS: Asset = asset!("/assets/notifications.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toasts {
    next_id: u64,
    entries: Vec<Toast>,
    duration_ms: u32,
}

impl Toasts {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
            duration_ms,
        }
    }

    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|t| t.id != id);
    }

    pub fn entries(&self) -> &[Toast] {
        &self.entries
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

/// Handle for raising toasts from event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Notifier {
    toasts: Signal<Toasts>,
}

impl Notifier {
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let mut toasts = self.toasts;
        let id = toasts.write().push(kind, message);
        let duration = toasts.peek().duration_ms();
        // Outlives the page that raised it
        spawn_forever(async move {
            sleep(duration).await;
            toasts.write().dismiss(id);
        });
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(ToastKind::Info, message);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>()
}

/// Provides a [`Notifier`] to its children and draws the toasts.
#[component]
pub fn NotificationProvider(duration_ms: u32, children: Element) -> Element {
    let toasts = use_signal(|| Toasts::new(duration_ms));
    use_context_provider(|| Notifier { toasts });

    rsx! {
        {children}
        ToastContainer { toasts }
    }
}

#[component]
fn ToastContainer(toasts: Signal<Toasts>) -> Element {
    let mut toasts = toasts;
    let entries = toasts.read().entries().to_vec();

    rsx! {
        document::Stylesheet { href: NOTIFICATIONS_CSS }

        div {
            class: "toast-container",
            for toast in entries {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                        ToastKind::Info => "toast toast-info",
                    },
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    {toast_icon(toast.kind)}
                    span { "{toast.message}" }
                }
            }
        }
    }
}

fn toast_icon(kind: ToastKind) -> Element {
    match kind {
        ToastKind::Success => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } },
        ToastKind::Error => rsx! { Icon { icon: FaTriangleExclamation, width: 14, height: 14 } },
        ToastKind::Info => rsx! { Icon { icon: FaCircleInfo, width: 14, height: 14 } },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut toasts = Toasts::new(4000);
        let a = toasts.push(ToastKind::Success, "Booking confirmed!");
        let b = toasts.push(ToastKind::Error, "Please select a movie first");
        assert_ne!(a, b);
        assert_eq!(toasts.entries().len(), 2);

        toasts.dismiss(a);
        assert_eq!(toasts.entries()[0].message, "Please select a movie first");
        toasts.dismiss(a);
        assert_eq!(toasts.entries().len(), 1);
        assert_eq!(toasts.duration_ms(), 4000);
    }
}
