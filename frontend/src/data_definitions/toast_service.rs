//! Application-wide toast publisher.

use common::toast::{TOAST_LIFETIME, Toast, ToastQueue, ToastSeverity};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;


/// Created once at the root and shared through the context. Each published
/// toast schedules its own dismissal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastService {
    queue: Signal<ToastQueue>,
}

impl ToastService {
    pub fn new(queue: Signal<ToastQueue>) -> Self {
        Self { queue }
    }

    pub fn live(&self) -> Vec<Toast> {
        self.queue.read().live().to_vec()
    }

    pub fn publish(&self, message: impl Into<String>, severity: ToastSeverity) {
        let mut queue = self.queue;
        let id = queue.write().publish(message, severity);
        spawn_forever(async move {
            gloo_timers::future::sleep(TOAST_LIFETIME).await;
            queue.write().dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.publish(message, ToastSeverity::Success);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.publish(message, ToastSeverity::Info);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.publish(message, ToastSeverity::Warning);
    }

    pub fn danger(&self, message: impl Into<String>) {
        self.publish(message, ToastSeverity::Danger);
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>()
}
