//! Toast message queue model.
//!
//! The queue only records what is live; the frontend schedules one dismissal
//! per published toast, [`TOAST_LIFETIME`] after its own publish time.

use std::time::Duration;


pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Info,
    Warning,
    Danger,
}

impl ToastSeverity {
    pub fn colors(&self) -> (&'static str, &'static str) {
        // (background, border)
        match self {
            ToastSeverity::Success => ("#ECFDF5", "#10B981"),
            ToastSeverity::Info => ("#EFF6FF", "#3B82F6"),
            ToastSeverity::Warning => ("#FFFBEB", "#F59E0B"),
            ToastSeverity::Danger => ("#FEF2F2", "#EF4444"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: ToastSeverity,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    next_id: u64,
    live: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a toast and returns the id its dismissal must use.
    pub fn publish(&mut self, message: impl Into<String>, severity: ToastSeverity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.live.push(Toast { id, message: message.into(), severity });
        id
    }

    /// Returns `false` when the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.live.len();
        self.live.retain(|t| t.id != id);
        self.live.len() != before
    }

    pub fn live(&self) -> &[Toast] {
        &self.live
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_render_in_publish_order() {
        let mut q = ToastQueue::new();
        q.publish("first", ToastSeverity::Info);
        q.publish("second", ToastSeverity::Danger);
        let messages: Vec<&str> = q.live().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn identical_messages_get_their_own_slot() {
        let mut q = ToastQueue::new();
        let a = q.publish("Saved", ToastSeverity::Success);
        let b = q.publish("Saved", ToastSeverity::Success);
        assert_ne!(a, b);
        assert_eq!(q.live().len(), 2);

        assert!(q.dismiss(a));
        assert_eq!(q.live().len(), 1);
        assert_eq!(q.live()[0].id, b);
    }

    #[test]
    fn dismissal_happens_exactly_once() {
        let mut q = ToastQueue::new();
        let id = q.publish("gone", ToastSeverity::Warning);
        assert!(q.dismiss(id));
        assert!(!q.dismiss(id));
        assert!(q.live().is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let mut q = ToastQueue::new();
        let a = q.publish("a", ToastSeverity::Info);
        q.dismiss(a);
        let b = q.publish("b", ToastSeverity::Info);
        assert_ne!(a, b);
    }
}
