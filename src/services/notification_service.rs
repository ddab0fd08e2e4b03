use dioxus::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use dioxus::core::spawn_forever;
use gallery_core::Notification;

/// How long a toast stays before it closes itself
pub const TOAST_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Shows a toast and schedules its removal
pub fn notify(mut queue: Signal<ToastQueue>, notification: Notification) {
    log::debug!("Toast: {}", notification.title_key);
    let id = queue.write().push(notification);

    // Owned by the root scope so the dismissal survives the dialog closing
    #[cfg(not(target_arch = "wasm32"))]
    spawn_forever(async move {
        tokio::time::sleep(std::time::Duration::from_millis(TOAST_DURATION_MS)).await;
        queue.write().dismiss(id);
    });

    #[cfg(target_arch = "wasm32")]
    let _ = id;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::new();
        let first = queue.push(Notification::image_created());
        let second = queue.push(Notification::submission_failed());
        assert_ne!(first, second);
        assert_eq!(queue.toasts().len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].notification, Notification::submission_failed());
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut queue = ToastQueue::new();
        queue.push(Notification::image_missing());
        queue.dismiss(42);
        assert_eq!(queue.toasts().len(), 1);
    }
}
