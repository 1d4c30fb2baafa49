#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// Fire-and-forget sink for user notifications.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// The single visible toast, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<(u64, Notice)>,
    next_id: u64,
}

impl ToastState {
    /// Show `notice`, replacing whatever is visible. Returns its id.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        self.current = Some((self.next_id, notice));
        self.next_id
    }

    /// Hide the toast only if `id` is still the one showing.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|(current, _)| *current == id) {
            self.current = None;
        }
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(_, n)| n)
    }
}

/// Shows the notice and schedules its auto-dismiss in the browser.
#[derive(Clone, Copy, Debug)]
pub struct ToastNotifier {
    pub state: RwSignal<ToastState>,
    pub duration_ms: u32,
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        match notice.kind {
            NoticeKind::Error => log::warn!("toast: {}", notice.message),
            NoticeKind::Success => log::info!("toast: {}", notice.message),
        }
        let mut id = 0;
        self.state.update(|s| id = s.show(notice));

        #[cfg(feature = "csr")]
        {
            let state = self.state;
            let duration_ms = self.duration_ms;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(duration_ms).await;
                state.update(|s| s.dismiss(id));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}
