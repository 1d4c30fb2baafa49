use super::*;

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().notice().is_none());
}

#[test]
fn show_replaces_current_notice() {
    let mut state = ToastState::default();
    state.show(Notice::success("first"));
    state.show(Notice::error("second"));
    assert_eq!(state.notice(), Some(&Notice::error("second")));
}

#[test]
fn dismiss_of_stale_id_keeps_newer_toast() {
    let mut state = ToastState::default();
    let old = state.show(Notice::success("saved"));
    let new = state.show(Notice::error("failed"));
    assert_ne!(old, new);
    state.dismiss(old);
    assert_eq!(state.notice().map(|n| n.kind), Some(NoticeKind::Error));
    state.dismiss(new);
    assert!(state.notice().is_none());
}

#[test]
fn notice_constructors_set_kind() {
    assert_eq!(Notice::success("x").kind, NoticeKind::Success);
    assert_eq!(Notice::error("x").kind, NoticeKind::Error);
}
