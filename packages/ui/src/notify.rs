//! Ephemeral message display.
//!
//! Fire-and-forget from the caller's perspective: push a notice, it shows in
//! the stack and dismisses itself a few seconds later.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotifyKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "notice notice-success",
            Self::Error => "notice notice-error",
            Self::Info => "notice notice-info",
            Self::Warning => "notice notice-warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NotifyKind,
    pub message: String,
}

/// Notices currently on screen.
#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, kind: NotifyKind, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Notice {
            id,
            kind,
            message: message.to_string(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|notice| notice.id != id);
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Show an ephemeral notice.
pub fn notify(notices: &mut Signal<Notifications>, kind: NotifyKind, message: &str) {
    notices.write().push(kind, message);
}

const NOTICE_TTL_MS: u32 = 4_000;

/// Provides the notification queue and renders the stack above `children`.
#[component]
pub fn NotificationHost(children: Element) -> Element {
    let notices = use_context_provider(|| Signal::new(Notifications::default()));

    rsx! {
        div {
            class: "notice-stack",
            for notice in notices().entries {
                NoticeToast { key: "{notice.id}", notice: notice }
            }
        }
        {children}
    }
}

#[component]
fn NoticeToast(notice: Notice) -> Element {
    let mut notices = use_notifications();

    let id = notice.id;
    let _ = use_future(move || async move {
        crate::auth::sleep_ms(NOTICE_TTL_MS).await;
        notices.write().dismiss(id);
    });

    rsx! {
        div {
            class: notice.kind.class(),
            "{notice.message}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_distinct_ids() {
        let mut notices = Notifications::default();

        let first = notices.push(NotifyKind::Info, "one");
        let second = notices.push(NotifyKind::Error, "two");

        assert_ne!(first, second);
        assert_eq!(notices.entries.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let mut notices = Notifications::default();

        let first = notices.push(NotifyKind::Success, "kept");
        let second = notices.push(NotifyKind::Warning, "dropped");
        notices.dismiss(second);

        assert_eq!(notices.entries.len(), 1);
        assert_eq!(notices.entries[0].id, first);
    }
}
