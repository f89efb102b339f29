//! Site Context
//!
//! Shared state provided via Leptos Context API: the site configuration and
//! the single active notice.

use leptos::prelude::*;

use crate::config::SiteConfig;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "toast toast-success",
            Severity::Error => "toast toast-error",
        }
    }
}

/// Transient user feedback message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub severity: Severity,
}

/// Site-wide values provided via context
#[derive(Clone, Copy)]
pub struct SiteContext {
    config: StoredValue<SiteConfig>,
    /// Latest notice, cleared by the toast after `notice_ms` - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Latest notice - write
    set_notice: WriteSignal<Option<Notice>>,
    next_notice_id: StoredValue<u32>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        let (notice, set_notice) = signal(None);
        Self {
            config: StoredValue::new(config),
            notice,
            set_notice,
            next_notice_id: StoredValue::new(1),
        }
    }

    pub fn config(&self) -> SiteConfig {
        self.config.get_value()
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&SiteConfig) -> R) -> R {
        self.config.with_value(f)
    }

    /// Show a notice, replacing any current one
    pub fn notify(&self, message: impl Into<String>, severity: Severity) {
        let id = self.next_notice_id.get_value();
        self.next_notice_id.set_value(id.wrapping_add(1));
        self.set_notice.set(Some(Notice {
            id,
            message: message.into(),
            severity,
        }));
    }

    /// Clear the notice if it is still `id`
    pub fn dismiss(&self, id: u32) {
        self.set_notice.update(|notice| {
            if notice.as_ref().map(|n| n.id) == Some(id) {
                *notice = None;
            }
        });
    }
}

/// Get the site context
pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_replaces_and_dismiss_matches_id() {
        let owner = Owner::new();
        owner.set();
        let ctx = SiteContext::new(SiteConfig::default());

        ctx.notify("first", Severity::Success);
        let first = ctx.notice.get_untracked().unwrap();

        ctx.notify("second", Severity::Error);
        let second = ctx.notice.get_untracked().unwrap();
        assert_eq!(second.message, "second");
        assert_ne!(first.id, second.id);

        // A stale timer must not clear the newer notice
        ctx.dismiss(first.id);
        assert!(ctx.notice.get_untracked().is_some());

        ctx.dismiss(second.id);
        assert!(ctx.notice.get_untracked().is_none());
    }

    #[test]
    fn test_config_access() {
        let owner = Owner::new();
        owner.set();
        let ctx = SiteContext::new(SiteConfig::default());
        assert_eq!(ctx.with_config(|c| c.display_cap), 12);
        assert_eq!(ctx.config().site_name, "CryptoSafe");
    }
}
