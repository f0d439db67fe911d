//! Transient user-facing notices.
//!
//! Notices render as banner fragments appended to the page's notice stack
//! via an HTMX out-of-band swap. Banners dismiss themselves after a fixed
//! delay; success banners exit with a slide-out transition, error banners
//! simply disappear. There is no queueing or de-duplication - concurrent
//! banners stack.

use std::fmt;

use askama::Template;

/// Auto-dismiss delay in milliseconds, for both kinds.
pub const DISMISS_MS: u32 = 3000;

/// Banner kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS class suffix for the banner.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Success banners get a slide-out exit transition.
    #[must_use]
    pub const fn has_exit_transition(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for NoticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient banner message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notice {
    /// Create a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Success,
        }
    }

    /// Create an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NoticeKind::Error,
        }
    }
}

/// Out-of-band notice fragment, appended to the `#notices` stack.
#[derive(Template)]
#[template(path = "partials/notice_oob.html")]
pub struct NoticeTemplate {
    pub notice: Notice,
    pub dismiss_ms: u32,
}

impl NoticeTemplate {
    /// Wrap a notice for an out-of-band swap.
    #[must_use]
    pub const fn oob(notice: Notice) -> Self {
        Self {
            notice,
            dismiss_ms: DISMISS_MS,
        }
    }
}
