// Toast queue for the status bar. Non-blocking feedback only; anything
// that must interrupt the user goes through a modal.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }

    /// How long a toast of this level stays on screen.
    fn hold(self) -> Duration {
        match self {
            Self::Info | Self::Success => Duration::from_secs(3),
            Self::Warning => Duration::from_secs(4),
            Self::Error => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    raised_at: Option<Instant>,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self::at_level(message, NotificationLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::at_level(message, NotificationLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::at_level(message, NotificationLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::at_level(message, NotificationLevel::Error)
    }

    fn at_level(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            raised_at: None,
        }
    }

    fn expired(&self) -> bool {
        self.raised_at
            .is_some_and(|at| at.elapsed() >= self.level.hold())
    }

    fn same_text(&self, other: &Notification) -> bool {
        self.message == other.message && self.level == other.level
    }
}

/// Holds one toast on screen and the rest in level order behind it.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    showing: Option<Notification>,
    waiting: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repeat of the visible toast only restarts its clock, and a
    /// repeat of a waiting one is dropped. A higher level preempts the
    /// visible toast outright; the preempted toast is gone for good.
    pub fn push(&mut self, incoming: Notification) {
        match &mut self.showing {
            None => {
                self.show(incoming);
                return;
            }
            Some(showing) => {
                if showing.same_text(&incoming) {
                    showing.raised_at = Some(Instant::now());
                    return;
                }
            }
        }
        if self.waiting.iter().any(|w| w.same_text(&incoming)) {
            return;
        }
        if self
            .showing
            .as_ref()
            .is_some_and(|showing| incoming.level > showing.level)
        {
            self.show(incoming);
            return;
        }
        let at = self
            .waiting
            .iter()
            .position(|w| w.level < incoming.level)
            .unwrap_or(self.waiting.len());
        self.waiting.insert(at, incoming);
    }

    pub fn current(&self) -> Option<&Notification> {
        self.showing.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.showing = None;
        if let Some(next) = self.waiting.pop_front() {
            self.show(next);
        }
    }

    /// Retire the visible toast once its hold elapses.
    pub fn tick(&mut self) {
        if self.showing.as_ref().is_some_and(Notification::expired) {
            self.dismiss();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.showing.is_none() && self.waiting.is_empty()
    }

    fn show(&mut self, mut toast: Notification) {
        toast.raised_at = Some(Instant::now());
        self.showing = Some(toast);
    }
}
