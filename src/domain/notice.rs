use std::cell::RefCell;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
}

impl Severity {
    pub fn label(&self) -> &str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

/// Receives user-facing feedback from the contact store.
///
/// Notices are fire-and-forget: nothing the notifier does can affect the
/// outcome of the store operation that emitted it.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// Prints notices to the terminal. Warnings go to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        mirror_to_log(message, severity);

        match severity {
            Severity::Warning => eprintln!("[{}] {}", severity, message),
            _ => println!("[{}] {}", severity, message),
        }
    }
}

/// Keeps every notice it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn last(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.notices.borrow_mut().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        mirror_to_log(message, severity);

        self.notices.borrow_mut().push(Notice {
            message: message.to_string(),
            severity,
        });
    }
}

// Must stay below the default `warn` level: ConsoleNotifier already prints notices.
fn mirror_to_log(message: &str, severity: Severity) {
    log::debug!("notice ({severity}): {message}");
}
