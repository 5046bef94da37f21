//! Toast notifications for store operation outcomes.

/// How long a toast stays up before dismissing itself
pub const TOAST_DURATION_MS: u32 = 3000;

/// Delay before leaving the detail page after it deleted its own wish
pub const REDIRECT_AFTER_DELETE_MS: u32 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
    Delete,
}

impl Operation {
    fn past_tense(&self) -> &'static str {
        match self {
            Operation::Add => "added",
            Operation::Update => "updated",
            Operation::Delete => "deleted",
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    /// Failures are never classified further than "Failed to X"
    pub fn for_outcome(operation: Operation, success: bool) -> Self {
        if success {
            Self {
                message: format!("Wish {} successfully", operation.past_tense()),
                kind: NotificationKind::Success,
            }
        } else {
            Self {
                message: format!("Failed to {} wish", operation.verb()),
                kind: NotificationKind::Error,
            }
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Notification::for_outcome(Operation::Add, true).message,
            "Wish added successfully"
        );
        assert_eq!(
            Notification::for_outcome(Operation::Update, false).message,
            "Failed to update wish"
        );
        let deleted = Notification::for_outcome(Operation::Delete, true);
        assert_eq!(deleted.message, "Wish deleted successfully");
        assert!(!deleted.is_error());
        assert!(Notification::for_outcome(Operation::Delete, false).is_error());
    }
}
