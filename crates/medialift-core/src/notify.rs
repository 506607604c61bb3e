//! Caller-facing notifications.
//!
//! The pipeline reports the outcome of every ingest to a notification sink
//! (a toast in the reference front end) without depending on how the caller
//! renders it. Implementations must be cheap and non-blocking; the pipeline
//! calls them inline on its own task.

/// Visual treatment of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Success,
    Destructive,
}

/// A `{title, description, variant}` feedback tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            variant: NotificationVariant::Success,
        }
    }

    pub fn destructive(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }
}

/// Notification sink collaborator.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// No-op sink for callers that don't surface feedback.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _notification: Notification) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_variant() {
        let ok = Notification::success("Image uploaded successfully");
        assert_eq!(ok.title, "Success");
        assert_eq!(ok.variant, NotificationVariant::Success);

        let err = Notification::destructive("Failed to upload image");
        assert_eq!(err.title, "Error");
        assert_eq!(err.variant, NotificationVariant::Destructive);
    }
}
