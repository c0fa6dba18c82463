use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Pending,
    InProgress,
    Resolved,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Resolved];

    pub fn label(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Status::Pending => "status-pending",
            Status::InProgress => "status-in-progress",
            Status::Resolved => "status-resolved",
        }
    }

    pub fn parse(label: &str) -> Option<Status> {
        Status::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// An image payload inlined as a data URL, opaque to everything but the
/// display surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedImage(String);

impl EncodedImage {
    pub fn new(data_url: impl Into<String>) -> Self {
        Self(data_url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: u32,
    pub title: String,
    pub status: Status,
    pub description: String,
    /// Free-text classification: a department for citizen reports, a
    /// location for staff tasks. Not validated against any catalog.
    pub category: String,
    /// Display string fixed at creation time, never recomputed.
    pub time_ago: String,
    pub attachment: Option<EncodedImage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_exactly_the_fixed_labels() {
        assert_eq!(Status::parse("Pending"), Some(Status::Pending));
        assert_eq!(Status::parse("In Progress"), Some(Status::InProgress));
        assert_eq!(Status::parse("Resolved"), Some(Status::Resolved));
        assert_eq!(Status::parse("Reopened"), None);
        assert_eq!(Status::parse(""), None);
    }

    #[test]
    fn css_class_follows_status() {
        assert_eq!(Status::Pending.css_class(), "status-pending");
        assert_eq!(Status::InProgress.css_class(), "status-in-progress");
        assert_eq!(Status::Resolved.css_class(), "status-resolved");
    }
}
