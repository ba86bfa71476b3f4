// crates/core/src/status.rs
//! Document processing status as reported by the remote service.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Lifecycle status of a submitted document.
///
/// The remote service reports statuses as upper-case strings. Values this
/// build does not know about deserialize to `Unknown` so a service upgrade
/// never breaks the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../../../src/types/generated/")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Pending,
    Processing,
    Ingesting,
    Completed,
    Failed,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl DocumentStatus {
    /// Whether the document is still being worked on. Active documents drive
    /// the panel auto-refresh and keep the cancel action available.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Processing | Self::Ingesting)
    }

    /// Whether processing has finished one way or another. Only terminal
    /// documents may be deleted individually.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }

    /// Badge color used by the panel frontend.
    pub fn badge_color(self) -> &'static str {
        match self {
            Self::Completed => "green",
            Self::Processing | Self::Ingesting => "orange",
            Self::Pending => "blue",
            Self::Failed => "red",
            Self::Cancelled | Self::Unknown => "gray",
        }
    }

    /// Wire representation (upper-case, matching the remote service).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Ingesting => "INGESTING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
