//! Transient user notifications.
//!
//! Every mutation answers with a short toast-style notice the front end shows
//! as-is. Notices are fire-and-forget: nothing reads them back.

use serde::{Deserialize, Serialize};

/// A toast shown after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub destructive: bool,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            destructive: false,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            destructive: true,
        }
    }

    /// "<Kind> Added" or "<Kind> Updated" after a form save.
    pub fn saved(kind: &str, display_name: &str, updated: bool) -> Self {
        let verb = if updated { "Updated" } else { "Added" };
        Self::info(
            format!("{} {}", kind, verb),
            format!("\"{}\" has been saved.", display_name),
        )
    }

    /// "<Kind> Deleted" after a confirmed delete.
    pub fn deleted(kind: &str, display_name: &str) -> Self {
        Self::destructive(
            format!("{} Deleted", kind),
            format!("\"{}\" has been removed.", display_name),
        )
    }

    /// Emit the notice to the log as well.
    pub fn logged(self) -> Self {
        if self.destructive {
            tracing::warn!(title = %self.title, description = ?self.description, "notice");
        } else {
            tracing::info!(title = %self.title, description = ?self.description, "notice");
        }
        self
    }
}
