//! Confirmation gate in front of destructive deletes.

use serde::Deserialize;

use super::{Collection, Record};
use crate::errors::AppError;

/// Query parameters accepted by delete endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteConfirmation {
    /// Must be `true` for the delete to go through.
    #[serde(default)]
    pub confirm: bool,
}

impl<T: Record> Collection<T> {
    /// Delete the record with `id` once the caller has confirmed.
    ///
    /// Without confirmation nothing changes and the caller gets back the
    /// record's display name to show in the confirmation prompt. A missing id
    /// is a no-op either way.
    pub fn delete(&mut self, id: &str, confirmed: bool) -> Result<Option<T>, AppError> {
        let Some(target) = self.get(id) else {
            return Ok(None);
        };

        if !confirmed {
            return Err(AppError::ConfirmationRequired {
                display_name: target.display_name(),
            });
        }

        Ok(self.remove(id))
    }
}
