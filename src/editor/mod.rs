//! Collection editing shared by every portfolio record type.
//!
//! A [`Collection`] is a keyed, ordered sequence of records. New records are
//! prepended, edits merge a partial payload into the record with the same id,
//! and deletes go through a confirmation gate (see [`confirm`]).

pub mod confirm;
pub mod form;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppError;
use form::Validate;

/// A record that can be created from a form draft and patched in place.
pub trait Record: Clone + Serialize + Send + Sync + 'static {
    /// Full form submission used when creating a record.
    type Draft: Validate + DeserializeOwned + Send + 'static;
    /// Partial payload used when editing; absent fields are left alone.
    type Patch: Validate + DeserializeOwned + Send + 'static;

    /// Human-readable kind used in notices, e.g. "Project".
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Name shown in notices and in the delete confirmation.
    fn display_name(&self) -> String;

    /// Build a new record, filling omitted optional fields with defaults.
    fn from_draft(id: String, draft: Self::Draft, now: &str) -> Self;

    /// Shallow merge: replace only the fields present in `patch`.
    fn merge(&mut self, patch: Self::Patch, now: &str);
}

/// Fresh record id.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Ordered in-memory collection of records keyed by id.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> Collection<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|r| r.id() == id)
    }

    /// Validate a draft and prepend the resulting record.
    pub fn add(&mut self, draft: T::Draft) -> Result<&T, AppError> {
        draft.validate()?;

        let now = Utc::now().to_rfc3339();
        let record = T::from_draft(self.unused_id(), draft, &now);
        self.items.insert(0, record);

        Ok(&self.items[0])
    }

    /// Validate a patch and merge it into the record with `id`.
    pub fn edit(&mut self, id: &str, patch: T::Patch) -> Result<&T, AppError> {
        patch.validate()?;

        let now = Utc::now().to_rfc3339();
        let record = self.find_mut(id)?;
        record.merge(patch, &now);

        Ok(&*record)
    }

    /// Apply an in-place change to the record with `id`.
    pub fn modify<F>(&mut self, id: &str, change: F) -> Result<&T, AppError>
    where
        F: FnOnce(&mut T),
    {
        let record = self.find_mut(id)?;
        change(record);
        Ok(&*record)
    }

    /// Remove the record with `id`; a missing id leaves the collection untouched.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|r| r.id() == id)?;
        Some(self.items.remove(index))
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut T, AppError> {
        self.items
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", T::KIND, id)))
    }

    fn unused_id(&self) -> String {
        loop {
            let id = new_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
