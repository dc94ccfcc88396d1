//! Form submission rules shared by every record type.
//!
//! Forms only check that required text is present. Comma-separated text
//! inputs are turned into lists and blank optional inputs are dropped.

use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

/// Presence checks run on a submitted form before anything is saved.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

/// Whether a text input holds anything besides whitespace.
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Fail with `message` unless every field is present.
pub fn require(fields: &[&str], message: &str) -> Result<(), AppError> {
    if fields.iter().all(|f| is_present(f)) {
        Ok(())
    } else {
        Err(AppError::Validation(message.to_string()))
    }
}

/// Like [`require`] for partial payloads: absent fields pass, blank ones fail.
pub fn require_if_set(fields: &[Option<&str>], message: &str) -> Result<(), AppError> {
    if fields.iter().flatten().all(|f| is_present(f)) {
        Ok(())
    } else {
        Err(AppError::Validation(message.to_string()))
    }
}

/// Drop an optional text input that was left blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| is_present(v))
}

/// Split a comma-separated input into trimmed, non-empty entries.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListInput {
    Items(Vec<String>),
    Text(String),
}

impl ListInput {
    fn into_items(self) -> Vec<String> {
        match self {
            ListInput::Text(text) => split_list(&text),
            ListInput::Items(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Deserialize a list given either as a JSON array or as "a, b, c".
pub fn comma_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(ListInput::deserialize(deserializer)?.into_items())
}

/// Optional variant of [`comma_list`] for partial payloads.
pub fn opt_comma_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ListInput>::deserialize(deserializer)?.map(ListInput::into_items))
}
