use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::MovieField;

/// A user-correctable problem with one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum FieldError {
    #[error("required")]
    Required,
    #[error("must be 4 digits")]
    NotFourDigits,
    #[error("must be plausible ({min} to {max})")]
    Implausible { min: i32, max: i32 },
    #[error("must be a valid URL")]
    InvalidUrl,
}

/// Field-to-error mapping produced by validation. A field with no error has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<MovieField, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: MovieField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: MovieField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MovieField, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    /// Human-readable messages keyed by field name.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, error)| (field.as_str(), error.to_string()))
            .collect()
    }
}

impl FromIterator<(MovieField, FieldError)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (MovieField, FieldError)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
