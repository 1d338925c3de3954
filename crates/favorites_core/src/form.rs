use shared::{
    domain::{Movie, MovieDraft, MovieField},
    error::FieldErrors,
};

use crate::validator::{validate, MovieInput};

/// The add/edit form: raw field text plus the errors from the last submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieForm {
    input: MovieInput,
    errors: FieldErrors,
    editing: bool,
}

impl MovieForm {
    pub fn blank() -> Self {
        Self::default()
    }

    /// A form pre-filled with `movie`'s current values.
    pub fn editing(movie: &Movie) -> Self {
        Self {
            input: MovieInput::new(
                movie.title.clone(),
                movie.year.to_string(),
                movie.poster.clone(),
            ),
            errors: FieldErrors::new(),
            editing: true,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn input(&self) -> &MovieInput {
        &self.input
    }

    pub fn value(&self, field: MovieField) -> &str {
        self.input.get(field)
    }

    pub fn set(&mut self, field: MovieField, value: impl Into<String>) {
        self.input.set(field, value);
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validates the current input. On success an add form is cleared, while
    /// an edit form keeps its values.
    pub fn submit(&mut self, current_year: i32) -> Option<MovieDraft> {
        match validate(&self.input, current_year) {
            Ok(draft) => {
                if self.editing {
                    self.errors = FieldErrors::new();
                } else {
                    *self = Self::blank();
                }
                Some(draft)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
