//! Form validation for candidate movie records.
//!
//! Every field is checked independently, so one submission reports all of its
//! problems at once.

use shared::{
    domain::{MovieDraft, MovieField},
    error::{FieldError, FieldErrors},
};
use url::Url;

/// First year a motion picture was recorded.
pub const EARLIEST_YEAR: i32 = 1888;
/// How far past the current year an announced release may be.
pub const FUTURE_YEAR_WINDOW: i32 = 5;

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieInput {
    pub title: String,
    pub year: String,
    pub poster: String,
}

impl MovieInput {
    pub fn new(
        title: impl Into<String>,
        year: impl Into<String>,
        poster: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year: year.into(),
            poster: poster.into(),
        }
    }

    pub fn get(&self, field: MovieField) -> &str {
        match field {
            MovieField::Title => &self.title,
            MovieField::Year => &self.year,
            MovieField::Poster => &self.poster,
        }
    }

    pub fn set(&mut self, field: MovieField, value: impl Into<String>) {
        let value = value.into();
        match field {
            MovieField::Title => self.title = value,
            MovieField::Year => self.year = value,
            MovieField::Poster => self.poster = value,
        }
    }
}

pub fn validate(input: &MovieInput, current_year: i32) -> Result<MovieDraft, FieldErrors> {
    let title = validate_title(&input.title);
    let year = validate_year(&input.year, current_year);
    let poster = validate_poster(&input.poster);

    match (title, year, poster) {
        (Ok(title), Ok(year), Ok(poster)) => Ok(MovieDraft {
            title,
            year,
            poster,
        }),
        (title, year, poster) => {
            let mut errors = FieldErrors::new();
            if let Err(error) = title {
                errors.insert(MovieField::Title, error);
            }
            if let Err(error) = year {
                errors.insert(MovieField::Year, error);
            }
            if let Err(error) = poster {
                errors.insert(MovieField::Poster, error);
            }
            Err(errors)
        }
    }
}

pub fn validate_title(raw: &str) -> Result<String, FieldError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(title.to_string())
}

/// The range check only runs once the four-digit check has passed.
pub fn validate_year(raw: &str, current_year: i32) -> Result<i32, FieldError> {
    let year = raw.trim();
    if year.is_empty() {
        return Err(FieldError::Required);
    }
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::NotFourDigits);
    }
    let year: i32 = year.parse().map_err(|_| FieldError::NotFourDigits)?;

    let max = current_year + FUTURE_YEAR_WINDOW;
    if !(EARLIEST_YEAR..=max).contains(&year) {
        return Err(FieldError::Implausible {
            min: EARLIEST_YEAR,
            max,
        });
    }
    Ok(year)
}

/// Accepts any absolute URL; the trimmed input is kept as typed.
pub fn validate_poster(raw: &str) -> Result<String, FieldError> {
    let poster = raw.trim();
    if poster.is_empty() {
        return Err(FieldError::Required);
    }
    Url::parse(poster).map_err(|_| FieldError::InvalidUrl)?;
    Ok(poster.to_string())
}

#[cfg(test)]
#[path = "tests/validator_tests.rs"]
mod tests;
