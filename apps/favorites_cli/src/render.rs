//! Plain-text rendering of the favorites list, the form and its errors.

use std::io::{self, Write};

use favorites_core::{EditingSession, MovieForm};
use shared::{
    domain::{Movie, MovieField, PLACEHOLDER_POSTER},
    error::FieldErrors,
};

pub const EMPTY_LIST: &str = "No movies to show.";

pub fn movie_list<W: Write>(out: &mut W, movies: &[&Movie]) -> io::Result<()> {
    if movies.is_empty() {
        return writeln!(out, "{EMPTY_LIST}");
    }

    let title_width = movies
        .iter()
        .map(|movie| movie.title.chars().count())
        .max()
        .unwrap_or(0)
        .max("TITLE".len());
    writeln!(out, "{:>4}  {:<title_width$}  YEAR  POSTER", "ID", "TITLE")?;
    for movie in movies {
        writeln!(
            out,
            "{:>4}  {:<title_width$}  {}  {}",
            movie.id,
            movie.title,
            movie.year,
            poster_or_placeholder(movie)
        )?;
    }
    Ok(())
}

/// Records loaded from storage may carry a blank poster.
fn poster_or_placeholder(movie: &Movie) -> &str {
    let poster = movie.poster.trim();
    if poster.is_empty() {
        PLACEHOLDER_POSTER
    } else {
        poster
    }
}

pub fn field_errors<W: Write>(out: &mut W, errors: &FieldErrors) -> io::Result<()> {
    for (field, error) in errors.iter() {
        writeln!(out, "  {field}: {error}")?;
    }
    Ok(())
}

pub fn form<W: Write>(out: &mut W, form: &MovieForm, session: EditingSession) -> io::Result<()> {
    match session {
        EditingSession::Idle => writeln!(out, "Add movie")?,
        EditingSession::Editing(id) => writeln!(out, "Edit movie {id}")?,
    }
    for field in MovieField::ALL {
        write!(out, "  {:<6} = {:?}", field.as_str(), form.value(field))?;
        match form.errors().get(field) {
            Some(error) => writeln!(out, "  ({error})")?,
            None => writeln!(out)?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
