//! Line-oriented interactive front end over [`Favorites`].

use std::io::{self, BufRead, Write};

use favorites_core::{Clock, DeleteOutcome, Favorites, SubmitOutcome};
use shared::domain::{MovieField, MovieId, SortOption};
use storage::KeyValueStore;
use tracing::debug;

use crate::render;

const HELP: &str = "\
Commands:
  list                          show the favorites for the current search and sort
  search [TERM]                 filter titles (no term clears the filter)
  sort alphabetical|year        change the sort order
  form                          show the form and its errors
  set title|year|poster VALUE   edit a form field
  submit                        add the movie, or save the edit in progress
  edit ID                       load a movie into the form for editing
  cancel                        abandon the edit in progress
  delete ID                     delete a movie (asks for confirmation)
  help                          show this help
  quit                          leave the shell";

/// Prints `prompt`, then reads one answer line. Only "y" or "yes" confirm.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<bool> {
    write!(out, "{prompt} [y/N] ")?;
    out.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn run<S, C, R, W>(app: &mut Favorites<S, C>, mut input: R, out: &mut W) -> io::Result<()>
where
    S: KeyValueStore,
    C: Clock,
    R: BufRead,
    W: Write,
{
    writeln!(out, "Favorite movies. Type 'help' for commands.")?;
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        let trimmed = line.trim();
        let (command, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim_start()),
            None => (trimmed, ""),
        };
        debug!(command, "shell command");

        match command {
            "" => {}
            "help" => writeln!(out, "{HELP}")?,
            "quit" | "exit" => return Ok(()),
            "list" => render::movie_list(out, &app.visible())?,
            "search" => {
                app.set_search(rest);
                render::movie_list(out, &app.visible())?;
            }
            "sort" => match rest.parse::<SortOption>() {
                Ok(sort) => {
                    app.set_sort(sort);
                    render::movie_list(out, &app.visible())?;
                }
                Err(err) => writeln!(out, "{err}")?,
            },
            "form" => render::form(out, app.form(), app.session())?,
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                match field.parse::<MovieField>() {
                    Ok(field) => app.form_mut().set(field, value),
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            "submit" => match app.submit_form() {
                SubmitOutcome::Added(id) => writeln!(out, "added id={id}")?,
                SubmitOutcome::Updated(id) => writeln!(out, "updated id={id}")?,
                SubmitOutcome::IdsExhausted => {
                    writeln!(out, "not saved: no more movie ids available")?
                }
                SubmitOutcome::Invalid(errors) => {
                    writeln!(out, "not saved:")?;
                    render::field_errors(out, &errors)?;
                }
            },
            "edit" => match parse_id(rest) {
                Some(id) => {
                    if app.begin_edit(id).is_some() {
                        render::form(out, app.form(), app.session())?;
                    } else {
                        writeln!(out, "no movie with id {id}")?;
                    }
                }
                None => writeln!(out, "usage: edit ID")?,
            },
            "cancel" => {
                app.cancel_edit();
                writeln!(out, "edit cancelled")?;
            }
            "delete" => match parse_id(rest) {
                Some(id) => {
                    let mut prompt_error = None;
                    let outcome = app.delete(id, &mut |prompt: &str| {
                        ask(&mut input, out, prompt).unwrap_or_else(|err| {
                            prompt_error = Some(err);
                            false
                        })
                    });
                    if let Some(err) = prompt_error {
                        return Err(err);
                    }
                    match outcome {
                        DeleteOutcome::Deleted(movie) => {
                            writeln!(out, "deleted id={} ({})", movie.id, movie.title)?
                        }
                        DeleteOutcome::Declined => writeln!(out, "kept")?,
                        DeleteOutcome::NotFound => writeln!(out, "no movie with id {id}")?,
                    }
                }
                None => writeln!(out, "usage: delete ID")?,
            },
            other => writeln!(out, "unknown command '{other}'; type 'help'")?,
        }
    }
}

fn parse_id(raw: &str) -> Option<MovieId> {
    raw.trim().parse().ok().map(MovieId)
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
