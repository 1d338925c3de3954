use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use favorites_core::{DeleteOutcome, Favorites, SubmitOutcome, SystemClock};
use shared::domain::{MovieField, MovieId, SortOption};
use storage::FileStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod shell;

use config::load_settings;

#[derive(Parser, Debug)]
#[command(name = "favorites", about = "Keep a list of favorite movies")]
struct Cli {
    /// Directory holding the persisted list.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    #[arg(long, global = true)]
    storage_key: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        sort: Option<SortOption>,
        #[arg(long)]
        json: bool,
    },
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        year: String,
        #[arg(long)]
        poster: String,
    },
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        year: Option<String>,
        #[arg(long)]
        poster: Option<String>,
    },
    Delete {
        id: i64,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    Shell,
}

const EXIT_NOT_FOUND: u8 = 1;
const EXIT_INVALID: u8 = 2;
const EXIT_NOT_SAVED: u8 = 3;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let settings = load_settings().with_overrides(cli.data_dir, cli.storage_key);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let storage = FileStore::new(&settings.data_dir);
    storage
        .path_for(&settings.storage_key)
        .context("invalid storage key in configuration")?;
    info!(
        data_dir = %settings.data_dir.display(),
        key = %settings.storage_key,
        "opening favorites"
    );

    let mut app = Favorites::open(storage, settings.storage_key.clone(), SystemClock);
    app.set_sort(settings.default_sort);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let code = match cli.command {
        Command::List { search, sort, json } => {
            app.set_search(search);
            if let Some(sort) = sort {
                app.set_sort(sort);
            }
            let visible = app.visible();
            if json {
                let raw = serde_json::to_string_pretty(&visible)
                    .context("failed to serialize favorites")?;
                writeln!(out, "{raw}")?;
            } else {
                render::movie_list(&mut out, &visible)?;
            }
            ExitCode::SUCCESS
        }
        Command::Add {
            title,
            year,
            poster,
        } => {
            let form = app.form_mut();
            form.set(MovieField::Title, title);
            form.set(MovieField::Year, year);
            form.set(MovieField::Poster, poster);
            submit(&mut app, &mut out)?
        }
        Command::Edit {
            id,
            title,
            year,
            poster,
        } => {
            let id = MovieId(id);
            if app.begin_edit(id).is_none() {
                writeln!(out, "no movie with id {id}")?;
                return Ok(ExitCode::from(EXIT_NOT_FOUND));
            }
            let form = app.form_mut();
            for (field, value) in [
                (MovieField::Title, title),
                (MovieField::Year, year),
                (MovieField::Poster, poster),
            ] {
                if let Some(value) = value {
                    form.set(field, value);
                }
            }
            submit(&mut app, &mut out)?
        }
        Command::Delete { id, yes } => {
            let id = MovieId(id);
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let outcome = app.delete(id, &mut |prompt: &str| {
                yes || shell::ask(&mut input, &mut io::stderr(), prompt).unwrap_or(false)
            });
            match outcome {
                DeleteOutcome::Deleted(movie) => {
                    writeln!(out, "deleted id={} ({})", movie.id, movie.title)?;
                    ExitCode::SUCCESS
                }
                DeleteOutcome::Declined => {
                    writeln!(out, "kept")?;
                    ExitCode::SUCCESS
                }
                DeleteOutcome::NotFound => {
                    writeln!(out, "no movie with id {id}")?;
                    ExitCode::from(EXIT_NOT_FOUND)
                }
            }
        }
        Command::Shell => {
            let stdin = io::stdin();
            shell::run(&mut app, stdin.lock(), &mut out).context("shell I/O failed")?;
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

fn submit<W: Write>(
    app: &mut Favorites<FileStore, SystemClock>,
    out: &mut W,
) -> Result<ExitCode> {
    match app.submit_form() {
        SubmitOutcome::Added(id) => writeln!(out, "added id={id}")?,
        SubmitOutcome::Updated(id) => writeln!(out, "updated id={id}")?,
        SubmitOutcome::IdsExhausted => {
            writeln!(out, "not saved: no more movie ids available")?;
            return Ok(ExitCode::from(EXIT_NOT_SAVED));
        }
        SubmitOutcome::Invalid(errors) => {
            writeln!(out, "not saved:")?;
            render::field_errors(out, &errors)?;
            return Ok(ExitCode::from(EXIT_INVALID));
        }
    }
    Ok(ExitCode::SUCCESS)
}
