use serde_json::Error as JsonError;
use shared::domain::{Movie, MovieDraft, MovieId};
use storage::{KeyValueStore, StorageError};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::id_allocator::IdAllocator;

pub const DEFAULT_STORAGE_KEY: &str = "favorite-movies";

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to serialize favorites: {0}")]
    Serialize(#[from] JsonError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The authoritative in-memory list of favorites, written through to storage
/// after every mutation.
///
/// Storage failures never reach the caller: they are logged and the in-memory
/// list stays authoritative for the rest of the session.
pub struct MovieStore<S: KeyValueStore> {
    storage: S,
    key: String,
    movies: Vec<Movie>,
    ids: IdAllocator,
}

impl<S: KeyValueStore> MovieStore<S> {
    /// Loads the list stored under `key`, starting empty when nothing usable is stored.
    pub fn load(storage: S, key: impl Into<String>) -> Self {
        Self::load_with_seed(storage, key, Vec::new())
    }

    /// Loads the list stored under `key`, falling back to `seed` when the key
    /// is missing, unreadable, or holds malformed data.
    pub fn load_with_seed(storage: S, key: impl Into<String>, seed: Vec<Movie>) -> Self {
        let key = key.into();
        let movies = match storage.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Movie>>(&raw) {
                Ok(movies) => movies,
                Err(err) => {
                    warn!(
                        %key,
                        error = %err,
                        "persisted favorites are malformed; falling back to seed list"
                    );
                    seed
                }
            },
            Ok(None) => seed,
            Err(err) => {
                error!(%key, error = %err, "failed to read persisted favorites; falling back to seed list");
                seed
            }
        };

        let ids = IdAllocator::starting_after(&movies);
        info!(
            %key,
            count = movies.len(),
            next_id = ?ids.peek().map(|id| id.0),
            "favorites loaded"
        );
        Self {
            storage,
            key,
            movies,
            ids,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn get(&self, id: MovieId) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Appends a new movie. Returns `None`, leaving the list untouched, once
    /// the id space is exhausted.
    pub fn add(&mut self, draft: MovieDraft) -> Option<MovieId> {
        let Some(id) = self.ids.next_id() else {
            error!(key = %self.key, "movie ids exhausted; refusing to add");
            return None;
        };
        self.movies.push(Movie::from_draft(id, draft));
        info!(movie_id = id.0, "movie added");
        self.write_through();
        Some(id)
    }

    /// Replaces the movie with `id` in place, keeping its id. Returns whether
    /// a movie was replaced.
    pub fn update(&mut self, id: MovieId, draft: MovieDraft) -> bool {
        let updated = match self.movies.iter_mut().find(|movie| movie.id == id) {
            Some(movie) => {
                *movie = Movie::from_draft(id, draft);
                true
            }
            None => false,
        };
        info!(movie_id = id.0, updated, "movie update");
        self.write_through();
        updated
    }

    /// Removes the movie with `id`. Returns the removed movie, if any.
    pub fn delete(&mut self, id: MovieId) -> Option<Movie> {
        let removed = self
            .movies
            .iter()
            .position(|movie| movie.id == id)
            .map(|index| self.movies.remove(index));
        info!(movie_id = id.0, removed = removed.is_some(), "movie delete");
        self.write_through();
        removed
    }

    /// Serializes the whole list under the storage key.
    pub fn persist(&mut self) -> Result<(), PersistError> {
        let raw = serde_json::to_string(&self.movies)?;
        self.storage.set(&self.key, &raw)?;
        Ok(())
    }

    fn write_through(&mut self) {
        if let Err(err) = self.persist() {
            error!(
                key = %self.key,
                error = %err,
                "failed to persist favorites; keeping in-memory state"
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
