//! Favorite-movies list: validation, write-through storage, search/sort
//! projection and a single-slot editing session.
//!
//! [`Favorites`] ties the pieces together the way a UI drives them: one form
//! that either adds a movie or edits an existing one, a search box, a sort
//! selector, and delete behind a confirmation prompt.

use shared::{
    domain::{Movie, MovieId, SortOption},
    error::FieldErrors,
};
use storage::KeyValueStore;
use tracing::{debug, info};

pub mod clock;
mod confirm;
pub mod form;
mod id_allocator;
pub mod projection;
pub mod session;
pub mod store;
pub mod validator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use confirm::{AlwaysConfirm, Confirm};
pub use form::MovieForm;
pub use id_allocator::IdAllocator;
pub use projection::project;
pub use session::{EditingSession, SessionError};
pub use store::{MovieStore, PersistError, DEFAULT_STORAGE_KEY};
pub use validator::{validate, MovieInput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(MovieId),
    Updated(MovieId),
    Invalid(FieldErrors),
    /// The input was valid but no new id could be allocated; the form keeps it.
    IdsExhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Movie),
    Declined,
    NotFound,
}

pub struct Favorites<S: KeyValueStore, C: Clock = SystemClock> {
    store: MovieStore<S>,
    session: EditingSession,
    form: MovieForm,
    search: String,
    sort: SortOption,
    clock: C,
}

impl<S: KeyValueStore, C: Clock> Favorites<S, C> {
    pub fn open(storage: S, key: impl Into<String>, clock: C) -> Self {
        Self::from_store(MovieStore::load(storage, key), clock)
    }

    pub fn from_store(store: MovieStore<S>, clock: C) -> Self {
        Self {
            store,
            session: EditingSession::Idle,
            form: MovieForm::blank(),
            search: String::new(),
            sort: SortOption::default(),
            clock,
        }
    }

    pub fn store(&self) -> &MovieStore<S> {
        &self.store
    }

    pub fn movies(&self) -> &[Movie] {
        self.store.movies()
    }

    pub fn session(&self) -> EditingSession {
        self.session
    }

    pub fn form(&self) -> &MovieForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MovieForm {
        &mut self.form
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn sort(&self) -> SortOption {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    /// The list to display for the current search term and sort option.
    pub fn visible(&self) -> Vec<&Movie> {
        let visible = project(self.store.movies(), &self.search, self.sort);
        debug!(
            search = %self.search,
            sort = %self.sort,
            shown = visible.len(),
            total = self.store.len(),
            "projected favorites"
        );
        visible
    }

    /// Switches the form to editing `id`, pre-filled with its current values.
    pub fn begin_edit(&mut self, id: MovieId) -> Option<&Movie> {
        let movie = self.store.get(id)?;
        self.session.begin(movie);
        self.form = MovieForm::editing(movie);
        Some(movie)
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel();
        self.form = MovieForm::blank();
    }

    /// Validates the form, then adds a new movie or commits the open edit.
    pub fn submit_form(&mut self) -> SubmitOutcome {
        let submitted = self.form.clone();
        let Some(draft) = self.form.submit(self.clock.current_year()) else {
            return SubmitOutcome::Invalid(self.form.errors().clone());
        };

        match self.session.commit(&mut self.store, draft.clone()) {
            Ok(id) => {
                self.form = MovieForm::blank();
                SubmitOutcome::Updated(id)
            }
            Err(SessionError::NoActiveSession) => match self.store.add(draft) {
                Some(id) => SubmitOutcome::Added(id),
                None => {
                    self.form = submitted;
                    SubmitOutcome::IdsExhausted
                }
            },
        }
    }

    /// Deletes `id` once `confirm` agrees. Closes the editing session when it
    /// referred to the deleted movie.
    pub fn delete(&mut self, id: MovieId, confirm: &mut impl Confirm) -> DeleteOutcome {
        let Some(movie) = self.store.get(id) else {
            return DeleteOutcome::NotFound;
        };
        if !confirm.confirm(&format!("Delete \"{}\"?", movie.title)) {
            info!(movie_id = id.0, "delete declined");
            return DeleteOutcome::Declined;
        }

        let Some(removed) = self.store.delete(id) else {
            return DeleteOutcome::NotFound;
        };
        if self.session.release(id) {
            self.form = MovieForm::blank();
        }
        DeleteOutcome::Deleted(removed)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
