use shared::domain::{Movie, MovieDraft, MovieId};
use storage::KeyValueStore;
use thiserror::Error;
use tracing::debug;

use crate::store::MovieStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no active session")]
    NoActiveSession,
}

/// Which movie, if any, the form is currently editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingSession {
    #[default]
    Idle,
    Editing(MovieId),
}

impl EditingSession {
    pub fn begin(&mut self, movie: &Movie) {
        debug!(movie_id = movie.id.0, "editing session started");
        *self = EditingSession::Editing(movie.id);
    }

    pub fn cancel(&mut self) {
        if let EditingSession::Editing(id) = *self {
            debug!(movie_id = id.0, "editing session cancelled");
        }
        *self = EditingSession::Idle;
    }

    /// Writes `draft` over the edited movie and closes the session.
    pub fn commit<S: KeyValueStore>(
        &mut self,
        store: &mut MovieStore<S>,
        draft: MovieDraft,
    ) -> Result<MovieId, SessionError> {
        let EditingSession::Editing(id) = *self else {
            return Err(SessionError::NoActiveSession);
        };
        store.update(id, draft);
        *self = EditingSession::Idle;
        Ok(id)
    }

    /// Closes the session if it refers to `id`, which has just been deleted.
    pub fn release(&mut self, id: MovieId) -> bool {
        if self.is_editing(id) {
            debug!(movie_id = id.0, "edited movie deleted; session closed");
            *self = EditingSession::Idle;
            return true;
        }
        false
    }

    pub fn editing_id(&self) -> Option<MovieId> {
        match self {
            EditingSession::Idle => None,
            EditingSession::Editing(id) => Some(*id),
        }
    }

    pub fn is_editing(&self, id: MovieId) -> bool {
        *self == EditingSession::Editing(id)
    }

    pub fn is_idle(&self) -> bool {
        *self == EditingSession::Idle
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
