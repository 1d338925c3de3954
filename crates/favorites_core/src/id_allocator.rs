use shared::domain::{Movie, MovieId};

/// Hands out movie ids for the current session.
///
/// Starts one past the largest id seen at startup and only ever counts up, so
/// an allocated id never collides with a loaded or previously allocated one.
/// Once the counter would pass `i64::MAX` the allocator is exhausted and stops
/// handing out ids. Duplicates already present in loaded data are not detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: Option<i64>,
}

impl IdAllocator {
    pub fn starting_after(movies: &[Movie]) -> Self {
        let next = match movies.iter().map(|movie| movie.id.0).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { next }
    }

    /// Returns the current counter value, then advances it. `None` once exhausted.
    pub fn next_id(&mut self) -> Option<MovieId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(MovieId(id))
    }

    pub fn peek(&self) -> Option<MovieId> {
        self.next.map(MovieId)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::starting_after(&[])
    }
}

#[cfg(test)]
#[path = "tests/id_allocator_tests.rs"]
mod tests;
