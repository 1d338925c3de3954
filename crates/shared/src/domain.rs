use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(MovieId);

/// Shown by renderers when a poster URL cannot be displayed.
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/200x300?text=No+Image";

/// A stored favorite. This is also the persisted JSON shape:
/// `{"id":1,"title":"...","year":2001,"poster":"https://..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub poster: String,
}

impl Movie {
    pub fn from_draft(id: MovieId, draft: MovieDraft) -> Self {
        Self {
            id,
            title: draft.title,
            year: draft.year,
            poster: draft.poster,
        }
    }

    pub fn to_draft(&self) -> MovieDraft {
        MovieDraft {
            title: self.title.clone(),
            year: self.year,
            poster: self.poster.clone(),
        }
    }
}

/// Validated movie fields without an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub year: i32,
    pub poster: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieField {
    Title,
    Year,
    Poster,
}

impl MovieField {
    pub const ALL: [MovieField; 3] = [MovieField::Title, MovieField::Year, MovieField::Poster];

    pub fn as_str(self) -> &'static str {
        match self {
            MovieField::Title => "title",
            MovieField::Year => "year",
            MovieField::Poster => "poster",
        }
    }
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovieField {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(MovieField::Title),
            "year" => Ok(MovieField::Year),
            "poster" => Ok(MovieField::Poster),
            other => Err(format!("unknown field '{other}' (expected title, year or poster)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    #[default]
    Alphabetical,
    Year,
}

impl SortOption {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Alphabetical => "alphabetical",
            SortOption::Year => "year",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("alphabetical") {
            Ok(SortOption::Alphabetical)
        } else if raw.trim().eq_ignore_ascii_case("year") {
            Ok(SortOption::Year)
        } else {
            Err(format!(
                "unknown sort option '{}' (expected alphabetical or year)",
                raw.trim()
            ))
        }
    }
}
