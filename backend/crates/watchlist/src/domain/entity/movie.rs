//! Movie Entity
//!
//! A movie starts life with only the required fields; everything else is
//! filled in later through edit, rate, and watch operations. Partial
//! updates travel as an explicit [`MoviePatch`] rather than an untyped
//! field map.

use chrono::{DateTime, Utc};
use kernel::id::MovieId;

/// Movie entity
#[derive(Debug, Clone)]
pub struct Movie {
    /// Immutable identifier (random hex, generated at creation)
    pub movie_id: MovieId,
    pub title: String,
    pub director: String,
    pub year: i32,
    /// Set via edit; empty until then
    pub cast: Vec<String>,
    pub series: Vec<String>,
    pub tags: Vec<String>,
    /// Set via edit; empty string means unset
    pub description: String,
    pub video_link: String,
    /// Set via the rate operation
    pub rating: Option<i32>,
    /// Set via the watch operation
    pub last_watched: Option<DateTime<Utc>>,
}

impl Movie {
    /// Create a new movie with only the required fields
    pub fn new(title: impl Into<String>, director: impl Into<String>, year: i32) -> Self {
        Self {
            movie_id: MovieId::new(),
            title: title.into(),
            director: director.into(),
            year,
            cast: Vec::new(),
            series: Vec::new(),
            tags: Vec::new(),
            description: String::new(),
            video_link: String::new(),
            rating: None,
            last_watched: None,
        }
    }
}

/// Partial update for a movie
///
/// `None` fields are left untouched; `Some` fields overwrite, including
/// overwriting with an empty value. The required fields (title, director,
/// year) are not patchable.
#[derive(Debug, Clone, Default)]
pub struct MoviePatch {
    pub cast: Option<Vec<String>>,
    pub series: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub video_link: Option<String>,
    pub rating: Option<i32>,
    pub last_watched: Option<DateTime<Utc>>,
}

impl MoviePatch {
    /// A patch that only sets the rating
    pub fn rating(rating: i32) -> Self {
        Self {
            rating: Some(rating),
            ..Self::default()
        }
    }

    /// A patch that only sets the watched timestamp
    pub fn watched_at(at: DateTime<Utc>) -> Self {
        Self {
            last_watched: Some(at),
            ..Self::default()
        }
    }

    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        self.cast.is_none()
            && self.series.is_none()
            && self.tags.is_none()
            && self.description.is_none()
            && self.video_link.is_none()
            && self.rating.is_none()
            && self.last_watched.is_none()
    }

    /// Merge the present fields into the movie
    pub fn apply(&self, movie: &mut Movie) {
        if let Some(cast) = &self.cast {
            movie.cast = cast.clone();
        }
        if let Some(series) = &self.series {
            movie.series = series.clone();
        }
        if let Some(tags) = &self.tags {
            movie.tags = tags.clone();
        }
        if let Some(description) = &self.description {
            movie.description = description.clone();
        }
        if let Some(video_link) = &self.video_link {
            movie.video_link = video_link.clone();
        }
        if let Some(rating) = self.rating {
            movie.rating = Some(rating);
        }
        if let Some(last_watched) = self.last_watched {
            movie.last_watched = Some(last_watched);
        }
    }
}
