//! Form DTOs and Page Payloads
//!
//! Forms keep the field names the HTML templates post (snake_case);
//! page payloads go out camelCase for the rendering layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::movie::{Movie, MoviePatch};
use crate::domain::value_object::{FlashMessage, Theme};

// ============================================================================
// Forms
// ============================================================================

/// Registration form body
///
/// Extra posted fields (e.g. a confirmation input checked client-side) are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
}

/// Login form body
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Add-movie form body
#[derive(Debug, Clone, Deserialize)]
pub struct AddMovieForm {
    pub title: String,
    pub director: String,
    pub year: i32,
}

/// Edit-movie form body
///
/// List fields arrive as single comma-separated strings.
#[derive(Debug, Clone, Deserialize)]
pub struct EditMovieForm {
    #[serde(default)]
    pub cast: String,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub video_link: String,
}

impl EditMovieForm {
    /// Translate the submitted form into a movie patch
    ///
    /// Every optional field is overwritten, matching the edit form which
    /// always posts all of them. List fields are split on commas with
    /// blank entries dropped.
    pub fn into_patch(self) -> MoviePatch {
        MoviePatch {
            cast: Some(split_list(&self.cast)),
            series: Some(split_list(&self.series)),
            tags: Some(split_list(&self.tags)),
            description: Some(self.description),
            video_link: Some(self.video_link),
            rating: None,
            last_watched: None,
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Query string for the rate route
#[derive(Debug, Clone, Deserialize)]
pub struct RateQuery {
    pub rating: i32,
}

/// Query string for the theme toggle
#[derive(Debug, Clone, Deserialize)]
pub struct ToggleThemeQuery {
    /// Path to return to after the toggle
    pub current_page: Option<String>,
}

// ============================================================================
// Page Payloads
// ============================================================================

/// Movie as rendered on pages
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieView {
    pub id: String,
    pub title: String,
    pub director: String,
    pub year: i32,
    pub cast: Vec<String>,
    pub series: Vec<String>,
    pub tags: Vec<String>,
    pub description: String,
    pub video_link: String,
    pub rating: Option<i32>,
    pub last_watched: Option<DateTime<Utc>>,
}

impl From<&Movie> for MovieView {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.movie_id.as_str().to_string(),
            title: movie.title.clone(),
            director: movie.director.clone(),
            year: movie.year,
            cast: movie.cast.clone(),
            series: movie.series.clone(),
            tags: movie.tags.clone(),
            description: movie.description.clone(),
            video_link: movie.video_link.clone(),
            rating: movie.rating,
            last_watched: movie.last_watched,
        }
    }
}

/// Home page payload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    pub title: String,
    pub theme: Theme,
    pub flashes: Vec<FlashMessage>,
    pub email: String,
    pub movies: Vec<MovieView>,
}

/// Payload for pages that render only a form
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPage {
    pub title: String,
    pub theme: Theme,
    pub flashes: Vec<FlashMessage>,
}

/// Payload for pages built around one movie (detail and edit)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePage {
    pub title: String,
    pub theme: Theme,
    pub flashes: Vec<FlashMessage>,
    pub movie: MovieView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_patch_splits_and_trims_lists() {
        let form = EditMovieForm {
            cast: "Leonardo DiCaprio, Elliot Page ,".to_string(),
            series: String::new(),
            tags: "heist,dream".to_string(),
            description: "A thief who steals secrets.".to_string(),
            video_link: String::new(),
        };

        let patch = form.into_patch();

        assert_eq!(
            patch.cast,
            Some(vec![
                "Leonardo DiCaprio".to_string(),
                "Elliot Page".to_string()
            ])
        );
        assert_eq!(patch.series, Some(Vec::new()));
        assert_eq!(
            patch.tags,
            Some(vec!["heist".to_string(), "dream".to_string()])
        );
        assert_eq!(patch.description.as_deref(), Some("A thief who steals secrets."));
        assert_eq!(patch.video_link.as_deref(), Some(""));
        assert_eq!(patch.rating, None);
        assert_eq!(patch.last_watched, None);
    }

    #[test]
    fn test_movie_view_renders_camel_case() {
        let movie = Movie::new("Inception", "Christopher Nolan", 2010);
        let view = MovieView::from(&movie);

        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["title"], "Inception");
        assert!(json.get("videoLink").is_some());
        assert!(json.get("lastWatched").is_some());
        assert!(json.get("video_link").is_none());
    }
}
