//! MongoDB Repository Implementations

use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{self, Document, doc};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use kernel::id::{MovieId, SessionId, UserId};
use platform::password::HashedPassword;

use crate::domain::entity::movie::{Movie, MoviePatch};
use crate::domain::entity::session::Session;
use crate::domain::entity::user::User;
use crate::domain::repository::{MovieRepository, SessionRepository, UserRepository};
use crate::domain::value_object::{Email, FlashMessage, Theme};
use crate::error::WatchlistResult;

const USER_COLLECTION: &str = "user";
const MOVIE_COLLECTION: &str = "movie";
const SESSION_COLLECTION: &str = "session";

/// MongoDB-backed watchlist repository
#[derive(Clone)]
pub struct MongoWatchlistRepository {
    db: Database,
}

impl MongoWatchlistRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<UserDocument> {
        self.db.collection(USER_COLLECTION)
    }

    fn movies(&self) -> Collection<MovieDocument> {
        self.db.collection(MOVIE_COLLECTION)
    }

    fn sessions(&self) -> Collection<SessionDocument> {
        self.db.collection(SESSION_COLLECTION)
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for MongoWatchlistRepository {
    async fn insert_user(&self, user: &User) -> WatchlistResult<()> {
        self.users().insert_one(UserDocument::from_user(user)).await?;
        Ok(())
    }

    async fn find_user_by_email(&self, email: &Email) -> WatchlistResult<Option<User>> {
        let doc = self
            .users()
            .find_one(doc! { "email": email.as_str() })
            .await?;

        Ok(doc.map(UserDocument::into_user))
    }

    async fn find_user_by_id(&self, user_id: &UserId) -> WatchlistResult<Option<User>> {
        let doc = self
            .users()
            .find_one(doc! { "_id": user_id.as_str() })
            .await?;

        Ok(doc.map(UserDocument::into_user))
    }

    async fn push_movie(&self, user_id: &UserId, movie_id: &MovieId) -> WatchlistResult<()> {
        self.users()
            .update_one(
                doc! { "_id": user_id.as_str() },
                doc! { "$push": { "movies": movie_id.as_str() } },
            )
            .await?;

        Ok(())
    }
}

// ============================================================================
// Movie Repository Implementation
// ============================================================================

impl MovieRepository for MongoWatchlistRepository {
    async fn insert_movie(&self, movie: &Movie) -> WatchlistResult<()> {
        self.movies()
            .insert_one(MovieDocument::from_movie(movie))
            .await?;

        Ok(())
    }

    async fn find_movie_by_id(&self, movie_id: &MovieId) -> WatchlistResult<Option<Movie>> {
        let doc = self
            .movies()
            .find_one(doc! { "_id": movie_id.as_str() })
            .await?;

        Ok(doc.map(MovieDocument::into_movie))
    }

    async fn find_movies_by_ids(&self, movie_ids: &[MovieId]) -> WatchlistResult<Vec<Movie>> {
        if movie_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<&str> = movie_ids.iter().map(|id| id.as_str()).collect();

        let cursor = self
            .movies()
            .find(doc! { "_id": { "$in": ids } })
            .await?;
        let docs: Vec<MovieDocument> = cursor.try_collect().await?;

        Ok(docs.into_iter().map(MovieDocument::into_movie).collect())
    }

    async fn update_movie(&self, movie_id: &MovieId, patch: &MoviePatch) -> WatchlistResult<bool> {
        let set = patch_to_set(patch);

        if set.is_empty() {
            // Nothing to write; just report whether the movie exists
            let found = self
                .movies()
                .find_one(doc! { "_id": movie_id.as_str() })
                .await?;
            return Ok(found.is_some());
        }

        let result = self
            .movies()
            .update_one(doc! { "_id": movie_id.as_str() }, doc! { "$set": set })
            .await?;

        Ok(result.matched_count > 0)
    }
}

// ============================================================================
// Session Repository Implementation
// ============================================================================

impl SessionRepository for MongoWatchlistRepository {
    async fn find_session(&self, session_id: &SessionId) -> WatchlistResult<Option<Session>> {
        let doc = self
            .sessions()
            .find_one(doc! { "_id": session_id.as_str() })
            .await?;

        Ok(doc.map(SessionDocument::into_session))
    }

    async fn save_session(&self, session: &Session) -> WatchlistResult<()> {
        self.sessions()
            .replace_one(
                doc! { "_id": session.session_id.as_str() },
                SessionDocument::from_session(session),
            )
            .upsert(true)
            .await?;

        Ok(())
    }

    async fn purge_stale_sessions(&self, cutoff: DateTime<Utc>) -> WatchlistResult<u64> {
        let result = self
            .sessions()
            .delete_many(doc! {
                "last_seen_at": { "$lt": bson::DateTime::from_chrono(cutoff) }
            })
            .await?;

        Ok(result.deleted_count)
    }
}

/// Translate a patch's present fields into a `$set` document
fn patch_to_set(patch: &MoviePatch) -> Document {
    let mut set = Document::new();

    if let Some(cast) = &patch.cast {
        set.insert("cast", cast.clone());
    }
    if let Some(series) = &patch.series {
        set.insert("series", series.clone());
    }
    if let Some(tags) = &patch.tags {
        set.insert("tags", tags.clone());
    }
    if let Some(description) = &patch.description {
        set.insert("description", description.clone());
    }
    if let Some(video_link) = &patch.video_link {
        set.insert("video_link", video_link.clone());
    }
    if let Some(rating) = patch.rating {
        set.insert("rating", rating);
    }
    if let Some(last_watched) = patch.last_watched {
        set.insert("last_watched", bson::DateTime::from_chrono(last_watched));
    }

    set
}

// ============================================================================
// Document Types for BSON mapping
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    email: String,
    password: String,
    #[serde(default)]
    movies: Vec<String>,
}

impl UserDocument {
    fn from_user(user: &User) -> Self {
        Self {
            id: user.user_id.as_str().to_string(),
            email: user.email.as_str().to_string(),
            password: user.password.as_phc_string().to_string(),
            movies: user.movies.iter().map(|id| id.as_str().to_string()).collect(),
        }
    }

    fn into_user(self) -> User {
        User {
            user_id: UserId::from_string(self.id),
            email: Email::from_db(self.email),
            password: HashedPassword::from_stored(self.password),
            movies: self.movies.into_iter().map(MovieId::from_string).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct MovieDocument {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    director: String,
    year: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    cast: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    series: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tags: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    video_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_watched: Option<bson::DateTime>,
}

impl MovieDocument {
    fn from_movie(movie: &Movie) -> Self {
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
            last_watched: movie.last_watched.map(bson::DateTime::from_chrono),
        }
    }

    fn into_movie(self) -> Movie {
        Movie {
            movie_id: MovieId::from_string(self.id),
            title: self.title,
            director: self.director,
            year: self.year,
            cast: self.cast,
            series: self.series,
            tags: self.tags,
            description: self.description,
            video_link: self.video_link,
            rating: self.rating,
            last_watched: self.last_watched.map(|dt| dt.to_chrono()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionDocument {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    flash: Vec<FlashMessage>,
    created_at: bson::DateTime,
    last_seen_at: bson::DateTime,
}

impl SessionDocument {
    fn from_session(session: &Session) -> Self {
        Self {
            id: session.session_id.as_str().to_string(),
            email: session.email.as_ref().map(|e| e.as_str().to_string()),
            user_id: session.user_id.as_ref().map(|id| id.as_str().to_string()),
            theme: session.theme,
            flash: session.flash.clone(),
            created_at: bson::DateTime::from_chrono(session.created_at),
            last_seen_at: bson::DateTime::from_chrono(session.last_seen_at),
        }
    }

    fn into_session(self) -> Session {
        Session {
            session_id: SessionId::from_string(self.id),
            email: self.email.map(Email::from_db),
            user_id: self.user_id.map(UserId::from_string),
            theme: self.theme,
            flash: self.flash,
            created_at: self.created_at.to_chrono(),
            last_seen_at: self.last_seen_at.to_chrono(),
        }
    }
}
