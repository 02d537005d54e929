//! HTTP Handlers

use axum::Json;
use axum::extract::{Form, Path, Query, State};
use axum::http::HeaderValue;
use axum::response::{Redirect, Response};
use std::sync::Arc;

use kernel::id::MovieId;

use crate::application::config::WatchlistConfig;
use crate::application::{
    AddMovieInput, AddMovieUseCase, BrowseWatchlistUseCase, EditMovieInput, EditMovieUseCase,
    LoginInput, LoginUseCase, RateMovieUseCase, RegisterInput, RegisterUseCase, SessionService,
    ViewMovieUseCase, WatchMovieUseCase,
};
use crate::domain::repository::{MovieRepository, SessionRepository, UserRepository};
use crate::domain::value_object::FlashMessage;
use crate::error::{WatchlistError, WatchlistResult};
use crate::presentation::dto::{
    AddMovieForm, EditMovieForm, FormPage, HomePage, LoginForm, MoviePage, MovieView, RateQuery,
    RegisterForm, ToggleThemeQuery,
};
use crate::presentation::middleware::CurrentUser;
use crate::presentation::session_ctx::SessionCtx;

/// Shared state for watchlist handlers
#[derive(Clone)]
pub struct WatchlistAppState<R>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<WatchlistConfig>,
}

// ============================================================================
// Home
// ============================================================================

/// GET /
pub async fn home<R>(
    State(state): State<WatchlistAppState<R>>,
    axum::Extension(current_user): axum::Extension<CurrentUser>,
    mut ctx: SessionCtx,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = BrowseWatchlistUseCase::new(state.repo.clone(), state.repo.clone());
    let output = match use_case.execute(&current_user.user_id).await {
        Ok(output) => output,
        Err(WatchlistError::Unauthenticated) => {
            // Session outlived its user document. Drop the identity and
            // send them back through login.
            ctx.session.clear_preserving_theme();
            session_service(&state).persist(&mut ctx.session).await?;
            return Ok(ctx.finish(&state.config, Redirect::to("/login")));
        }
        Err(err) => return Err(err),
    };

    let flashes = drain_flash(&state, &mut ctx).await?;

    let page = HomePage {
        title: "Movie Watchlist".to_string(),
        theme: ctx.session.effective_theme(),
        flashes,
        email: current_user.email.as_str().to_string(),
        movies: output.movies.iter().map(MovieView::from).collect(),
    };

    Ok(ctx.finish(&state.config, Json(page)))
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_page<R>(
    State(state): State<WatchlistAppState<R>>,
    mut ctx: SessionCtx,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if ctx.session.is_authenticated() {
        return Ok(ctx.finish(&state.config, Redirect::to("/")));
    }

    let flashes = drain_flash(&state, &mut ctx).await?;

    let page = FormPage {
        title: "Movie Watchlist - Register".to_string(),
        theme: ctx.session.effective_theme(),
        flashes,
    };

    Ok(ctx.finish(&state.config, Json(page)))
}

/// POST /register
pub async fn register_submit<R>(
    State(state): State<WatchlistAppState<R>>,
    mut ctx: SessionCtx,
    Form(form): Form<RegisterForm>,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    let result = use_case
        .execute(RegisterInput {
            email: form.email,
            password: form.password,
        })
        .await;

    match result {
        Ok(_) => ctx
            .session
            .push_flash(FlashMessage::success("User registered successfully")),
        Err(WatchlistError::EmailTaken) => ctx
            .session
            .push_flash(FlashMessage::danger("User already exists. Try logging in.")),
        Err(err) => return Err(err),
    }

    session_service(&state).persist(&mut ctx.session).await?;

    Ok(ctx.finish(&state.config, Redirect::to("/login")))
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_page<R>(
    State(state): State<WatchlistAppState<R>>,
    mut ctx: SessionCtx,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if ctx.session.is_authenticated() {
        return Ok(ctx.finish(&state.config, Redirect::to("/")));
    }

    let flashes = drain_flash(&state, &mut ctx).await?;

    let page = FormPage {
        title: "Movie Watchlist - Login".to_string(),
        theme: ctx.session.effective_theme(),
        flashes,
    };

    Ok(ctx.finish(&state.config, Json(page)))
}

/// POST /login
pub async fn login_submit<R>(
    State(state): State<WatchlistAppState<R>>,
    mut ctx: SessionCtx,
    Form(form): Form<LoginForm>,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone());

    let result = use_case
        .execute(LoginInput {
            email: form.email,
            password: form.password,
        })
        .await;

    match result {
        Ok(output) => {
            ctx.session
                .sign_in(output.user.email.clone(), output.user.user_id.clone());
            session_service(&state).persist(&mut ctx.session).await?;

            Ok(ctx.finish(&state.config, Redirect::to("/")))
        }
        Err(WatchlistError::InvalidCredentials) => {
            ctx.session
                .push_flash(FlashMessage::danger("Invalid login credentials"));
            session_service(&state).persist(&mut ctx.session).await?;

            Ok(ctx.finish(&state.config, Redirect::to("/login")))
        }
        Err(err) => Err(err),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
pub async fn logout<R>(
    State(state): State<WatchlistAppState<R>>,
    mut ctx: SessionCtx,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    ctx.session.clear_preserving_theme();
    session_service(&state).persist(&mut ctx.session).await?;

    Ok(ctx.finish(&state.config, Redirect::to("/login")))
}

// ============================================================================
// Add Movie
// ============================================================================

/// GET /add
pub async fn add_movie_page<R>(
    State(state): State<WatchlistAppState<R>>,
    mut ctx: SessionCtx,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let flashes = drain_flash(&state, &mut ctx).await?;

    let page = FormPage {
        title: "Movie Watchlist - Add Movie".to_string(),
        theme: ctx.session.effective_theme(),
        flashes,
    };

    Ok(ctx.finish(&state.config, Json(page)))
}

/// POST /add
pub async fn add_movie_submit<R>(
    State(state): State<WatchlistAppState<R>>,
    axum::Extension(current_user): axum::Extension<CurrentUser>,
    ctx: SessionCtx,
    Form(form): Form<AddMovieForm>,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = AddMovieUseCase::new(state.repo.clone(), state.repo.clone());

    use_case
        .execute(AddMovieInput {
            user_id: current_user.user_id,
            title: form.title,
            director: form.director,
            year: form.year,
        })
        .await?;

    Ok(ctx.finish(&state.config, Redirect::to("/")))
}

// ============================================================================
// Edit Movie
// ============================================================================

/// GET /edit/{id}
pub async fn edit_movie_page<R>(
    State(state): State<WatchlistAppState<R>>,
    Path(id): Path<String>,
    mut ctx: SessionCtx,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let movie_id = MovieId::from_string(id);

    let use_case = ViewMovieUseCase::new(state.repo.clone());
    let movie = use_case.execute(&movie_id).await?;

    let flashes = drain_flash(&state, &mut ctx).await?;

    let page = MoviePage {
        title: "Movie Watchlist - Edit Movie".to_string(),
        theme: ctx.session.effective_theme(),
        flashes,
        movie: MovieView::from(&movie),
    };

    Ok(ctx.finish(&state.config, Json(page)))
}

/// POST /edit/{id}
pub async fn edit_movie_submit<R>(
    State(state): State<WatchlistAppState<R>>,
    Path(id): Path<String>,
    ctx: SessionCtx,
    Form(form): Form<EditMovieForm>,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let movie_id = MovieId::from_string(id);

    let use_case = EditMovieUseCase::new(state.repo.clone());
    use_case
        .execute(EditMovieInput {
            movie_id: movie_id.clone(),
            patch: form.into_patch(),
        })
        .await?;

    let target = format!("/movie/{}", movie_id.as_str());

    Ok(ctx.finish(&state.config, redirect_to(&target)))
}

// ============================================================================
// Movie Detail
// ============================================================================

/// GET /movie/{id}
pub async fn movie_detail<R>(
    State(state): State<WatchlistAppState<R>>,
    Path(id): Path<String>,
    mut ctx: SessionCtx,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let movie_id = MovieId::from_string(id);

    let use_case = ViewMovieUseCase::new(state.repo.clone());
    let movie = use_case.execute(&movie_id).await?;

    let flashes = drain_flash(&state, &mut ctx).await?;

    let page = MoviePage {
        title: movie.title.clone(),
        theme: ctx.session.effective_theme(),
        flashes,
        movie: MovieView::from(&movie),
    };

    Ok(ctx.finish(&state.config, Json(page)))
}

// ============================================================================
// Rate Movie
// ============================================================================

/// GET /movie/{id}/rate
pub async fn rate_movie<R>(
    State(state): State<WatchlistAppState<R>>,
    Path(id): Path<String>,
    Query(query): Query<RateQuery>,
    ctx: SessionCtx,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let movie_id = MovieId::from_string(id);

    let use_case = RateMovieUseCase::new(state.repo.clone());
    use_case.execute(&movie_id, query.rating).await?;

    let target = format!("/movie/{}", movie_id.as_str());

    Ok(ctx.finish(&state.config, redirect_to(&target)))
}

// ============================================================================
// Mark Watched
// ============================================================================

/// GET /movie/{id}/watch
pub async fn watch_movie<R>(
    State(state): State<WatchlistAppState<R>>,
    Path(id): Path<String>,
    ctx: SessionCtx,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let movie_id = MovieId::from_string(id);

    let use_case = WatchMovieUseCase::new(state.repo.clone());
    use_case.execute(&movie_id).await?;

    let target = format!("/movie/{}", movie_id.as_str());

    Ok(ctx.finish(&state.config, redirect_to(&target)))
}

// ============================================================================
// Toggle Theme
// ============================================================================

/// GET /toggle-theme
pub async fn toggle_theme<R>(
    State(state): State<WatchlistAppState<R>>,
    Query(query): Query<ToggleThemeQuery>,
    mut ctx: SessionCtx,
) -> WatchlistResult<Response>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    ctx.session.toggle_theme();
    session_service(&state).persist(&mut ctx.session).await?;

    let target = query.current_page.as_deref().unwrap_or("/");

    Ok(ctx.finish(&state.config, redirect_to(target)))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn session_service<R>(state: &WatchlistAppState<R>) -> SessionService<R>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    SessionService::new(state.repo.clone(), state.config.clone())
}

/// Drain the session's flash messages, persisting the drain so they render
/// exactly once
async fn drain_flash<R>(
    state: &WatchlistAppState<R>,
    ctx: &mut SessionCtx,
) -> WatchlistResult<Vec<FlashMessage>>
where
    R: UserRepository + MovieRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let flashes = ctx.session.take_flash();

    if !flashes.is_empty() {
        session_service(state).persist(&mut ctx.session).await?;
    }

    Ok(flashes)
}

/// Redirect to an in-app path, falling back to home for anything else
fn redirect_to(target: &str) -> Redirect {
    let is_local = target.starts_with('/') && !target.starts_with("//");

    if is_local && HeaderValue::from_str(target).is_ok() {
        Redirect::to(target)
    } else {
        Redirect::to("/")
    }
}
