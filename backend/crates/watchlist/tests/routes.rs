//! HTTP-level tests for the watchlist router
//!
//! Drives the real router through `tower::ServiceExt::oneshot` with the
//! in-memory repository behind it.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;

use watchlist::application::config::WatchlistConfig;
use watchlist::infra::memory::InMemoryWatchlistRepository;
use watchlist::presentation::router::watchlist_router_generic;

fn test_app() -> (Router, InMemoryWatchlistRepository) {
    let repo = InMemoryWatchlistRepository::new();
    let router = watchlist_router_generic(repo.clone(), WatchlistConfig::development());
    (router, repo)
}

fn get(path: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie.to_string());
    }
    builder.body(Body::empty()).unwrap()
}

fn form_post(path: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie.to_string());
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> Response {
    router.clone().oneshot(request).await.unwrap()
}

/// First `name=value` segment of the Set-Cookie header, reusable as a
/// Cookie header
fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.split(';').next())
        .map(str::to_string)
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register and sign in one user, returning the authenticated cookie
async fn signed_in_cookie(router: &Router) -> String {
    let response = send(
        router,
        form_post("/register", "email=a%40x.com&password=pw1", None),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response).unwrap();

    let response = send(
        router,
        form_post("/login", "email=a%40x.com&password=pw1", Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    cookie
}

#[tokio::test]
async fn test_home_redirects_anonymous_to_login() {
    let (router, _) = test_app();

    let response = send(&router, get("/", None)).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    // The fresh anonymous session still gets its cookie
    assert!(session_cookie(&response).is_some());
}

#[tokio::test]
async fn test_all_protected_routes_redirect_anonymous() {
    let (router, _) = test_app();

    for path in [
        "/",
        "/add",
        "/edit/deadbeef",
        "/movie/deadbeef/rate?rating=3",
        "/movie/deadbeef/watch",
    ] {
        let response = send(&router, get(path, None)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "GET {path}");
        assert_eq!(location(&response), "/login", "GET {path}");
    }

    let response = send(&router, form_post("/add", "title=T&director=D&year=2000", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_register_flashes_success_once() {
    let (router, repo) = test_app();

    let response = send(
        &router,
        form_post("/register", "email=new%40x.com&password=pw1", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert_eq!(repo.user_count(), 1);

    let cookie = session_cookie(&response).unwrap();

    let response = send(&router, get("/login", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let page = json_body(response).await;
    assert_eq!(page["title"], "Movie Watchlist - Login");
    assert_eq!(page["theme"], "dark");
    assert_eq!(page["flashes"][0]["message"], "User registered successfully");
    assert_eq!(page["flashes"][0]["level"], "success");

    // Flash is one-shot
    let response = send(&router, get("/login", Some(&cookie))).await;
    let page = json_body(response).await;
    assert_eq!(page["flashes"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_duplicate_registration_flashes_conflict() {
    let (router, repo) = test_app();

    send(
        &router,
        form_post("/register", "email=dup%40x.com&password=pw1", None),
    )
    .await;

    let response = send(
        &router,
        form_post("/register", "email=dup%40x.com&password=pw2", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert_eq!(repo.user_count(), 1);

    let cookie = session_cookie(&response).unwrap();
    let page = json_body(send(&router, get("/login", Some(&cookie))).await).await;
    assert_eq!(
        page["flashes"][0]["message"],
        "User already exists. Try logging in."
    );
    assert_eq!(page["flashes"][0]["level"], "danger");
}

#[tokio::test]
async fn test_login_failure_never_authenticates() {
    let (router, _) = test_app();

    send(
        &router,
        form_post("/register", "email=a%40x.com&password=pw1", None),
    )
    .await;

    let response = send(
        &router,
        form_post("/login", "email=a%40x.com&password=wrong", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let cookie = session_cookie(&response).unwrap();

    let page = json_body(send(&router, get("/login", Some(&cookie))).await).await;
    assert_eq!(page["flashes"][0]["message"], "Invalid login credentials");
    assert_eq!(page["flashes"][0]["level"], "danger");

    // Still anonymous: home bounces back to login
    let response = send(&router, get("/", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_login_then_home_shows_empty_watchlist() {
    let (router, _) = test_app();
    let cookie = signed_in_cookie(&router).await;

    let response = send(&router, get("/", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let page = json_body(response).await;
    assert_eq!(page["title"], "Movie Watchlist");
    assert_eq!(page["email"], "a@x.com");
    assert_eq!(page["movies"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_auth_pages_redirect_when_signed_in() {
    let (router, _) = test_app();
    let cookie = signed_in_cookie(&router).await;

    for path in ["/register", "/login"] {
        let response = send(&router, get(path, Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "GET {path}");
        assert_eq!(location(&response), "/", "GET {path}");
    }
}

#[tokio::test]
async fn test_logout_clears_identity_but_keeps_theme() {
    let (router, _) = test_app();
    let cookie = signed_in_cookie(&router).await;

    // Two toggles from unset: dark, then light
    send(&router, get("/toggle-theme?current_page=%2F", Some(&cookie))).await;
    send(&router, get("/toggle-theme?current_page=%2F", Some(&cookie))).await;

    let response = send(&router, get("/logout", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    // Identity gone, theme survives
    let response = send(&router, get("/", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");

    let page = json_body(send(&router, get("/login", Some(&cookie))).await).await;
    assert_eq!(page["theme"], "light");
}

#[tokio::test]
async fn test_movie_lifecycle_through_routes() {
    let (router, _) = test_app();
    let cookie = signed_in_cookie(&router).await;

    let response = send(
        &router,
        form_post(
            "/add",
            "title=Inception&director=Christopher+Nolan&year=2010",
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let page = json_body(send(&router, get("/", Some(&cookie))).await).await;
    let movies = page["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Inception");
    let movie_id = movies[0]["id"].as_str().unwrap().to_string();

    // Rate
    let response = send(
        &router,
        get(&format!("/movie/{movie_id}/rate?rating=5"), Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/movie/{movie_id}"));

    let page = json_body(send(&router, get(&format!("/movie/{movie_id}"), Some(&cookie))).await).await;
    assert_eq!(page["title"], "Inception");
    assert_eq!(page["movie"]["rating"], 5);
    assert!(page["movie"]["lastWatched"].is_null());

    // Watch
    let response = send(
        &router,
        get(&format!("/movie/{movie_id}/watch"), Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let page = json_body(send(&router, get(&format!("/movie/{movie_id}"), Some(&cookie))).await).await;
    assert!(page["movie"]["lastWatched"].is_string());

    // Edit
    let response = send(
        &router,
        form_post(
            &format!("/edit/{movie_id}"),
            "cast=Leonardo+DiCaprio%2C+Elliot+Page&series=&tags=heist%2Cdream&description=Dream+theft.&video_link=",
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/movie/{movie_id}"));

    let page = json_body(send(&router, get(&format!("/movie/{movie_id}"), Some(&cookie))).await).await;
    assert_eq!(page["movie"]["title"], "Inception");
    assert_eq!(page["movie"]["year"], 2010);
    assert_eq!(
        page["movie"]["cast"],
        serde_json::json!(["Leonardo DiCaprio", "Elliot Page"])
    );
    assert_eq!(page["movie"]["tags"], serde_json::json!(["heist", "dream"]));
    assert_eq!(page["movie"]["description"], "Dream theft.");
    assert_eq!(page["movie"]["videoLink"], "");
    // Rating survives the edit
    assert_eq!(page["movie"]["rating"], 5);
}

#[tokio::test]
async fn test_edit_form_page_carries_movie() {
    let (router, _) = test_app();
    let cookie = signed_in_cookie(&router).await;

    send(
        &router,
        form_post("/add", "title=Heat&director=Michael+Mann&year=1995", Some(&cookie)),
    )
    .await;

    let page = json_body(send(&router, get("/", Some(&cookie))).await).await;
    let movie_id = page["movies"][0]["id"].as_str().unwrap().to_string();

    let page = json_body(send(&router, get(&format!("/edit/{movie_id}"), Some(&cookie))).await).await;
    assert_eq!(page["title"], "Movie Watchlist - Edit Movie");
    assert_eq!(page["movie"]["title"], "Heat");
}

#[tokio::test]
async fn test_missing_movie_detail_is_not_found() {
    let (router, _) = test_app();

    let response = send(&router, get("/movie/deadbeef", None)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let problem = json_body(response).await;
    assert_eq!(problem["status"], 404);
}

#[tokio::test]
async fn test_rating_missing_movie_is_not_found() {
    let (router, _) = test_app();
    let cookie = signed_in_cookie(&router).await;

    let response = send(
        &router,
        get("/movie/deadbeef/rate?rating=4", Some(&cookie)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_year_is_unprocessable() {
    let (router, repo) = test_app();
    let cookie = signed_in_cookie(&router).await;

    let response = send(
        &router,
        form_post("/add", "title=T&director=D&year=nineteen", Some(&cookie)),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let page = json_body(send(&router, get("/", Some(&cookie))).await).await;
    assert_eq!(page["movies"].as_array().unwrap().len(), 0);
    assert_eq!(repo.user_count(), 1);
}

#[tokio::test]
async fn test_toggle_theme_defaults_to_dark_then_flips() {
    let (router, _) = test_app();

    let response = send(&router, get("/toggle-theme?current_page=%2Flogin", None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    let cookie = session_cookie(&response).unwrap();

    // First toggle from unset lands on dark
    let page = json_body(send(&router, get("/login", Some(&cookie))).await).await;
    assert_eq!(page["theme"], "dark");

    send(&router, get("/toggle-theme?current_page=%2Flogin", Some(&cookie))).await;
    let page = json_body(send(&router, get("/login", Some(&cookie))).await).await;
    assert_eq!(page["theme"], "light");
}

#[tokio::test]
async fn test_toggle_theme_refuses_external_redirect() {
    let (router, _) = test_app();

    let response = send(
        &router,
        get("/toggle-theme?current_page=https%3A%2F%2Fevil.example", None),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = send(&router, get("/toggle-theme?current_page=%2F%2Fevil.example", None)).await;
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn test_tampered_cookie_is_treated_as_anonymous() {
    let (router, _) = test_app();
    let cookie = signed_in_cookie(&router).await;

    // Sanity: the honest cookie reaches home
    let response = send(&router, get("/", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Corrupt one character of the signed session id
    let (name, token) = cookie.split_once('=').unwrap();
    let mut chars: Vec<char> = token.chars().collect();
    chars[0] = if chars[0] == 'a' { 'b' } else { 'a' };
    let tampered: String = chars.into_iter().collect();
    let tampered_cookie = format!("{name}={tampered}");

    let response = send(&router, get("/", Some(&tampered_cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    // A replacement session cookie is issued
    assert!(session_cookie(&response).is_some());
}
