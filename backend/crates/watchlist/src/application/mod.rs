//! Application Layer
//!
//! Use cases and application services.

pub mod add_movie;
pub mod browse;
pub mod config;
pub mod edit_movie;
pub mod login;
pub mod rate_movie;
pub mod register;
pub mod session;
pub mod view_movie;
pub mod watch_movie;

// Re-exports
pub use add_movie::{AddMovieInput, AddMovieOutput, AddMovieUseCase};
pub use browse::{BrowseOutput, BrowseWatchlistUseCase};
pub use config::WatchlistConfig;
pub use edit_movie::{EditMovieInput, EditMovieUseCase};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use rate_movie::RateMovieUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use session::SessionService;
pub use view_movie::ViewMovieUseCase;
pub use watch_movie::WatchMovieUseCase;
