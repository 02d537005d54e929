//! Entity Module

pub mod movie;
pub mod session;
pub mod user;

pub use movie::{Movie, MoviePatch};
pub use session::Session;
pub use user::User;
