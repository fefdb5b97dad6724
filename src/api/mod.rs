//! Thin wrappers mapping service operations to fixed paths and verbs. They add
//! no behavior of their own: auth, timeouts and error reporting all come from the
//! shared [`crate::client::HttpClient`].

pub mod auth;
pub mod novel;
pub mod types;

pub use self::auth::AuthApi;
pub use self::novel::NovelApi;
pub use self::types::{ApiResponse, AuthRequest, InitNovelRequest, NextChapterRequest};
