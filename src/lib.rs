//! # Novelist (novel writing service client)
//!
//! `novelist` talks to the novel writing service on behalf of a signed-in user.
//! Every outbound call goes through a single [`client::HttpClient`], which owns
//! the request pipeline:
//!
//! 1. **Pre-hooks** run in order on the outgoing request. The last one is always
//!    the bearer-auth hook, which copies the current [`session::Session`] token
//!    into `Authorization: Bearer <token>`, so no caller hook can drop it.
//! 2. **Dispatch** hands the request to `reqwest` with a generous timeout, since
//!    chapter generation can run for many minutes.
//! 3. **Unwrap** strips the transport response down to its payload (JSON or raw
//!    bytes, depending on the per-call [`client::RequestOptions`]).
//! 4. **Post-hooks** run in order on the result. The last one is always the
//!    failure notifier, which reports exactly one message per failed call through
//!    the injected [`notify::Notifier`] and hands the error back to the caller.
//!
//! ## Navigation
//!
//! [`router::Router`] holds the page table of the writing UI and gates protected
//! pages on session state. Blocked navigation is a silent redirect to `/login`.
//!
//! ## Session
//!
//! The token lives in memory only. It is set by [`api::AuthApi::login`] and
//! cleared by [`api::AuthApi::logout`]; nothing is written to disk.

pub mod api;
pub mod cli;
pub mod client;
pub mod notify;
pub mod router;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
