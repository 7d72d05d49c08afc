//! Async client for the TMDB v3 API.
//!
//! Every operation is one GET through [`TmdbClient::fetch`], which injects the
//! API key and returns the decoded JSON body untouched. Failures of any kind
//! surface as [`FetchError`].
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod tmdb;
pub mod utils;

pub use config::TmdbConfig;
pub use error::{FetchCause, FetchError};
pub use tmdb::{Endpoint, QueryValue, TmdbApi, TmdbClient};
