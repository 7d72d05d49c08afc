//! Trending items. Neither argument is checked locally; TMDB accepts
//! `all`, `movie`, `tv`, `person` and `day`, `week`, and rejects the rest.
use super::endpoint::Endpoint;

pub const DEFAULT_MEDIA_TYPE: &str = "all";
pub const DEFAULT_TIME_WINDOW: &str = "day";

pub fn trending(media_type: Option<&str>, time_window: Option<&str>) -> Endpoint {
    let media_type = media_type.unwrap_or(DEFAULT_MEDIA_TYPE);
    let time_window = time_window.unwrap_or(DEFAULT_TIME_WINDOW);
    Endpoint::new(format!("/trending/{media_type}/{time_window}"))
}
