//! Movie endpoints.
use super::endpoint::{paged, search, Endpoint};

pub fn details(movie_id: u64) -> Endpoint {
    Endpoint::new(format!("/movie/{movie_id}"))
}

pub fn search_movies(query: &str, page: Option<u32>) -> Endpoint {
    search("/search/movie", query, page)
}

pub fn popular(page: Option<u32>) -> Endpoint {
    paged("/movie/popular", page)
}

/// Movies currently in theaters.
pub fn now_playing(page: Option<u32>) -> Endpoint {
    paged("/movie/now_playing", page)
}

pub fn upcoming(page: Option<u32>) -> Endpoint {
    paged("/movie/upcoming", page)
}

pub fn top_rated(page: Option<u32>) -> Endpoint {
    paged("/movie/top_rated", page)
}

/// Posters and backdrops.
pub fn images(movie_id: u64) -> Endpoint {
    Endpoint::new(format!("/movie/{movie_id}/images"))
}

/// Trailers and teasers.
pub fn videos(movie_id: u64) -> Endpoint {
    Endpoint::new(format!("/movie/{movie_id}/videos"))
}

/// Cast and crew.
pub fn credits(movie_id: u64) -> Endpoint {
    Endpoint::new(format!("/movie/{movie_id}/credits"))
}
