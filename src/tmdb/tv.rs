//! TV show endpoints.
use super::endpoint::{paged, search, Endpoint};

pub fn details(tv_id: u64) -> Endpoint {
    Endpoint::new(format!("/tv/{tv_id}"))
}

pub fn search_tv(query: &str, page: Option<u32>) -> Endpoint {
    search("/search/tv", query, page)
}

pub fn popular(page: Option<u32>) -> Endpoint {
    paged("/tv/popular", page)
}

pub fn top_rated(page: Option<u32>) -> Endpoint {
    paged("/tv/top_rated", page)
}

/// Shows with an episode airing in the next seven days.
pub fn on_the_air(page: Option<u32>) -> Endpoint {
    paged("/tv/on_the_air", page)
}

pub fn airing_today(page: Option<u32>) -> Endpoint {
    paged("/tv/airing_today", page)
}

pub fn images(tv_id: u64) -> Endpoint {
    Endpoint::new(format!("/tv/{tv_id}/images"))
}

pub fn videos(tv_id: u64) -> Endpoint {
    Endpoint::new(format!("/tv/{tv_id}/videos"))
}

pub fn credits(tv_id: u64) -> Endpoint {
    Endpoint::new(format!("/tv/{tv_id}/credits"))
}
