//! People (cast and crew) endpoints.
use super::endpoint::{search, Endpoint};

pub fn details(person_id: u64) -> Endpoint {
    Endpoint::new(format!("/person/{person_id}"))
}

pub fn search_people(query: &str, page: Option<u32>) -> Endpoint {
    search("/search/person", query, page)
}
