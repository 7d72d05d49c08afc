use super::endpoint::Endpoint;

pub fn movie_list() -> Endpoint {
    Endpoint::new("/genre/movie/list")
}

pub fn tv_list() -> Endpoint {
    Endpoint::new("/genre/tv/list")
}
