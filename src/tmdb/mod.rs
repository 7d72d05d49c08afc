use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

mod client;
mod endpoint;
pub mod genre;
pub mod movie;
pub mod person;
pub mod trending;
pub mod tv;

pub use client::{TmdbClient, API_KEY_PARAM};
pub use endpoint::{Endpoint, QueryValue, DEFAULT_PAGE};

/// Every TMDB operation, expressed over a single request primitive.
///
/// Implementors only provide [`fetch`](TmdbApi::fetch); the named
/// operations are fixed path/parameter configurations of it. A `page` of
/// `None` requests page 1.
#[async_trait]
pub trait TmdbApi: Send + Sync {
    async fn fetch(&self, endpoint: Endpoint) -> Result<Value>;

    async fn movie_details(&self, movie_id: u64) -> Result<Value> {
        self.fetch(movie::details(movie_id)).await
    }
    async fn search_movies(&self, query: &str, page: Option<u32>) -> Result<Value> {
        self.fetch(movie::search_movies(query, page)).await
    }
    async fn popular_movies(&self, page: Option<u32>) -> Result<Value> {
        self.fetch(movie::popular(page)).await
    }
    async fn now_playing_movies(&self, page: Option<u32>) -> Result<Value> {
        self.fetch(movie::now_playing(page)).await
    }
    async fn upcoming_movies(&self, page: Option<u32>) -> Result<Value> {
        self.fetch(movie::upcoming(page)).await
    }
    async fn top_rated_movies(&self, page: Option<u32>) -> Result<Value> {
        self.fetch(movie::top_rated(page)).await
    }
    async fn movie_images(&self, movie_id: u64) -> Result<Value> {
        self.fetch(movie::images(movie_id)).await
    }
    async fn movie_videos(&self, movie_id: u64) -> Result<Value> {
        self.fetch(movie::videos(movie_id)).await
    }
    async fn movie_credits(&self, movie_id: u64) -> Result<Value> {
        self.fetch(movie::credits(movie_id)).await
    }

    async fn tv_show_details(&self, tv_id: u64) -> Result<Value> {
        self.fetch(tv::details(tv_id)).await
    }
    async fn search_tv_shows(&self, query: &str, page: Option<u32>) -> Result<Value> {
        self.fetch(tv::search_tv(query, page)).await
    }
    async fn popular_tv_shows(&self, page: Option<u32>) -> Result<Value> {
        self.fetch(tv::popular(page)).await
    }
    async fn top_rated_tv_shows(&self, page: Option<u32>) -> Result<Value> {
        self.fetch(tv::top_rated(page)).await
    }
    async fn on_the_air_tv_shows(&self, page: Option<u32>) -> Result<Value> {
        self.fetch(tv::on_the_air(page)).await
    }
    async fn airing_today_tv_shows(&self, page: Option<u32>) -> Result<Value> {
        self.fetch(tv::airing_today(page)).await
    }
    async fn tv_show_images(&self, tv_id: u64) -> Result<Value> {
        self.fetch(tv::images(tv_id)).await
    }
    async fn tv_show_videos(&self, tv_id: u64) -> Result<Value> {
        self.fetch(tv::videos(tv_id)).await
    }
    async fn tv_show_credits(&self, tv_id: u64) -> Result<Value> {
        self.fetch(tv::credits(tv_id)).await
    }

    async fn person_details(&self, person_id: u64) -> Result<Value> {
        self.fetch(person::details(person_id)).await
    }
    async fn search_people(&self, query: &str, page: Option<u32>) -> Result<Value> {
        self.fetch(person::search_people(query, page)).await
    }

    async fn movie_genres(&self) -> Result<Value> {
        self.fetch(genre::movie_list()).await
    }
    async fn tv_genres(&self) -> Result<Value> {
        self.fetch(genre::tv_list()).await
    }

    /// `None` falls back to `all` / `day`.
    async fn trending(&self, media_type: Option<&str>, time_window: Option<&str>) -> Result<Value> {
        self.fetch(trending::trending(media_type, time_window)).await
    }
}

#[async_trait]
impl TmdbApi for TmdbClient {
    async fn fetch(&self, endpoint: Endpoint) -> Result<Value> {
        TmdbClient::fetch(self, &endpoint).await
    }
}
