//! Maps command-line operation names onto [`TmdbApi`] calls.
use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use tracing::info;

use crate::tmdb::TmdbApi;
use crate::utils::{parse_id, parse_page};

/// `(name, arguments)` for every supported operation, used for `--help`.
pub const OPERATIONS: &[(&str, &str)] = &[
    ("movie", "<id>"),
    ("search-movies", "<query> [page]"),
    ("popular-movies", "[page]"),
    ("now-playing-movies", "[page]"),
    ("upcoming-movies", "[page]"),
    ("top-rated-movies", "[page]"),
    ("movie-images", "<id>"),
    ("movie-videos", "<id>"),
    ("movie-credits", "<id>"),
    ("tv", "<id>"),
    ("search-tv", "<query> [page]"),
    ("popular-tv", "[page]"),
    ("top-rated-tv", "[page]"),
    ("on-the-air-tv", "[page]"),
    ("airing-today-tv", "[page]"),
    ("tv-images", "<id>"),
    ("tv-videos", "<id>"),
    ("tv-credits", "<id>"),
    ("person", "<id>"),
    ("search-people", "<query> [page]"),
    ("movie-genres", ""),
    ("tv-genres", ""),
    ("trending", "[media_type] [time_window]"),
];

pub fn usage() -> String {
    let mut out = String::from("Usage: tmdb_gateway <operation> [args...]\n\nOperations:\n");
    for (name, args) in OPERATIONS {
        out.push_str(&format!("  {name} {args}\n"));
    }
    out
}

pub async fn run_operation(api: &dyn TmdbApi, op: &str, args: &[String]) -> Result<Value> {
    let arg = |i: usize| nth(args, i);
    let query = || search_query(op, args);
    info!("Running {} {:?}", op, args);

    let value = match op {
        "movie" => api.movie_details(parse_id(arg(0))?).await,
        "search-movies" => api.search_movies(query()?, parse_page(arg(1))?).await,
        "popular-movies" => api.popular_movies(parse_page(arg(0))?).await,
        "now-playing-movies" => api.now_playing_movies(parse_page(arg(0))?).await,
        "upcoming-movies" => api.upcoming_movies(parse_page(arg(0))?).await,
        "top-rated-movies" => api.top_rated_movies(parse_page(arg(0))?).await,
        "movie-images" => api.movie_images(parse_id(arg(0))?).await,
        "movie-videos" => api.movie_videos(parse_id(arg(0))?).await,
        "movie-credits" => api.movie_credits(parse_id(arg(0))?).await,
        "tv" => api.tv_show_details(parse_id(arg(0))?).await,
        "search-tv" => api.search_tv_shows(query()?, parse_page(arg(1))?).await,
        "popular-tv" => api.popular_tv_shows(parse_page(arg(0))?).await,
        "top-rated-tv" => api.top_rated_tv_shows(parse_page(arg(0))?).await,
        "on-the-air-tv" => api.on_the_air_tv_shows(parse_page(arg(0))?).await,
        "airing-today-tv" => api.airing_today_tv_shows(parse_page(arg(0))?).await,
        "tv-images" => api.tv_show_images(parse_id(arg(0))?).await,
        "tv-videos" => api.tv_show_videos(parse_id(arg(0))?).await,
        "tv-credits" => api.tv_show_credits(parse_id(arg(0))?).await,
        "person" => api.person_details(parse_id(arg(0))?).await,
        "search-people" => api.search_people(query()?, parse_page(arg(1))?).await,
        "movie-genres" => api.movie_genres().await,
        "tv-genres" => api.tv_genres().await,
        "trending" => api.trending(arg(0), arg(1)).await,
        other => return Err(anyhow!("unknown operation '{}'\n\n{}", other, usage())),
    };
    value.with_context(|| format!("{op} failed"))
}

fn nth(args: &[String], i: usize) -> Option<&str> {
    args.get(i).map(String::as_str)
}

fn search_query<'a>(op: &str, args: &'a [String]) -> Result<&'a str> {
    nth(args, 0).ok_or_else(|| anyhow!("'{}' needs a search query", op))
}
