//! Optional typed views over TMDB payloads.
//!
//! The gateway always returns raw JSON. These structs let callers decode the
//! parts they care about; every field past `id` is optional or defaulted so
//! decoding never rejects a payload TMDB would send.
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Decodes a view from a raw payload without consuming it.
pub fn view<T: DeserializeOwned>(payload: &Value) -> serde_json::Result<T> {
    T::deserialize(payload)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

impl<T> Paged<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    pub original_language: Option<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetails {
    pub id: u64,
    pub imdb_id: Option<String>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    pub status: Option<String>,
    pub original_language: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub budget: Option<u64>,
    pub revenue: Option<u64>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvShowSummary {
    pub id: u64,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub first_air_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    pub original_language: Option<String>,
    pub popularity: Option<f64>,
    pub vote_average: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvShowDetails {
    pub id: u64,
    pub name: Option<String>,
    pub original_name: Option<String>,
    pub overview: Option<String>,
    pub first_air_date: Option<String>,
    pub last_air_date: Option<String>,
    pub number_of_seasons: Option<u32>,
    pub number_of_episodes: Option<u32>,
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    pub status: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub origin_country: Vec<String>,
    pub original_language: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: u64,
    pub name: Option<String>,
    pub known_for_department: Option<String>,
    pub profile_path: Option<String>,
    pub popularity: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDetails {
    pub id: u64,
    pub name: Option<String>,
    pub biography: Option<String>,
    pub birthday: Option<String>,
    pub deathday: Option<String>,
    pub place_of_birth: Option<String>,
    pub known_for_department: Option<String>,
    pub imdb_id: Option<String>,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub also_known_as: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: Option<String>,
    pub character: Option<String>,
    pub order: Option<u32>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: u64,
    pub name: Option<String>,
    pub job: Option<String>,
    pub department: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credits {
    pub id: Option<u64>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

impl Credits {
    /// Crew names credited with `job`, e.g. "Director".
    pub fn crew_with_job(&self, job: &str) -> Vec<&str> {
        self.crew
            .iter()
            .filter(|c| c.job.as_deref() == Some(job))
            .filter_map(|c| c.name.as_deref())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub key: String,
    pub name: Option<String>,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub video_type: String,
    pub official: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Videos {
    pub id: Option<u64>,
    #[serde(default)]
    pub results: Vec<Video>,
}

impl Videos {
    /// First YouTube trailer, falling back to the first YouTube teaser.
    pub fn youtube_trailer(&self) -> Option<String> {
        let youtube = |kind: &str| {
            self.results
                .iter()
                .find(|v| v.site.eq_ignore_ascii_case("YouTube") && v.video_type == kind)
        };
        youtube("Trailer")
            .or_else(|| youtube("Teaser"))
            .map(|v| format!("https://www.youtube.com/watch?v={}", v.key))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub file_path: String,
    pub iso_639_1: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub vote_average: Option<f64>,
}

impl Image {
    /// Full image URL for a TMDB size bucket such as `w500` or `original`.
    pub fn url(&self, size: &str) -> String {
        format!("{IMAGE_BASE}/{size}{}", self.file_path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Images {
    pub id: Option<u64>,
    #[serde(default)]
    pub posters: Vec<Image>,
    #[serde(default)]
    pub backdrops: Vec<Image>,
    #[serde(default)]
    pub logos: Vec<Image>,
}

impl Images {
    /// Poster in `lang` if there is one, otherwise the first poster.
    pub fn poster_for(&self, lang: Option<&str>) -> Option<&Image> {
        lang.and_then(|l| {
            self.posters
                .iter()
                .find(|p| p.iso_639_1.as_deref() == Some(l))
        })
        .or_else(|| self.posters.first())
    }
}

/// One entry of `/trending/...`; `media_type` tells which fields are set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingItem {
    pub id: u64,
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub popularity: Option<f64>,
}

impl TrendingItem {
    /// Movies carry `title`, shows and people carry `name`.
    pub fn display_name(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paged_search_decodes_sparse_results() {
        let payload = json!({
            "page": 1,
            "total_pages": 3,
            "total_results": 41,
            "results": [
                { "id": 268, "title": "Batman", "release_date": "1989-06-21" },
                { "id": 414906 }
            ]
        });
        let page: Paged<MovieSummary> = view(&payload).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].title.as_deref(), Some("Batman"));
        assert!(page.results[1].title.is_none());
        assert!(page.has_next());
    }

    #[test]
    fn view_leaves_payload_untouched() {
        let payload = json!({ "id": 550, "title": "Fight Club", "extra": { "nested": true } });
        let before = payload.clone();
        let details: MovieDetails = view(&payload).unwrap();
        assert_eq!(details.id, 550);
        assert_eq!(payload, before);
    }

    #[test]
    fn trailer_prefers_trailer_over_teaser() {
        let videos: Videos = view(&json!({
            "id": 1,
            "results": [
                { "key": "tease", "site": "YouTube", "type": "Teaser" },
                { "key": "vimeo", "site": "Vimeo", "type": "Trailer" },
                { "key": "real", "site": "youtube", "type": "Trailer" }
            ]
        }))
        .unwrap();
        assert_eq!(
            videos.youtube_trailer().as_deref(),
            Some("https://www.youtube.com/watch?v=real")
        );
    }

    #[test]
    fn poster_falls_back_to_first() {
        let images: Images = view(&json!({
            "posters": [
                { "file_path": "/en.jpg", "iso_639_1": "en" },
                { "file_path": "/fr.jpg", "iso_639_1": "fr" }
            ]
        }))
        .unwrap();
        assert_eq!(images.poster_for(Some("fr")).unwrap().file_path, "/fr.jpg");
        assert_eq!(images.poster_for(Some("ja")).unwrap().file_path, "/en.jpg");
        assert_eq!(
            images.posters[0].url("original"),
            "https://image.tmdb.org/t/p/original/en.jpg"
        );
    }

    #[test]
    fn directors_from_crew() {
        let credits: Credits = view(&json!({
            "cast": [{ "id": 1, "name": "Edward Norton" }],
            "crew": [
                { "id": 2, "name": "David Fincher", "job": "Director" },
                { "id": 3, "name": "Jim Uhls", "job": "Screenplay" }
            ]
        }))
        .unwrap();
        assert_eq!(credits.crew_with_job("Director"), vec!["David Fincher"]);
    }

    #[test]
    fn trending_name_covers_movies_and_shows() {
        let items: Paged<TrendingItem> = view(&json!({
            "results": [
                { "id": 1, "media_type": "movie", "title": "Dune" },
                { "id": 2, "media_type": "tv", "name": "Shogun" }
            ]
        }))
        .unwrap();
        let names: Vec<_> = items.results.iter().filter_map(|i| i.display_name()).collect();
        assert_eq!(names, vec!["Dune", "Shogun"]);
    }
}
