//! Search entities and the search endpoints.
//!
//! Quick search returns a single mixed `content` array discriminated by
//! `__typename`; [`QuickSearch`] splits it into per-kind lists. Full-text
//! search returns per-kind [`SearchResult`] pages instead.

use crate::ZvukClient;
use crate::artist::SimpleArtist;
use crate::book::SimpleBook;
use crate::entity::{Entity, entity_identity, entity_opt, field, is_object_shaped};
use crate::playlist::SimplePlaylist;
use crate::podcast::{SimpleEpisode, SimplePodcast};
use crate::profile::SimpleProfile;
use crate::release::SimpleRelease;
use crate::track::SimpleTrack;
use crate::{Error, queries};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use strum_macros::EnumString;

/// Pagination state of one search result category.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Page {
    /// Total number of matches in the category
    pub total: Option<i64>,
    /// Offset of the previous page
    pub prev: Option<i64>,
    /// Offset of the next page
    pub next: Option<i64>,
    /// Opaque cursor for fetching the next page
    pub cursor: Option<String>,
}

entity_identity!(Page { total, cursor });
impl Entity for Page {}

impl Page {
    /// Whether another page of results exists.
    pub fn has_next(&self) -> bool {
        self.next.is_some() || self.cursor.is_some()
    }

    /// Whether a previous page of results exists.
    pub fn has_prev(&self) -> bool {
        self.prev.is_some()
    }
}

/// One category of full-text search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Entity"))]
pub struct SearchResult<T> {
    /// Pagination state
    #[serde(deserialize_with = "entity_opt")]
    pub page: Option<Page>,
    /// Relevance score of the category
    pub score: f64,
    /// Matches, in relevance order
    #[serde(deserialize_with = "crate::entity::entity_list")]
    pub items: Vec<T>,
}

impl<T> Default for SearchResult<T> {
    fn default() -> Self {
        Self {
            page: None,
            score: 0.0,
            items: Vec::new(),
        }
    }
}

impl<T: Entity> Entity for SearchResult<T> {}

/// Full-text search results, one optional category per catalog kind.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Search {
    /// Identifier of the search session
    pub search_id: String,
    #[serde(deserialize_with = "entity_opt")]
    pub tracks: Option<SearchResult<SimpleTrack>>,
    #[serde(deserialize_with = "entity_opt")]
    pub artists: Option<SearchResult<SimpleArtist>>,
    #[serde(deserialize_with = "entity_opt")]
    pub releases: Option<SearchResult<SimpleRelease>>,
    #[serde(deserialize_with = "entity_opt")]
    pub playlists: Option<SearchResult<SimplePlaylist>>,
    #[serde(deserialize_with = "entity_opt")]
    pub profiles: Option<SearchResult<SimpleProfile>>,
    #[serde(deserialize_with = "entity_opt")]
    pub books: Option<SearchResult<SimpleBook>>,
    #[serde(deserialize_with = "entity_opt")]
    pub episodes: Option<SearchResult<SimpleEpisode>>,
    #[serde(deserialize_with = "entity_opt")]
    pub podcasts: Option<SearchResult<SimplePodcast>>,
}

entity_identity!(Search { search_id });
impl Entity for Search {}

/// The `__typename` discriminators quick search can return. Unlisted
/// values (chapters, for one) are dropped from the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
enum Typename {
    Track,
    Artist,
    Release,
    Playlist,
    Profile,
    Book,
    Episode,
    Podcast,
}

/// Quick-search (autocomplete) results, split per catalog kind.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct QuickSearch {
    /// Identifier of the search session
    pub search_session_id: String,
    pub tracks: Vec<SimpleTrack>,
    pub artists: Vec<SimpleArtist>,
    pub releases: Vec<SimpleRelease>,
    pub playlists: Vec<SimplePlaylist>,
    pub profiles: Vec<SimpleProfile>,
    pub books: Vec<SimpleBook>,
    pub episodes: Vec<SimpleEpisode>,
    pub podcasts: Vec<SimplePodcast>,
}

entity_identity!(QuickSearch { search_session_id });

impl Entity for QuickSearch {
    /// Split the mixed `content` array on `__typename`, preserving the
    /// wire order within each kind. Without a `content` array the legacy
    /// per-kind list shape is decoded instead.
    fn from_value(value: &Value) -> Option<Self> {
        if !is_object_shaped(value) {
            return None;
        }

        let content = match value.get("content").and_then(Value::as_array) {
            Some(content) => content,
            None => {
                // Legacy shape with separate per-kind lists.
                return Some(QuickSearch {
                    search_session_id: session_id(value),
                    tracks: SimpleTrack::from_list(field(value, "tracks")),
                    artists: SimpleArtist::from_list(field(value, "artists")),
                    releases: SimpleRelease::from_list(field(value, "releases")),
                    playlists: SimplePlaylist::from_list(field(value, "playlists")),
                    profiles: SimpleProfile::from_list(field(value, "profiles")),
                    books: SimpleBook::from_list(field(value, "books")),
                    episodes: SimpleEpisode::from_list(field(value, "episodes")),
                    podcasts: SimplePodcast::from_list(field(value, "podcasts")),
                });
            }
        };

        let mut split = QuickSearch {
            search_session_id: session_id(value),
            ..QuickSearch::default()
        };

        for item in content {
            if !item.is_object() {
                continue;
            }
            let typename = item
                .get("__typename")
                .and_then(Value::as_str)
                .and_then(|name| Typename::from_str(name).ok());

            match typename {
                Some(Typename::Track) => split.tracks.extend(SimpleTrack::from_value(item)),
                Some(Typename::Artist) => split.artists.extend(SimpleArtist::from_value(item)),
                Some(Typename::Release) => split.releases.extend(SimpleRelease::from_value(item)),
                Some(Typename::Playlist) => {
                    split.playlists.extend(SimplePlaylist::from_value(item))
                }
                Some(Typename::Profile) => split.profiles.extend(SimpleProfile::from_value(item)),
                Some(Typename::Book) => split.books.extend(SimpleBook::from_value(item)),
                Some(Typename::Episode) => split.episodes.extend(SimpleEpisode::from_value(item)),
                Some(Typename::Podcast) => split.podcasts.extend(SimplePodcast::from_value(item)),
                None => {}
            }
        }

        Some(split)
    }
}

fn session_id(value: &Value) -> String {
    value
        .get("search_session_id")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Category toggles and per-category cursors for full-text search.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub track_cursor: Option<String>,
    pub artist_cursor: Option<String>,
    pub release_cursor: Option<String>,
    pub playlist_cursor: Option<String>,
    /// Categories to skip; all are searched by default
    pub skip_tracks: bool,
    pub skip_artists: bool,
    pub skip_releases: bool,
    pub skip_playlists: bool,
    pub skip_podcasts: bool,
    pub skip_episodes: bool,
    pub skip_profiles: bool,
    pub skip_books: bool,
}

impl ZvukClient {
    /// Quick search with autocomplete semantics.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: &zvukrs::ZvukClient) -> Result<(), zvukrs::Error> {
    /// if let Some(results) = client.quick_search("дайте танк", 10, None).await? {
    ///     for track in &results.tracks {
    ///         println!("{} — {}", track.artists_str(), track.title);
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn quick_search(
        &self,
        query: &str,
        limit: u32,
        search_session_id: Option<&str>,
    ) -> Result<Option<QuickSearch>, Error> {
        let mut variables = serde_json::json!({ "query": query, "limit": limit });
        if let Some(session) = search_session_id {
            variables["searchSessionId"] = Value::String(session.to_string());
        }

        let result = self
            .graphql("quickSearch", queries::QUICK_SEARCH, variables)
            .await?;

        Ok(QuickSearch::from_value(field(&result, "quick_search")))
    }

    /// Full-text search across the catalog.
    pub async fn search(
        &self,
        query: &str,
        limit: u32,
        params: SearchParams,
    ) -> Result<Option<Search>, Error> {
        let mut variables = serde_json::json!({
            "query": query,
            "limit": limit,
            "withTracks": !params.skip_tracks,
            "withArtists": !params.skip_artists,
            "withReleases": !params.skip_releases,
            "withPlaylists": !params.skip_playlists,
            "withPodcasts": !params.skip_podcasts,
            "withEpisodes": !params.skip_episodes,
            "withProfiles": !params.skip_profiles,
            "withBooks": !params.skip_books,
        });

        for (key, cursor) in [
            ("trackCursor", &params.track_cursor),
            ("artistCursor", &params.artist_cursor),
            ("releaseCursor", &params.release_cursor),
            ("playlistCursor", &params.playlist_cursor),
        ] {
            if let Some(cursor) = cursor {
                variables[key] = Value::String(cursor.clone());
            }
        }

        let result = self.graphql("search", queries::SEARCH, variables).await?;

        Ok(Search::from_value(field(&result, "search")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn content_is_split_by_typename() {
        let value = json!({
            "search_session_id": "sess-1",
            "content": [
                { "__typename": "Track", "id": "t1", "title": "Song" },
                { "__typename": "Artist", "id": "a1", "title": "Band" },
                { "__typename": "Track", "id": "t2", "title": "Other" },
                { "__typename": "Chapter", "id": "c1" },
                { "__typename": "Release", "id": "r1", "title": "Album" },
            ],
        });

        let split = QuickSearch::from_value(&value).unwrap();
        assert_eq!(split.search_session_id, "sess-1");
        assert_eq!(split.tracks.len(), 2);
        assert_eq!(split.tracks[0].id, "t1");
        assert_eq!(split.tracks[1].id, "t2");
        assert_eq!(split.artists.len(), 1);
        assert_eq!(split.releases.len(), 1);
        assert!(split.books.is_empty());
    }

    #[test]
    fn legacy_shape_decodes_per_kind_lists() {
        let value = json!({
            "search_session_id": "sess-2",
            "tracks": [{ "id": "t1", "title": "Song" }],
            "artists": [{ "id": "a1", "title": "Band" }],
        });

        let split = QuickSearch::from_value(&value).unwrap();
        assert_eq!(split.search_session_id, "sess-2");
        assert_eq!(split.tracks.len(), 1);
        assert_eq!(split.artists.len(), 1);
    }

    #[test]
    fn page_navigation() {
        let page = Page {
            next: Some(20),
            prev: None,
            ..Page::default()
        };
        assert!(page.has_next());
        assert!(!page.has_prev());
        assert!(!Page::default().has_next());

        let cursored = Page {
            cursor: Some("abc".into()),
            ..Page::default()
        };
        assert!(cursored.has_next());
    }

    #[test]
    fn search_result_decodes_generically() {
        let value = json!({
            "score": 0.9,
            "page": { "total": 2, "next": 20 },
            "items": [
                { "id": "t1", "title": "One" },
                { "id": "t2", "title": "Two" },
            ],
        });

        let result: SearchResult<SimpleTrack> = SearchResult::from_value(&value).unwrap();
        assert_eq!(result.items.len(), 2);
        assert!(result.page.unwrap().has_next());
    }
}
