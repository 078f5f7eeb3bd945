//! Track entities and the track endpoints.

use crate::ZvukClient;
use crate::artist::SimpleArtist;
use crate::collection::CollectionItem;
use crate::common::Genre;
use crate::entity::{Entity, entity_identity, entity_list, entity_opt, field};
use crate::release::SimpleRelease;
use crate::{Error, queries};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Brief track information, as embedded in releases, playlists, and search
/// results.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimpleTrack {
    /// Unique track identifier
    pub id: String,
    /// Track title
    pub title: String,
    /// Duration in seconds
    pub duration: i64,
    /// Whether the track carries explicit content
    pub explicit: bool,
    /// Credited artists
    #[serde(deserialize_with = "entity_list")]
    pub artists: Vec<SimpleArtist>,
    /// Release the track belongs to
    #[serde(deserialize_with = "entity_opt")]
    pub release: Option<SimpleRelease>,
}

entity_identity!(SimpleTrack { id });
impl Entity for SimpleTrack {}

impl SimpleTrack {
    /// Duration formatted as `M:SS`.
    pub fn duration_str(&self) -> String {
        format_duration(self.duration)
    }

    /// Credited artist names joined with `", "`.
    pub fn artists_str(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Full track information.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Track {
    /// Unique track identifier
    pub id: String,
    /// Track title
    pub title: String,
    /// Title variant used by the search index
    pub search_title: Option<String>,
    /// Position within the release
    pub position: Option<i64>,
    /// Duration in seconds
    pub duration: i64,
    /// Regional availability flag
    pub availability: i64,
    /// Template for rendering the credited artist line
    pub artist_template: Option<String>,
    /// Catalog condition marker
    pub condition: Option<String>,
    /// Whether the track carries explicit content
    pub explicit: bool,
    /// Lyrics payload, passed through as-is
    pub lyrics: Option<Value>,
    /// Internal channel identifier
    pub zchan: Option<String>,
    /// Whether a lossless stream exists for this track
    pub has_flac: bool,
    /// Artist names as plain strings
    pub artist_names: Vec<String>,
    /// Production credits
    pub credits: Option<String>,
    /// Genres
    #[serde(deserialize_with = "entity_list")]
    pub genres: Vec<Genre>,
    /// Credited artists
    #[serde(deserialize_with = "entity_list")]
    pub artists: Vec<SimpleArtist>,
    /// Release the track belongs to
    #[serde(deserialize_with = "entity_opt")]
    pub release: Option<SimpleRelease>,
    /// Like state for the current user
    #[serde(deserialize_with = "entity_opt")]
    pub collection_item_data: Option<CollectionItem>,
}

entity_identity!(Track { id });
impl Entity for Track {}

impl Track {
    /// Duration formatted as `M:SS`.
    pub fn duration_str(&self) -> String {
        format_duration(self.duration)
    }

    /// Credited artist names joined with `", "`. Falls back to the plain
    /// `artist_names` list when no artist entities were returned.
    pub fn artists_str(&self) -> String {
        if !self.artists.is_empty() {
            self.artists
                .iter()
                .map(|a| a.title.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            self.artist_names.join(", ")
        }
    }

    /// Whether the current user has liked this track.
    pub fn is_liked(&self) -> bool {
        self.collection_item_data
            .as_ref()
            .is_some_and(CollectionItem::is_liked)
    }
}

fn format_duration(seconds: i64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

impl ZvukClient {
    /// Get tracks by ID.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: &zvukrs::ZvukClient) -> Result<(), zvukrs::Error> {
    /// let tracks = client.tracks(&["128672726"]).await?;
    /// for track in &tracks {
    ///     println!("{} — {}", track.artists_str(), track.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn tracks(&self, ids: &[&str]) -> Result<Vec<Track>, Error> {
        let variables = serde_json::json!({ "ids": ids });

        let result = self
            .graphql("getTracks", queries::GET_TRACKS, variables)
            .await?;

        Ok(Track::from_list(field(&result, "get_tracks")))
    }

    /// Get a single track by ID.
    pub async fn track(&self, id: &str) -> Result<Option<Track>, Error> {
        let mut tracks = self.tracks(&[id]).await?;
        Ok(if tracks.is_empty() {
            None
        } else {
            Some(tracks.remove(0))
        })
    }

    /// Get tracks with the extended field set, optionally expanding artist
    /// and release information.
    pub async fn full_tracks(
        &self,
        ids: &[&str],
        with_artists: bool,
        with_releases: bool,
    ) -> Result<Vec<Track>, Error> {
        let variables = serde_json::json!({
            "ids": ids,
            "withArtists": with_artists,
            "withReleases": with_releases,
        });

        let result = self
            .graphql("getFullTrack", queries::GET_FULL_TRACK, variables)
            .await?;

        Ok(Track::from_list(field(&result, "get_tracks")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(185), "3:05");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(3661), "61:01");
        assert_eq!(format_duration(0), "0:00");
    }

    #[test]
    fn artists_str_falls_back_to_names() {
        let track = Track {
            artist_names: vec!["A".into(), "B".into()],
            ..Track::default()
        };
        assert_eq!(track.artists_str(), "A, B");
    }
}
