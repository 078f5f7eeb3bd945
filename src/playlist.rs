//! Playlist entities and the playlist endpoints, including the collaborative
//! "synthesis" playlists.

use crate::ZvukClient;
use crate::common::Image;
use crate::entity::{Entity, entity_identity, entity_list, entity_opt, field};
use crate::track::SimpleTrack;
use crate::{Error, queries};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single entry of a playlist, as sent in mutation payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistItem {
    /// Item type, currently always `"track"`
    #[serde(rename = "type")]
    pub type_: String,
    /// Identifier of the referenced item
    pub item_id: String,
}

impl Default for PlaylistItem {
    fn default() -> Self {
        Self {
            type_: "track".to_string(),
            item_id: String::new(),
        }
    }
}

entity_identity!(PlaylistItem { type_, item_id });
impl Entity for PlaylistItem {}

impl PlaylistItem {
    /// A track entry pointing at `track_id`.
    pub fn track(track_id: &str) -> Self {
        Self {
            type_: "track".to_string(),
            item_id: track_id.to_string(),
        }
    }
}

/// Brief playlist information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplePlaylist {
    /// Unique playlist identifier
    pub id: String,
    /// Playlist title
    pub title: String,
    /// Whether the playlist is publicly visible
    pub is_public: bool,
    /// Playlist description
    pub description: Option<String>,
    /// Total duration in seconds
    pub duration: i64,
    /// Cover image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
}

impl Default for SimplePlaylist {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            is_public: true,
            description: None,
            duration: 0,
            image: None,
        }
    }
}

entity_identity!(SimplePlaylist { id });
impl Entity for SimplePlaylist {}

/// Full playlist information.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: String,
    /// Playlist title
    pub title: String,
    /// Identifier of the owning user
    pub user_id: Option<String>,
    /// Whether the playlist is publicly visible
    pub is_public: bool,
    /// Whether the playlist has been deleted
    pub is_deleted: bool,
    /// Whether the playlist has been shared
    pub shared: bool,
    /// Whether the playlist is branded content
    pub branded: bool,
    /// Playlist description
    pub description: Option<String>,
    /// Total duration in seconds
    pub duration: i64,
    /// Cover image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
    /// Last update timestamp
    pub updated: Option<String>,
    /// Title variant used by the search index
    pub search_title: Option<String>,
    /// Tracks in the playlist
    #[serde(deserialize_with = "entity_list")]
    pub tracks: Vec<SimpleTrack>,
}

impl Default for Playlist {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            user_id: None,
            is_public: true,
            is_deleted: false,
            shared: false,
            branded: false,
            description: None,
            duration: 0,
            image: None,
            updated: None,
            search_title: None,
            tracks: Vec::new(),
        }
    }
}

entity_identity!(Playlist { id });
impl Entity for Playlist {}

/// An author of a synthesis playlist.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlaylistAuthor {
    /// Author identifier
    pub id: String,
    /// Author display name
    pub name: String,
    /// Author image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
    /// Taste match score between the authors
    pub matches: Option<f64>,
}

entity_identity!(PlaylistAuthor { id });
impl Entity for PlaylistAuthor {}

/// A playlist synthesized from the tastes of two users.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SynthesisPlaylist {
    /// Unique playlist identifier
    pub id: String,
    /// Tracks in the playlist
    #[serde(deserialize_with = "entity_list")]
    pub tracks: Vec<SimpleTrack>,
    /// The two authors the playlist was built from
    #[serde(deserialize_with = "entity_list")]
    pub authors: Vec<PlaylistAuthor>,
}

entity_identity!(SynthesisPlaylist { id });
impl Entity for SynthesisPlaylist {}

fn track_items(track_ids: &[&str]) -> Vec<Value> {
    track_ids
        .iter()
        .map(|id| PlaylistItem::track(id).to_plain_map(false))
        .collect()
}

fn mutation_succeeded(result: &Value, op: &str) -> bool {
    result
        .get("playlist")
        .and_then(Value::as_object)
        .is_some_and(|playlist| playlist.contains_key(op))
}

impl ZvukClient {
    /// Get playlists by ID.
    pub async fn playlists(&self, ids: &[&str]) -> Result<Vec<Playlist>, Error> {
        let variables = serde_json::json!({ "ids": ids });

        let result = self
            .graphql("getPlaylists", queries::GET_PLAYLISTS, variables)
            .await?;

        Ok(Playlist::from_list(field(&result, "get_playlists")))
    }

    /// Get a single playlist by ID.
    pub async fn playlist(&self, id: &str) -> Result<Option<Playlist>, Error> {
        let mut playlists = self.playlists(&[id]).await?;
        Ok(if playlists.is_empty() {
            None
        } else {
            Some(playlists.remove(0))
        })
    }

    /// Get brief playlist information by ID. Cheaper than [`playlists`]
    /// when the track listing is not needed.
    ///
    /// [`playlists`]: ZvukClient::playlists
    pub async fn short_playlists(&self, ids: &[&str]) -> Result<Vec<SimplePlaylist>, Error> {
        let variables = serde_json::json!({ "ids": ids });

        let result = self
            .graphql("getShortPlaylist", queries::GET_SHORT_PLAYLIST, variables)
            .await?;

        Ok(SimplePlaylist::from_list(field(&result, "get_playlists")))
    }

    /// Get a page of a playlist's tracks.
    pub async fn playlist_tracks(
        &self,
        id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<SimpleTrack>, Error> {
        let variables = serde_json::json!({
            "id": id,
            "limit": limit,
            "offset": offset,
        });

        let result = self
            .graphql("getPlaylistTracks", queries::GET_PLAYLIST_TRACKS, variables)
            .await?;

        Ok(SimpleTrack::from_list(field(&result, "playlist_tracks")))
    }

    /// Create a playlist, optionally seeding it with tracks. Returns the
    /// new playlist's ID.
    pub async fn create_playlist(&self, name: &str, track_ids: &[&str]) -> Result<String, Error> {
        let variables = serde_json::json!({
            "name": name,
            "items": track_items(track_ids),
        });

        let result = self
            .graphql("createPlaylist", queries::CREATE_PLAYLIST, variables)
            .await?;

        let id = result
            .get("playlist")
            .and_then(|p| p.get("create"))
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_default();

        Ok(id)
    }

    /// Delete a playlist. Returns whether the server acknowledged the
    /// deletion.
    pub async fn delete_playlist(&self, id: &str) -> Result<bool, Error> {
        let variables = serde_json::json!({ "id": id });

        let result = self
            .graphql("deletePlaylist", queries::DELETE_PLAYLIST, variables)
            .await?;

        Ok(mutation_succeeded(&result, "delete"))
    }

    /// Rename a playlist.
    pub async fn rename_playlist(&self, id: &str, new_name: &str) -> Result<bool, Error> {
        let variables = serde_json::json!({ "id": id, "name": new_name });

        let result = self
            .graphql("renamePlaylist", queries::RENAME_PLAYLIST, variables)
            .await?;

        Ok(mutation_succeeded(&result, "rename"))
    }

    /// Append tracks to a playlist.
    pub async fn add_tracks_to_playlist(
        &self,
        id: &str,
        track_ids: &[&str],
    ) -> Result<bool, Error> {
        let variables = serde_json::json!({
            "id": id,
            "items": track_items(track_ids),
        });

        let result = self
            .graphql(
                "addTracksToPlaylist",
                queries::ADD_TRACKS_TO_PLAYLIST,
                variables,
            )
            .await?;

        Ok(mutation_succeeded(&result, "add_items"))
    }

    /// Replace a playlist's contents, name, and visibility in one call.
    pub async fn update_playlist(
        &self,
        id: &str,
        track_ids: &[&str],
        name: Option<&str>,
        is_public: Option<bool>,
    ) -> Result<bool, Error> {
        let variables = serde_json::json!({
            "id": id,
            "items": track_items(track_ids),
            "name": name.unwrap_or(""),
            "isPublic": is_public.unwrap_or(false),
        });

        let result = self
            .graphql("updatePlaylist", queries::UPDATE_PLAYLIST, variables)
            .await?;

        Ok(mutation_succeeded(&result, "update"))
    }

    /// Change a playlist's visibility.
    pub async fn set_playlist_public(&self, id: &str, is_public: bool) -> Result<bool, Error> {
        let variables = serde_json::json!({ "id": id, "isPublic": is_public });

        let result = self
            .graphql(
                "setPlaylistToPublic",
                queries::SET_PLAYLIST_TO_PUBLIC,
                variables,
            )
            .await?;

        Ok(mutation_succeeded(&result, "set_public"))
    }

    /// Build a synthesis playlist from the tastes of two users.
    pub async fn build_synthesis_playlist(
        &self,
        first_author_id: &str,
        second_author_id: &str,
    ) -> Result<Option<SynthesisPlaylist>, Error> {
        let variables = serde_json::json!({
            "firstAuthorId": first_author_id,
            "secondAuthorId": second_author_id,
        });

        let result = self
            .graphql(
                "synthesisPlaylistBuild",
                queries::SYNTHESIS_PLAYLIST_BUILD,
                variables,
            )
            .await?;

        Ok(SynthesisPlaylist::from_value(field(
            &result,
            "synthesis_playlist_build",
        )))
    }

    /// Get synthesis playlists by ID.
    pub async fn synthesis_playlists(&self, ids: &[&str]) -> Result<Vec<SynthesisPlaylist>, Error> {
        let variables = serde_json::json!({ "ids": ids });

        let result = self
            .graphql("synthesisPlaylist", queries::SYNTHESIS_PLAYLIST, variables)
            .await?;

        Ok(SynthesisPlaylist::from_list(field(
            &result,
            "synthesis_playlist",
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_defaults_to_public() {
        let value = serde_json::json!({ "id": "42", "title": "Mix" });
        let playlist = Playlist::from_value(&value).unwrap();
        assert!(playlist.is_public);
        assert!(!playlist.is_deleted);
    }

    #[test]
    fn mutation_items_serialize_to_the_wire_shape() {
        assert_eq!(
            track_items(&["11", "22"]),
            vec![
                serde_json::json!({ "type": "track", "item_id": "11" }),
                serde_json::json!({ "type": "track", "item_id": "22" }),
            ]
        );
        assert_eq!(
            PlaylistItem::track("11").to_plain_map(false),
            serde_json::json!({ "type": "track", "item_id": "11" })
        );
    }

    #[test]
    fn mutation_result_key_presence() {
        let ok = serde_json::json!({ "playlist": { "delete": null } });
        let missing = serde_json::json!({ "playlist": {} });
        assert!(mutation_succeeded(&ok, "delete"));
        assert!(!mutation_succeeded(&missing, "delete"));
        assert!(!mutation_succeeded(&serde_json::json!({}), "delete"));
    }
}
