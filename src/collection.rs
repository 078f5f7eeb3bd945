//! The user's collection (likes) and hidden items, plus their endpoints.

use crate::ZvukClient;
use crate::entity::{Entity, entity_identity, entity_list, field, lenient_enum};
use crate::track::Track;
use crate::{Error, OrderBy, OrderDirection, queries};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

/// The kind of item a collection mutation targets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CollectionItemKind {
    Track,
    Release,
    Artist,
    Podcast,
    Episode,
    Playlist,
    Profile,
}

/// The status of an item within the collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CollectionItemStatus {
    Liked,
}

/// Like state of a single catalog item.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CollectionItem {
    /// Identifier of the liked item
    pub id: Option<String>,
    /// Identifier of the owning user
    pub user_id: Option<String>,
    /// Status of the item within the collection
    #[serde(deserialize_with = "lenient_enum")]
    pub item_status: Option<CollectionItemStatus>,
    /// When this item last changed
    pub last_modified: Option<String>,
    /// When the collection last changed
    pub collection_last_modified: Option<String>,
    /// Total like count for the item
    pub likes_count: Option<i64>,
}

entity_identity!(CollectionItem { id, user_id });
impl Entity for CollectionItem {}

impl CollectionItem {
    /// Whether the item is liked.
    pub fn is_liked(&self) -> bool {
        self.item_status == Some(CollectionItemStatus::Liked)
    }
}

/// The user's collection, one item list per catalog kind.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Collection {
    #[serde(deserialize_with = "entity_list")]
    pub artists: Vec<CollectionItem>,
    #[serde(deserialize_with = "entity_list")]
    pub episodes: Vec<CollectionItem>,
    #[serde(deserialize_with = "entity_list")]
    pub podcasts: Vec<CollectionItem>,
    #[serde(deserialize_with = "entity_list")]
    pub playlists: Vec<CollectionItem>,
    #[serde(deserialize_with = "entity_list")]
    pub synthesis_playlists: Vec<CollectionItem>,
    #[serde(deserialize_with = "entity_list")]
    pub profiles: Vec<CollectionItem>,
    #[serde(deserialize_with = "entity_list")]
    pub releases: Vec<CollectionItem>,
    #[serde(deserialize_with = "entity_list")]
    pub tracks: Vec<CollectionItem>,
}

impl Entity for Collection {}

/// Items the user has hidden from recommendations.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct HiddenCollection {
    #[serde(deserialize_with = "entity_list")]
    pub tracks: Vec<CollectionItem>,
    #[serde(deserialize_with = "entity_list")]
    pub artists: Vec<CollectionItem>,
}

impl Entity for HiddenCollection {}

fn mutation_succeeded(result: &Value, section: &str, op: &str) -> bool {
    result
        .get(section)
        .and_then(Value::as_object)
        .is_some_and(|data| data.contains_key(op))
}

impl ZvukClient {
    /// Get the current user's collection.
    pub async fn collection(&self) -> Result<Option<Collection>, Error> {
        let result = self
            .graphql(
                "userCollection",
                queries::USER_COLLECTION,
                serde_json::json!({}),
            )
            .await?;

        Ok(Collection::from_value(field(&result, "collection")))
    }

    /// Get the current user's liked tracks, sorted.
    pub async fn liked_tracks(
        &self,
        order_by: OrderBy,
        direction: OrderDirection,
    ) -> Result<Vec<Track>, Error> {
        let variables = serde_json::json!({
            "orderBy": order_by.as_ref(),
            "orderDirection": direction.as_ref(),
        });

        let result = self
            .graphql("userTracks", queries::USER_TRACKS, variables)
            .await?;

        Ok(Track::from_list(
            field(&result, "collection")
                .get("tracks")
                .unwrap_or(&Value::Null),
        ))
    }

    /// Get the current user's playlists as collection items.
    pub async fn user_playlists(&self) -> Result<Vec<CollectionItem>, Error> {
        let result = self
            .graphql(
                "userPlaylists",
                queries::USER_PLAYLISTS,
                serde_json::json!({}),
            )
            .await?;

        Ok(CollectionItem::from_list(
            field(&result, "collection")
                .get("playlists")
                .unwrap_or(&Value::Null),
        ))
    }

    /// Get a page of the current user's podcasts. The payload is passed
    /// through as-is, including the next-page cursor.
    pub async fn user_paginated_podcasts(
        &self,
        cursor: Option<&str>,
        count: u32,
    ) -> Result<Value, Error> {
        let mut variables = serde_json::json!({ "count": count });
        if let Some(cursor) = cursor {
            variables["cursor"] = Value::String(cursor.to_string());
        }

        let result = self
            .graphql(
                "userPaginatedPodcasts",
                queries::USER_PAGINATED_PODCASTS,
                variables,
            )
            .await?;

        Ok(field(&result, "paginated_collection").clone())
    }

    /// Add an item to the collection (like it).
    pub async fn add_to_collection(
        &self,
        item_id: &str,
        kind: CollectionItemKind,
    ) -> Result<bool, Error> {
        let variables = serde_json::json!({ "id": item_id, "type": kind.as_ref() });

        let result = self
            .graphql(
                "addItemToCollection",
                queries::ADD_ITEM_TO_COLLECTION,
                variables,
            )
            .await?;

        Ok(mutation_succeeded(&result, "collection", "add_item"))
    }

    /// Remove an item from the collection (unlike it).
    pub async fn remove_from_collection(
        &self,
        item_id: &str,
        kind: CollectionItemKind,
    ) -> Result<bool, Error> {
        let variables = serde_json::json!({ "id": item_id, "type": kind.as_ref() });

        let result = self
            .graphql(
                "removeItemFromCollection",
                queries::REMOVE_ITEM_FROM_COLLECTION,
                variables,
            )
            .await?;

        Ok(mutation_succeeded(&result, "collection", "remove_item"))
    }

    /// Like a track.
    pub async fn like_track(&self, id: &str) -> Result<bool, Error> {
        self.add_to_collection(id, CollectionItemKind::Track).await
    }

    /// Remove a like from a track.
    pub async fn unlike_track(&self, id: &str) -> Result<bool, Error> {
        self.remove_from_collection(id, CollectionItemKind::Track)
            .await
    }

    /// Like a release.
    pub async fn like_release(&self, id: &str) -> Result<bool, Error> {
        self.add_to_collection(id, CollectionItemKind::Release)
            .await
    }

    /// Remove a like from a release.
    pub async fn unlike_release(&self, id: &str) -> Result<bool, Error> {
        self.remove_from_collection(id, CollectionItemKind::Release)
            .await
    }

    /// Like an artist.
    pub async fn like_artist(&self, id: &str) -> Result<bool, Error> {
        self.add_to_collection(id, CollectionItemKind::Artist).await
    }

    /// Remove a like from an artist.
    pub async fn unlike_artist(&self, id: &str) -> Result<bool, Error> {
        self.remove_from_collection(id, CollectionItemKind::Artist)
            .await
    }

    /// Like a playlist.
    pub async fn like_playlist(&self, id: &str) -> Result<bool, Error> {
        self.add_to_collection(id, CollectionItemKind::Playlist)
            .await
    }

    /// Remove a like from a playlist.
    pub async fn unlike_playlist(&self, id: &str) -> Result<bool, Error> {
        self.remove_from_collection(id, CollectionItemKind::Playlist)
            .await
    }

    /// Like a podcast.
    pub async fn like_podcast(&self, id: &str) -> Result<bool, Error> {
        self.add_to_collection(id, CollectionItemKind::Podcast)
            .await
    }

    /// Remove a like from a podcast.
    pub async fn unlike_podcast(&self, id: &str) -> Result<bool, Error> {
        self.remove_from_collection(id, CollectionItemKind::Podcast)
            .await
    }

    /// Get the items the current user has hidden.
    pub async fn hidden_collection(&self) -> Result<Option<HiddenCollection>, Error> {
        let result = self
            .graphql(
                "getAllHiddenCollection",
                queries::GET_ALL_HIDDEN_COLLECTION,
                serde_json::json!({}),
            )
            .await?;

        Ok(HiddenCollection::from_value(field(
            &result,
            "hidden_collection",
        )))
    }

    /// Get the tracks the current user has hidden.
    pub async fn hidden_tracks(&self) -> Result<Vec<CollectionItem>, Error> {
        let result = self
            .graphql(
                "getHiddenTracks",
                queries::GET_HIDDEN_TRACKS,
                serde_json::json!({}),
            )
            .await?;

        Ok(CollectionItem::from_list(
            field(&result, "hidden_collection")
                .get("tracks")
                .unwrap_or(&Value::Null),
        ))
    }

    /// Hide an item from recommendations.
    pub async fn add_to_hidden(
        &self,
        item_id: &str,
        kind: CollectionItemKind,
    ) -> Result<bool, Error> {
        let variables = serde_json::json!({ "id": item_id, "type": kind.as_ref() });

        let result = self
            .graphql("addItemToHidden", queries::ADD_ITEM_TO_HIDDEN, variables)
            .await?;

        Ok(mutation_succeeded(&result, "hidden_collection", "add_item"))
    }

    /// Remove an item from the hidden list.
    pub async fn remove_from_hidden(
        &self,
        item_id: &str,
        kind: CollectionItemKind,
    ) -> Result<bool, Error> {
        let variables = serde_json::json!({ "id": item_id, "type": kind.as_ref() });

        let result = self
            .graphql(
                "removeItemFromHidden",
                queries::REMOVE_ITEM_FROM_HIDDEN,
                variables,
            )
            .await?;

        Ok(mutation_succeeded(
            &result,
            "hidden_collection",
            "remove_item",
        ))
    }

    /// Hide a track from recommendations.
    pub async fn hide_track(&self, id: &str) -> Result<bool, Error> {
        self.add_to_hidden(id, CollectionItemKind::Track).await
    }

    /// Remove a track from the hidden list.
    pub async fn unhide_track(&self, id: &str) -> Result<bool, Error> {
        self.remove_from_hidden(id, CollectionItemKind::Track).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liked_status() {
        let item = CollectionItem {
            item_status: Some(CollectionItemStatus::Liked),
            ..CollectionItem::default()
        };
        assert!(item.is_liked());
        assert!(!CollectionItem::default().is_liked());
    }

    #[test]
    fn unknown_status_is_dropped() {
        let value = serde_json::json!({ "id": "1", "item_status": "superliked" });
        let item = CollectionItem::from_value(&value).unwrap();
        assert_eq!(item.item_status, None);
    }

    #[test]
    fn collection_decodes_per_kind() {
        let value = serde_json::json!({
            "tracks": [{ "id": "1", "item_status": "liked" }],
            "artists": [],
        });
        let collection = Collection::from_value(&value).unwrap();
        assert_eq!(collection.tracks.len(), 1);
        assert!(collection.tracks[0].is_liked());
        assert!(collection.artists.is_empty());
    }
}
