//! Podcast and episode entities and their endpoints.

use crate::ZvukClient;
use crate::collection::CollectionItem;
use crate::common::Image;
use crate::entity::{Entity, entity_identity, entity_list, entity_opt, field};
use crate::{Error, queries};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An author of a podcast.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PodcastAuthor {
    /// Author identifier
    pub id: String,
    /// Author display name
    pub name: String,
}

entity_identity!(PodcastAuthor { id });
impl Entity for PodcastAuthor {}

/// Brief podcast information.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimplePodcast {
    /// Unique podcast identifier
    pub id: String,
    /// Podcast title
    pub title: String,
    /// Whether the podcast carries explicit content
    pub explicit: bool,
    /// Cover image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
    /// Podcast authors
    #[serde(deserialize_with = "entity_list")]
    pub authors: Vec<PodcastAuthor>,
}

entity_identity!(SimplePodcast { id });
impl Entity for SimplePodcast {}

/// Full podcast information.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Podcast {
    /// Unique podcast identifier
    pub id: String,
    /// Podcast title
    pub title: String,
    /// Whether the podcast carries explicit content
    pub explicit: bool,
    /// Podcast description
    pub description: Option<String>,
    /// Timestamp of the latest update
    pub updated_date: Option<String>,
    /// Regional availability flag
    pub availability: i64,
    /// Podcast type label
    pub type_: Option<String>,
    /// Cover image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
    /// Podcast authors
    #[serde(deserialize_with = "entity_list")]
    pub authors: Vec<PodcastAuthor>,
    /// Episode payloads, passed through as-is
    pub episodes: Vec<Value>,
    /// Like state for the current user
    #[serde(deserialize_with = "entity_opt")]
    pub collection_item_data: Option<CollectionItem>,
}

entity_identity!(Podcast { id });
impl Entity for Podcast {}

impl Podcast {
    /// Whether the current user has liked this podcast.
    pub fn is_liked(&self) -> bool {
        self.collection_item_data
            .as_ref()
            .is_some_and(CollectionItem::is_liked)
    }
}

/// Brief episode information.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimpleEpisode {
    /// Unique episode identifier
    pub id: String,
    /// Episode title
    pub title: String,
    /// Whether the episode carries explicit content
    pub explicit: bool,
    /// Duration in seconds
    pub duration: i64,
    /// Publication timestamp
    pub publication_date: Option<String>,
    /// Cover image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
}

entity_identity!(SimpleEpisode { id });
impl Entity for SimpleEpisode {}

/// Full episode information.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Episode {
    /// Unique episode identifier
    pub id: String,
    /// Episode title
    pub title: String,
    /// Whether the episode carries explicit content
    pub explicit: bool,
    /// Episode description
    pub description: Option<String>,
    /// Duration in seconds
    pub duration: i64,
    /// Regional availability flag
    pub availability: i64,
    /// Publication timestamp
    pub publication_date: Option<String>,
    /// Cover image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
    /// Podcast the episode belongs to
    #[serde(deserialize_with = "entity_opt")]
    pub podcast: Option<SimplePodcast>,
    /// Like state for the current user
    #[serde(deserialize_with = "entity_opt")]
    pub collection_item_data: Option<CollectionItem>,
}

entity_identity!(Episode { id });
impl Entity for Episode {}

impl Episode {
    /// Duration formatted as `M:SS`.
    pub fn duration_str(&self) -> String {
        format!("{}:{:02}", self.duration / 60, self.duration % 60)
    }

    /// Whether the current user has liked this episode.
    pub fn is_liked(&self) -> bool {
        self.collection_item_data
            .as_ref()
            .is_some_and(CollectionItem::is_liked)
    }
}

impl ZvukClient {
    /// Get podcasts by ID.
    pub async fn podcasts(&self, ids: &[&str]) -> Result<Vec<Podcast>, Error> {
        let variables = serde_json::json!({ "ids": ids });

        let result = self
            .graphql("getPodcasts", queries::GET_PODCASTS, variables)
            .await?;

        Ok(Podcast::from_list(field(&result, "get_podcasts")))
    }

    /// Get a single podcast by ID.
    pub async fn podcast(&self, id: &str) -> Result<Option<Podcast>, Error> {
        let mut podcasts = self.podcasts(&[id]).await?;
        Ok(if podcasts.is_empty() {
            None
        } else {
            Some(podcasts.remove(0))
        })
    }

    /// Get podcast episodes by ID.
    pub async fn episodes(&self, ids: &[&str]) -> Result<Vec<Episode>, Error> {
        let variables = serde_json::json!({ "ids": ids });

        let result = self
            .graphql("getEpisodes", queries::GET_EPISODES, variables)
            .await?;

        Ok(Episode::from_list(field(&result, "get_episodes")))
    }

    /// Get a single episode by ID.
    pub async fn episode(&self, id: &str) -> Result<Option<Episode>, Error> {
        let mut episodes = self.episodes(&[id]).await?;
        Ok(if episodes.is_empty() {
            None
        } else {
            Some(episodes.remove(0))
        })
    }
}
