//! Release (album) entities and the release endpoints.

use crate::ZvukClient;
use crate::artist::SimpleArtist;
use crate::collection::CollectionItem;
use crate::common::{Genre, Image, Label};
use crate::entity::{Entity, entity_identity, entity_list, entity_opt, field, lenient_enum};
use crate::track::SimpleTrack;
use crate::{Error, queries};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Catalog classification of a release.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Album,
    Single,
    Ep,
    Compilation,
}

/// Brief release information, as embedded in artists, tracks, and search
/// results.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimpleRelease {
    /// Unique release identifier
    pub id: String,
    /// Release title
    pub title: String,
    /// Release date, ISO 8601
    pub date: Option<String>,
    /// Release type
    #[serde(deserialize_with = "lenient_enum")]
    pub type_: Option<ReleaseType>,
    /// Cover image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
    /// Whether the release carries explicit content
    pub explicit: bool,
    /// Credited artists
    #[serde(deserialize_with = "entity_list")]
    pub artists: Vec<SimpleArtist>,
}

entity_identity!(SimpleRelease { id });
impl Entity for SimpleRelease {}

impl SimpleRelease {
    /// Release year parsed from the release date, if present.
    pub fn year(&self) -> Option<i32> {
        release_year(self.date.as_deref())
    }
}

/// Full release information.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Release {
    /// Unique release identifier
    pub id: String,
    /// Release title
    pub title: String,
    /// Title variant used by the search index
    pub search_title: Option<String>,
    /// Release date, ISO 8601
    pub date: Option<String>,
    /// Release type
    #[serde(deserialize_with = "lenient_enum")]
    pub type_: Option<ReleaseType>,
    /// Cover image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
    /// Whether the release carries explicit content
    pub explicit: bool,
    /// Regional availability flag
    pub availability: i64,
    /// Template for rendering the credited artist line
    pub artist_template: Option<String>,
    /// Genres
    #[serde(deserialize_with = "entity_list")]
    pub genres: Vec<Genre>,
    /// Record label
    #[serde(deserialize_with = "entity_opt")]
    pub label: Option<Label>,
    /// Credited artists
    #[serde(deserialize_with = "entity_list")]
    pub artists: Vec<SimpleArtist>,
    /// Track listing
    #[serde(deserialize_with = "entity_list")]
    pub tracks: Vec<SimpleTrack>,
    /// Related releases
    #[serde(deserialize_with = "entity_list")]
    pub related: Vec<SimpleRelease>,
    /// Like state for the current user
    #[serde(deserialize_with = "entity_opt")]
    pub collection_item_data: Option<CollectionItem>,
}

entity_identity!(Release { id });
impl Entity for Release {}

impl Release {
    /// Release year parsed from the release date, if present.
    pub fn year(&self) -> Option<i32> {
        release_year(self.date.as_deref())
    }

    /// Whether the current user has liked this release.
    pub fn is_liked(&self) -> bool {
        self.collection_item_data
            .as_ref()
            .is_some_and(CollectionItem::is_liked)
    }
}

fn release_year(date: Option<&str>) -> Option<i32> {
    let date = date?;
    if date.len() < 4 || !date.is_char_boundary(4) {
        return None;
    }
    date[..4].parse().ok()
}

impl ZvukClient {
    /// Get releases by ID.
    ///
    /// `related_limit` bounds the number of related releases returned per
    /// release.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: &zvukrs::ZvukClient) -> Result<(), zvukrs::Error> {
    /// let releases = client.releases(&["15404769"], 10).await?;
    /// for release in &releases {
    ///     println!("{} ({:?})", release.title, release.year());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn releases(&self, ids: &[&str], related_limit: u32) -> Result<Vec<Release>, Error> {
        let variables = serde_json::json!({
            "ids": ids,
            "relatedLimit": related_limit,
        });

        let result = self
            .graphql("getReleases", queries::GET_RELEASES, variables)
            .await?;

        Ok(Release::from_list(field(&result, "get_releases")))
    }

    /// Get a single release by ID.
    pub async fn release(&self, id: &str) -> Result<Option<Release>, Error> {
        let mut releases = self.releases(&[id], 10).await?;
        Ok(if releases.is_empty() {
            None
        } else {
            Some(releases.remove(0))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_from_date() {
        assert_eq!(release_year(Some("2021-06-11")), Some(2021));
        assert_eq!(release_year(Some("1999")), Some(1999));
        assert_eq!(release_year(Some("bad")), None);
        assert_eq!(release_year(None), None);
    }

    #[test]
    fn unknown_release_type_is_dropped() {
        let value = serde_json::json!({
            "id": "1",
            "title": "Test",
            "type_": "mixtape",
        });
        let release = Release::from_value(&value).unwrap();
        assert_eq!(release.type_, None);
    }
}
