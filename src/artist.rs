//! Artist entities and the artist endpoints.

use crate::ZvukClient;
use crate::collection::CollectionItem;
use crate::common::{Animation, Image};
use crate::entity::{Entity, entity_identity, entity_list, entity_opt, field};
use crate::release::SimpleRelease;
use crate::track::SimpleTrack;
use crate::{Error, queries};
use serde::{Deserialize, Serialize};

/// Brief artist information, as embedded in tracks, releases, and search
/// results.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimpleArtist {
    /// Unique artist identifier
    pub id: String,
    /// Artist name
    pub title: String,
    /// Artist image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
}

entity_identity!(SimpleArtist { id });
impl Entity for SimpleArtist {}

/// Full artist information.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Artist {
    /// Unique artist identifier
    pub id: String,
    /// Artist name
    pub title: String,
    /// Primary image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
    /// Secondary image
    #[serde(deserialize_with = "entity_opt")]
    pub second_image: Option<Image>,
    /// Title variant used by the search index
    pub search_title: Option<String>,
    /// Artist biography
    pub description: Option<String>,
    /// Whether the artist has a dedicated page
    pub has_page: Option<bool>,
    /// Animated page artwork
    #[serde(deserialize_with = "entity_opt")]
    pub animation: Option<Animation>,
    /// Like state for the current user
    #[serde(deserialize_with = "entity_opt")]
    pub collection_item_data: Option<CollectionItem>,
    /// Releases by this artist
    #[serde(deserialize_with = "entity_list")]
    pub releases: Vec<SimpleRelease>,
    /// Most popular tracks
    #[serde(deserialize_with = "entity_list")]
    pub popular_tracks: Vec<SimpleTrack>,
    /// Artists the catalog considers related
    #[serde(deserialize_with = "entity_list")]
    pub related_artists: Vec<SimpleArtist>,
}

entity_identity!(Artist { id });
impl Entity for Artist {}

impl Artist {
    /// Whether the current user has liked this artist.
    pub fn is_liked(&self) -> bool {
        self.collection_item_data
            .as_ref()
            .is_some_and(CollectionItem::is_liked)
    }
}

/// Optional sections to request along with an artist.
///
/// # Example
///
/// ```no_run
/// use zvukrs::ArtistParams;
///
/// let params = ArtistParams {
///     with_releases: true,
///     releases_limit: 20,
///     ..ArtistParams::default()
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArtistParams {
    /// Include the artist's releases
    pub with_releases: bool,
    pub releases_limit: u32,
    pub releases_offset: u32,
    /// Include the artist's popular tracks
    pub with_popular_tracks: bool,
    pub tracks_limit: u32,
    pub tracks_offset: u32,
    /// Include related artists
    pub with_related_artists: bool,
    pub related_artists_limit: u32,
    /// Include the artist biography
    pub with_description: bool,
}

impl Default for ArtistParams {
    fn default() -> Self {
        Self {
            with_releases: false,
            releases_limit: 100,
            releases_offset: 0,
            with_popular_tracks: false,
            tracks_limit: 100,
            tracks_offset: 0,
            with_related_artists: false,
            related_artists_limit: 100,
            with_description: false,
        }
    }
}

impl ZvukClient {
    /// Get artists by ID.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: &zvukrs::ZvukClient) -> Result<(), zvukrs::Error> {
    /// let artists = client.artists(&["208722"], zvukrs::ArtistParams::default()).await?;
    /// for artist in &artists {
    ///     println!("{}", artist.title);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn artists(&self, ids: &[&str], params: ArtistParams) -> Result<Vec<Artist>, Error> {
        let variables = serde_json::json!({
            "ids": ids,
            "withReleases": params.with_releases,
            "releasesLimit": params.releases_limit,
            "releasesOffset": params.releases_offset,
            "withPopTracks": params.with_popular_tracks,
            "tracksLimit": params.tracks_limit,
            "tracksOffset": params.tracks_offset,
            "withRelatedArtists": params.with_related_artists,
            "relatedArtistsLimit": params.related_artists_limit,
            "withDescription": params.with_description,
        });

        let result = self
            .graphql("getArtists", queries::GET_ARTISTS, variables)
            .await?;

        Ok(Artist::from_list(
            field(&result, "get_artists"),
        ))
    }

    /// Get a single artist by ID.
    pub async fn artist(&self, id: &str, params: ArtistParams) -> Result<Option<Artist>, Error> {
        let mut artists = self.artists(&[id], params).await?;
        Ok(if artists.is_empty() {
            None
        } else {
            Some(artists.remove(0))
        })
    }
}
