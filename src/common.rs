//! Small shared entities: images, labels, genres, artist page decoration.

use crate::entity::{Entity, entity_identity, entity_opt, lenient_enum};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};
use url::Url;

/// An image from the catalog, either a full URL or a `/static/...` path.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Image {
    /// Image URL or site-relative path
    pub src: String,
    /// Height in pixels
    pub h: Option<u32>,
    /// Width in pixels
    pub w: Option<u32>,
    /// Primary palette color
    pub palette: Option<String>,
    /// Secondary palette color
    pub palette_bottom: Option<String>,
}

entity_identity!(Image { src });
impl Entity for Image {}

impl Image {
    /// Resolve the image to an absolute URL at the requested size.
    ///
    /// Relative paths are resolved against `https://zvuk.com`, and an
    /// existing `size` query parameter is rewritten to `{width}x{height}`.
    pub fn url_sized(&self, width: u32, height: u32) -> String {
        let src = if self.src.starts_with('/') {
            format!("https://zvuk.com{}", self.src)
        } else {
            self.src.clone()
        };

        let Ok(mut url) = Url::parse(&src) else {
            return src;
        };

        if url.query_pairs().any(|(key, _)| key == "size") {
            let pairs: Vec<(String, String)> = url
                .query_pairs()
                .map(|(k, v)| {
                    if k == "size" {
                        (k.into_owned(), format!("{width}x{height}"))
                    } else {
                        (k.into_owned(), v.into_owned())
                    }
                })
                .collect();
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }

        url.to_string()
    }
}

/// A record label or major.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Label {
    pub id: String,
    pub title: String,
}

entity_identity!(Label { id });
impl Entity for Label {}

/// A music genre.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub short_name: Option<String>,
}

entity_identity!(Genre { id });
impl Entity for Genre {}

/// Kind of background used on an artist page.
#[derive(Debug, Serialize, Deserialize, EnumString, AsRefStr, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BackgroundType {
    Image,
}

/// Background decoration of an artist page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Background {
    /// Background kind; unrecognized values from the API stay unset
    #[serde(deserialize_with = "lenient_enum")]
    pub type_: Option<BackgroundType>,
    pub image: Option<String>,
    pub color: Option<serde_json::Value>,
    pub gradient: Option<serde_json::Value>,
}

entity_identity!(Background { type_, image });
impl Entity for Background {}

/// Animated artwork shown on an artist page.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Animation {
    pub artist_id: String,
    pub effect: Option<String>,
    pub image: Option<String>,
    #[serde(deserialize_with = "entity_opt")]
    pub background: Option<Background>,
}

entity_identity!(Animation { artist_id });
impl Entity for Animation {}
