//! Streaming URLs, quality selection, and expiry handling.

use crate::ZvukClient;
use crate::entity::{Entity, entity_identity, field};
use crate::{Error, queries};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Audio quality of a stream.
///
/// `Mid` is available to every session; `High` and `Flac` require a
/// subscription.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
pub enum Quality {
    /// 128kbps MP3
    #[strum(serialize = "mid")]
    #[serde(rename = "mid")]
    Mid,
    /// 320kbps MP3
    #[strum(serialize = "high")]
    #[serde(rename = "high")]
    High,
    /// FLAC with DRM
    #[strum(serialize = "flacdrm")]
    #[serde(rename = "flacdrm")]
    Flac,
}

/// The per-quality URLs of a single stream.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StreamUrls {
    /// 128kbps MP3 URL, available to every session
    pub mid: String,
    /// 320kbps MP3 URL, subscription only
    pub high: Option<String>,
    /// FLAC URL, subscription only
    pub flacdrm: Option<String>,
}

entity_identity!(StreamUrls { mid });
impl Entity for StreamUrls {}

impl StreamUrls {
    /// The URL for the requested quality.
    ///
    /// Returns [`Error::SubscriptionRequired`] when the session lacks
    /// access to `High` or `Flac`, and [`Error::QualityUnavailable`] when
    /// even the mid URL is missing.
    pub fn url_for(&self, quality: Quality) -> Result<&str, Error> {
        url_for(&self.mid, self.high.as_deref(), self.flacdrm.as_deref(), quality)
    }

    /// The best quality this session can play, with its URL.
    pub fn best_available(&self) -> (Quality, &str) {
        best_available(&self.mid, self.high.as_deref(), self.flacdrm.as_deref())
    }
}

/// A stream with its expiration time.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Stream {
    /// Expiration time, ISO 8601
    pub expire: String,
    /// Seconds until expiration, as reported by the server
    pub expire_delta: i64,
    /// 128kbps MP3 URL, available to every session
    pub mid: String,
    /// 320kbps MP3 URL, subscription only
    pub high: Option<String>,
    /// FLAC URL, subscription only
    pub flacdrm: Option<String>,
}

entity_identity!(Stream { mid, expire });
impl Entity for Stream {}

impl Stream {
    /// Whether the stream URLs are past their expiration time. A missing
    /// or unparseable timestamp counts as expired.
    pub fn is_expired(&self) -> bool {
        if self.expire.is_empty() {
            return true;
        }
        match DateTime::parse_from_rfc3339(&self.expire) {
            Ok(expire) => Utc::now() > expire,
            Err(_) => true,
        }
    }

    /// The URL for the requested quality.
    pub fn url_for(&self, quality: Quality) -> Result<&str, Error> {
        url_for(&self.mid, self.high.as_deref(), self.flacdrm.as_deref(), quality)
    }

    /// The best quality this session can play, with its URL.
    pub fn best_available(&self) -> (Quality, &str) {
        best_available(&self.mid, self.high.as_deref(), self.flacdrm.as_deref())
    }
}

fn url_for<'a>(
    mid: &'a str,
    high: Option<&'a str>,
    flacdrm: Option<&'a str>,
    quality: Quality,
) -> Result<&'a str, Error> {
    match quality {
        Quality::Flac => flacdrm.filter(|url| !url.is_empty()).ok_or_else(|| {
            Error::SubscriptionRequired("FLAC quality requires subscription".to_string())
        }),
        Quality::High => high.filter(|url| !url.is_empty()).ok_or_else(|| {
            Error::SubscriptionRequired("High quality (320kbps) requires subscription".to_string())
        }),
        Quality::Mid => {
            if mid.is_empty() {
                Err(Error::QualityUnavailable(
                    "Mid quality URL not available".to_string(),
                ))
            } else {
                Ok(mid)
            }
        }
    }
}

fn best_available<'a>(
    mid: &'a str,
    high: Option<&'a str>,
    flacdrm: Option<&'a str>,
) -> (Quality, &'a str) {
    if let Some(url) = flacdrm.filter(|url| !url.is_empty()) {
        return (Quality::Flac, url);
    }
    if let Some(url) = high.filter(|url| !url.is_empty()) {
        return (Quality::High, url);
    }
    (Quality::Mid, mid)
}

impl ZvukClient {
    /// Get streams for the given tracks. Entries without a stream payload
    /// are skipped.
    pub async fn stream_urls(&self, ids: &[&str]) -> Result<Vec<Stream>, Error> {
        let variables = serde_json::json!({ "ids": ids });

        let result = self
            .graphql("getStream", queries::GET_STREAM, variables)
            .await?;

        let streams = field(&result, "media_contents")
            .as_array()
            .map(|contents| {
                contents
                    .iter()
                    .filter_map(|item| item.get("stream"))
                    .filter_map(Stream::from_value)
                    .collect()
            })
            .unwrap_or_default();

        Ok(streams)
    }

    /// Get a streaming URL for one track at the requested quality.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: &zvukrs::ZvukClient) -> Result<(), zvukrs::Error> {
    /// let url = client.stream_url("128672726", zvukrs::Quality::High).await?;
    /// println!("{url}");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn stream_url(&self, id: &str, quality: Quality) -> Result<String, Error> {
        let streams = self.stream_urls(&[id]).await?;
        let stream = streams.first().ok_or_else(|| {
            Error::QualityUnavailable("Stream URLs not available".to_string())
        })?;
        Ok(stream.url_for(quality)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(high: Option<&str>, flacdrm: Option<&str>) -> Stream {
        Stream {
            mid: "https://cdn/mid.mp3".to_string(),
            high: high.map(str::to_string),
            flacdrm: flacdrm.map(str::to_string),
            ..Stream::default()
        }
    }

    #[test]
    fn best_available_prefers_lossless() {
        let full = stream(Some("https://cdn/high.mp3"), Some("https://cdn/flac"));
        assert_eq!(full.best_available(), (Quality::Flac, "https://cdn/flac"));

        let no_flac = stream(Some("https://cdn/high.mp3"), None);
        assert_eq!(
            no_flac.best_available(),
            (Quality::High, "https://cdn/high.mp3")
        );

        let mid_only = stream(None, None);
        assert_eq!(mid_only.best_available(), (Quality::Mid, "https://cdn/mid.mp3"));
    }

    #[test]
    fn missing_quality_errors() {
        let mid_only = stream(None, None);
        assert!(matches!(
            mid_only.url_for(Quality::High),
            Err(Error::SubscriptionRequired(_))
        ));
        assert!(matches!(
            mid_only.url_for(Quality::Flac),
            Err(Error::SubscriptionRequired(_))
        ));
        assert_eq!(mid_only.url_for(Quality::Mid).unwrap(), "https://cdn/mid.mp3");

        let empty = Stream::default();
        assert!(matches!(
            empty.url_for(Quality::Mid),
            Err(Error::QualityUnavailable(_))
        ));
    }

    #[test]
    fn expiry() {
        let mut s = stream(None, None);
        assert!(s.is_expired());

        s.expire = "2099-01-01T00:00:00+00:00".to_string();
        assert!(!s.is_expired());

        s.expire = "2001-01-01T00:00:00Z".to_string();
        assert!(s.is_expired());

        s.expire = "not a date".to_string();
        assert!(s.is_expired());
    }
}
