//! User profile entities and the profile, history, and notification
//! endpoints.

use crate::ZvukClient;
use crate::common::Image;
use crate::entity::{Entity, entity_identity, entity_opt, field};
use crate::{Error, queries};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Brief profile information, as returned by search.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimpleProfile {
    /// Unique profile identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Profile description
    pub description: Option<String>,
    /// Profile image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
}

entity_identity!(SimpleProfile { id });
impl Entity for SimpleProfile {}

/// Identity data from an external login provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExternalProfile {
    /// Birthday as a unix timestamp
    pub birthday: Option<i64>,
    pub email: Option<String>,
    /// Identifier at the external provider
    pub external_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    /// Provider type label
    pub type_: Option<String>,
}

entity_identity!(ExternalProfile { external_id });
impl Entity for ExternalProfile {}

/// The account data of the current user.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProfileResult {
    /// Whether the session is anonymous
    pub is_anonymous: Option<bool>,
    /// Whether explicit content is allowed
    pub allow_explicit: Option<bool>,
    /// Birthday as a unix timestamp
    pub birthday: Option<i64>,
    /// Account creation unix timestamp
    pub created: Option<i64>,
    pub email: Option<String>,
    /// Linked external identity
    #[serde(deserialize_with = "entity_opt")]
    pub external_profile: Option<ExternalProfile>,
    pub gender: Option<String>,
    /// Numeric account identifier
    pub id: Option<i64>,
    /// Profile image
    #[serde(deserialize_with = "entity_opt")]
    pub image: Option<Image>,
    pub is_active: Option<bool>,
    pub is_agreement: Option<bool>,
    pub is_editor: Option<bool>,
    pub is_registered: Option<bool>,
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Registration unix timestamp
    pub registered: Option<i64>,
    /// The session's auth token
    pub token: String,
    pub username: Option<String>,
}

entity_identity!(ProfileResult { id, token });
impl Entity for ProfileResult {}

impl ProfileResult {
    /// Whether the session belongs to a registered user rather than an
    /// anonymous token.
    pub fn is_authorized(&self) -> bool {
        !self.is_anonymous.unwrap_or(false)
    }
}

/// Envelope returned by the profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Profile {
    /// The account data
    #[serde(deserialize_with = "entity_opt")]
    pub result: Option<ProfileResult>,
}

entity_identity!(Profile { result });
impl Entity for Profile {}

impl ZvukClient {
    /// Get the current user's profile.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example(client: &zvukrs::ZvukClient) -> Result<(), zvukrs::Error> {
    /// if let Some(profile) = client.profile().await? {
    ///     if let Some(result) = &profile.result {
    ///         println!("authorized: {}", result.is_authorized());
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn profile(&self) -> Result<Option<Profile>, Error> {
        let result = self.tiny_get("profile").await?;
        Ok(Profile::from_value(&result))
    }

    /// Get follower counts for the given profiles, in request order.
    pub async fn profile_followers_count(&self, ids: &[&str]) -> Result<Vec<i64>, Error> {
        let variables = serde_json::json!({ "ids": ids });

        let result = self
            .graphql(
                "profileFollowersCount",
                queries::PROFILE_FOLLOWERS_COUNT,
                variables,
            )
            .await?;

        let counts = field(&result, "profiles")
            .as_array()
            .map(|profiles| {
                profiles
                    .iter()
                    .map(|p| {
                        p.get("collection_item_data")
                            .and_then(|c| c.get("likes_count"))
                            .and_then(Value::as_i64)
                            .unwrap_or(0)
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(counts)
    }

    /// Get the number of profiles a user follows.
    pub async fn following_count(&self, profile_id: &str) -> Result<i64, Error> {
        let variables = serde_json::json!({ "id": profile_id });

        let result = self
            .graphql("followingCount", queries::FOLLOWING_COUNT, variables)
            .await?;

        Ok(field(&result, "follows")
            .get("followings")
            .and_then(|f| f.get("count"))
            .and_then(Value::as_i64)
            .unwrap_or(0))
    }

    /// Get the current user's listening history. Entries are passed
    /// through as-is.
    pub async fn listening_history(&self) -> Result<Vec<Value>, Error> {
        let result = self
            .graphql(
                "listeningHistory",
                queries::LISTENING_HISTORY,
                serde_json::json!({}),
            )
            .await?;

        Ok(field(&result, "listening_history")
            .as_array()
            .cloned()
            .unwrap_or_default())
    }

    /// Get the episodes the current user has listened to. Entries are
    /// passed through as-is.
    pub async fn listened_episodes(&self) -> Result<Vec<Value>, Error> {
        let result = self
            .graphql(
                "listenedEpisodes",
                queries::LISTENED_EPISODES,
                serde_json::json!({}),
            )
            .await?;

        Ok(field(&result, "get_play_state")
            .get("episodes")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    /// Whether the current user has unread notifications.
    pub async fn has_unread_notifications(&self) -> Result<bool, Error> {
        let result = self
            .graphql(
                "notificationsHasUnread",
                queries::NOTIFICATIONS_HAS_UNREAD,
                serde_json::json!({}),
            )
            .await?;

        Ok(field(&result, "notification")
            .get("has_unread")
            .and_then(Value::as_bool)
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_is_not_authorized() {
        let value = serde_json::json!({
            "result": { "is_anonymous": true, "token": "abc" },
        });
        let profile = Profile::from_value(&value).unwrap();
        let result = profile.result.unwrap();
        assert!(!result.is_authorized());
        assert_eq!(result.token, "abc");
    }

    #[test]
    fn missing_anonymous_flag_means_authorized() {
        let result = ProfileResult {
            token: "abc".into(),
            ..ProfileResult::default()
        };
        assert!(result.is_authorized());
    }
}
