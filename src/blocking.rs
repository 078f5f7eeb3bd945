//! A blocking facade over the async client.
//!
//! Every call delegates to the async [`ZvukClient`](crate::ZvukClient) on a
//! private runtime, so the two surfaces cannot drift apart. Collection
//! mutations are exposed through the generic
//! [`add_to_collection`](ZvukClient::add_to_collection) /
//! [`remove_from_collection`](ZvukClient::remove_from_collection) pair
//! rather than one shortcut per catalog kind.

use crate::search::SearchParams;
use crate::{
    Artist, ArtistParams, Collection, CollectionItem, CollectionItemKind, Episode, Error,
    HiddenCollection, OrderBy, OrderDirection, Playlist, Podcast, Profile, Quality, QuickSearch,
    Release, Search, SimplePlaylist, SimpleTrack, Stream, SynthesisPlaylist, Track,
};
use serde_json::Value;
use tokio::runtime::Runtime;

/// Blocking client for the Zvuk music-streaming API.
///
/// # Example
///
/// ```no_run
/// use zvukrs::blocking::ZvukClient;
///
/// # fn example() -> Result<(), zvukrs::Error> {
/// let client = ZvukClient::new("your_token")?;
/// let tracks = client.tracks(&["128672726"])?;
/// for track in tracks {
///     println!("{} — {}", track.artists_str(), track.title);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ZvukClient {
    inner: crate::ZvukClient,
    rt: Runtime,
}

impl ZvukClient {
    /// Create a blocking client with the given auth token.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        Ok(Self {
            inner: crate::ZvukClient::new(token),
            rt: runtime()?,
        })
    }

    /// Create a blocking client with a freshly issued anonymous token.
    pub fn anonymous() -> Result<Self, Error> {
        let rt = runtime()?;
        let inner = rt.block_on(crate::ZvukClient::anonymous())?;
        Ok(Self { inner, rt })
    }

    /// Wrap an already configured async client.
    pub fn from_async(inner: crate::ZvukClient) -> Result<Self, Error> {
        Ok(Self {
            inner,
            rt: runtime()?,
        })
    }

    /// The wrapped async client.
    pub fn as_async(&self) -> &crate::ZvukClient {
        &self.inner
    }

    pub fn set_token(&self, token: &str) {
        self.inner.set_token(token);
    }

    pub fn token(&self) -> Option<String> {
        self.inner.token()
    }

    pub fn profile(&self) -> Result<Option<Profile>, Error> {
        self.rt.block_on(self.inner.profile())
    }

    pub fn quick_search(
        &self,
        query: &str,
        limit: u32,
        search_session_id: Option<&str>,
    ) -> Result<Option<QuickSearch>, Error> {
        self.rt
            .block_on(self.inner.quick_search(query, limit, search_session_id))
    }

    pub fn search(
        &self,
        query: &str,
        limit: u32,
        params: SearchParams,
    ) -> Result<Option<Search>, Error> {
        self.rt.block_on(self.inner.search(query, limit, params))
    }

    pub fn tracks(&self, ids: &[&str]) -> Result<Vec<Track>, Error> {
        self.rt.block_on(self.inner.tracks(ids))
    }

    pub fn track(&self, id: &str) -> Result<Option<Track>, Error> {
        self.rt.block_on(self.inner.track(id))
    }

    pub fn full_tracks(
        &self,
        ids: &[&str],
        with_artists: bool,
        with_releases: bool,
    ) -> Result<Vec<Track>, Error> {
        self.rt
            .block_on(self.inner.full_tracks(ids, with_artists, with_releases))
    }

    pub fn stream_urls(&self, ids: &[&str]) -> Result<Vec<Stream>, Error> {
        self.rt.block_on(self.inner.stream_urls(ids))
    }

    pub fn stream_url(&self, id: &str, quality: Quality) -> Result<String, Error> {
        self.rt.block_on(self.inner.stream_url(id, quality))
    }

    pub fn releases(&self, ids: &[&str], related_limit: u32) -> Result<Vec<Release>, Error> {
        self.rt.block_on(self.inner.releases(ids, related_limit))
    }

    pub fn release(&self, id: &str) -> Result<Option<Release>, Error> {
        self.rt.block_on(self.inner.release(id))
    }

    pub fn artists(&self, ids: &[&str], params: ArtistParams) -> Result<Vec<Artist>, Error> {
        self.rt.block_on(self.inner.artists(ids, params))
    }

    pub fn artist(&self, id: &str, params: ArtistParams) -> Result<Option<Artist>, Error> {
        self.rt.block_on(self.inner.artist(id, params))
    }

    pub fn playlists(&self, ids: &[&str]) -> Result<Vec<Playlist>, Error> {
        self.rt.block_on(self.inner.playlists(ids))
    }

    pub fn playlist(&self, id: &str) -> Result<Option<Playlist>, Error> {
        self.rt.block_on(self.inner.playlist(id))
    }

    pub fn short_playlists(&self, ids: &[&str]) -> Result<Vec<SimplePlaylist>, Error> {
        self.rt.block_on(self.inner.short_playlists(ids))
    }

    pub fn playlist_tracks(
        &self,
        id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<SimpleTrack>, Error> {
        self.rt
            .block_on(self.inner.playlist_tracks(id, limit, offset))
    }

    pub fn create_playlist(&self, name: &str, track_ids: &[&str]) -> Result<String, Error> {
        self.rt.block_on(self.inner.create_playlist(name, track_ids))
    }

    pub fn delete_playlist(&self, id: &str) -> Result<bool, Error> {
        self.rt.block_on(self.inner.delete_playlist(id))
    }

    pub fn rename_playlist(&self, id: &str, new_name: &str) -> Result<bool, Error> {
        self.rt.block_on(self.inner.rename_playlist(id, new_name))
    }

    pub fn add_tracks_to_playlist(&self, id: &str, track_ids: &[&str]) -> Result<bool, Error> {
        self.rt
            .block_on(self.inner.add_tracks_to_playlist(id, track_ids))
    }

    pub fn update_playlist(
        &self,
        id: &str,
        track_ids: &[&str],
        name: Option<&str>,
        is_public: Option<bool>,
    ) -> Result<bool, Error> {
        self.rt
            .block_on(self.inner.update_playlist(id, track_ids, name, is_public))
    }

    pub fn set_playlist_public(&self, id: &str, is_public: bool) -> Result<bool, Error> {
        self.rt
            .block_on(self.inner.set_playlist_public(id, is_public))
    }

    pub fn build_synthesis_playlist(
        &self,
        first_author_id: &str,
        second_author_id: &str,
    ) -> Result<Option<SynthesisPlaylist>, Error> {
        self.rt.block_on(
            self.inner
                .build_synthesis_playlist(first_author_id, second_author_id),
        )
    }

    pub fn synthesis_playlists(&self, ids: &[&str]) -> Result<Vec<SynthesisPlaylist>, Error> {
        self.rt.block_on(self.inner.synthesis_playlists(ids))
    }

    pub fn podcasts(&self, ids: &[&str]) -> Result<Vec<Podcast>, Error> {
        self.rt.block_on(self.inner.podcasts(ids))
    }

    pub fn podcast(&self, id: &str) -> Result<Option<Podcast>, Error> {
        self.rt.block_on(self.inner.podcast(id))
    }

    pub fn episodes(&self, ids: &[&str]) -> Result<Vec<Episode>, Error> {
        self.rt.block_on(self.inner.episodes(ids))
    }

    pub fn episode(&self, id: &str) -> Result<Option<Episode>, Error> {
        self.rt.block_on(self.inner.episode(id))
    }

    pub fn collection(&self) -> Result<Option<Collection>, Error> {
        self.rt.block_on(self.inner.collection())
    }

    pub fn liked_tracks(
        &self,
        order_by: OrderBy,
        direction: OrderDirection,
    ) -> Result<Vec<Track>, Error> {
        self.rt.block_on(self.inner.liked_tracks(order_by, direction))
    }

    pub fn user_playlists(&self) -> Result<Vec<CollectionItem>, Error> {
        self.rt.block_on(self.inner.user_playlists())
    }

    pub fn user_paginated_podcasts(
        &self,
        cursor: Option<&str>,
        count: u32,
    ) -> Result<Value, Error> {
        self.rt
            .block_on(self.inner.user_paginated_podcasts(cursor, count))
    }

    pub fn add_to_collection(
        &self,
        item_id: &str,
        kind: CollectionItemKind,
    ) -> Result<bool, Error> {
        self.rt.block_on(self.inner.add_to_collection(item_id, kind))
    }

    pub fn remove_from_collection(
        &self,
        item_id: &str,
        kind: CollectionItemKind,
    ) -> Result<bool, Error> {
        self.rt
            .block_on(self.inner.remove_from_collection(item_id, kind))
    }

    pub fn hidden_collection(&self) -> Result<Option<HiddenCollection>, Error> {
        self.rt.block_on(self.inner.hidden_collection())
    }

    pub fn hidden_tracks(&self) -> Result<Vec<CollectionItem>, Error> {
        self.rt.block_on(self.inner.hidden_tracks())
    }

    pub fn add_to_hidden(&self, item_id: &str, kind: CollectionItemKind) -> Result<bool, Error> {
        self.rt.block_on(self.inner.add_to_hidden(item_id, kind))
    }

    pub fn remove_from_hidden(
        &self,
        item_id: &str,
        kind: CollectionItemKind,
    ) -> Result<bool, Error> {
        self.rt
            .block_on(self.inner.remove_from_hidden(item_id, kind))
    }

    pub fn profile_followers_count(&self, ids: &[&str]) -> Result<Vec<i64>, Error> {
        self.rt.block_on(self.inner.profile_followers_count(ids))
    }

    pub fn following_count(&self, profile_id: &str) -> Result<i64, Error> {
        self.rt.block_on(self.inner.following_count(profile_id))
    }

    pub fn listening_history(&self) -> Result<Vec<Value>, Error> {
        self.rt.block_on(self.inner.listening_history())
    }

    pub fn listened_episodes(&self) -> Result<Vec<Value>, Error> {
        self.rt.block_on(self.inner.listened_episodes())
    }

    pub fn has_unread_notifications(&self) -> Result<bool, Error> {
        self.rt.block_on(self.inner.has_unread_notifications())
    }
}

fn runtime() -> Result<Runtime, Error> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| Error::Network(format!("failed to start runtime: {err}")))
}
