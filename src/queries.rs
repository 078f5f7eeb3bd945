//! GraphQL documents for every operation the client performs.
//!
//! Documents are sent verbatim; the `operationName` passed alongside must
//! match the operation declared here. Result keys arrive in camelCase and
//! are normalized to snake_case before entity construction.

pub(crate) const QUICK_SEARCH: &str = r#"
query quickSearch($query: String!, $limit: Int, $searchSessionId: String) {
  quickSearch(query: $query, limit: $limit, searchSessionId: $searchSessionId) {
    searchSessionId
    content {
      __typename
      ... on Track { id title duration explicit artists { id title } release { id title image { src } } }
      ... on Artist { id title image { src } }
      ... on Release { id title date type explicit image { src } artists { id title } }
      ... on Playlist { id title isPublic description duration image { src } }
      ... on Profile { id name description image { src } }
      ... on Book { id title authorNames bookAuthors { id rname } image { src } }
      ... on Episode { id title explicit duration publicationDate image { src } }
      ... on Podcast { id title explicit image { src } authors { id name } }
    }
  }
}
"#;

pub(crate) const SEARCH: &str = r#"
query search(
  $query: String!
  $limit: Int
  $withTracks: Boolean!
  $withArtists: Boolean!
  $withReleases: Boolean!
  $withPlaylists: Boolean!
  $withPodcasts: Boolean!
  $withEpisodes: Boolean!
  $withProfiles: Boolean!
  $withBooks: Boolean!
  $trackCursor: String
  $artistCursor: String
  $releaseCursor: String
  $playlistCursor: String
) {
  search(query: $query, limit: $limit) {
    searchId
    tracks(cursor: $trackCursor) @include(if: $withTracks) {
      page { total prev next cursor }
      score
      items { id title duration explicit artists { id title } release { id title image { src } } }
    }
    artists(cursor: $artistCursor) @include(if: $withArtists) {
      page { total prev next cursor }
      score
      items { id title image { src } }
    }
    releases(cursor: $releaseCursor) @include(if: $withReleases) {
      page { total prev next cursor }
      score
      items { id title date type explicit image { src } artists { id title } }
    }
    playlists(cursor: $playlistCursor) @include(if: $withPlaylists) {
      page { total prev next cursor }
      score
      items { id title isPublic description duration image { src } }
    }
    podcasts @include(if: $withPodcasts) {
      page { total prev next cursor }
      score
      items { id title explicit image { src } authors { id name } }
    }
    episodes @include(if: $withEpisodes) {
      page { total prev next cursor }
      score
      items { id title explicit duration publicationDate image { src } }
    }
    profiles @include(if: $withProfiles) {
      page { total prev next cursor }
      score
      items { id name description image { src } }
    }
    books @include(if: $withBooks) {
      page { total prev next cursor }
      score
      items { id title authorNames bookAuthors { id rname } image { src } }
    }
  }
}
"#;

pub(crate) const GET_TRACKS: &str = r#"
query getTracks($ids: [ID!]!) {
  getTracks(ids: $ids) {
    id
    title
    searchTitle
    position
    duration
    availability
    artistTemplate
    condition
    explicit
    lyrics
    zchan
    hasFlac
    artistNames
    credits
    genres { id name shortName }
    artists { id title image { src } }
    release { id title date type image { src } }
    collectionItemData { itemStatus likesCount }
  }
}
"#;

pub(crate) const GET_FULL_TRACK: &str = r#"
query getFullTrack($ids: [ID!]!, $withArtists: Boolean!, $withReleases: Boolean!) {
  getTracks(ids: $ids) {
    id
    title
    searchTitle
    position
    duration
    availability
    artistTemplate
    condition
    explicit
    lyrics
    zchan
    hasFlac
    artistNames
    credits
    genres { id name shortName }
    artists @include(if: $withArtists) {
      id
      title
      image { src palette paletteBottom }
      secondImage { src }
      animation { artistId effect image }
    }
    release @include(if: $withReleases) {
      id
      title
      date
      type
      explicit
      image { src palette paletteBottom }
      artists { id title }
    }
    collectionItemData { itemStatus likesCount }
  }
}
"#;

pub(crate) const GET_STREAM: &str = r#"
query getStream($ids: [ID!]!) {
  mediaContents(ids: $ids) {
    ... on Track {
      stream {
        expire
        expireDelta
        mid
        high
        flacdrm
      }
    }
  }
}
"#;

pub(crate) const GET_RELEASES: &str = r#"
query getReleases($ids: [ID!]!, $relatedLimit: Int) {
  getReleases(ids: $ids) {
    id
    title
    searchTitle
    date
    type
    explicit
    availability
    artistTemplate
    image { src palette paletteBottom }
    genres { id name shortName }
    label { id title }
    artists { id title image { src } }
    tracks { id title duration explicit artists { id title } }
    related(limit: $relatedLimit) { id title date type image { src } artists { id title } }
    collectionItemData { itemStatus likesCount }
  }
}
"#;

pub(crate) const GET_ARTISTS: &str = r#"
query getArtists(
  $ids: [ID!]!
  $withReleases: Boolean!
  $releasesLimit: Int
  $releasesOffset: Int
  $withPopTracks: Boolean!
  $tracksLimit: Int
  $tracksOffset: Int
  $withRelatedArtists: Boolean!
  $relatedArtistsLimit: Int
  $withDescription: Boolean!
) {
  getArtists(ids: $ids) {
    id
    title
    searchTitle
    hasPage
    image { src palette paletteBottom }
    secondImage { src }
    animation { artistId effect image background { type image color gradient } }
    description @include(if: $withDescription)
    releases(limit: $releasesLimit, offset: $releasesOffset) @include(if: $withReleases) {
      id
      title
      date
      type
      explicit
      image { src }
      artists { id title }
    }
    popularTracks(limit: $tracksLimit, offset: $tracksOffset) @include(if: $withPopTracks) {
      id
      title
      duration
      explicit
      artists { id title }
      release { id title image { src } }
    }
    relatedArtists(limit: $relatedArtistsLimit) @include(if: $withRelatedArtists) {
      id
      title
      image { src }
    }
    collectionItemData { itemStatus likesCount }
  }
}
"#;

pub(crate) const GET_PLAYLISTS: &str = r#"
query getPlaylists($ids: [ID!]!) {
  getPlaylists(ids: $ids) {
    id
    title
    userId
    isPublic
    isDeleted
    shared
    branded
    description
    duration
    updated
    searchTitle
    image { src palette paletteBottom }
    tracks { id title duration explicit artists { id title } release { id title image { src } } }
  }
}
"#;

pub(crate) const GET_SHORT_PLAYLIST: &str = r#"
query getShortPlaylist($ids: [ID!]!) {
  getPlaylists(ids: $ids) {
    id
    title
    isPublic
    description
    duration
    image { src }
  }
}
"#;

pub(crate) const GET_PLAYLIST_TRACKS: &str = r#"
query getPlaylistTracks($id: ID!, $limit: Int, $offset: Int) {
  playlistTracks(id: $id, limit: $limit, offset: $offset) {
    id
    title
    duration
    explicit
    artists { id title }
    release { id title image { src } }
  }
}
"#;

pub(crate) const CREATE_PLAYLIST: &str = r#"
mutation createPlaylist($name: String!, $items: [PlaylistItemInput!]) {
  playlist {
    create(name: $name, items: $items)
  }
}
"#;

pub(crate) const DELETE_PLAYLIST: &str = r#"
mutation deletePlaylist($id: ID!) {
  playlist {
    delete(id: $id)
  }
}
"#;

pub(crate) const RENAME_PLAYLIST: &str = r#"
mutation renamePlaylist($id: ID!, $name: String!) {
  playlist {
    rename(id: $id, name: $name)
  }
}
"#;

pub(crate) const ADD_TRACKS_TO_PLAYLIST: &str = r#"
mutation addTracksToPlaylist($id: ID!, $items: [PlaylistItemInput!]!) {
  playlist {
    addItems(id: $id, items: $items)
  }
}
"#;

pub(crate) const UPDATE_PLAYLIST: &str = r#"
mutation updatePlaylist($id: ID!, $items: [PlaylistItemInput!]!, $name: String, $isPublic: Boolean) {
  playlist {
    update(id: $id, items: $items, name: $name, isPublic: $isPublic)
  }
}
"#;

pub(crate) const SET_PLAYLIST_TO_PUBLIC: &str = r#"
mutation setPlaylistToPublic($id: ID!, $isPublic: Boolean!) {
  playlist {
    setPublic(id: $id, isPublic: $isPublic)
  }
}
"#;

pub(crate) const SYNTHESIS_PLAYLIST_BUILD: &str = r#"
mutation synthesisPlaylistBuild($firstAuthorId: ID!, $secondAuthorId: ID!) {
  synthesisPlaylistBuild(firstAuthorId: $firstAuthorId, secondAuthorId: $secondAuthorId) {
    id
    tracks { id title duration explicit artists { id title } }
    authors { id name matches image { src } }
  }
}
"#;

pub(crate) const SYNTHESIS_PLAYLIST: &str = r#"
query synthesisPlaylist($ids: [ID!]!) {
  synthesisPlaylist(ids: $ids) {
    id
    tracks { id title duration explicit artists { id title } }
    authors { id name matches image { src } }
  }
}
"#;

pub(crate) const GET_PODCASTS: &str = r#"
query getPodcasts($ids: [ID!]!) {
  getPodcasts(ids: $ids) {
    id
    title
    explicit
    description
    updatedDate
    availability
    type
    image { src palette paletteBottom }
    authors { id name }
    episodes { id title publicationDate }
    collectionItemData { itemStatus likesCount }
  }
}
"#;

pub(crate) const GET_EPISODES: &str = r#"
query getEpisodes($ids: [ID!]!) {
  getEpisodes(ids: $ids) {
    id
    title
    explicit
    description
    duration
    availability
    publicationDate
    image { src }
    podcast { id title explicit image { src } authors { id name } }
    collectionItemData { itemStatus likesCount }
  }
}
"#;

pub(crate) const USER_COLLECTION: &str = r#"
query userCollection {
  collection {
    artists { id userId itemStatus lastModified collectionLastModified }
    episodes { id userId itemStatus lastModified collectionLastModified }
    podcasts { id userId itemStatus lastModified collectionLastModified }
    playlists { id userId itemStatus lastModified collectionLastModified }
    synthesisPlaylists { id userId itemStatus lastModified collectionLastModified }
    profiles { id userId itemStatus lastModified collectionLastModified }
    releases { id userId itemStatus lastModified collectionLastModified }
    tracks { id userId itemStatus lastModified collectionLastModified }
  }
}
"#;

pub(crate) const USER_TRACKS: &str = r#"
query userTracks($orderBy: OrderBy, $orderDirection: OrderDirection) {
  collection {
    tracks(orderBy: $orderBy, orderDirection: $orderDirection) {
      id
      title
      searchTitle
      position
      duration
      availability
      artistTemplate
      explicit
      hasFlac
      artistNames
      genres { id name shortName }
      artists { id title image { src } }
      release { id title date type image { src } }
      collectionItemData { itemStatus likesCount }
    }
  }
}
"#;

pub(crate) const USER_PLAYLISTS: &str = r#"
query userPlaylists {
  collection {
    playlists { id userId itemStatus lastModified collectionLastModified }
  }
}
"#;

pub(crate) const USER_PAGINATED_PODCASTS: &str = r#"
query userPaginatedPodcasts($cursor: String, $count: Int) {
  paginatedCollection {
    podcasts(cursor: $cursor, count: $count) {
      items { id userId itemStatus lastModified }
      cursor
    }
  }
}
"#;

pub(crate) const ADD_ITEM_TO_COLLECTION: &str = r#"
mutation addItemToCollection($id: ID!, $type: CollectionItemType!) {
  collection {
    addItem(id: $id, type: $type)
  }
}
"#;

pub(crate) const REMOVE_ITEM_FROM_COLLECTION: &str = r#"
mutation removeItemFromCollection($id: ID!, $type: CollectionItemType!) {
  collection {
    removeItem(id: $id, type: $type)
  }
}
"#;

pub(crate) const GET_ALL_HIDDEN_COLLECTION: &str = r#"
query getAllHiddenCollection {
  hiddenCollection {
    tracks { id userId itemStatus lastModified collectionLastModified }
    artists { id userId itemStatus lastModified collectionLastModified }
  }
}
"#;

pub(crate) const GET_HIDDEN_TRACKS: &str = r#"
query getHiddenTracks {
  hiddenCollection {
    tracks { id userId itemStatus lastModified collectionLastModified }
  }
}
"#;

pub(crate) const ADD_ITEM_TO_HIDDEN: &str = r#"
mutation addItemToHidden($id: ID!, $type: CollectionItemType!) {
  hiddenCollection {
    addItem(id: $id, type: $type)
  }
}
"#;

pub(crate) const REMOVE_ITEM_FROM_HIDDEN: &str = r#"
mutation removeItemFromHidden($id: ID!, $type: CollectionItemType!) {
  hiddenCollection {
    removeItem(id: $id, type: $type)
  }
}
"#;

pub(crate) const PROFILE_FOLLOWERS_COUNT: &str = r#"
query profileFollowersCount($ids: [ID!]!) {
  profiles(ids: $ids) {
    id
    collectionItemData { likesCount }
  }
}
"#;

pub(crate) const FOLLOWING_COUNT: &str = r#"
query followingCount($id: ID!) {
  follows(id: $id) {
    followings {
      count
    }
  }
}
"#;

pub(crate) const LISTENING_HISTORY: &str = r#"
query listeningHistory {
  listeningHistory {
    itemId
    itemType
    lastListened
  }
}
"#;

pub(crate) const LISTENED_EPISODES: &str = r#"
query listenedEpisodes {
  getPlayState {
    episodes {
      id
      position
      finished
    }
  }
}
"#;

pub(crate) const NOTIFICATIONS_HAS_UNREAD: &str = r#"
query notificationsHasUnread {
  notification {
    hasUnread
  }
}
"#;
