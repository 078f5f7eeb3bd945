use serde_json::json;
use zvukrs::*;

#[test]
fn full_text_search_decodes_present_categories_only() {
    let value = json!({
        "search_id": "s-42",
        "tracks": {
            "score": 1.4,
            "page": { "total": 120, "next": 20 },
            "items": [
                { "id": "t1", "title": "One", "duration": 185 },
                { "id": "t2", "title": "Two", "duration": 204 },
            ],
        },
        "artists": {
            "score": 0.3,
            "page": { "total": 1 },
            "items": [{ "id": "a1", "title": "Band" }],
        },
        "releases": null,
        "playlists": {},
    });

    let search = Search::from_value(&value).unwrap();
    assert_eq!(search.search_id, "s-42");

    let tracks = search.tracks.as_ref().unwrap();
    assert_eq!(tracks.items.len(), 2);
    assert_eq!(tracks.items[0].title, "One");
    assert!(tracks.page.as_ref().unwrap().has_next());

    let artists = search.artists.as_ref().unwrap();
    assert_eq!(artists.items.len(), 1);
    assert!(!artists.page.as_ref().unwrap().has_next());

    // A null or empty category means the kind was not searched.
    assert!(search.releases.is_none());
    assert!(search.playlists.is_none());
    assert!(search.podcasts.is_none());
}

#[test]
fn quick_search_interleaves_kinds_in_wire_order() {
    let value = json!({
        "search_session_id": "sess-9",
        "content": [
            { "__typename": "Artist", "id": "a1", "title": "Band" },
            { "__typename": "Track", "id": "t1", "title": "Hit",
              "artists": [{ "id": "a1", "title": "Band" }] },
            { "__typename": "Podcast", "id": "p1", "title": "Talk" },
            { "__typename": "Track", "id": "t2", "title": "B-side" },
            { "__typename": "Book", "id": "b1", "title": "Novel" },
        ],
    });

    let split = QuickSearch::from_value(&value).unwrap();
    assert_eq!(split.search_session_id, "sess-9");
    assert_eq!(
        split.tracks.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        ["t1", "t2"]
    );
    assert_eq!(split.tracks[0].artists_str(), "Band");
    assert_eq!(split.artists.len(), 1);
    assert_eq!(split.podcasts.len(), 1);
    assert_eq!(split.books.len(), 1);
    assert!(split.releases.is_empty());
}

#[test]
fn malformed_search_payloads_decode_to_absent() {
    assert!(Search::from_value(&json!(null)).is_none());
    assert!(Search::from_value(&json!({})).is_none());
    assert!(QuickSearch::from_value(&json!([])).is_none());

    // A content array of garbage yields an empty split, not a failure.
    let split = QuickSearch::from_value(&json!({
        "search_session_id": "sess-0",
        "content": ["track", 17, null],
    }))
    .unwrap();
    assert!(split.tracks.is_empty());
    assert!(split.artists.is_empty());
}
