use std::collections::HashSet;

use serde_json::json;
use zvukrs::*;

#[test]
fn null_and_empty_objects_decode_to_absent() {
    assert!(SimpleArtist::from_value(&json!(null)).is_none());
    assert!(SimpleArtist::from_value(&json!({})).is_none());
    assert!(SimpleArtist::from_value(&json!("artist")).is_none());
    assert!(SimpleArtist::from_value(&json!(42)).is_none());
    assert!(SimpleArtist::from_value(&json!([{"id": "1"}])).is_none());
}

#[test]
fn absence_propagates_through_nested_entities() {
    let track = SimpleTrack::from_value(&json!({
        "id": "101",
        "title": "Intro",
        "duration": 62,
        "artists": [
            {"id": "7", "title": "Someone"},
            {},
            null,
            "garbage"
        ],
        "release": {}
    }))
    .unwrap();

    // Malformed list elements are dropped, an empty release object is None.
    assert_eq!(track.artists.len(), 1);
    assert_eq!(track.artists[0].id, "7");
    assert!(track.release.is_none());
}

#[test]
fn explicit_nulls_fall_back_to_defaults() {
    let track = SimpleTrack::from_value(&json!({
        "id": "101",
        "title": null,
        "duration": null,
        "explicit": null
    }))
    .unwrap();

    assert_eq!(track.title, "");
    assert_eq!(track.duration, 0);
    assert!(!track.explicit);
}

#[test]
fn unknown_fields_are_tolerated() {
    let artist = SimpleArtist::from_value(&json!({
        "id": "7",
        "title": "Someone",
        "brand_new_server_field": {"nested": true}
    }))
    .unwrap();

    assert_eq!(artist.id, "7");
}

#[test]
fn from_list_requires_a_nonempty_array_of_objects() {
    assert!(SimpleArtist::from_list(&json!(null)).is_empty());
    assert!(SimpleArtist::from_list(&json!([])).is_empty());
    assert!(SimpleArtist::from_list(&json!(["a", "b"])).is_empty());
    assert!(SimpleArtist::from_list(&json!({"id": "7"})).is_empty());

    let artists = SimpleArtist::from_list(&json!([
        {"id": "7", "title": "Someone"},
        {"id": "8", "title": "Else"}
    ]));
    assert_eq!(artists.len(), 2);
}

#[test]
fn identity_equality_ignores_non_identity_fields() {
    let a = SimpleArtist::from_value(&json!({"id": "7", "title": "Someone"})).unwrap();
    let b = SimpleArtist::from_value(&json!({"id": "7", "title": "Renamed"})).unwrap();
    let c = SimpleArtist::from_value(&json!({"id": "8", "title": "Someone"})).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b);
    set.insert(c);
    assert_eq!(set.len(), 2);
}

#[test]
fn nested_graph_decodes_end_to_end() {
    let track = Track::from_value(&json!({
        "id": "303",
        "title": "Song",
        "duration": 185,
        "has_flac": true,
        "artists": [{"id": "7", "title": "Someone", "image": {"src": "/static/a.jpg"}}],
        "release": {
            "id": "55",
            "title": "Album",
            "date": "2021-06-01",
            "type_": "album",
            "artists": [{"id": "7", "title": "Someone"}]
        }
    }))
    .unwrap();

    let release = track.release.as_ref().unwrap();
    assert_eq!(release.type_, Some(ReleaseType::Album));
    assert_eq!(release.year(), Some(2021));
    assert_eq!(release.artists[0].image, None);
    assert_eq!(
        track.artists[0].image.as_ref().unwrap().src,
        "/static/a.jpg"
    );
    assert_eq!(track.duration_str(), "3:05");
}

#[test]
fn unknown_enum_values_decode_to_none_without_failing_the_entity() {
    let release = SimpleRelease::from_value(&json!({
        "id": "55",
        "title": "Album",
        "type_": "mixtape"
    }))
    .unwrap();

    assert_eq!(release.id, "55");
    assert!(release.type_.is_none());
}

#[test]
fn wire_maps_restore_camel_case_keys() {
    let release = SimpleRelease::from_value(&json!({
        "id": "55",
        "title": "Album",
        "type_": "single",
        "artists": [{"id": "7", "title": "Someone"}]
    }))
    .unwrap();

    let wire = release.to_plain_map(true);
    let obj = wire.as_object().unwrap();
    // Reserved-name escapes unwind back to the bare wire key.
    assert_eq!(obj.get("type"), Some(&json!("single")));
    assert!(!obj.contains_key("type_"));

    let plain = release.to_plain_map(false);
    assert_eq!(plain.as_object().unwrap().get("type_"), Some(&json!("single")));
}

#[test]
fn entities_survive_a_plain_map_round_trip() {
    let release = Release::from_value(&json!({
        "id": "55",
        "title": "Album",
        "date": "2021-06-01",
        "type_": "album",
        "explicit": true,
        "availability": 1,
        "genres": [{"id": "g1", "name": "Rock"}],
        "label": {"id": "l1", "title": "Label"},
        "artists": [{"id": "7", "title": "Someone"}],
        "tracks": [
            {"id": "t1", "title": "One", "duration": 185},
            {"id": "t2", "title": "Two", "duration": 204}
        ]
    }))
    .unwrap();

    let rebuilt = Release::from_value(&release.to_plain_map(false)).unwrap();
    assert_eq!(release, rebuilt);
    assert_eq!(rebuilt.type_, Some(ReleaseType::Album));
    assert_eq!(rebuilt.tracks.len(), 2);
    assert_eq!(rebuilt.tracks, release.tracks);
    assert_eq!(rebuilt.genres[0].name, "Rock");
    assert_eq!(rebuilt.label.as_ref().unwrap().id, "l1");

    let track = SimpleTrack::from_value(&json!({
        "id": "t1",
        "title": "One",
        "duration": 185,
        "artists": [{"id": "7", "title": "Someone"}],
        "release": {"id": "55", "title": "Album"}
    }))
    .unwrap();
    let rebuilt = SimpleTrack::from_value(&track.to_plain_map(false)).unwrap();
    assert_eq!(track, rebuilt);
    assert_eq!(rebuilt.artists, track.artists);
    assert_eq!(rebuilt.release, track.release);

    let stream = Stream::from_value(&json!({
        "expire": "2031-01-01T00:00:00+00:00",
        "expire_delta": 3600,
        "mid": "https://cdn/mid.mp3",
        "high": "https://cdn/high.mp3"
    }))
    .unwrap();
    let rebuilt = Stream::from_value(&stream.to_plain_map(false)).unwrap();
    assert_eq!(stream, rebuilt);
    assert_eq!(rebuilt.high.as_deref(), Some("https://cdn/high.mp3"));
}

#[test]
fn image_urls_resolve_relative_paths_and_rewrite_size() {
    let image = Image::from_value(&json!({
        "src": "/static/cover.jpg"
    }))
    .unwrap();
    assert_eq!(
        image.url_sized(100, 100),
        "https://zvuk.com/static/cover.jpg"
    );

    let sized = Image::from_value(&json!({
        "src": "https://cdn.zvuk.com/cover.jpg?size=50x50&v=2"
    }))
    .unwrap();
    assert!(sized.url_sized(300, 300).contains("size=300x300"));
}
