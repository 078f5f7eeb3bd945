//! Basic search example demonstrating quick search and full-text search.
//!
//! This example shows how to:
//! - Create an anonymous client
//! - Run a quick (autocomplete) search
//! - Run a full-text search with category toggles
//! - Walk the per-category pagination state

use zvukrs::{SearchParams, ZvukClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging; RUST_LOG=zvukrs=trace prints every response body
    env_logger::init();

    // An anonymous session is enough for searching.
    // For collection access, pass your own token to ZvukClient::new.
    let client = ZvukClient::anonymous().await?;
    println!("Got anonymous token: {:?}", client.token());

    // Quick search, the autocomplete-style endpoint
    println!("Quick searching...");
    if let Some(results) = client.quick_search("дайте танк", 5, None).await? {
        for track in &results.tracks {
            println!("  track: {} — {}", track.artists_str(), track.title);
        }
        for artist in &results.artists {
            println!("  artist: {}", artist.title);
        }
        for release in &results.releases {
            println!("  release: {} ({:?})", release.title, release.year());
        }
    }

    // Full-text search, tracks and releases only
    println!("\nFull-text searching...");
    let params = SearchParams {
        skip_artists: true,
        skip_playlists: true,
        skip_podcasts: true,
        skip_episodes: true,
        skip_profiles: true,
        skip_books: true,
        ..SearchParams::default()
    };

    if let Some(results) = client.search("кино", 10, params).await? {
        if let Some(tracks) = &results.tracks {
            println!("Found {:?} tracks total", tracks.page.as_ref().and_then(|p| p.total));
            for track in &tracks.items {
                println!("  {} — {} [{}]", track.artists_str(), track.title, track.duration_str());
            }
            if tracks.page.as_ref().is_some_and(|page| page.has_next()) {
                println!("  ...more pages available");
            }
        }
        if let Some(releases) = &results.releases {
            for release in &releases.items {
                println!("  release: {}", release.title);
            }
        }
    }

    Ok(())
}
