//! Audio streaming example demonstrating stream URL retrieval and quality
//! selection.
//!
//! This example shows how to:
//! - Look up a track
//! - Fetch its stream URLs
//! - Pick a quality, falling back when the session lacks access

use zvukrs::{Error, Quality, ZvukClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Anonymous sessions get mid quality (128kbps) only.
    // Use your own token for high/FLAC access.
    let client = ZvukClient::anonymous().await?;

    // Find something to play
    let track = match client.quick_search("молчат дома судно", 1, None).await? {
        Some(results) if !results.tracks.is_empty() => results.tracks[0].clone(),
        _ => {
            println!("No tracks found");
            return Ok(());
        }
    };
    println!(
        "Streaming: {} — {} [{}]",
        track.artists_str(),
        track.title,
        track.duration_str()
    );

    // Fetch the stream URL bundle for the track
    let streams = client.stream_urls(&[&track.id]).await?;
    let Some(stream) = streams.first() else {
        println!("No stream available");
        return Ok(());
    };

    // Ask for lossless, falling back to whatever the session can play
    match stream.url_for(Quality::Flac) {
        Ok(url) => println!("FLAC stream: {url}"),
        Err(Error::SubscriptionRequired(reason)) => {
            println!("No FLAC access ({reason})");
            let (quality, url) = stream.best_available();
            println!("Best available is {quality}: {url}");
        }
        Err(err) => return Err(err.into()),
    }

    // Stream URLs are short-lived; refetch once expired
    if stream.is_expired() {
        println!("Stream URL already expired, refetching...");
        let url = client.stream_url(&track.id, Quality::Mid).await?;
        println!("Fresh mid stream: {url}");
    }

    Ok(())
}
