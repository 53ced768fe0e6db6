use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod auth;
mod client;
mod config;
mod dataset;
mod models;


use crate::client::SpotifyClient;
use crate::config::load_config;
use crate::dataset::{build_mood_dataset, build_user_dataset, write_csv};

/// Moods searched when none are given on the command line
const DEFAULT_MOODS: [&str; 4] = ["Happy", "Sad", "Energetic", "Calm"];

#[derive(Parser)]
#[command(name = "spotify-dataset-generator")]
#[command(about = "Builds mood-labeled and user top-track datasets from the Spotify Web API")]
#[command(version)]
struct Args {
    /// Directory the CSV files are written to
    #[arg(short = 'o', long = "out-dir", default_value = "data")]
    out_dir: PathBuf,

    /// Mood keyword to search playlists for; repeat to override the default set
    #[arg(short = 'm', long = "mood")]
    moods: Vec<String>,

    /// Only build the mood dataset; skip the interactive user flow
    #[arg(long = "skip-user")]
    skip_user: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let moods: Vec<String> = if args.moods.is_empty() {
        DEFAULT_MOODS.iter().map(|m| m.to_string()).collect()
    } else {
        args.moods.clone()
    };

    // Load configuration from .env
    let config = load_config()?;

    println!("Connecting to Spotify...");
    let app_client = match SpotifyClient::with_app_credentials(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to authenticate with Spotify: {e}");
            return Err(e);
        }
    };

    let mood_table = build_mood_dataset(&app_client, &moods)?;
    let mood_path = args.out_dir.join("song_mood_data.csv");
    write_csv(&mood_table, &mood_path)?;
    println!(
        "Song mood dataset generated successfully! ({} rows -> {})",
        mood_table.len(),
        mood_path.display()
    );

    if args.skip_user {
        println!("Skipping user top tracks (--skip-user)");
        return Ok(());
    }

    // The top-items endpoint needs user-delegated scopes, so a second
    // client is constructed for that authorization context
    println!("\nAcquiring permissions for reading user top tracks...");
    let user_client = SpotifyClient::with_user_authorization(&config, &auth::USER_SCOPES)?;

    let user_table = build_user_dataset(&user_client)?;
    let user_path = args.out_dir.join("user_top_tracks.csv");
    write_csv(&user_table, &user_path)?;
    println!(
        "User top tracks data imported successfully! ({} rows -> {})",
        user_table.len(),
        user_path.display()
    );

    Ok(())
}
