//! hub-compose - Compose and schedule posts across social platforms
//!
//! Unix-style one-shot front end for the SocialHub composer: write (or
//! generate) a post, pick platforms, and fan it out into scheduled
//! records.

use std::path::Path;

use clap::Parser;
use libsocialhub::logging::{LogFormat, LoggingConfig};
use libsocialhub::media::MediaFile;
use libsocialhub::service::Session;
use libsocialhub::types::{FacebookKind, Platform, ScheduledPost};
use libsocialhub::{Config, Result, SocialHubError};

#[derive(Parser, Debug)]
#[command(name = "hub-compose")]
#[command(version)]
#[command(about = "Compose and schedule posts across social platforms")]
#[command(long_about = "\
hub-compose - Compose and schedule posts across social platforms

DESCRIPTION:
    hub-compose runs one composition pass: it takes post text (written by
    you or generated from a topic), an optional media attachment, and a
    list of target platforms, then schedules one record per platform.

USAGE EXAMPLES:
    # Schedule a post to two platforms
    hub-compose \"Hello world\" --platforms twitter,facebook

    # Generate the text from a topic (requires GEMINI_API_KEY)
    hub-compose --topic \"rust release day\" --platforms twitter

    # Attach media and publish the Facebook sibling as a Reel
    hub-compose \"Watch this\" --media clip.mp4 --platforms facebook --facebook-reel

    # Machine-readable output
    hub-compose \"Hello\" --platforms twitter --format json

CONFIGURATION:
    Configuration file: ~/.config/socialhub/config.toml

    Override with environment variables:
        SOCIALHUB_CONFIG       - Path to config file
        GEMINI_API_KEY         - Text-generation API key
        SOCIALHUB_LOG_FORMAT   - Log format (text, json, pretty)
        SOCIALHUB_LOG_LEVEL    - Log level filter

EXIT CODES:
    0 - Success
    1 - Generation or configuration error
    3 - Invalid input (empty post, no platform, bad flag value)
")]
struct Cli {
    /// Post text (omit when generating with --topic)
    text: Option<String>,

    /// Generate the post text from this topic
    #[arg(short, long, conflicts_with = "text")]
    topic: Option<String>,

    /// Target platform(s), comma-separated (twitter, facebook)
    #[arg(short, long, value_delimiter = ',')]
    platforms: Vec<Platform>,

    /// Attach a media file to the post
    #[arg(short, long)]
    media: Option<String>,

    /// Publish the Facebook record as a Reel instead of a Post
    #[arg(long)]
    facebook_reel: bool,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "debug" } else { "error" };
    LoggingConfig::new(LogFormat::Text, level.to_string(), cli.verbose).init();

    // Run the main logic and handle errors
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    if cli.format != "text" && cli.format != "json" {
        return Err(SocialHubError::InvalidInput(format!(
            "Invalid format '{}'. Must be 'text' or 'json'",
            cli.format
        )));
    }

    // A missing config file is not an error for a one-shot run
    let config = load_config()?;
    let mut session = Session::from_config(&config);

    // Connect and select every requested platform; repeating a platform
    // on the command line must not toggle it back off
    for platform in unique_platforms(&cli.platforms) {
        if !session.registry().is_connected(platform) {
            session.toggle_connection(platform);
        }
        session.toggle_selection(platform);
    }

    if let Some(text) = &cli.text {
        session.set_text(text.clone());
    } else if let Some(topic) = &cli.topic {
        session.generate(topic).await?;
        eprintln!("Generated: {}", session.draft().text());
    }

    if let Some(path) = &cli.media {
        let file = media_file_from_path(path)?;
        session.attach_media(file);
    }

    if cli.facebook_reel {
        session.set_facebook_kind(FacebookKind::Reel);
    }

    let batch = session.schedule()?;

    if cli.format == "json" {
        output_json(&batch);
    } else {
        output_text(&batch);
    }

    Ok(())
}

/// Requested platforms with duplicates removed, first occurrence wins
fn unique_platforms(requested: &[Platform]) -> Vec<Platform> {
    let mut unique = Vec::new();
    for platform in requested {
        if !unique.contains(platform) {
            unique.push(*platform);
        }
    }
    unique
}

/// Load configuration, falling back to defaults when no file exists
fn load_config() -> Result<Config> {
    let path = libsocialhub::config::resolve_config_path()?;
    if path.exists() {
        Config::load_from_path(&path)
    } else {
        Ok(Config::default_config())
    }
}

/// Build a media file reference from a filesystem path, guessing the MIME
/// type from the extension
fn media_file_from_path(path: &str) -> Result<MediaFile> {
    let path = Path::new(path);
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SocialHubError::InvalidInput(format!("Invalid media path: {:?}", path)))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let mime = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        other => {
            return Err(SocialHubError::InvalidInput(format!(
                "Unsupported media extension '{}'. Supported: png, jpg, jpeg, gif, webp, mp4, mov, webm",
                other
            )));
        }
    };

    Ok(MediaFile::new(name, mime))
}

/// Output scheduled records as JSON
fn output_json(batch: &[ScheduledPost]) {
    let json: Vec<serde_json::Value> = batch
        .iter()
        .map(|p| {
            serde_json::json!({
                "id": p.id,
                "platform": p.platform,
                "content": p.content,
                "media": p.media,
                "option": p.option,
                "status": p.status,
                "created_at": p.created_at,
            })
        })
        .collect();

    match serde_json::to_string_pretty(&json) {
        Ok(out) => println!("{}", out),
        Err(e) => eprintln!("Error: failed to serialize output: {}", e),
    }
}

/// Output scheduled records as human-readable text
fn output_text(batch: &[ScheduledPost]) {
    println!("Scheduled {} post(s):", batch.len());
    for post in batch {
        let media = post
            .media
            .as_ref()
            .map(|m| format!(" [{}]", m.name))
            .unwrap_or_default();
        println!(
            "  {} | {} | {}{} | {}",
            post.id,
            post.platform,
            truncate_content(&post.content, 50),
            media,
            post.display_date()
        );
    }
}

/// Truncate content to max length with ellipsis
fn truncate_content(content: &str, max_len: usize) -> String {
    if content.chars().count() <= max_len {
        content.to_string()
    } else {
        let truncated: String = content.chars().take(max_len).collect();
        format!("{}...", truncated)
    }
}
