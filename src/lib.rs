pub mod config;
pub mod output;
pub mod pipeline;
pub mod summarize;
pub mod youtube;

/// Failure to derive a video ID from user input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    #[error("could not extract a video ID from: {url}")]
    MalformedUrl { url: String },
}

/// Extract the video ID from a YouTube URL.
///
/// Full-form `youtube.com` links carry the ID in the `v=` query parameter.
/// Anything else (youtu.be share links, bare IDs) is taken as-is from the
/// final path segment.
pub fn extract_video_id(url: &str) -> Result<String, ExtractionError> {
    let url = url.trim();

    let malformed = || ExtractionError::MalformedUrl { url: url.to_string() };

    if url.contains("youtube.com") {
        // youtube.com/watch?v=ID&...
        let id = url
            .split_once("v=")
            .map(|(_, rest)| rest.split('&').next().unwrap_or(rest))
            .unwrap_or("");
        if id.is_empty() {
            return Err(malformed());
        }
        return Ok(id.to_string());
    }

    // youtu.be/ID and bare video IDs: last path segment, verbatim
    let id = url.rsplit('/').next().unwrap_or("");
    if id.is_empty() {
        return Err(malformed());
    }
    Ok(id.to_string())
}

/// Preview image URL for a video
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/0.jpg")
}
