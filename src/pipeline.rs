use log::{debug, info};
use serde::Serialize;

use crate::summarize::{GenerationError, Summarizer};
use crate::youtube::FetchError;
use crate::{ExtractionError, extract_video_id, thumbnail_url, youtube};

/// Everything one successful run produces
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub video_id: String,
    pub title: String,
    pub language: String,
    pub thumbnail_url: String,
    pub transcript: String,
    pub summary: String,
}

/// Pipeline stage that was running when a failure occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extracting,
    Fetching,
    Generating,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Extracting => write!(f, "extracting"),
            Stage::Fetching => write!(f, "fetching"),
            Stage::Generating => write!(f, "generating"),
        }
    }
}

/// Terminal failure of one pipeline run. No variant carries partial
/// results; a run either yields a full report or one of these.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    MalformedUrl(#[from] ExtractionError),

    #[error("no captions available for video {video_id}")]
    NoCaptions { video_id: String },

    #[error("transcript service failed: {0}")]
    Service(#[source] FetchError),

    #[error("summary generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl From<FetchError> for PipelineError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::NoCaptions { video_id } => PipelineError::NoCaptions { video_id },
            other => PipelineError::Service(other),
        }
    }
}

impl PipelineError {
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::MalformedUrl(_) => Stage::Extracting,
            PipelineError::NoCaptions { .. } | PipelineError::Service(_) => Stage::Fetching,
            PipelineError::Generation(_) => Stage::Generating,
        }
    }
}

/// Run the full pipeline for one URL: extract the video ID, fetch and
/// flatten the captions, generate the summary. Strictly sequential; a
/// fetch failure means the generation call is never issued.
pub async fn run(
    client: &reqwest::Client,
    summarizer: &Summarizer,
    url: &str,
) -> Result<SummaryReport, PipelineError> {
    debug!("Extracting video ID from: {url}");
    let video_id = extract_video_id(url)?;
    info!("Video ID: {video_id}");

    let transcript = youtube::fetch_transcript(client, &video_id).await?;
    info!(
        "Transcript fetched: {} chars, lang={}",
        transcript.text.len(),
        transcript.language,
    );

    let summary = summarizer.generate(&transcript.text).await?;
    info!("Summary generated: {} chars", summary.len());

    Ok(SummaryReport {
        thumbnail_url: thumbnail_url(&video_id),
        video_id: transcript.video_id,
        title: transcript.title,
        language: transcript.language,
        transcript: transcript.text,
        summary,
    })
}
