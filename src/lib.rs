pub mod config;
pub mod limit;
pub mod server;
pub mod summarize;
pub mod youtube;

use serde::Serialize;

/// A single captioned segment
#[derive(Debug, Clone, Serialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// Transcripts longer than this are cut before being sent to the model
pub const MAX_TRANSCRIPT_CHARS: usize = 100_000;

/// Extract video ID from a YouTube URL.
///
/// Two shapes are recognized: `...v=ID&...` (value after the first `v=`, up to
/// the next `&`) and `youtu.be/ID?...` (path after `youtu.be/`, up to the next
/// `?`). Embed-style `/embed/ID` URLs are not recognized. The extracted id is
/// not validated beyond being non-empty.
pub fn extract_video_id(url: &str) -> Option<String> {
    if let Some((_, rest)) = url.split_once("v=") {
        let id = rest.split('&').next().unwrap_or(rest);
        return if id.is_empty() { None } else { Some(id.to_string()) };
    }
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        let id = rest.split('?').next().unwrap_or(rest);
        return if id.is_empty() { None } else { Some(id.to_string()) };
    }
    None
}

/// Crude token-budget guard: cap the transcript at [`MAX_TRANSCRIPT_CHARS`]
/// characters, marking the cut with a literal `...`. May split mid-word.
pub fn truncate_transcript(text: String) -> String {
    if text.chars().count() > MAX_TRANSCRIPT_CHARS {
        let mut cut: String = text.chars().take(MAX_TRANSCRIPT_CHARS).collect();
        cut.push_str("...");
        cut
    } else {
        text
    }
}
