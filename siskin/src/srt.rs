//! SRT subtitle conversion utilities.
//!
//! Converts captions with millisecond timestamps into SRT subtitle format.

use siskin_captions::types::Caption;
use srtlib::{Subtitle, Timestamp};

/// Convert Captions to SRT Subtitles.
pub fn to_subtitles(captions: &[Caption]) -> Vec<Subtitle> {
    captions
        .iter()
        .zip(1..)
        .map(|(c, i)| create_subtitle(c, i))
        .collect()
}

/// Create a subtitle from a caption.
fn create_subtitle(caption: &Caption, index: usize) -> Subtitle {
    Subtitle::new(
        index,
        ms_to_timestamp(caption.start_ms),
        ms_to_timestamp(caption.end_ms),
        caption.text.clone(),
    )
}

/// Convert milliseconds to SRT Timestamp, clamping negatives to zero.
fn ms_to_timestamp(ms: i64) -> Timestamp {
    Timestamp::from_milliseconds(ms.max(0) as u32)
}

/// Format subtitles as SRT file content.
pub fn display_subtitles(subtitles: &[Subtitle]) -> String {
    subtitles
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Display preview of subtitles (first and last entries).
pub fn preview_subtitles(subtitles: &[Subtitle], head_count: usize, tail_count: usize) -> String {
    let total = subtitles.len();

    if total <= head_count + tail_count {
        display_subtitles(subtitles)
    } else {
        let mut out = Vec::new();
        out.extend(subtitles[0..head_count].iter().map(|s| s.to_string()));
        out.push("...".to_string());
        out.extend(
            subtitles[(total - tail_count)..total]
                .iter()
                .map(|s| s.to_string()),
        );
        out.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_captions_to_subtitles() {
        let captions = vec![
            Caption::new("Hello world.", 0, 1100),
            Caption::new("How are you?", 1500, 3100),
        ];

        let subtitles = to_subtitles(&captions);

        assert_eq!(subtitles.len(), 2);
        assert_eq!(subtitles[0].text, "Hello world.");
        assert_eq!(subtitles[1].text, "How are you?");
    }

    #[test]
    fn handles_empty_captions() {
        let captions: Vec<Caption> = vec![];
        let subtitles = to_subtitles(&captions);
        assert!(subtitles.is_empty());
    }

    #[test]
    fn previews_head_and_tail() {
        let captions: Vec<Caption> = (0..10)
            .map(|i| Caption::new(format!("line {i}"), i * 100, i * 100 + 90))
            .collect();

        let subtitles = to_subtitles(&captions);
        let preview = preview_subtitles(&subtitles, 2, 2);

        assert!(preview.contains("line 0"));
        assert!(preview.contains("line 9"));
        assert!(preview.contains("..."));
        assert!(!preview.contains("line 5"));
    }
}
