//! SRT rendering over timed segments.

use super::TimedText;

/// Renders sequential SRT blocks, one per non-empty-text segment.
///
/// The block index comes from enumerating all segments, so a segment skipped
/// for blank text still consumes an index and leaves a gap in the numbering.
/// Subtitle players tolerate non-contiguous indices; files from this
/// pipeline have always carried the gapped numbering and that is preserved.
pub fn render_srt<S: TimedText>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        let text = segment.text().trim();
        if text.is_empty() {
            continue;
        }
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_timestamp(segment.start()),
            format_timestamp(segment.end()),
            text
        ));
    }
    out
}

/// Formats seconds as `HH:MM:SS,mmm`, zero-padded.
///
/// Milliseconds are truncated, not rounded: the fractional remainder is cut
/// to an integer in [0, 999].
pub fn format_timestamp(seconds: f64) -> String {
    let hours = (seconds / 3600.0) as u64;
    let minutes = ((seconds % 3600.0) / 60.0) as u64;
    let secs = (seconds % 60.0) as u64;
    let millis = ((seconds - seconds.trunc()) * 1000.0) as u64;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}
