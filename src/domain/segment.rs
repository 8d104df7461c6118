/// A timed span of recognized speech.
///
/// Produced by the transcription engine and immutable once produced.
/// `start <= end` holds for well-formed segments; zero-length segments are
/// legal and are skipped at render time when their text trims to empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Segment {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// A segment whose text has been translated. One-to-one and order-preserving
/// with the source sequence it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl TranslatedSegment {
    pub fn from_segment(segment: &Segment, text: impl Into<String>) -> Self {
        Self {
            start: segment.start,
            end: segment.end,
            text: text.into(),
        }
    }
}

/// Read-only shape shared by original and translated segments so both can
/// flow through the subtitle renderer.
pub trait TimedText {
    fn start(&self) -> f64;
    fn end(&self) -> f64;
    fn text(&self) -> &str;
}

impl TimedText for Segment {
    fn start(&self) -> f64 {
        self.start
    }

    fn end(&self) -> f64 {
        self.end
    }

    fn text(&self) -> &str {
        &self.text
    }
}

impl TimedText for TranslatedSegment {
    fn start(&self) -> f64 {
        self.start
    }

    fn end(&self) -> f64 {
        self.end
    }

    fn text(&self) -> &str {
        &self.text
    }
}
