//! Split results
//!
//!     A [SplitResult] is the ordered list of [Segment]s produced for one input, plus the
//!     [ScanOutcome] that ended the scan. Segments own their strings and keep no reference to
//!     the input, so a result can outlive the text it was produced from.
//!
//!     Each segment contributes a literal piece of the input: the text itself for
//!     [Segment::Text], the raw span (markers included) for [Segment::Math]. Concatenating
//!     these pieces in order gives back the input, see [SplitResult::source_text].

use serde::{Deserialize, Serialize};
use std::fmt;

/// One piece of split text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Literal text, emitted verbatim
    Text { content: String },
    /// A delimited math span
    Math {
        /// Math to render: the interior between the markers, or the whole raw span for
        /// environment spans (`\begin{...}`)
        content: String,
        /// The original substring including both markers
        raw_span: String,
        /// Display (block) or inline math
        display: bool,
    },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text {
            content: content.into(),
        }
    }

    pub fn math(content: impl Into<String>, raw_span: impl Into<String>, display: bool) -> Self {
        Segment::Math {
            content: content.into(),
            raw_span: raw_span.into(),
            display,
        }
    }

    /// Text content, or the math payload for math segments
    pub fn content(&self) -> &str {
        match self {
            Segment::Text { content } | Segment::Math { content, .. } => content,
        }
    }

    /// The piece of the original input this segment stands for
    pub fn source_text(&self) -> &str {
        match self {
            Segment::Text { content } => content,
            Segment::Math { raw_span, .. } => raw_span,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text { .. })
    }

    pub fn is_math(&self) -> bool {
        matches!(self, Segment::Math { .. })
    }

    /// True only for display-mode math
    pub fn is_display(&self) -> bool {
        matches!(self, Segment::Math { display: true, .. })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Text { content } => write!(f, "text: {:?}", content),
            Segment::Math {
                content, display, ..
            } => {
                let mode = if *display { "display" } else { "inline" };
                write!(f, "math({}): {:?}", mode, content)
            }
        }
    }
}

/// How a scan ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanOutcome {
    /// No opener left in the remaining text
    Exhausted,
    /// An opener had no matching closer. `offset` is its byte offset in the input.
    Unterminated { offset: usize },
}

/// Ordered segments for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitResult {
    segments: Vec<Segment>,
    outcome: ScanOutcome,
}

impl SplitResult {
    pub fn new(segments: Vec<Segment>, outcome: ScanOutcome) -> Self {
        Self { segments, outcome }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn outcome(&self) -> ScanOutcome {
        self.outcome
    }

    pub fn is_unterminated(&self) -> bool {
        matches!(self.outcome, ScanOutcome::Unterminated { .. })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn has_math(&self) -> bool {
        self.segments.iter().any(Segment::is_math)
    }

    pub fn math_count(&self) -> usize {
        self.segments.iter().filter(|segment| segment.is_math()).count()
    }

    /// Reassemble the input from the segments' literal contributions
    pub fn source_text(&self) -> String {
        self.segments.iter().map(Segment::source_text).collect()
    }
}

impl<'a> IntoIterator for &'a SplitResult {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl IntoIterator for SplitResult {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

/// One segment per line, followed by the outcome when the scan was cut short
impl fmt::Display for SplitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            writeln!(f, "{}", segment)?;
        }
        if let ScanOutcome::Unterminated { offset } = self.outcome {
            writeln!(f, "unterminated opener at byte {}", offset)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_text_uses_raw_span() {
        let result = SplitResult::new(
            vec![
                Segment::text("a "),
                Segment::math("x", "$x$", false),
                Segment::text(" b"),
            ],
            ScanOutcome::Exhausted,
        );
        assert_eq!(result.source_text(), "a $x$ b");
        assert_eq!(result.math_count(), 1);
        assert!(result.has_math());

        let segments = result.into_segments();
        assert_eq!(segments[1], Segment::math("x", "$x$", false));
    }

    #[test]
    fn test_segment_accessors() {
        let math = Segment::math("y", "\\[y\\]", true);
        assert_eq!(math.content(), "y");
        assert_eq!(math.source_text(), "\\[y\\]");
        assert!(math.is_math());
        assert!(math.is_display());
        assert!(!Segment::math("y", "$y$", false).is_display());
        assert!(Segment::text("t").is_text());
        assert!(!Segment::text("t").is_display());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Segment::math("x", "$x$", false)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "math", "content": "x", "raw_span": "$x$", "display": false})
        );

        let json = serde_json::to_value(ScanOutcome::Unterminated { offset: 3 }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "unterminated", "offset": 3})
        );
    }

    #[test]
    fn test_display() {
        let result = SplitResult::new(
            vec![Segment::text("a "), Segment::math("x", "$$x$$", true)],
            ScanOutcome::Exhausted,
        );
        insta::assert_snapshot!(result.to_string(), @r#"
        text: "a "
        math(display): "x"
        "#);
    }
}
