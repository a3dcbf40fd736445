//! Fluent assertions for split results
//!
//!     Tests that index into `result.segments()` and match on enum variants by hand get
//!     long quickly and say little. This module wraps a [SplitResult] in a small assertion
//!     API that reads like the expected output:
//!
//!     ```rust,ignore
//!     use mathsplit::math::testing::assert_split;
//!
//!     assert_split(&result)
//!         .segment_count(3)
//!         .exhausted()
//!         .segment(0, |s| {
//!             s.assert_text().content("a ");
//!         })
//!         .segment(1, |s| {
//!             s.assert_math().content("x").raw_span("$x$").inline();
//!         })
//!         .round_trips("a $x$ b");
//!     ```
//!
//!     Every failure message names the segment index it was raised for.

use crate::math::segment::{ScanOutcome, Segment, SplitResult};

/// Start an assertion chain for a split result
pub fn assert_split(result: &SplitResult) -> SplitAssertion<'_> {
    SplitAssertion { result }
}

pub struct SplitAssertion<'a> {
    result: &'a SplitResult,
}

impl<'a> SplitAssertion<'a> {
    pub fn segment_count(self, expected: usize) -> Self {
        assert_eq!(
            self.result.len(),
            expected,
            "Expected {} segments, found {}: {:#?}",
            expected,
            self.result.len(),
            self.result.segments()
        );
        self
    }

    pub fn math_count(self, expected: usize) -> Self {
        assert_eq!(
            self.result.math_count(),
            expected,
            "Expected {} math segments in {:#?}",
            expected,
            self.result.segments()
        );
        self
    }

    pub fn exhausted(self) -> Self {
        assert_eq!(
            self.result.outcome(),
            ScanOutcome::Exhausted,
            "Expected the scan to run out of openers"
        );
        self
    }

    pub fn unterminated_at(self, offset: usize) -> Self {
        assert_eq!(
            self.result.outcome(),
            ScanOutcome::Unterminated { offset },
            "Expected an unterminated opener at byte {}",
            offset
        );
        self
    }

    /// The segments' literal contributions concatenate to `original`
    pub fn round_trips(self, original: &str) -> Self {
        assert_eq!(
            self.result.source_text(),
            original,
            "Segments do not reassemble the input"
        );
        self
    }

    pub fn segment<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(SegmentAssertion<'a>),
    {
        let segment = self.result.segments().get(index).unwrap_or_else(|| {
            panic!(
                "Segment index {} out of bounds ({} segments)",
                index,
                self.result.len()
            )
        });
        check(SegmentAssertion {
            segment,
            context: format!("segment[{}]", index),
        });
        self
    }
}

pub struct SegmentAssertion<'a> {
    segment: &'a Segment,
    context: String,
}

impl<'a> SegmentAssertion<'a> {
    pub fn assert_text(self) -> TextAssertion<'a> {
        match self.segment {
            Segment::Text { content } => TextAssertion {
                content,
                context: self.context,
            },
            other => panic!("{}: Expected text, found {}", self.context, other),
        }
    }

    pub fn assert_math(self) -> MathAssertion<'a> {
        match self.segment {
            Segment::Math {
                content,
                raw_span,
                display,
            } => MathAssertion {
                content,
                raw_span,
                display: *display,
                context: self.context,
            },
            other => panic!("{}: Expected math, found {}", self.context, other),
        }
    }
}

pub struct TextAssertion<'a> {
    content: &'a str,
    context: String,
}

impl TextAssertion<'_> {
    pub fn content(self, expected: &str) -> Self {
        assert_eq!(self.content, expected, "{}: text content", self.context);
        self
    }

    pub fn contains(self, needle: &str) -> Self {
        assert!(
            self.content.contains(needle),
            "{}: {:?} does not contain {:?}",
            self.context,
            self.content,
            needle
        );
        self
    }
}

pub struct MathAssertion<'a> {
    content: &'a str,
    raw_span: &'a str,
    display: bool,
    context: String,
}

impl MathAssertion<'_> {
    pub fn content(self, expected: &str) -> Self {
        assert_eq!(self.content, expected, "{}: math content", self.context);
        self
    }

    pub fn raw_span(self, expected: &str) -> Self {
        assert_eq!(self.raw_span, expected, "{}: raw span", self.context);
        self
    }

    pub fn display(self) -> Self {
        assert!(self.display, "{}: expected display math", self.context);
        self
    }

    pub fn inline(self) -> Self {
        assert!(!self.display, "{}: expected inline math", self.context);
        self
    }
}
