//! Segmenter
//!
//!     Drives the opener and closer scanners over the input and emits alternating text and
//!     math segments.
//!
//! Algorithm
//!
//!     Starting with the cursor at the beginning of the input:
//!
//!         1. Find the earliest opener in the remaining text. None left: the scan is
//!            exhausted.
//!         2. Find the matching closer, starting just past the opener. None found: the scan
//!            is unterminated and stops right here. No later opener is tried.
//!         3. Emit the text before the opener (if any) and a math segment for the span from
//!            opener through closer. Move the cursor past the closer and repeat.
//!
//!     Whatever is left after the cursor when the loop stops becomes one final text segment.
//!     For an unterminated scan that includes the text before the stray opener, so `"a $b"`
//!     stays a single text segment.
//!
//!     Every iteration that does not stop advances the cursor by at least the opener length,
//!     which is never zero for a validated [DelimiterSet], so the loop always terminates.
//!
//! Environment spans
//!
//!     When the raw span itself begins with `\begin{`, as it does for delimiter pairs such as
//!     `\begin{equation}` / `\end{equation}`, the math content is the whole raw span. The
//!     renderer needs the begin/end tags to recognise the environment.

use crate::math::delimiters::DelimiterSet;
use crate::math::scanning::closer::find_end_of_math;
use crate::math::segment::{ScanOutcome, Segment, SplitResult};

const ENVIRONMENT_INTRODUCER: &str = "\\begin{";

/// Split `text` into text and math segments using `delimiters`
pub fn split_at_delimiters(text: &str, delimiters: &DelimiterSet) -> SplitResult {
    let mut segments = Vec::new();
    let mut cursor = 0;

    let outcome = loop {
        let rest = &text[cursor..];

        let Some(opener) = delimiters.find_opener(rest) else {
            break ScanOutcome::Exhausted;
        };
        let Some(spec) = delimiters.get(opener.spec_index) else {
            break ScanOutcome::Exhausted;
        };

        let body_start = opener.offset + spec.opener().len();
        let Some(closer) = find_end_of_math(spec.closer(), rest, body_start) else {
            log::debug!(
                "no closer {:?} for opener {:?} at byte {}; leaving the rest as text",
                spec.closer(),
                spec.opener(),
                cursor + opener.offset
            );
            break ScanOutcome::Unterminated {
                offset: cursor + opener.offset,
            };
        };

        if opener.offset > 0 {
            segments.push(Segment::text(&rest[..opener.offset]));
        }

        let span_end = closer + spec.closer().len();
        let raw_span = &rest[opener.offset..span_end];
        let content = if raw_span.starts_with(ENVIRONMENT_INTRODUCER) {
            raw_span
        } else {
            &rest[body_start..closer]
        };

        log::trace!(
            "math span at byte {}..{} ({})",
            cursor + opener.offset,
            cursor + span_end,
            if spec.is_display() { "display" } else { "inline" }
        );
        segments.push(Segment::math(content, raw_span, spec.is_display()));
        cursor += span_end;
    };

    if cursor < text.len() {
        segments.push(Segment::text(&text[cursor..]));
    }

    SplitResult::new(segments, outcome)
}
