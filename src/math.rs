//! Math span detection in free-form text
//!
//!     This module splits text into an ordered sequence of plain-text and math segments.
//!     Math regions are bounded by configurable delimiter pairs such as `$...$` or `\[...\]`.
//!     The result is a data-only list that a rendering stage consumes: text segments are
//!     emitted verbatim, math segments are handed to a formula renderer.
//!
//!     No math syntax is understood here. The scanner only knows about openers, closers,
//!     backslash escapes and brace nesting.
//!
//! Pipeline
//!
//!     1. [delimiters](delimiters): an ordered, validated [DelimiterSet]. Order matters: an
//!        opener that is a prefix of another (`$` vs `$$`) must come after it.
//!     2. [scanning](scanning): the two scanners. The opener search finds the earliest opener
//!        in the remaining text; the closer search (EndFinder) finds the matching closer while
//!        tracking escapes and brace depth.
//!     3. [segmenter](segmenter): drives both scanners and produces a [SplitResult].
//!     4. [render](render): optional collaborator that renders math segments and falls back
//!        to the raw span when the renderer reports a parse failure.
//!
//! Guarantees
//!
//!     - Concatenating every segment's source text reproduces the input exactly.
//!     - Input without any opener yields exactly one text segment (none for empty input).
//!     - An opener without a closer stops the scan; everything from the end of the last math
//!       span onwards becomes a single text segment.
//!     - The scan is linear in the input length and always terminates.

pub mod config;
pub mod delimiters;
pub mod render;
pub mod scanning;
pub mod segment;
pub mod segmenter;
pub mod testing;

pub use delimiters::{DelimiterError, DelimiterSet, DelimiterSpec};
pub use segment::{ScanOutcome, Segment, SplitResult};
pub use segmenter::split_at_delimiters;
