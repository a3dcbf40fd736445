//! Opener and closer scanners
//!
//!     The segmenter alternates between two states:
//!
//!         ScanningForOpener  ->  ScanningForCloser  ->  ScanningForOpener ...
//!
//!     [opener] implements the first state: a single left-to-right regex search over all
//!     openers at once. [closer] implements the second: a byte scan that tracks backslash
//!     escapes and brace depth so that closers nested inside `{...}` groups are skipped.
//!
//!     Both are pure functions of their input and carry no state between calls.

pub mod closer;
pub mod opener;

pub use closer::find_end_of_math;
pub use opener::{OpenerMatch, OpenerSearch};
