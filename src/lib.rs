//! # mathsplit
//!
//! Locates delimited math regions (`$...$`, `\[...\]`, ...) inside free-form text and splits
//! the text into plain-text and math segments.
//!
//! ```rust,ignore
//! use mathsplit::math::{split_at_delimiters, DelimiterSet};
//!
//! let result = split_at_delimiters("area is $\\pi r^2$", &DelimiterSet::default());
//! assert_eq!(result.segments().len(), 2);
//! ```
//!
//! See the [math] module for the scanning rules.

pub mod math;
