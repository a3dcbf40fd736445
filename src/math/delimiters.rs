//! Delimiter pairs and ordered delimiter sets
//!
//!     A [DelimiterSpec] names an opener, a closer and whether the enclosed math is display
//!     (block) or inline math. A [DelimiterSet] is the validated, ordered list the scanner
//!     works with, together with the compiled opener search.
//!
//!     Order is significant. When two openers match at the same position, the one listed
//!     first wins. Longer openers must therefore be listed before their prefixes, e.g. `$$`
//!     before `$`. The set is never reordered.
//!
//!     The default set is:
//!
//!         $$ ... $$    display
//!         \[ ... \]    display
//!         $  ... $     inline
//!         \( ... \)    inline

use crate::math::scanning::opener::{OpenerMatch, OpenerSearch};
use crate::math::segment::SplitResult;
use crate::math::segmenter::split_at_delimiters;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

static DEFAULT_DELIMITERS: Lazy<DelimiterSet> = Lazy::new(|| {
    DelimiterSet::new(DelimiterSet::default_specs()).expect("default delimiters are valid")
});

/// A single opener/closer pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DelimiterSpec {
    /// Opening marker, e.g. `$$`
    pub left: String,
    /// Closing marker, e.g. `$$`
    pub right: String,
    /// Render the enclosed math as a standalone block
    pub display: bool,
}

impl DelimiterSpec {
    pub fn new(left: impl Into<String>, right: impl Into<String>, display: bool) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            display,
        }
    }

    /// A display-mode (block) pair
    pub fn block(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::new(left, right, true)
    }

    /// An inline-mode pair
    pub fn inline(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::new(left, right, false)
    }

    pub fn opener(&self) -> &str {
        &self.left
    }

    pub fn closer(&self) -> &str {
        &self.right
    }

    pub fn is_display(&self) -> bool {
        self.display
    }
}

impl fmt::Display for DelimiterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.display { "display" } else { "inline" };
        write!(f, "{} ... {} ({})", self.left, self.right, mode)
    }
}

/// Errors raised while building a [DelimiterSet]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterError {
    /// The delimiter at `index` has an empty opener
    EmptyOpener { index: usize },
    /// The delimiter at `index` has an empty closer
    EmptyCloser { index: usize },
    /// The opener alternation could not be compiled
    InvalidPattern(String),
}

impl fmt::Display for DelimiterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterError::EmptyOpener { index } => {
                write!(f, "Delimiter #{} has an empty opener", index)
            }
            DelimiterError::EmptyCloser { index } => {
                write!(f, "Delimiter #{} has an empty closer", index)
            }
            DelimiterError::InvalidPattern(msg) => {
                write!(f, "Invalid opener pattern: {}", msg)
            }
        }
    }
}

impl std::error::Error for DelimiterError {}

/// Validated, ordered delimiter list with its compiled opener search
#[derive(Debug, Clone)]
pub struct DelimiterSet {
    specs: Vec<DelimiterSpec>,
    openers: OpenerSearch,
}

impl DelimiterSet {
    /// Validate `specs` and compile the opener search.
    ///
    /// Empty openers and closers are rejected: either would let the scanner match without
    /// consuming input. An empty list is accepted and never matches.
    pub fn new(specs: Vec<DelimiterSpec>) -> Result<Self, DelimiterError> {
        for (index, spec) in specs.iter().enumerate() {
            if spec.left.is_empty() {
                return Err(DelimiterError::EmptyOpener { index });
            }
            if spec.right.is_empty() {
                return Err(DelimiterError::EmptyCloser { index });
            }
        }

        let openers = OpenerSearch::new(specs.iter().map(|spec| spec.left.as_str()))
            .map_err(|e| DelimiterError::InvalidPattern(e.to_string()))?;

        Ok(Self { specs, openers })
    }

    /// The default pairs, in priority order
    pub fn default_specs() -> Vec<DelimiterSpec> {
        vec![
            DelimiterSpec::block("$$", "$$"),
            DelimiterSpec::block("\\[", "\\]"),
            DelimiterSpec::inline("$", "$"),
            DelimiterSpec::inline("\\(", "\\)"),
        ]
    }

    /// Process-wide default set, compiled once
    pub fn shared_default() -> &'static DelimiterSet {
        &DEFAULT_DELIMITERS
    }

    pub fn specs(&self) -> &[DelimiterSpec] {
        &self.specs
    }

    pub fn get(&self, index: usize) -> Option<&DelimiterSpec> {
        self.specs.get(index)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DelimiterSpec> {
        self.specs.iter()
    }

    /// Earliest opener in `text`, see [OpenerSearch::find]
    pub fn find_opener(&self, text: &str) -> Option<OpenerMatch> {
        self.openers.find(text)
    }

    /// Split `text` with this set
    pub fn split(&self, text: &str) -> SplitResult {
        split_at_delimiters(text, self)
    }
}

impl Default for DelimiterSet {
    fn default() -> Self {
        DEFAULT_DELIMITERS.clone()
    }
}

impl PartialEq for DelimiterSet {
    fn eq(&self, other: &Self) -> bool {
        self.specs == other.specs
    }
}

impl Eq for DelimiterSet {}

impl<'a> IntoIterator for &'a DelimiterSet {
    type Item = &'a DelimiterSpec;
    type IntoIter = std::slice::Iter<'a, DelimiterSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}

impl TryFrom<Vec<DelimiterSpec>> for DelimiterSet {
    type Error = DelimiterError;

    fn try_from(specs: Vec<DelimiterSpec>) -> Result<Self, Self::Error> {
        Self::new(specs)
    }
}
