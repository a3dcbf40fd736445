//! Rendering split text
//!
//!     The scanner never renders anything. This module is the seam where a formula renderer
//!     plugs in: [render_math_in_text] splits the text, hands each math segment to a
//!     [MathRenderer], and assembles the output fragments.
//!
//! Failure policy
//!
//!     A renderer reports either a parse failure or a fatal error:
//!
//!         - [RenderError::Parse]: the math is malformed. The failure is logged and recorded,
//!           and the segment's raw span (markers included) is emitted as plain text instead.
//!         - [RenderError::Fatal]: anything else. Rendering stops and the error is returned.
//!
//!     Each math segment is rendered with its own display flag, which overrides any default
//!     the renderer may have.

#[cfg(feature = "mathml")]
pub mod mathml;

use crate::math::delimiters::DelimiterSet;
use crate::math::segment::Segment;
use crate::math::segmenter::split_at_delimiters;
use std::fmt;

/// Renders one math string to markup
pub trait MathRenderer {
    fn render(&self, math: &str, display: bool) -> Result<String, RenderError>;
}

impl<F> MathRenderer for F
where
    F: Fn(&str, bool) -> Result<String, RenderError>,
{
    fn render(&self, math: &str, display: bool) -> Result<String, RenderError> {
        self(math, display)
    }
}

/// Errors reported by a [MathRenderer]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The math could not be parsed; recoverable
    Parse(String),
    /// Any other failure; aborts rendering
    Fatal(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Parse(msg) => write!(f, "Parse error: {}", msg),
            RenderError::Fatal(msg) => write!(f, "Render failed: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

/// Hook applied to math content before it is rendered
pub type Preprocess = Box<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Default)]
pub struct RenderOptions {
    pub preprocess: Option<Preprocess>,
}

impl RenderOptions {
    pub fn with_preprocess<F>(mut self, preprocess: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.preprocess = Some(Box::new(preprocess));
        self
    }
}

impl fmt::Debug for RenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("preprocess", &self.preprocess.is_some())
            .finish()
    }
}

/// One piece of rendered output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Math { markup: String, display: bool },
}

impl Fragment {
    pub fn as_str(&self) -> &str {
        match self {
            Fragment::Text(text) => text,
            Fragment::Math { markup, .. } => markup,
        }
    }
}

/// A math segment that fell back to its raw span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    /// Math content as written in the source, before any preprocessing
    pub math: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedText {
    pub fragments: Vec<Fragment>,
    pub failures: Vec<RenderFailure>,
}

impl RenderedText {
    /// Concatenate all fragments
    pub fn to_markup(&self) -> String {
        self.fragments.iter().map(Fragment::as_str).collect()
    }
}

/// Split `text` and render every math segment.
///
/// Returns `Ok(None)` when the text holds no math, meaning there is nothing to replace.
pub fn render_math_in_text(
    text: &str,
    delimiters: &DelimiterSet,
    renderer: &dyn MathRenderer,
    options: &RenderOptions,
) -> Result<Option<RenderedText>, RenderError> {
    let split = split_at_delimiters(text, delimiters);
    if !split.has_math() {
        return Ok(None);
    }

    let mut rendered = RenderedText::default();
    for segment in split {
        match segment {
            Segment::Text { content } => rendered.fragments.push(Fragment::Text(content)),
            Segment::Math {
                content,
                raw_span,
                display,
            } => {
                let result = match &options.preprocess {
                    Some(preprocess) => renderer.render(&preprocess(content.as_str()), display),
                    None => renderer.render(&content, display),
                };
                match result {
                    Ok(markup) => rendered.fragments.push(Fragment::Math { markup, display }),
                    Err(RenderError::Parse(message)) => {
                        // Failures point at the source text, not the preprocessed form
                        log::warn!("failed to parse `{}`: {}", content, message);
                        rendered.failures.push(RenderFailure {
                            math: content,
                            message,
                        });
                        rendered.fragments.push(Fragment::Text(raw_span));
                    }
                    Err(fatal) => return Err(fatal),
                }
            }
        }
    }

    Ok(Some(rendered))
}
