//! MathML renderer backed by `latex2mathml`

use super::{MathRenderer, RenderError};
use latex2mathml::{latex_to_mathml, DisplayStyle};

/// `latex2mathml` reports some unsupported input inline instead of failing
const PARSE_ERROR_MARKER: &str = "[PARSE ERROR:";

#[derive(Debug, Clone, Copy, Default)]
pub struct MathmlRenderer;

impl MathRenderer for MathmlRenderer {
    fn render(&self, math: &str, display: bool) -> Result<String, RenderError> {
        let style = if display {
            DisplayStyle::Block
        } else {
            DisplayStyle::Inline
        };

        match latex_to_mathml(math, style) {
            Ok(mathml) if mathml.contains(PARSE_ERROR_MARKER) => Err(RenderError::Parse(
                "unsupported LaTeX command or token".to_string(),
            )),
            Ok(mathml) => Ok(mathml),
            Err(e) => Err(RenderError::Parse(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::delimiters::DelimiterSet;
    use crate::math::render::{render_math_in_text, Fragment, RenderOptions};

    #[test]
    fn test_renders_math_element() {
        let mathml = MathmlRenderer.render("x^2", false).unwrap();
        assert!(mathml.starts_with("<math"), "got {}", mathml);
    }

    #[test]
    fn test_renders_split_text() {
        let rendered = render_math_in_text(
            "area $\\pi r^2$ done",
            &DelimiterSet::default(),
            &MathmlRenderer,
            &RenderOptions::default(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(rendered.fragments.len(), 3);
        assert_eq!(rendered.fragments[0], Fragment::Text("area ".to_string()));
        assert!(matches!(
            rendered.fragments[1],
            Fragment::Math { display: false, .. }
        ));
        assert_eq!(rendered.fragments[2], Fragment::Text(" done".to_string()));
    }

    #[test]
    fn test_parse_error_marker_is_a_parse_failure() {
        // \mathcal is unsupported and comes back as an inline `[PARSE ERROR: ...]` node
        let err = MathmlRenderer.render("\\mathcal{Z}_{ij}", false).unwrap_err();
        assert!(matches!(err, RenderError::Parse(_)), "got {:?}", err);
    }

    #[test]
    fn test_unbalanced_group_is_a_parse_failure() {
        let err = MathmlRenderer.render("\\frac{1}{", true).unwrap_err();
        assert!(matches!(err, RenderError::Parse(_)), "got {:?}", err);
    }

    #[test]
    fn test_unsupported_math_falls_back_to_raw_span() {
        let rendered = render_math_in_text(
            "a $\\mathcal{Z}$ b $x$",
            &DelimiterSet::default(),
            &MathmlRenderer,
            &RenderOptions::default(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(rendered.fragments[0], Fragment::Text("a ".to_string()));
        assert_eq!(
            rendered.fragments[1],
            Fragment::Text("$\\mathcal{Z}$".to_string())
        );
        assert!(matches!(rendered.fragments[3], Fragment::Math { .. }));
        assert_eq!(rendered.failures.len(), 1);
        assert_eq!(rendered.failures[0].math, "\\mathcal{Z}");
    }
}
