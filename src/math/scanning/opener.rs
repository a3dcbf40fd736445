//! Opener search
//!
//! All openers are compiled into one alternation, each escaped with [regex::escape] so that
//! markers such as `\(` or `$` are matched literally. The regex engine uses leftmost-first
//! semantics: at the earliest matching position the alternative listed first wins, which is
//! what makes `$$` take priority over `$` when both are configured in that order.

use regex::Regex;

/// Position of an opener and the delimiter it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenerMatch {
    /// Byte offset of the opener in the searched text
    pub offset: usize,
    /// Index of the matching delimiter in its set
    pub spec_index: usize,
}

/// Compiled search over an ordered list of openers
#[derive(Debug, Clone)]
pub struct OpenerSearch {
    openers: Vec<String>,
    regex: Option<Regex>,
}

impl OpenerSearch {
    /// Build the alternation pattern. An empty list compiles to a search that never matches.
    pub fn new<'a, I>(openers: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let openers: Vec<String> = openers.into_iter().map(str::to_string).collect();
        let regex = match alternation_pattern(&openers) {
            Some(pattern) => Some(Regex::new(&pattern)?),
            None => None,
        };
        Ok(Self { openers, regex })
    }

    /// The compiled pattern, if any openers were given
    pub fn pattern(&self) -> Option<&str> {
        self.regex.as_ref().map(Regex::as_str)
    }

    /// Find the earliest opener in `text`.
    ///
    /// The delimiter is identified as the first one in list order whose opener literally
    /// starts the text at the found offset.
    pub fn find(&self, text: &str) -> Option<OpenerMatch> {
        let found = self.regex.as_ref()?.find(text)?;
        let rest = &text[found.start()..];
        let spec_index = self
            .openers
            .iter()
            .position(|opener| rest.starts_with(opener.as_str()))?;

        Some(OpenerMatch {
            offset: found.start(),
            spec_index,
        })
    }
}

fn alternation_pattern(openers: &[String]) -> Option<String> {
    if openers.is_empty() {
        return None;
    }
    let alternatives: Vec<String> = openers.iter().map(|opener| regex::escape(opener)).collect();
    Some(format!("({})", alternatives.join("|")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(openers: &[&str]) -> OpenerSearch {
        OpenerSearch::new(openers.iter().copied()).unwrap()
    }

    #[test]
    fn test_pattern_escapes_markers() {
        let openers = search(&["$$", "\\[", "$", "\\("]);
        assert_eq!(openers.pattern(), Some(r"(\$\$|\\\[|\$|\\\()"));
    }

    #[test]
    fn test_empty_list_has_no_pattern() {
        let openers = search(&[]);
        assert_eq!(openers.pattern(), None);
        assert_eq!(openers.find("$x$"), None);
    }

    #[test]
    fn test_earliest_position_wins() {
        let openers = search(&["\\[", "$"]);
        let found = openers.find("a $b$ \\[c\\]").unwrap();
        assert_eq!(
            found,
            OpenerMatch {
                offset: 2,
                spec_index: 1
            }
        );
    }

    #[test]
    fn test_list_order_breaks_ties() {
        let openers = search(&["$$", "$"]);
        assert_eq!(openers.find("x $$y$$").unwrap().spec_index, 0);

        // A prefix listed first shadows the longer opener
        let openers = search(&["$", "$$"]);
        assert_eq!(openers.find("x $$y$$").unwrap().spec_index, 0);
    }

    #[test]
    fn test_no_opener() {
        assert_eq!(search(&["$"]).find("plain text"), None);
    }

    #[test]
    fn test_multibyte_text() {
        let found = search(&["$"]).find("größe $x$").unwrap();
        assert_eq!(found.offset, "größe ".len());
    }
}
