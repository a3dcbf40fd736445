//! Closer search (EndFinder)
//!
//!     Scans forward from the end of an opener looking for the closer. Three rules apply at
//!     every position, in this order:
//!
//!         1. If the brace level is <= 0 and the text here starts with the closer, stop.
//!         2. A backslash consumes itself and the following character as one escape unit.
//!            Escaped characters never change the brace level and never start a closer.
//!         3. `{` raises the brace level, `}` lowers it. The level may drop below zero on a
//!            stray `}`; that is tolerated and still allows a closer to match.
//!
//!     The scan is a single pass over the bytes and is linear in the scanned distance.
//!     Offsets are byte offsets. The inspected markers (`\`, `{`, `}`) are ASCII, and a
//!     closer can only match on a character boundary because a valid UTF-8 string never
//!     starts with a continuation byte.

/// Find the byte offset where `closer` begins in `text`, scanning from `start`.
///
/// Returns `None` when the end of the text is reached first. An empty closer matches
/// immediately at `start`.
pub fn find_end_of_math(closer: &str, text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let closer = closer.as_bytes();
    let mut index = start;
    let mut brace_level: isize = 0;

    while index < bytes.len() {
        if brace_level <= 0 && bytes[index..].starts_with(closer) {
            return Some(index);
        }

        match bytes[index] {
            b'\\' => {
                index += 1 + escaped_char_len(text, index + 1);
                continue;
            }
            b'{' => brace_level += 1,
            b'}' => brace_level -= 1,
            _ => {}
        }

        index += 1;
    }

    None
}

/// Byte length of the character escaped by a backslash just before `at`
fn escaped_char_len(text: &str, at: usize) -> usize {
    text.get(at..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("$", "$x$", 1, Some(2))]
    #[case::two_char_closer("$$", "$$a+b$$", 2, Some(5))]
    #[case::closer_in_braces_skipped("\\)", r"\(a{b\)c}d\)", 2, Some(10))]
    #[case::escaped_backslash(r"\)", r"\(a\\)b\)", 2, Some(7))]
    #[case::escaped_closer_start("$", r"$a\$b$", 1, Some(5))]
    #[case::escaped_brace_does_not_nest("$", r"$\{x$", 1, Some(4))]
    #[case::negative_level_still_matches("$", "$a}b$", 1, Some(4))]
    #[case::unclosed_brace_hides_closer("$", "$a{b$", 1, None)]
    #[case::no_closer("$", "$abc", 1, None)]
    #[case::start_past_end("$", "$", 5, None)]
    #[case::trailing_backslash("$", "$ab\\", 1, None)]
    fn test_find_end_of_math(
        #[case] closer: &str,
        #[case] text: &str,
        #[case] start: usize,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(find_end_of_math(closer, text, start), expected);
    }

    #[test]
    fn test_nested_groups() {
        let text = "$\\frac{a}{b^{c}}$";
        assert_eq!(find_end_of_math("$", text, 1), Some(text.len() - 1));
    }

    #[test]
    fn test_escape_consumes_multibyte_char() {
        let text = "$\\é$";
        assert_eq!(find_end_of_math("$", text, 1), Some(text.len() - 1));
    }

    #[test]
    fn test_multibyte_content() {
        let text = "\\(α + β\\) rest";
        let end = find_end_of_math("\\)", text, 2).unwrap();
        assert_eq!(&text[2..end], "α + β");
    }

    #[test]
    fn test_empty_closer_matches_at_start() {
        assert_eq!(find_end_of_math("", "abc", 1), Some(1));
    }
}
