//! Saved-HTML cleanup.
//!
//! Rich-text editors pad their output with markup that carries no content:
//! a stray space after an opening `<p>`, self-closing `<br/>` tags, and
//! paragraph pairs left empty once those are gone. [`normalize`] strips all
//! three before a fragment is persisted.

use std::sync::LazyLock;

use regex::Regex;

/// Opening paragraph tag followed by a single whitespace character.
static PADDED_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<p>\s").expect("literal pattern compiles"));

const OPEN_TAG: &str = "<p>";
const LINE_BREAK: &str = "<br/>";
const EMPTY_PAIR: &str = "<p></p>";

/// Strip redundant paragraph and line-break markup from editor output.
///
/// Three literal rewrites run in order, each over all non-overlapping
/// matches left to right:
///
/// 1. `<p>` followed by one whitespace character loses that character
///    (one per match, never a whole run).
/// 2. Every `<br/>` is removed.
/// 3. Every `<p></p>` is removed. This runs last so it also catches
///    paragraphs emptied by the first two rewrites.
///
/// The rewrites are purely textual. Tags in other spellings (`<br>`,
/// `<br />`, `<P>`) and paragraphs that are only *semantically* empty
/// (whitespace, nested tags, `&nbsp;`) pass through untouched, as does any
/// malformed markup. The function never fails.
///
/// # Example
///
/// ```
/// use tinytidy::clean::normalize;
///
/// assert_eq!(normalize("<p> <br/>one</p><p><br/></p>"), "<p>one</p>");
/// ```
pub fn normalize(html: &str) -> String {
    let unpadded = PADDED_OPEN.replace_all(html, OPEN_TAG);
    unpadded.replace(LINE_BREAK, "").replace(EMPTY_PAIR, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(normalize("no markup here"), "no markup here");
    }

    #[test]
    fn test_unrelated_tags_pass_through() {
        let html = "<div><span>kept</span></div><hr>";
        assert_eq!(normalize(html), html);
    }

    #[test]
    fn test_leading_space_after_open_tag_removed() {
        assert_eq!(normalize("<p> hello</p>"), "<p>hello</p>");
    }

    #[test]
    fn test_only_one_whitespace_character_consumed() {
        // The rewrite eats exactly one character per <p>, so a double space
        // leaves a paragraph that rule 3 cannot match.
        assert_eq!(normalize("<p>  </p>"), "<p> </p>");
        assert_eq!(normalize("<p>\n\nx</p>"), "<p>\nx</p>");
    }

    #[test]
    fn test_any_whitespace_character_counts() {
        assert_eq!(normalize("<p>\thello</p>"), "<p>hello</p>");
        assert_eq!(normalize("<p>\nhello</p>"), "<p>hello</p>");
        assert_eq!(normalize("<p>\u{a0}hello</p>"), "<p>hello</p>");
    }

    #[test]
    fn test_line_breaks_removed() {
        assert_eq!(normalize("<p>a<br/>b</p>"), "<p>ab</p>");
        assert_eq!(normalize("<br/><br/><br/>"), "");
    }

    #[test]
    fn test_empty_pair_removed() {
        assert_eq!(normalize("<p></p>"), "");
        assert_eq!(normalize("a<p></p>b"), "ab");
    }

    #[test]
    fn test_break_only_paragraph_cascades_away() {
        // Rule 2 empties the paragraph, rule 3 then removes the pair.
        assert_eq!(normalize("<p><br/></p>"), "");
        assert_eq!(normalize("<p><br/></p><p><br/></p>"), "");
    }

    #[test]
    fn test_single_space_paragraph_cascades_away() {
        // Rule 1 shifts the closing tag into adjacency for rule 3.
        assert_eq!(normalize("<p> </p>"), "");
    }

    #[test]
    fn test_other_spellings_untouched() {
        assert_eq!(normalize("<BR/>"), "<BR/>");
        assert_eq!(normalize("<br>"), "<br>");
        assert_eq!(normalize("<br />"), "<br />");
        assert_eq!(normalize("<P></P>"), "<P></P>");
    }

    #[test]
    fn test_single_pass_leaves_reassembled_matches() {
        // Each rewrite scans once, left to right; a match assembled from the
        // surroundings of an earlier removal is not revisited.
        assert_eq!(normalize("<p><p></p></p>"), "<p></p>");
        assert_eq!(normalize("<br<br/>/>"), "<br/>");
    }

    #[test]
    fn test_malformed_markup_does_not_panic() {
        assert_eq!(normalize("<p"), "<p");
        assert_eq!(normalize("</p><p>"), "</p><p>");
        assert_eq!(normalize("<p<p> >"), "<p<p>>");
    }

    #[test]
    fn test_typical_editor_output() {
        let saved = "<p> First line<br/>second line</p><p><br/></p><p>Last.</p>";
        assert_eq!(
            normalize(saved),
            "<p>First linesecond line</p><p>Last.</p>"
        );
    }

    #[test]
    fn test_second_application_is_a_fixpoint_after_cascades() {
        let inputs = [
            "",
            "plain",
            "<p>kept</p>",
            "<p> hello</p>",
            "<p>a<br/>b</p>",
            "<p><br/></p>",
            "<p> </p>",
            "<p> First<br/></p><p></p>tail",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn same_input_same_output(input in ".*") {
                prop_assert_eq!(normalize(&input), normalize(&input));
            }

            #[test]
            fn tag_free_strings_unchanged(input in "[^<]*") {
                prop_assert_eq!(normalize(&input), input);
            }

            #[test]
            fn whole_tag_sequences_keep_no_breaks(
                tokens in prop::collection::vec(
                    prop_oneof![
                        Just("<p>"),
                        Just("</p>"),
                        Just("<br/>"),
                        Just(" "),
                        Just("text"),
                    ],
                    0..24,
                )
            ) {
                // Over whole tags, removal can never splice a new <br/>
                // together, so none survive.
                let input: String = tokens.concat();
                prop_assert!(!normalize(&input).contains("<br/>"));
            }
        }
    }
}
