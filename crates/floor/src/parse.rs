//! Free-text list parsing for the two queries.
//!
//! Both parsers are forgiving: they never fail, they only decide where the
//! tokens are. Deciding whether a token means anything is the query's job.

/// Split a location list such as `"b3, c7, c9 and a3"` into codes.
///
/// Commas, whitespace and the word `and` (any case, standalone or run into
/// a code as in `c9anda3`) all separate codes. Empty tokens from leading,
/// trailing or repeated separators are skipped. Tokens come back lowercased.
pub fn parse_location_list(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace("and", ",")
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a product name list such as `"hanger, deodorant, rubber band"`.
///
/// Names are separated by commas; surrounding whitespace is trimmed but inner
/// spaces are kept, and empty entries are skipped.
pub fn parse_name_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_list_accepts_commas_spaces_and_and() {
        assert_eq!(
            parse_location_list("b3, c7, c9 and a3"),
            ["b3", "c7", "c9", "a3"]
        );
    }

    #[test]
    fn location_list_and_is_case_insensitive() {
        assert_eq!(parse_location_list("B3 AND c7 And a10"), ["b3", "c7", "a10"]);
    }

    #[test]
    fn location_list_collapses_repeated_separators() {
        assert_eq!(parse_location_list("b3,, c7, and a3"), ["b3", "c7", "a3"]);
        assert_eq!(parse_location_list("b3 and and c7"), ["b3", "c7"]);
    }

    #[test]
    fn location_list_skips_leading_and_trailing_separators() {
        assert_eq!(parse_location_list(", b3, c7,"), ["b3", "c7"]);
        assert_eq!(parse_location_list("and b3 and"), ["b3"]);
    }

    #[test]
    fn location_list_of_nothing_is_empty() {
        assert!(parse_location_list("").is_empty());
        assert!(parse_location_list(" , and ,").is_empty());
    }

    #[test]
    fn location_list_splits_on_spaces_alone() {
        assert_eq!(parse_location_list("b3 c7"), ["b3", "c7"]);
        assert_eq!(parse_location_list("  a10\tb1\n c2 "), ["a10", "b1", "c2"]);
    }

    #[test]
    fn location_list_and_may_touch_the_codes() {
        assert_eq!(parse_location_list("c9anda3"), ["c9", "a3"]);
    }

    #[test]
    fn name_list_keeps_inner_spaces() {
        assert_eq!(
            parse_name_list("hanger, deodorant, candy wrapper, rubber band"),
            ["hanger", "deodorant", "candy wrapper", "rubber band"]
        );
    }

    #[test]
    fn name_list_tolerates_missing_or_extra_spaces() {
        assert_eq!(parse_name_list("hanger,deodorant ,  chalk"), ["hanger", "deodorant", "chalk"]);
    }

    #[test]
    fn name_list_skips_empty_entries() {
        assert_eq!(parse_name_list(", hanger,, chalk, "), ["hanger", "chalk"]);
        assert!(parse_name_list("").is_empty());
    }

    #[test]
    fn single_name_is_one_entry() {
        assert_eq!(parse_name_list("nonexistent item"), ["nonexistent item"]);
    }
}
