//! Character frequency analysis for single lines.

use std::collections::HashMap;

/// Find the most frequent character of a line
///
/// Spaces are excluded from consideration. The scan runs left to right and
/// the winner is the character whose count first becomes strictly greater
/// than the running maximum, so ties resolve to the character that reached
/// the winning count earliest: `"aabb"` yields `'a'`, `"abab"` also yields
/// `'a'`, but `"baba"` yields `'b'`. Returns `None` for an empty or
/// all-space line.
#[must_use]
pub fn most_frequent_char(line: &str) -> Option<char> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut dominant = None;
    let mut max_count = 0;

    for c in line.chars().filter(|c| *c != ' ') {
        let count = counts.entry(c).and_modify(|n| *n += 1).or_insert(1);
        if *count > max_count {
            max_count = *count;
            dominant = Some(c);
        }
    }

    dominant
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_clear_winner() {
        assert_eq!(most_frequent_char("abbbc"), Some('b'));
    }

    #[test]
    fn test_tie_resolved_to_earliest_winner() {
        // 'a' reaches count 2 before 'b' does
        assert_eq!(most_frequent_char("aabb"), Some('a'));
        assert_eq!(most_frequent_char("abab"), Some('a'));
        assert_eq!(most_frequent_char("baba"), Some('b'));
    }

    #[test]
    fn test_empty_line_has_no_dominant_char() {
        assert_eq!(most_frequent_char(""), None);
    }

    #[test]
    fn test_spaces_are_excluded() {
        // Without exclusion the four spaces would win
        assert_eq!(most_frequent_char("a b c a b a "), Some('a'));
        assert_eq!(most_frequent_char("    "), None);
    }

    #[test]
    fn test_single_character_line() {
        assert_eq!(most_frequent_char("x"), Some('x'));
    }

    #[test]
    fn test_non_ascii_characters_counted() {
        assert_eq!(most_frequent_char("héllo é é"), Some('é'));
    }
}
