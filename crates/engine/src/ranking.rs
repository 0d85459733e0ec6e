//! Top-N ranking of lines by length.

/// Return the `n` longest lines, longest first
///
/// Length is byte length. The sort is stable: lines of equal length keep
/// their relative input order, which callers rely on for deterministic
/// output. `n` larger than the input returns everything sorted; `n = 0`
/// returns an empty vector.
#[must_use]
pub fn n_longest(mut lines: Vec<String>, n: usize) -> Vec<String> {
    lines.sort_by(|a, b| b.len().cmp(&a.len()));
    lines.truncate(n);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_longest_first() {
        let result = n_longest(lines(&["a", "bb", "ccc"]), 2);
        assert_eq!(result, lines(&["ccc", "bb"]));
    }

    #[test]
    fn test_result_length_is_min_of_n_and_input() {
        let input = lines(&["a", "bb", "ccc", "dddd"]);
        for n in 0..=6 {
            assert_eq!(n_longest(input.clone(), n).len(), n.min(input.len()));
        }
    }

    #[test]
    fn test_n_zero_returns_empty() {
        assert!(n_longest(lines(&["a", "bb"]), 0).is_empty());
    }

    #[test]
    fn test_n_beyond_input_returns_all_sorted() {
        let result = n_longest(lines(&["a", "ccc", "bb"]), 10);
        assert_eq!(result, lines(&["ccc", "bb", "a"]));
    }

    #[test]
    fn test_equal_lengths_keep_input_order() {
        let result = n_longest(lines(&["bb", "aa", "cc", "x"]), 3);
        assert_eq!(result, lines(&["bb", "aa", "cc"]));
    }

    #[test]
    fn test_stability_across_mixed_lengths() {
        let result = n_longest(lines(&["one", "x", "two", "y", "six"]), 5);
        assert_eq!(result, lines(&["one", "two", "six", "x", "y"]));
    }

    #[test]
    fn test_reranking_own_output_is_a_prefix() {
        let input = lines(&["aaa", "bb", "cccc", "dd", "e"]);
        let top = n_longest(input, 4);
        for n2 in 0..=top.len() {
            assert_eq!(n_longest(top.clone(), n2), top[..n2].to_vec());
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(n_longest(Vec::new(), 5).is_empty());
    }
}
