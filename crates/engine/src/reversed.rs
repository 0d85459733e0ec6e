//! Random line selection with character-order reversal.

use crate::error::Result;
use crate::random;
use crate::types::Document;
use rand::Rng;

/// Pick one line uniformly at random and reverse its characters
///
/// Reversal is over `char`s (scalar values, so the output stays valid
/// UTF-8), not words. Draws from the same uniform range as
/// [`crate::pick_random`] and fails identically on a zero-line document.
pub fn pick_random_reversed<R: Rng>(doc: &Document, rng: &mut R) -> Result<String> {
    let index = random::random_index(doc, rng)?;
    Ok(doc.lines[index].chars().rev().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_characters_are_reversed() {
        let doc = Document::new("one.txt", vec!["hello world".to_string()]);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            pick_random_reversed(&doc, &mut rng).unwrap(),
            "dlrow olleh"
        );
    }

    #[test]
    fn test_reverse_of_reverse_is_identity() {
        let doc = Document::new("one.txt", vec!["abc def".to_string()]);
        let mut rng = StdRng::seed_from_u64(9);
        let reversed = pick_random_reversed(&doc, &mut rng).unwrap();
        let restored: String = reversed.chars().rev().collect();
        assert_eq!(restored, "abc def");
    }

    #[test]
    fn test_non_ascii_reversal_stays_valid() {
        let doc = Document::new("uni.txt", vec!["héllo".to_string()]);
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(pick_random_reversed(&doc, &mut rng).unwrap(), "olléh");
    }

    #[test]
    fn test_empty_document_fails() {
        let doc = Document::new("empty.txt", Vec::new());
        let mut rng = StdRng::seed_from_u64(0);
        let result = pick_random_reversed(&doc, &mut rng);
        assert!(matches!(result, Err(EngineError::EmptyDocument(_))));
    }
}
