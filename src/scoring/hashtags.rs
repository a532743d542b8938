// Campaign hashtag signal.
// Binary by design: the tag set is a strong marketing marker, and its
// weight relative to content is decided by the scoring profile.

use crate::constants::R_HASHTAGS;
use crate::taxonomy::KeywordTaxonomy;

use super::ScoreTrace;

/// 1.0 when any campaign indicator appears in the raw hashtag string
/// (case-insensitive substring), else 0.0.
pub fn hashtag_score(hashtags: &str, tax: &KeywordTaxonomy, trace: &mut ScoreTrace) -> f64 {
    let lowered = hashtags.to_lowercase();
    let matched = tax
        .campaign_hashtags
        .iter()
        .filter(|tag| lowered.contains(*tag))
        .count() as u32;

    if matched > 0 {
        trace.add(R_HASHTAGS, matched, 1.0);
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_campaign_tag() {
        let tax = KeywordTaxonomy::builtin();
        let mut trace = ScoreTrace::default();
        assert_eq!(hashtag_score("#GotMilk #fun", &tax, &mut trace), 1.0);
        assert_eq!(trace.entries.len(), 1);
    }

    #[test]
    fn test_bare_substring_counts() {
        let tax = KeywordTaxonomy::builtin();
        let mut trace = ScoreTrace::default();
        // "#milkshake" carries the bare "milk" indicator.
        assert_eq!(hashtag_score("#milkshake", &tax, &mut trace), 1.0);
    }

    #[test]
    fn test_no_match_is_zero() {
        let tax = KeywordTaxonomy::builtin();
        let mut trace = ScoreTrace::default();
        assert_eq!(hashtag_score("#cars #gaming", &tax, &mut trace), 0.0);
        assert_eq!(hashtag_score("", &tax, &mut trace), 0.0);
        assert!(trace.entries.is_empty());
    }
}
