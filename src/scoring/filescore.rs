// File-only content heuristics.
// When a raw upload cannot be inspected remotely, the filename and the
// file size stand in for title analysis. A missing file is a hard zero.

use crate::constants::*;
use crate::inspect::FileReport;
use crate::taxonomy::KeywordTaxonomy;

use super::ScoreTrace;

/// Content score from filename keywords and size-as-existence proxy.
pub fn file_content_score(
    filename: &str,
    report: &FileReport,
    tax: &KeywordTaxonomy,
    trace: &mut ScoreTrace,
) -> f64 {
    if !report.exists {
        trace.add(R_FILE_MISSING, 1, 0.0);
        return 0.0;
    }

    let name = filename.to_lowercase();
    let mut score = 0.0;

    let primary = tax.file_primary.count_matches(&name);
    if primary > 0 {
        let delta = tax.file_primary.contribution(primary);
        trace.add(tax.file_primary.label, primary, delta);
        score += delta;
    }

    // Secondary terms only corroborate a primary match; "drink.mp4" alone
    // proves nothing.
    let secondary = tax.file_secondary.count_matches(&name);
    if secondary > 0 && primary > 0 {
        let delta = tax.file_secondary.contribution(secondary);
        trace.add(tax.file_secondary.label, secondary, delta);
        score += delta;
    }

    let flags = tax
        .file_red_flags
        .iter()
        .filter(|t| name.contains(*t))
        .count() as u32;
    if flags > 0 {
        let floored = (score - flags as f64 * FILE_RED_FLAG_PENALTY).max(0.0);
        trace.add(R_FILENAME_RED_FLAGS, flags, floored - score);
        score = floored;
    }

    if report.size_bytes > FILE_SIZE_BASELINE_BYTES {
        trace.add(R_FILE_SIZE_OK, 1, FILE_SIZE_BONUS);
        score += FILE_SIZE_BONUS;
    } else {
        let floored = (score - FILE_SMALL_PENALTY).max(0.0);
        trace.add(R_FILE_TOO_SMALL, 1, floored - score);
        score = floored;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(exists: bool, size_bytes: u64) -> FileReport {
        FileReport { exists, size_bytes }
    }

    #[test]
    fn test_missing_file_is_hard_zero() {
        let tax = KeywordTaxonomy::builtin();
        let mut trace = ScoreTrace::default();
        let score = file_content_score("milk_challenge.mp4", &report(false, 0), &tax, &mut trace);
        assert_eq!(score, 0.0);
        assert_eq!(trace.entries[0].label, R_FILE_MISSING);
    }

    #[test]
    fn test_primary_keywords_and_size_bonus() {
        let tax = KeywordTaxonomy::builtin();
        let mut trace = ScoreTrace::default();
        let score =
            file_content_score("milk_challenge.mp4", &report(true, 5_000_000), &tax, &mut trace);
        // primary 0.2 + size bonus 0.1
        assert!((score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_secondary_needs_primary() {
        let tax = KeywordTaxonomy::builtin();

        let mut trace = ScoreTrace::default();
        let alone = file_content_score("drink_fast.mp4", &report(true, 5_000_000), &tax, &mut trace);
        assert!((alone - FILE_SIZE_BONUS).abs() < 1e-9);

        let mut trace = ScoreTrace::default();
        let with_primary =
            file_content_score("milk_drink.mp4", &report(true, 5_000_000), &tax, &mut trace);
        // primary 0.2 + secondary 0.1 + size 0.1
        assert!((with_primary - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_red_flags_and_small_file_floor_at_zero() {
        let tax = KeywordTaxonomy::builtin();
        let mut trace = ScoreTrace::default();
        let score = file_content_score("lamborghini_game.mp4", &report(true, 2_000), &tax, &mut trace);
        assert_eq!(score, 0.0);
    }
}
