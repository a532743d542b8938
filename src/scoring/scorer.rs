// Scoring entry points.
// One configurable scorer; the near-duplicate variants differ only by
// profile and signal source, never by combination logic.

use crate::inspect::FileReport;
use crate::taxonomy::KeywordTaxonomy;

use super::{
    content, filescore, hashtags, ScoreTrace, ScoringInput, ScoringMethod, ScoringProfile,
    ValidationResult,
};
use crate::constants::{R_LOW_CONTENT, R_SEARCH_MATCHES};

/// Score a submission from extracted metadata. Pure and deterministic:
/// identical input always yields an identical result.
pub fn score_metadata(
    input: &ScoringInput,
    tax: &KeywordTaxonomy,
    profile: &ScoringProfile,
) -> ValidationResult {
    let mut trace = ScoreTrace::default();
    let content_score = content::content_score(input, tax, &mut trace);
    let hashtag_score = hashtags::hashtag_score(&input.hashtags, tax, &mut trace);
    combine(
        content_score,
        hashtag_score,
        trace,
        profile,
        ScoringMethod::UrlMetadata,
    )
}

/// Score a raw upload from filename and size signals only.
pub fn score_file(
    filename: &str,
    report: &FileReport,
    hashtag_str: &str,
    tax: &KeywordTaxonomy,
    profile: &ScoringProfile,
) -> ValidationResult {
    let mut trace = ScoreTrace::default();
    let content_score = filescore::file_content_score(filename, report, tax, &mut trace);
    let hashtag_score = hashtags::hashtag_score(hashtag_str, tax, &mut trace);
    combine(
        content_score,
        hashtag_score,
        trace,
        profile,
        ScoringMethod::FileHeuristic,
    )
}

/// Score from an external content-search pass. The search strategy has
/// already reduced the per-query matches to one content score in [0, 1].
pub fn score_search(
    search_score: f64,
    hashtag_str: &str,
    tax: &KeywordTaxonomy,
    profile: &ScoringProfile,
) -> ValidationResult {
    let mut trace = ScoreTrace::default();
    let content_score = search_score.clamp(0.0, 1.0);
    if content_score > 0.0 {
        trace.add(R_SEARCH_MATCHES, 1, content_score);
    }
    let hashtag_score = hashtags::hashtag_score(hashtag_str, tax, &mut trace);
    combine(
        content_score,
        hashtag_score,
        trace,
        profile,
        ScoringMethod::ContentSearch,
    )
}

/// Weighted combination, minimum-content floor, and the validity cut.
fn combine(
    content_score: f64,
    hashtag_score: f64,
    mut trace: ScoreTrace,
    profile: &ScoringProfile,
    method: ScoringMethod,
) -> ValidationResult {
    let weighted =
        content_score * profile.content_weight + hashtag_score * profile.hashtag_weight;
    let mut confidence = weighted.clamp(0.0, 1.0);

    // Hashtags alone must not carry a submission with no content evidence.
    let mut low_content = false;
    if content_score < profile.min_content_score {
        low_content = true;
        let capped = confidence.min(profile.low_content_cap);
        trace.add(R_LOW_CONTENT, 1, capped - confidence);
        confidence = capped;
    }

    let is_valid = profile.decide(confidence);
    let reason = render_reason(is_valid, low_content, content_score, confidence, &trace);

    ValidationResult {
        is_valid,
        confidence,
        content_score,
        hashtag_score,
        reason,
        method,
        trace: trace.entries,
    }
}

fn render_reason(
    is_valid: bool,
    low_content: bool,
    content_score: f64,
    confidence: f64,
    trace: &ScoreTrace,
) -> String {
    let labels = trace.labels().join(", ");

    if is_valid {
        return format!(
            "validated: {} (confidence {:.0}%)",
            labels,
            confidence * 100.0
        );
    }

    if low_content {
        return format!(
            "content score too low ({:.0}%); needs substantial campaign-related content in title or description",
            content_score * 100.0
        );
    }

    if labels.is_empty() {
        format!(
            "confidence too low ({:.0}%); no campaign indicators found",
            confidence * 100.0
        )
    } else {
        format!(
            "confidence too low ({:.0}%): {}",
            confidence * 100.0,
            labels
        )
    }
}
