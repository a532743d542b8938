// Keyword-based content scoring over extracted title and description.
// Contribution order and caps follow the campaign scoring contract:
// each category clamps independently, then everything sums.

use crate::constants::*;
use crate::taxonomy::{count_terms_either, KeywordCategory, KeywordTaxonomy};

use super::{ScoreTrace, ScoringInput};

/// Accumulate the content score for a metadata-backed submission.
/// Pure; both fields are lowercased once here.
pub fn content_score(input: &ScoringInput, tax: &KeywordTaxonomy, trace: &mut ScoreTrace) -> f64 {
    let title = input.title.to_lowercase();
    let description = input.description.to_lowercase();

    let mut score = 0.0;

    // Campaign phrases count once per phrase across both fields.
    let campaign = tax.campaign.count_matches_either(&title, &description);
    if campaign > 0 {
        score += record(&tax.campaign, campaign, trace);
    }

    score += apply(&tax.primary_title, &title, trace);
    if !description.is_empty() {
        score += apply(&tax.primary_description, &description, trace);
    }

    score += apply(&tax.secondary_title, &title, trace);
    if !description.is_empty() {
        score += apply(&tax.secondary_description, &description, trace);
    }

    score += apply(&tax.context_title, &title, trace);
    if !description.is_empty() {
        score += apply(&tax.context_description, &description, trace);
    }

    score = apply_red_flags(score, &title, &description, tax, trace);
    adjust_for_duration(score, input.duration_secs, trace)
}

fn apply(cat: &KeywordCategory, text: &str, trace: &mut ScoreTrace) -> f64 {
    let matches = cat.count_matches(text);
    if matches == 0 {
        return 0.0;
    }
    record(cat, matches, trace)
}

fn record(cat: &KeywordCategory, matches: u32, trace: &mut ScoreTrace) -> f64 {
    let delta = cat.contribution(matches);
    trace.add(cat.label, matches, delta);
    delta
}

/// Red flags over both fields. The per-match penalty softens once the
/// running score shows real positive evidence; the result never goes
/// negative.
fn apply_red_flags(
    score: f64,
    title: &str,
    description: &str,
    tax: &KeywordTaxonomy,
    trace: &mut ScoreTrace,
) -> f64 {
    let flags = count_terms_either(&tax.red_flags, title, description);
    if flags == 0 {
        return score;
    }

    let per_match = if score < RED_FLAG_EVIDENCE_FLOOR {
        RED_FLAG_PENALTY_WEAK_EVIDENCE
    } else {
        RED_FLAG_PENALTY_STRONG_EVIDENCE
    };
    let penalty = flags as f64 * per_match;
    let floored = (score - penalty).max(0.0);
    trace.add(R_RED_FLAGS, flags, floored - score);
    floored
}

/// Flat duration adjustment: reasonable lengths get a small bonus, very
/// long videos a small penalty. Unknown (zero) duration is left alone.
fn adjust_for_duration(score: f64, duration_secs: u64, trace: &mut ScoreTrace) -> f64 {
    if duration_secs == 0 {
        return score;
    }

    if (DURATION_OK_MIN_SECS..=DURATION_OK_MAX_SECS).contains(&duration_secs) {
        trace.add(R_DURATION_OK, 1, DURATION_BONUS);
        score + DURATION_BONUS
    } else if duration_secs > DURATION_OK_MAX_SECS {
        let floored = (score - DURATION_PENALTY).max(0.0);
        trace.add(R_DURATION_LONG, 1, floored - score);
        floored
    } else {
        // Under five seconds: too short to reward, not penalized either.
        score
    }
}
