// Scoring Engine
// Turns text and file signals into a campaign-confidence verdict.
// Everything in this module is pure; collaborators run upstream.

pub mod content;
pub mod filescore;
pub mod hashtags;
pub mod scorer;


use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Which scoring path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMethod {
    ContentSearch,
    UrlMetadata,
    FileHeuristic,
}

/// Where a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    FileUpload,
    DirectUrl,
    PlatformUrl,
}

/// The signals one validation call scores from. Built per request from
/// caller data plus whatever the metadata extractor reported.
#[derive(Debug, Clone)]
pub struct ScoringInput {
    pub title: String,
    pub description: String,
    /// Zero means unknown.
    pub duration_secs: u64,
    /// Raw hashtag string as submitted, space or comma separated.
    pub hashtags: String,
    /// Lowercase platform label ("youtube", "tiktok", ...), may be empty.
    pub platform: String,
    pub source: SourceKind,
}

/// One audited contribution to a score: what matched, how many times,
/// and the delta actually applied after capping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub label: String,
    pub count: u32,
    pub delta: f64,
}

/// Ordered audit trail of score contributions. The joined labels become
/// the human-readable reason string, so recording here is part of the
/// contract, not incidental logging.
#[derive(Debug, Clone, Default)]
pub struct ScoreTrace {
    pub entries: Vec<ScoreDelta>,
}

impl ScoreTrace {
    pub fn add(&mut self, label: &str, count: u32, delta: f64) {
        self.entries.push(ScoreDelta {
            label: label.to_string(),
            count,
            delta,
        });
    }

    /// Render each entry as "label (count)", or the bare label when the
    /// count carries no information.
    pub fn labels(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| {
                if e.count > 1 {
                    format!("{} ({})", e.label, e.count)
                } else {
                    e.label.clone()
                }
            })
            .collect()
    }
}

/// Named weighting profile. Each profile owns exactly one validity
/// threshold; profiles are passed explicitly and never merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringProfile {
    pub content_weight: f64,
    pub hashtag_weight: f64,
    pub min_content_score: f64,
    pub validity_threshold: f64,
    pub low_content_cap: f64,
}

impl ScoringProfile {
    /// 80/20 content/hashtag split for URL submissions scored from
    /// extracted metadata.
    pub fn metadata() -> Self {
        Self {
            content_weight: CONTENT_WEIGHT_METADATA,
            hashtag_weight: HASHTAG_WEIGHT_METADATA,
            min_content_score: MIN_CONTENT_SCORE_METADATA,
            validity_threshold: VALIDITY_THRESHOLD_METADATA,
            low_content_cap: LOW_CONTENT_CONFIDENCE_CAP,
        }
    }

    /// 70/30 split with stricter thresholds for raw uploads that only
    /// offer filename and size signals.
    pub fn file_upload() -> Self {
        Self {
            content_weight: CONTENT_WEIGHT_FILE,
            hashtag_weight: HASHTAG_WEIGHT_FILE,
            min_content_score: MIN_CONTENT_SCORE_FILE,
            validity_threshold: VALIDITY_THRESHOLD_FILE,
            low_content_cap: LOW_CONTENT_CONFIDENCE_CAP,
        }
    }

    /// Validity cut. Exactly at the threshold passes.
    pub fn decide(&self, confidence: f64) -> bool {
        confidence >= self.validity_threshold
    }
}

/// Outcome of one scoring pass. Built once per validation call and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub confidence: f64,
    pub content_score: f64,
    pub hashtag_score: f64,
    pub reason: String,
    pub method: ScoringMethod,
    pub trace: Vec<ScoreDelta>,
}

impl ValidationResult {
    /// Terminal result for a source that could not be inspected at all.
    /// Never falls through to hashtag-only validity.
    pub fn extraction_failed(detail: &str) -> Self {
        Self {
            is_valid: false,
            confidence: 0.0,
            content_score: 0.0,
            hashtag_score: 0.0,
            reason: format!(
                "unable to analyze video content: metadata extraction failed ({})",
                detail
            ),
            method: ScoringMethod::UrlMetadata,
            trace: Vec::new(),
        }
    }
}
