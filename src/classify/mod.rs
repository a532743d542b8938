// Mob classification
// Best-match selection over the fixed mob taxonomy. Pure and
// deterministic: ties resolve by declaration order, weak winners fall
// back to the default mob so every valid submission lands somewhere.

use serde::Serialize;

use crate::constants::*;
use crate::scoring::ScoringInput;
use crate::taxonomy::MobDefinition;

/// The classifier's verdict for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct MobAssignment {
    pub mob_id: String,
    pub mob_key: String,
    pub mob_name: String,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Pick the best-matching mob. The strictly highest score wins;
/// first-declared wins ties. A winner under the fallback threshold is
/// replaced by the default mob with its own computed score and a single
/// generic reason.
pub fn classify(input: &ScoringInput, mobs: &[MobDefinition]) -> MobAssignment {
    let title = input.title.to_lowercase();
    let hashtags = input.hashtags.to_lowercase();
    let platform = input.platform.to_lowercase();

    let scored: Vec<(f64, Vec<String>)> = mobs
        .iter()
        .map(|mob| score_mob(mob, &title, &hashtags, &platform, input.duration_secs))
        .collect();

    let mut best = 0usize;
    for (i, (score, _)) in scored.iter().enumerate() {
        if *score > scored[best].0 {
            best = i;
        }
    }

    if scored[best].0 < MOB_FALLBACK_THRESHOLD {
        if let Some(default) = mobs.iter().position(|m| m.key == DEFAULT_MOB_KEY) {
            return MobAssignment {
                mob_id: mobs[default].id.to_string(),
                mob_key: mobs[default].key.to_string(),
                mob_name: mobs[default].name.to_string(),
                score: scored[default].0,
                reasons: vec![R_GENERAL_MILK.to_string()],
            };
        }
    }

    MobAssignment {
        mob_id: mobs[best].id.to_string(),
        mob_key: mobs[best].key.to_string(),
        mob_name: mobs[best].name.to_string(),
        score: scored[best].0,
        reasons: scored[best].1.clone(),
    }
}

/// Affinity score for one mob, with the matched reason labels.
fn score_mob(
    mob: &MobDefinition,
    title: &str,
    hashtags: &str,
    platform: &str,
    duration_secs: u64,
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    let title_matches = mob.keywords.iter().filter(|k| title.contains(*k)).count();
    if title_matches > 0 {
        score += title_matches as f64 * MOB_TITLE_KEYWORD_WEIGHT;
        reasons.push(format!("title keywords ({})", title_matches));
    }

    let hashtag_matches = mob.hashtags.iter().filter(|h| hashtags.contains(*h)).count();
    if hashtag_matches > 0 {
        score += hashtag_matches as f64 * MOB_HASHTAG_WEIGHT;
        reasons.push(format!("hashtag match ({})", hashtag_matches));
    }

    if !platform.is_empty() && mob.platforms.contains(&platform) {
        score += MOB_PLATFORM_BONUS;
        reasons.push(format!("{} platform affinity", platform));
    }

    if mob.duration_bracket.contains(duration_secs) {
        score += MOB_DURATION_BONUS;
        reasons.push("duration affinity".to_string());
    }

    (score, reasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::SourceKind;
    use crate::taxonomy::BUILTIN_MOBS;

    fn input(title: &str, hashtags: &str, platform: &str, duration_secs: u64) -> ScoringInput {
        ScoringInput {
            title: title.to_string(),
            description: String::new(),
            duration_secs,
            hashtags: hashtags.to_string(),
            platform: platform.to_string(),
            source: SourceKind::PlatformUrl,
        }
    }

    #[test]
    fn test_mukbang_title_routes_to_mukbang_masters() {
        let assignment = classify(
            &input("I love milk!!! #mukbang #asmr", "#gotmilk", "", 10),
            &BUILTIN_MOBS,
        );
        assert_eq!(assignment.mob_key, "mukbang_masters");
        assert!((assignment.score - 0.6).abs() < 1e-9);
        assert_eq!(assignment.reasons, vec!["title keywords (2)".to_string()]);
    }

    #[test]
    fn test_tie_resolves_to_first_declared_mob() {
        // "extreme art" gives Extreme Milk and Milk Artists one title
        // keyword each; Extreme Milk is declared first.
        let assignment = classify(&input("extreme art", "", "", 0), &BUILTIN_MOBS);
        assert_eq!(assignment.mob_key, "extreme_milk");
        assert!((assignment.score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_zero_signal_input_falls_back_to_default_mob() {
        let assignment = classify(&input("hello world", "", "", 0), &BUILTIN_MOBS);
        assert_eq!(assignment.mob_key, "daily_milk");
        assert_eq!(assignment.score, 0.0);
        assert_eq!(assignment.reasons, vec![R_GENERAL_MILK.to_string()]);
    }

    #[test]
    fn test_weak_winner_falls_back_to_default_mob() {
        // Platform affinity alone scores 0.1, under the fallback cut.
        let assignment = classify(&input("just a clip", "", "tiktok", 0), &BUILTIN_MOBS);
        assert_eq!(assignment.mob_key, "daily_milk");
        assert_eq!(assignment.reasons, vec![R_GENERAL_MILK.to_string()]);
    }

    #[test]
    fn test_platform_and_duration_bonuses() {
        // One stunt keyword + tiktok + 12s short clip.
        let assignment = classify(&input("epic stunt", "", "tiktok", 12), &BUILTIN_MOBS);
        assert_eq!(assignment.mob_key, "extreme_milk");
        assert!((assignment.score - 0.5).abs() < 1e-9);
        assert!(assignment
            .reasons
            .iter()
            .any(|r| r.contains("platform affinity")));
        assert!(assignment.reasons.iter().any(|r| r == "duration affinity"));
    }

    #[test]
    fn test_mob_hashtags_outweigh_single_keyword() {
        // Fitness hashtag (0.4) beats one artist keyword (0.3).
        let assignment = classify(
            &input("beautiful morning", "#protein #workout", "", 0),
            &BUILTIN_MOBS,
        );
        assert_eq!(assignment.mob_key, "fitness_fuel");
        assert!((assignment.score - 0.8).abs() < 1e-9);
    }
}
