// Keyword taxonomy and mob definitions
// Static tables the scorer and classifier run against. Immutable at runtime.

use serde::Serialize;

use crate::constants::*;

/// A named set of lowercase terms with a per-match weight and a cap on the
/// total contribution the set may make to one scored field.
#[derive(Debug, Clone)]
pub struct KeywordCategory {
    pub label: &'static str,
    pub terms: Vec<&'static str>,
    pub weight: f64,
    pub cap: f64,
}

impl KeywordCategory {
    fn new(label: &'static str, terms: &[&'static str], weight: f64, cap: f64) -> Self {
        Self {
            label,
            terms: terms.to_vec(),
            weight,
            cap,
        }
    }

    /// Count how many of this category's terms appear in the text.
    /// Case-sensitive substring containment over an already-lowercased
    /// haystack; each term counts at most once.
    pub fn count_matches(&self, text: &str) -> u32 {
        self.terms.iter().filter(|t| text.contains(*t)).count() as u32
    }

    /// Count terms present in either of two fields. A term found in both
    /// still counts once.
    pub fn count_matches_either(&self, a: &str, b: &str) -> u32 {
        self.terms
            .iter()
            .filter(|t| a.contains(*t) || b.contains(*t))
            .count() as u32
    }

    /// Weighted contribution for a match count, clamped to the cap.
    pub fn contribution(&self, matches: u32) -> f64 {
        (matches as f64 * self.weight).min(self.cap)
    }
}

/// The full static scoring taxonomy: one category instance per scored
/// field, carrying that field's weight and cap.
#[derive(Debug, Clone)]
pub struct KeywordTaxonomy {
    pub campaign: KeywordCategory,
    pub primary_title: KeywordCategory,
    pub primary_description: KeywordCategory,
    pub secondary_title: KeywordCategory,
    pub secondary_description: KeywordCategory,
    pub context_title: KeywordCategory,
    pub context_description: KeywordCategory,
    pub red_flags: Vec<&'static str>,
    pub campaign_hashtags: Vec<&'static str>,
    pub file_primary: KeywordCategory,
    pub file_secondary: KeywordCategory,
    pub file_red_flags: Vec<&'static str>,
}

impl KeywordTaxonomy {
    pub fn builtin() -> Self {
        // Context is the food + fitness union.
        let context: Vec<&'static str> = FOOD_KEYWORDS
            .iter()
            .chain(FITNESS_KEYWORDS.iter())
            .copied()
            .collect();

        Self {
            campaign: KeywordCategory::new(R_CAMPAIGN, &CAMPAIGN_PHRASES, CAMPAIGN_WEIGHT, CAMPAIGN_CAP),
            primary_title: KeywordCategory::new(
                R_PRIMARY_TITLE,
                &PRIMARY_KEYWORDS,
                PRIMARY_TITLE_WEIGHT,
                PRIMARY_TITLE_CAP,
            ),
            primary_description: KeywordCategory::new(
                R_PRIMARY_DESC,
                &PRIMARY_KEYWORDS,
                PRIMARY_DESC_WEIGHT,
                PRIMARY_DESC_CAP,
            ),
            secondary_title: KeywordCategory::new(
                R_SECONDARY_TITLE,
                &SECONDARY_KEYWORDS,
                SECONDARY_TITLE_WEIGHT,
                SECONDARY_TITLE_CAP,
            ),
            secondary_description: KeywordCategory::new(
                R_SECONDARY_DESC,
                &SECONDARY_KEYWORDS,
                SECONDARY_DESC_WEIGHT,
                SECONDARY_DESC_CAP,
            ),
            context_title: KeywordCategory::new(
                R_CONTEXT_TITLE,
                &context,
                CONTEXT_TITLE_WEIGHT,
                CONTEXT_TITLE_CAP,
            ),
            context_description: KeywordCategory::new(
                R_CONTEXT_DESC,
                &context,
                CONTEXT_DESC_WEIGHT,
                CONTEXT_DESC_CAP,
            ),
            red_flags: RED_FLAG_KEYWORDS.to_vec(),
            campaign_hashtags: CAMPAIGN_HASHTAGS.to_vec(),
            file_primary: KeywordCategory::new(
                R_FILENAME_PRIMARY,
                &FILE_PRIMARY_KEYWORDS,
                FILE_PRIMARY_WEIGHT,
                FILE_PRIMARY_CAP,
            ),
            file_secondary: KeywordCategory::new(
                R_FILENAME_SECONDARY,
                &FILE_SECONDARY_KEYWORDS,
                FILE_SECONDARY_WEIGHT,
                FILE_SECONDARY_CAP,
            ),
            file_red_flags: FILE_RED_FLAG_KEYWORDS.to_vec(),
        }
    }
}

/// Count plain terms (no weights) present in either of two fields.
pub fn count_terms_either(terms: &[&str], a: &str, b: &str) -> u32 {
    terms
        .iter()
        .filter(|t| a.contains(*t) || b.contains(*t))
        .count() as u32
}

/// Duration affinity bracket for a mob. Brackets do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationBracket {
    /// Under 30 seconds: quick clips and stunts.
    Short,
    /// 30 to 60 seconds: everyday content.
    Mid,
    /// Over 60 seconds: long-form shows.
    Long,
    /// No duration preference.
    Any,
}

impl DurationBracket {
    /// Whether a known duration falls in this bracket. Zero (unknown)
    /// never matches.
    pub fn contains(&self, duration_secs: u64) -> bool {
        if duration_secs == 0 {
            return false;
        }
        match self {
            DurationBracket::Short => duration_secs < MOB_DURATION_MID_MIN_SECS,
            DurationBracket::Mid => {
                (MOB_DURATION_MID_MIN_SECS..=MOB_DURATION_MID_MAX_SECS).contains(&duration_secs)
            }
            DurationBracket::Long => duration_secs > MOB_DURATION_MID_MAX_SECS,
            DurationBracket::Any => false,
        }
    }
}

/// One of the five fixed community buckets. Icon and color are
/// presentation-only passthrough.
#[derive(Debug, Clone, Serialize)]
pub struct MobDefinition {
    pub id: &'static str,
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub hashtags: &'static [&'static str],
    pub platforms: &'static [&'static str],
    pub duration_bracket: DurationBracket,
    pub icon: &'static str,
    pub color: &'static str,
}

/// The fixed mob taxonomy. Declaration order is the classifier tie-break
/// order; the count and identities are invariants other components rely on.
pub static BUILTIN_MOBS: [MobDefinition; 5] = [
    MobDefinition {
        id: "mob001",
        key: "extreme_milk",
        name: "Extreme Milk",
        description: "Adventurous milk drinking with sports, stunts, and daring activities",
        keywords: &["extreme", "stunt", "skateboard", "bike", "jump", "trick", "adventure", "dare"],
        hashtags: &["#extrememilk", "#stunts", "#adventure"],
        platforms: &["tiktok"],
        duration_bracket: DurationBracket::Short,
        icon: "🏄",
        color: "#ff6b35",
    },
    MobDefinition {
        id: "mob002",
        key: "milk_artists",
        name: "Milk Artists",
        description: "Creative artistic expressions involving milk - art, photography, aesthetics",
        keywords: &["art", "creative", "aesthetic", "photo", "picture", "beautiful", "artistic", "paint"],
        hashtags: &["#milkart", "#aesthetic", "#creative"],
        platforms: &["tiktok", "instagram"],
        duration_bracket: DurationBracket::Any,
        icon: "🎨",
        color: "#4ecdc4",
    },
    MobDefinition {
        id: "mob003",
        key: "mukbang_masters",
        name: "Mukbang Masters",
        description: "Food enthusiasts featuring milk in eating shows and food content",
        keywords: &["mukbang", "asmr", "eating", "food", "taste", "review", "delicious"],
        hashtags: &["#mukbang", "#asmr", "#foodie"],
        platforms: &["youtube"],
        duration_bracket: DurationBracket::Long,
        icon: "🍽",
        color: "#45b7d1",
    },
    MobDefinition {
        id: "mob004",
        key: "fitness_fuel",
        name: "Fitness Fuel",
        description: "Athletes and fitness enthusiasts using milk for workout nutrition",
        keywords: &["workout", "gym", "fitness", "protein", "muscle", "training", "exercise", "athlete"],
        hashtags: &["#fitnessmilk", "#protein", "#workout"],
        platforms: &["youtube"],
        duration_bracket: DurationBracket::Any,
        icon: "💪",
        color: "#96ceb4",
    },
    MobDefinition {
        id: "mob005",
        key: "daily_milk",
        name: "Daily Milk",
        description: "Everyday milk moments - breakfast, cooking, family time",
        keywords: &["breakfast", "morning", "cereal", "coffee", "cooking", "family", "home", "daily"],
        hashtags: &["#dailymilk", "#breakfast", "#family"],
        platforms: &[],
        duration_bracket: DurationBracket::Mid,
        icon: "🥛",
        color: "#feca57",
    },
];

/// Look up a mob by stable id.
pub fn find_mob(id: &str) -> Option<&'static MobDefinition> {
    BUILTIN_MOBS.iter().find(|m| m.id == id)
}

/// The fallback bucket every valid submission can land in.
pub fn default_mob() -> &'static MobDefinition {
    BUILTIN_MOBS
        .iter()
        .find(|m| m.key == DEFAULT_MOB_KEY)
        .expect("default mob must exist in the builtin taxonomy")
}
