// Milk Mob Constants
// Scoring weights, caps, and thresholds for the campaign content engine.
// Caps clamp each category's contribution before summation; do not change
// one side without the other.

// ----- Scoring profiles -----

// Metadata profile: URL submissions scored from extracted title/description.
pub const CONTENT_WEIGHT_METADATA: f64 = 0.8;
pub const HASHTAG_WEIGHT_METADATA: f64 = 0.2;
pub const MIN_CONTENT_SCORE_METADATA: f64 = 0.1;
pub const VALIDITY_THRESHOLD_METADATA: f64 = 0.35;

// File profile: raw uploads with no usable metadata. Stricter on both the
// minimum content evidence and the validity cut.
pub const CONTENT_WEIGHT_FILE: f64 = 0.7;
pub const HASHTAG_WEIGHT_FILE: f64 = 0.3;
pub const MIN_CONTENT_SCORE_FILE: f64 = 0.2;
pub const VALIDITY_THRESHOLD_FILE: f64 = 0.5;

// Confidence ceiling when content evidence is below the profile minimum.
// Keeps hashtag-only spam from passing on tags alone.
pub const LOW_CONTENT_CONFIDENCE_CAP: f64 = 0.3;

// ----- Content score contributions (per-match weight, per-field cap) -----

pub const CAMPAIGN_WEIGHT: f64 = 0.3;
pub const CAMPAIGN_CAP: f64 = 0.6;

pub const PRIMARY_TITLE_WEIGHT: f64 = 0.15;
pub const PRIMARY_TITLE_CAP: f64 = 0.3;
pub const PRIMARY_DESC_WEIGHT: f64 = 0.1;
pub const PRIMARY_DESC_CAP: f64 = 0.25;

pub const SECONDARY_TITLE_WEIGHT: f64 = 0.1;
pub const SECONDARY_TITLE_CAP: f64 = 0.2;
pub const SECONDARY_DESC_WEIGHT: f64 = 0.05;
pub const SECONDARY_DESC_CAP: f64 = 0.15;

pub const CONTEXT_TITLE_WEIGHT: f64 = 0.05;
pub const CONTEXT_TITLE_CAP: f64 = 0.15;
pub const CONTEXT_DESC_WEIGHT: f64 = 0.03;
pub const CONTEXT_DESC_CAP: f64 = 0.1;

// Red flags: the penalty softens once positive content evidence exists.
pub const RED_FLAG_PENALTY_WEAK_EVIDENCE: f64 = 0.2;
pub const RED_FLAG_PENALTY_STRONG_EVIDENCE: f64 = 0.1;
pub const RED_FLAG_EVIDENCE_FLOOR: f64 = 0.3;

// Duration adjustment
pub const DURATION_OK_MIN_SECS: u64 = 5;
pub const DURATION_OK_MAX_SECS: u64 = 900;
pub const DURATION_BONUS: f64 = 0.05;
pub const DURATION_PENALTY: f64 = 0.05;

// ----- File heuristic contributions -----

pub const FILE_PRIMARY_WEIGHT: f64 = 0.2;
pub const FILE_PRIMARY_CAP: f64 = 0.4;
pub const FILE_SECONDARY_WEIGHT: f64 = 0.1;
pub const FILE_SECONDARY_CAP: f64 = 0.2;
pub const FILE_RED_FLAG_PENALTY: f64 = 0.3;

// File size as a content-existence proxy.
pub const FILE_SIZE_BASELINE_BYTES: u64 = 1_000_000;
pub const FILE_SIZE_BONUS: f64 = 0.1;
pub const FILE_SMALL_PENALTY: f64 = 0.2;

// ----- Mob classifier -----

pub const MOB_TITLE_KEYWORD_WEIGHT: f64 = 0.3;
pub const MOB_HASHTAG_WEIGHT: f64 = 0.4;
pub const MOB_PLATFORM_BONUS: f64 = 0.1;
pub const MOB_DURATION_BONUS: f64 = 0.1;

// A winning score below this falls back to the default mob.
pub const MOB_FALLBACK_THRESHOLD: f64 = 0.2;
pub const DEFAULT_MOB_KEY: &str = "daily_milk";

// Duration brackets (seconds). Short is (0, MID_MIN), mid is
// [MID_MIN, MID_MAX], long is (MID_MAX, inf). Zero means unknown and
// earns no bonus.
pub const MOB_DURATION_MID_MIN_SECS: u64 = 30;
pub const MOB_DURATION_MID_MAX_SECS: u64 = 60;

// ----- Keyword tables -----

pub const CAMPAIGN_PHRASES: [&str; 5] = [
    "got milk", "gotmilk", "milk mustache", "milk commercial", "milk ad",
];

pub const PRIMARY_KEYWORDS: [&str; 6] = [
    "milk", "dairy", "lactose", "cream", "butter", "cheese",
];

pub const SECONDARY_KEYWORDS: [&str; 7] = [
    "drink", "beverage", "glass", "pour", "sip", "gulp", "chug",
];

pub const FOOD_KEYWORDS: [&str; 7] = [
    "mukbang", "asmr", "eating", "breakfast", "cereal", "cookie", "oreo",
];

pub const FITNESS_KEYWORDS: [&str; 7] = [
    "protein", "workout", "gym", "muscle", "recovery", "shake", "nutrition",
];

pub const RED_FLAG_KEYWORDS: [&str; 25] = [
    "car", "auto", "vehicle", "engine", "motor", "drive", "racing", "speed",
    "lamborghini", "ferrari", "porsche", "bmw", "mercedes", "audi",
    "3d print", "printed", "printer", "gaming", "game", "tech", "computer",
    "phone", "iphone", "android", "unbox",
];

// Hashtag indicators; the bare substring is intentional so tags like
// #milkshake still count.
pub const CAMPAIGN_HASHTAGS: [&str; 3] = ["#gotmilk", "#milkmob", "milk"];

// Filename-only tables for the file heuristic.
pub const FILE_PRIMARY_KEYWORDS: [&str; 4] = ["milk", "dairy", "lactose", "cream"];
pub const FILE_SECONDARY_KEYWORDS: [&str; 4] = ["drink", "beverage", "glass", "pour"];
pub const FILE_RED_FLAG_KEYWORDS: [&str; 7] = [
    "car", "auto", "lamborghini", "3dprint", "tech", "game", "phone",
];

// ----- Content search strategy -----

pub const SEARCH_QUERIES: [&str; 5] = [
    "person drinking milk",
    "glass of milk",
    "milk container",
    "pouring milk",
    "milk mustache",
];

pub const SEARCH_PAGE_LIMIT: u32 = 5;
pub const SEARCH_TIMEOUT_SECS: u64 = 30;

// ----- Collaborator timeouts -----

pub const METADATA_TIMEOUT_SECS: u64 = 30;

// ----- Reason labels -----
// Stable, human-readable labels used in the scoring audit trail.

pub const R_CAMPAIGN: &str = "campaign-specific content";
pub const R_PRIMARY_TITLE: &str = "title contains primary milk terms";
pub const R_PRIMARY_DESC: &str = "description mentions milk or dairy";
pub const R_SECONDARY_TITLE: &str = "title contains drink-related terms";
pub const R_SECONDARY_DESC: &str = "description contains drink terms";
pub const R_CONTEXT_TITLE: &str = "title contains relevant context";
pub const R_CONTEXT_DESC: &str = "description contains context terms";
pub const R_RED_FLAGS: &str = "contains off-campaign indicators";
pub const R_DURATION_OK: &str = "appropriate duration";
pub const R_DURATION_LONG: &str = "unusually long duration";
pub const R_HASHTAGS: &str = "campaign hashtags present";
pub const R_LOW_CONTENT: &str = "content score below minimum threshold";

pub const R_FILENAME_PRIMARY: &str = "filename contains primary milk terms";
pub const R_FILENAME_SECONDARY: &str = "filename contains drink-related terms";
pub const R_FILENAME_RED_FLAGS: &str = "filename suggests off-campaign content";
pub const R_FILE_SIZE_OK: &str = "file size consistent with real video";
pub const R_FILE_TOO_SMALL: &str = "file too small to be real video";
pub const R_FILE_MISSING: &str = "file not found";

pub const R_SEARCH_MATCHES: &str = "visual campaign content detected";
pub const R_GENERAL_MILK: &str = "general milk content";

// ----- URL validation -----

pub const VIDEO_URL_EXTENSIONS: [&str; 7] = [
    "mp4", "mov", "avi", "webm", "mkv", "flv", "wmv",
];

pub const SUPPORTED_PLATFORM_DOMAINS: [&str; 11] = [
    "youtube.com", "youtu.be",
    "vimeo.com",
    "tiktok.com",
    "instagram.com",
    "twitter.com", "x.com",
    "facebook.com",
    "drive.google.com",
    "dropbox.com",
    "reddit.com",
];

// Upload extensions accepted for local files.
pub const UPLOAD_EXTENSIONS: [&str; 4] = ["mp4", "mov", "avi", "webm"];
