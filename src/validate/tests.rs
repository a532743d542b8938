// Pipeline tests against in-memory fakes.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{MilkMobError, Result};
use crate::inspect::{FileInspector, FileReport};
use crate::metadata::{MetadataExtractor, VideoMetadata};
use crate::scoring::ScoringMethod;
use crate::search::{ContentSearchService, SearchMatch};
use crate::store::{InMemoryMobStore, MobStore};

use super::{check_video_url, ValidationPipeline, VideoSource};
use crate::scoring::SourceKind;

struct FakeExtractor {
    response: std::result::Result<VideoMetadata, String>,
}

#[async_trait]
impl MetadataExtractor for FakeExtractor {
    async fn extract(&self, _url: &str) -> Result<VideoMetadata> {
        self.response
            .clone()
            .map_err(MilkMobError::Extraction)
    }
}

struct FakeInspector {
    report: FileReport,
}

#[async_trait]
impl FileInspector for FakeInspector {
    async fn inspect(&self, _path: &Path) -> FileReport {
        self.report
    }
}

struct FailingSearch;

#[async_trait]
impl ContentSearchService for FailingSearch {
    async fn search(&self, _index: &str, _query: &str) -> Result<Vec<SearchMatch>> {
        Err(MilkMobError::Search("service unreachable".to_string()))
    }
}

struct MatchingSearch {
    video_id: String,
    confidence: f64,
}

#[async_trait]
impl ContentSearchService for MatchingSearch {
    async fn search(&self, _index: &str, _query: &str) -> Result<Vec<SearchMatch>> {
        Ok(vec![SearchMatch {
            video_id: self.video_id.clone(),
            confidence: self.confidence,
        }])
    }
}

struct FailingStore;

impl MobStore for FailingStore {
    fn append(&self, _mob_id: &str, _video: crate::store::AcceptedVideo) -> Result<()> {
        Err(MilkMobError::Store("append refused".to_string()))
    }
    fn feed(&self, mob_id: &str) -> Result<crate::store::MobFeed> {
        Ok(crate::store::MobFeed {
            mob_id: mob_id.to_string(),
            videos: Vec::new(),
            average_confidence_pct: 0,
        })
    }
    fn counts(&self) -> Result<std::collections::HashMap<String, usize>> {
        Ok(Default::default())
    }
}

fn mukbang_metadata() -> VideoMetadata {
    VideoMetadata {
        title: "I love milk!!! #mukbang #asmr".to_string(),
        description: String::new(),
        duration_secs: 10,
        platform: "youtube".to_string(),
        uploader: "MukbangQueen".to_string(),
    }
}

fn pipeline(
    extractor: FakeExtractor,
    inspector: FakeInspector,
    store: Arc<dyn MobStore>,
    staging_dir: PathBuf,
) -> ValidationPipeline {
    ValidationPipeline::new(Arc::new(extractor), Arc::new(inspector), store, staging_dir)
}

#[tokio::test]
async fn test_valid_url_submission_is_classified_and_persisted() {
    let store: Arc<InMemoryMobStore> = Arc::new(InMemoryMobStore::new());
    let pipe = pipeline(
        FakeExtractor {
            response: Ok(mukbang_metadata()),
        },
        FakeInspector {
            report: FileReport::default(),
        },
        store.clone(),
        PathBuf::from("/tmp/staging"),
    );

    let outcome = pipe
        .validate(
            VideoSource::Url("https://youtube.com/watch?v=abc".to_string()),
            "#gotmilk",
            "you",
        )
        .await
        .unwrap();

    assert!(outcome.result.is_valid);
    assert_eq!(outcome.result.method, ScoringMethod::UrlMetadata);
    let assignment = outcome.assignment.expect("valid submission gets a mob");
    assert_eq!(assignment.mob_key, "mukbang_masters");

    let feed = store.feed(&assignment.mob_id).unwrap();
    assert_eq!(feed.videos.len(), 1);
    assert_eq!(feed.videos[0].title, "I love milk!!! #mukbang #asmr");
    assert_eq!(feed.videos[0].submitter, "you");
}

#[tokio::test]
async fn test_extraction_failure_is_terminal_and_not_persisted() {
    let store: Arc<InMemoryMobStore> = Arc::new(InMemoryMobStore::new());
    let pipe = pipeline(
        FakeExtractor {
            response: Err("video unavailable".to_string()),
        },
        FakeInspector {
            report: FileReport::default(),
        },
        store.clone(),
        PathBuf::from("/tmp/staging"),
    );

    let outcome = pipe
        .validate(
            VideoSource::Url("https://youtube.com/watch?v=abc".to_string()),
            "#gotmilk #milkmob",
            "you",
        )
        .await
        .unwrap();

    // Hashtags alone must not rescue an uninspectable video.
    assert!(!outcome.result.is_valid);
    assert_eq!(outcome.result.confidence, 0.0);
    assert!(outcome.result.reason.contains("metadata extraction failed"));
    assert!(outcome.assignment.is_none());
    assert!(store.counts().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_url_is_rejected_before_scoring() {
    let store: Arc<InMemoryMobStore> = Arc::new(InMemoryMobStore::new());
    let pipe = pipeline(
        FakeExtractor {
            response: Ok(mukbang_metadata()),
        },
        FakeInspector {
            report: FileReport::default(),
        },
        store.clone(),
        PathBuf::from("/tmp/staging"),
    );

    let err = pipe
        .validate(
            VideoSource::Url("not a url at all".to_string()),
            "#gotmilk",
            "you",
        )
        .await
        .unwrap_err();

    assert!(matches!(err, MilkMobError::Input(_)));
    assert!(store.counts().unwrap().is_empty());
}

#[tokio::test]
async fn test_rejected_staged_file_is_removed() {
    let staging = tempfile::tempdir().unwrap();
    let staged = staging.path().join("random_clip.mp4");
    tokio::fs::write(&staged, b"tiny").await.unwrap();

    let store: Arc<InMemoryMobStore> = Arc::new(InMemoryMobStore::new());
    let pipe = pipeline(
        FakeExtractor {
            response: Err("unused".to_string()),
        },
        FakeInspector {
            report: FileReport {
                exists: true,
                size_bytes: 4,
            },
        },
        store.clone(),
        staging.path().to_path_buf(),
    );

    let outcome = pipe
        .validate(VideoSource::File(staged.clone()), "", "you")
        .await
        .unwrap();

    assert!(!outcome.result.is_valid);
    assert!(!staged.exists(), "rejected staged upload must be deleted");
}

#[tokio::test]
async fn test_valid_staged_file_is_kept() {
    let staging = tempfile::tempdir().unwrap();
    let staged = staging.path().join("milk_challenge.mp4");
    tokio::fs::write(&staged, b"data").await.unwrap();

    let store: Arc<InMemoryMobStore> = Arc::new(InMemoryMobStore::new());
    let pipe = pipeline(
        FakeExtractor {
            response: Err("unused".to_string()),
        },
        FakeInspector {
            report: FileReport {
                exists: true,
                size_bytes: 5_000_000,
            },
        },
        store.clone(),
        staging.path().to_path_buf(),
    );

    let outcome = pipe
        .validate(VideoSource::File(staged.clone()), "#gotmilk", "you")
        .await
        .unwrap();

    assert!(outcome.result.is_valid);
    assert_eq!(outcome.result.method, ScoringMethod::FileHeuristic);
    assert!(staged.exists(), "accepted uploads stay staged");
    assert_eq!(store.counts().unwrap().values().sum::<usize>(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type_is_input_error() {
    let store: Arc<InMemoryMobStore> = Arc::new(InMemoryMobStore::new());
    let pipe = pipeline(
        FakeExtractor {
            response: Err("unused".to_string()),
        },
        FakeInspector {
            report: FileReport::default(),
        },
        store,
        PathBuf::from("/tmp/staging"),
    );

    let err = pipe
        .validate(VideoSource::File(PathBuf::from("clip.exe")), "", "you")
        .await
        .unwrap_err();

    assert!(matches!(err, MilkMobError::Input(_)));
}

#[tokio::test]
async fn test_search_strategy_failure_falls_back_to_metadata() {
    let store: Arc<InMemoryMobStore> = Arc::new(InMemoryMobStore::new());
    let pipe = pipeline(
        FakeExtractor {
            response: Ok(mukbang_metadata()),
        },
        FakeInspector {
            report: FileReport::default(),
        },
        store.clone(),
        PathBuf::from("/tmp/staging"),
    )
    .with_search(Arc::new(FailingSearch), "campaign-index");

    let outcome = pipe
        .validate(
            VideoSource::Url("https://youtube.com/watch?v=abc".to_string()),
            "#gotmilk",
            "you",
        )
        .await
        .unwrap();

    assert!(outcome.result.is_valid);
    assert_eq!(outcome.result.method, ScoringMethod::UrlMetadata);
}

#[tokio::test]
async fn test_search_strategy_scores_when_available() {
    let url = "https://youtube.com/watch?v=abc";
    let store: Arc<InMemoryMobStore> = Arc::new(InMemoryMobStore::new());
    let pipe = pipeline(
        FakeExtractor {
            response: Ok(mukbang_metadata()),
        },
        FakeInspector {
            report: FileReport::default(),
        },
        store.clone(),
        PathBuf::from("/tmp/staging"),
    )
    .with_search(
        Arc::new(MatchingSearch {
            video_id: url.to_string(),
            confidence: 0.9,
        }),
        "campaign-index",
    );

    let outcome = pipe
        .validate(VideoSource::Url(url.to_string()), "#gotmilk", "you")
        .await
        .unwrap();

    assert!(outcome.result.is_valid);
    assert_eq!(outcome.result.method, ScoringMethod::ContentSearch);
    // 0.9 * 0.8 + 1.0 * 0.2
    assert!((outcome.result.confidence - 0.92).abs() < 1e-9);
}

#[tokio::test]
async fn test_store_failure_is_best_effort() {
    let pipe = pipeline(
        FakeExtractor {
            response: Ok(mukbang_metadata()),
        },
        FakeInspector {
            report: FileReport::default(),
        },
        Arc::new(FailingStore),
        PathBuf::from("/tmp/staging"),
    );

    let outcome = pipe
        .validate(
            VideoSource::Url("https://youtube.com/watch?v=abc".to_string()),
            "#gotmilk",
            "you",
        )
        .await
        .unwrap();

    // The response still reflects the scoring outcome.
    assert!(outcome.result.is_valid);
    assert!(outcome.assignment.is_some());
}

#[test]
fn test_check_video_url_shapes() {
    assert!(matches!(
        check_video_url("https://example.com/clip.mp4"),
        Ok(SourceKind::DirectUrl)
    ));
    assert!(matches!(
        check_video_url("https://www.youtube.com/watch?v=abc"),
        Ok(SourceKind::PlatformUrl)
    ));
    assert!(matches!(
        check_video_url("https://youtu.be/abc"),
        Ok(SourceKind::PlatformUrl)
    ));
    assert!(check_video_url("ftp://example.com/clip.mp4").is_err());
    assert!(check_video_url("https://example.com/page.html").is_err());
    assert!(check_video_url("nonsense").is_err());
}
