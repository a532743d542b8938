// Validation pipeline
// Per-request flow: Received -> Inspecting -> Scoring ->
// {Valid -> Classifying -> Persisted | Invalid -> Rejected}.
// Strategies run in a fixed order; persistence happens only after the
// whole pipeline has succeeded.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use crate::classify::{self, MobAssignment};
use crate::constants::{SUPPORTED_PLATFORM_DOMAINS, VIDEO_URL_EXTENSIONS};
use crate::error::{MilkMobError, Result};
use crate::inspect::{self, FileInspector};
use crate::metadata::{MetadataExtractor, VideoMetadata};
use crate::scoring::scorer;
use crate::scoring::{ScoringInput, ScoringProfile, SourceKind, ValidationResult};
use crate::search::{self, ContentSearchService};
use crate::store::{AcceptedVideo, MobStore};
use crate::taxonomy::{KeywordTaxonomy, BUILTIN_MOBS};

/// What the caller submitted.
#[derive(Debug, Clone)]
pub enum VideoSource {
    File(PathBuf),
    Url(String),
}

/// Everything one validation call produced.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub result: ValidationResult,
    pub assignment: Option<MobAssignment>,
    pub video: Option<VideoMetadata>,
}

struct SearchBackend {
    service: Arc<dyn ContentSearchService>,
    index: String,
}

pub struct ValidationPipeline {
    extractor: Arc<dyn MetadataExtractor>,
    inspector: Arc<dyn FileInspector>,
    store: Arc<dyn MobStore>,
    search: Option<SearchBackend>,
    taxonomy: KeywordTaxonomy,
    staging_dir: PathBuf,
}

impl ValidationPipeline {
    pub fn new(
        extractor: Arc<dyn MetadataExtractor>,
        inspector: Arc<dyn FileInspector>,
        store: Arc<dyn MobStore>,
        staging_dir: PathBuf,
    ) -> Self {
        Self {
            extractor,
            inspector,
            store,
            search: None,
            taxonomy: KeywordTaxonomy::builtin(),
            staging_dir,
        }
    }

    /// Enable the content-search strategy against the given index.
    pub fn with_search(mut self, service: Arc<dyn ContentSearchService>, index: &str) -> Self {
        self.search = Some(SearchBackend {
            service,
            index: index.to_string(),
        });
        self
    }

    pub fn search_enabled(&self) -> bool {
        self.search.is_some()
    }

    /// Run the full pipeline for one submission.
    pub async fn validate(
        &self,
        source: VideoSource,
        hashtags: &str,
        submitter: &str,
    ) -> Result<ValidationOutcome> {
        match source {
            VideoSource::Url(url) => self.validate_url(&url, hashtags, submitter).await,
            VideoSource::File(path) => self.validate_file(&path, hashtags, submitter).await,
        }
    }

    async fn validate_url(
        &self,
        url: &str,
        hashtags: &str,
        submitter: &str,
    ) -> Result<ValidationOutcome> {
        let kind = check_video_url(url)?;
        info!(url, "inspecting url submission");

        // Strategy 1: external content search. A collaborator failure here
        // falls through; it is not terminal the way extraction failure is.
        if let Some(backend) = &self.search {
            match search::campaign_content_score(backend.service.as_ref(), &backend.index, url)
                .await
            {
                Ok(search_score) => {
                    debug!(search_score, "content search strategy succeeded");
                    // Metadata is still worth having for classification,
                    // but only best-effort on this path.
                    let video = self.extractor.extract(url).await.ok();
                    let result = scorer::score_search(
                        search_score,
                        hashtags,
                        &self.taxonomy,
                        &ScoringProfile::metadata(),
                    );
                    let input = scoring_input_from_metadata(video.as_ref(), hashtags, kind);
                    return self.finish(input, result, video, submitter, None).await;
                }
                Err(e) => {
                    warn!("content search unavailable, falling back to metadata: {}", e);
                }
            }
        }

        // Strategy 2: metadata heuristics. Extraction failure is terminal
        // for the request; it must never degrade to hashtag-only validity.
        let video = match self.extractor.extract(url).await {
            Ok(video) => video,
            Err(e) => {
                warn!(url, "metadata extraction failed: {}", e);
                return Ok(ValidationOutcome {
                    result: ValidationResult::extraction_failed(&e.to_string()),
                    assignment: None,
                    video: None,
                });
            }
        };

        let input = ScoringInput {
            title: video.title.clone(),
            description: video.description.clone(),
            duration_secs: video.duration_secs,
            hashtags: hashtags.to_string(),
            platform: video.platform.clone(),
            source: kind,
        };
        let result = scorer::score_metadata(&input, &self.taxonomy, &ScoringProfile::metadata());
        self.finish(input, result, Some(video), submitter, None).await
    }

    async fn validate_file(
        &self,
        path: &Path,
        hashtags: &str,
        submitter: &str,
    ) -> Result<ValidationOutcome> {
        if !inspect::has_allowed_extension(path) {
            return Err(MilkMobError::Input(
                "file type not supported; use mp4, mov, avi, or webm".to_string(),
            ));
        }

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let report = self.inspector.inspect(path).await;
        info!(
            file = %filename,
            exists = report.exists,
            size = report.size_bytes,
            "inspecting file submission"
        );

        // Search strategy works for uploads too once the file is indexed
        // under its name; fall back to the filename heuristic otherwise.
        if let (Some(backend), true) = (&self.search, report.exists) {
            match search::campaign_content_score(backend.service.as_ref(), &backend.index, &filename)
                .await
            {
                Ok(search_score) => {
                    debug!(search_score, "content search strategy succeeded");
                    let result = scorer::score_search(
                        search_score,
                        hashtags,
                        &self.taxonomy,
                        &ScoringProfile::metadata(),
                    );
                    let input = file_scoring_input(&filename, hashtags);
                    return self
                        .finish(input, result, None, submitter, Some(path))
                        .await;
                }
                Err(e) => {
                    warn!("content search unavailable, falling back to file heuristic: {}", e);
                }
            }
        }

        let result = scorer::score_file(
            &filename,
            &report,
            hashtags,
            &self.taxonomy,
            &ScoringProfile::file_upload(),
        );
        let input = file_scoring_input(&filename, hashtags);
        self.finish(input, result, None, submitter, Some(path)).await
    }

    /// Shared tail of both paths: classify, persist, or clean up.
    async fn finish(
        &self,
        input: ScoringInput,
        result: ValidationResult,
        video: Option<VideoMetadata>,
        submitter: &str,
        staged: Option<&Path>,
    ) -> Result<ValidationOutcome> {
        if !result.is_valid {
            info!(confidence = result.confidence, "submission rejected");
            if let Some(path) = staged {
                self.discard_staged(path).await;
            }
            return Ok(ValidationOutcome {
                result,
                assignment: None,
                video,
            });
        }

        let assignment = classify::classify(&input, &BUILTIN_MOBS);
        info!(
            mob = %assignment.mob_name,
            score = assignment.score,
            "submission classified"
        );

        let record = AcceptedVideo::new(
            &input.title,
            submitter,
            input.duration_secs,
            result.confidence,
        );
        // Persistence is best-effort for this store; the response always
        // reflects the scoring outcome.
        if let Err(e) = self.store.append(&assignment.mob_id, record) {
            warn!("failed to persist accepted video: {}", e);
        }

        Ok(ValidationOutcome {
            result,
            assignment: Some(assignment),
            video,
        })
    }

    /// Remove a rejected upload, but only if it sits in our staging area.
    async fn discard_staged(&self, path: &Path) {
        if !path.starts_with(&self.staging_dir) {
            return;
        }
        match tokio::fs::remove_file(path).await {
            Ok(()) => debug!(path = %path.display(), "removed staged file"),
            Err(e) => warn!(path = %path.display(), "failed to remove staged file: {}", e),
        }
    }
}

fn scoring_input_from_metadata(
    video: Option<&VideoMetadata>,
    hashtags: &str,
    kind: SourceKind,
) -> ScoringInput {
    ScoringInput {
        title: video.map(|v| v.title.clone()).unwrap_or_default(),
        description: video.map(|v| v.description.clone()).unwrap_or_default(),
        duration_secs: video.map(|v| v.duration_secs).unwrap_or(0),
        hashtags: hashtags.to_string(),
        platform: video.map(|v| v.platform.clone()).unwrap_or_default(),
        source: kind,
    }
}

fn file_scoring_input(filename: &str, hashtags: &str) -> ScoringInput {
    ScoringInput {
        title: filename.to_string(),
        description: String::new(),
        duration_secs: 0,
        hashtags: hashtags.to_string(),
        platform: "upload".to_string(),
        source: SourceKind::FileUpload,
    }
}

/// Shape-check a submitted URL: http(s) with a host, and either a direct
/// video file extension or a supported platform domain.
pub fn check_video_url(raw: &str) -> Result<SourceKind> {
    let parsed = Url::parse(raw)
        .map_err(|_| MilkMobError::Input(format!("invalid video url: {}", raw)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(MilkMobError::Input(format!(
            "unsupported url scheme '{}'; use http or https",
            parsed.scheme()
        )));
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| MilkMobError::Input(format!("invalid video url: {}", raw)))?
        .to_lowercase();

    let path = parsed.path().to_lowercase();
    if VIDEO_URL_EXTENSIONS
        .iter()
        .any(|ext| path.ends_with(&format!(".{}", ext)))
    {
        return Ok(SourceKind::DirectUrl);
    }

    if SUPPORTED_PLATFORM_DOMAINS
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{}", domain)))
    {
        return Ok(SourceKind::PlatformUrl);
    }

    Err(MilkMobError::Input(
        "unsupported video url; provide a direct video file link or a supported platform url"
            .to_string(),
    ))
}

#[cfg(test)]
mod tests;
