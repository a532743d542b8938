// Video metadata extraction

pub mod ytdlp;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// What the extraction backend reports about a remote video.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    /// Zero means the backend did not report a duration.
    pub duration_secs: u64,
    /// Lowercase platform label ("youtube", "tiktok", ...).
    pub platform: String,
    pub uploader: String,
}

/// Narrow seam to whatever service can describe a video URL without
/// downloading it. Implementations must bound their own runtime.
#[async_trait]
pub trait MetadataExtractor: Send + Sync {
    async fn extract(&self, url: &str) -> Result<VideoMetadata>;

    /// Whether the backend can currently be reached at all.
    fn is_available(&self) -> bool {
        true
    }
}
