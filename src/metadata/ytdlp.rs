// yt-dlp wrapper for URL metadata extraction
// Runs `yt-dlp -J` against the URL and parses the JSON dump. The call is
// bounded by a timeout and never holds any shared state.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::process::Command;
use tokio::time::timeout;

use crate::error::{MilkMobError, Result};
use crate::tools;

use super::{MetadataExtractor, VideoMetadata};

pub struct YtDlpExtractor {
    timeout: Duration,
}

impl YtDlpExtractor {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[derive(Debug, Deserialize)]
struct YtDlpDump {
    title: Option<String>,
    description: Option<String>,
    duration: Option<f64>,
    extractor: Option<String>,
    uploader: Option<String>,
}

#[async_trait]
impl MetadataExtractor for YtDlpExtractor {
    async fn extract(&self, url: &str) -> Result<VideoMetadata> {
        let mut cmd = Command::new(tools::ytdlp_path());
        cmd.args(["-J", "--no-warnings", "--skip-download"])
            .arg(url)
            .kill_on_drop(true);

        let output = timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| {
                MilkMobError::Extraction(format!(
                    "timed out after {}s inspecting {}",
                    self.timeout.as_secs(),
                    url
                ))
            })?
            .map_err(|e| MilkMobError::Extraction(format!("failed to run yt-dlp: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MilkMobError::Extraction(format!(
                "yt-dlp failed for {}: {}",
                url,
                stderr.trim()
            )));
        }

        let dump: YtDlpDump = serde_json::from_slice(&output.stdout)
            .map_err(|e| MilkMobError::Extraction(format!("failed to parse yt-dlp output: {}", e)))?;

        Ok(VideoMetadata {
            title: dump.title.unwrap_or_default(),
            description: dump.description.unwrap_or_default(),
            duration_secs: dump.duration.map(|d| d.max(0.0) as u64).unwrap_or(0),
            platform: normalize_platform(dump.extractor.as_deref()),
            uploader: dump.uploader.unwrap_or_default(),
        })
    }

    fn is_available(&self) -> bool {
        tools::is_tool_available("yt-dlp")
    }
}

/// Normalize an extractor label like "youtube:shorts" to a bare lowercase
/// platform name.
fn normalize_platform(extractor: Option<&str>) -> String {
    extractor
        .unwrap_or_default()
        .split(':')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_platform() {
        assert_eq!(normalize_platform(Some("Youtube")), "youtube");
        assert_eq!(normalize_platform(Some("youtube:shorts")), "youtube");
        assert_eq!(normalize_platform(None), "");
    }

    #[test]
    fn test_parse_dump_fields() {
        let json = r#"{
            "title": "Milk chugging challenge",
            "description": "got milk",
            "duration": 42.7,
            "extractor": "youtube:tab",
            "uploader": "MilkFan",
            "view_count": 1234
        }"#;
        let dump: YtDlpDump = serde_json::from_str(json).unwrap();
        assert_eq!(dump.title.as_deref(), Some("Milk chugging challenge"));
        assert_eq!(dump.duration, Some(42.7));

        // Missing fields default cleanly.
        let dump: YtDlpDump = serde_json::from_str("{}").unwrap();
        assert!(dump.title.is_none());
        assert!(dump.duration.is_none());
    }
}
