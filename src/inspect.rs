// Local file inspection
// Existence and size are the only facts the scorer needs from disk.

use std::path::Path;

use async_trait::async_trait;

use crate::constants::UPLOAD_EXTENSIONS;

/// What the inspector learned about a local file. A missing file is a
/// report, not an error; the scorer decides what it means.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReport {
    pub exists: bool,
    pub size_bytes: u64,
}

#[async_trait]
pub trait FileInspector: Send + Sync {
    async fn inspect(&self, path: &Path) -> FileReport;
}

/// Filesystem-backed inspector.
pub struct FsInspector;

#[async_trait]
impl FileInspector for FsInspector {
    async fn inspect(&self, path: &Path) -> FileReport {
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_file() => FileReport {
                exists: true,
                size_bytes: meta.len(),
            },
            _ => FileReport::default(),
        }
    }
}

/// Whether the file extension is an accepted upload type.
pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| UPLOAD_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}
