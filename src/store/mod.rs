// Mob catalog store
// Shared mutable state behind a narrow trait: the pipeline appends,
// the read side aggregates. The in-memory implementation is the real
// store for this demo-grade system and the fake for tests alike.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{MilkMobError, Result};

/// Denormalized record of one accepted submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptedVideo {
    pub id: Uuid,
    pub title: String,
    pub submitter: String,
    pub duration_secs: u64,
    pub confidence: f64,
    pub accepted_at: DateTime<Utc>,
}

impl AcceptedVideo {
    pub fn new(title: &str, submitter: &str, duration_secs: u64, confidence: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            submitter: submitter.to_string(),
            duration_secs,
            confidence,
            accepted_at: Utc::now(),
        }
    }
}

/// Read-side aggregate for one mob.
#[derive(Debug, Clone, Serialize)]
pub struct MobFeed {
    pub mob_id: String,
    pub videos: Vec<AcceptedVideo>,
    /// Mean confidence across the feed, as a rounded percentage.
    pub average_confidence_pct: u32,
}

pub trait MobStore: Send + Sync {
    /// Append a record to a mob's collection, creating the collection if
    /// absent. Atomic with respect to concurrent appends.
    fn append(&self, mob_id: &str, video: AcceptedVideo) -> Result<()>;

    /// The mob's accepted videos and aggregate confidence. An unknown or
    /// empty mob yields an empty feed.
    fn feed(&self, mob_id: &str) -> Result<MobFeed>;

    /// Video counts per mob, for the status report.
    fn counts(&self) -> Result<HashMap<String, usize>>;
}

/// In-memory store. The lock is held only for the duration of one
/// operation, never across scoring or collaborator calls.
pub struct InMemoryMobStore {
    inner: Mutex<HashMap<String, Vec<AcceptedVideo>>>,
}

impl InMemoryMobStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
        }
    }

    /// A store pre-populated with the demo catalog, so the feed pages
    /// have content before the first submission arrives.
    pub fn with_demo_videos() -> Self {
        let store = Self::new();
        let seed: [(&str, &str, &str, u64, f64); 10] = [
            ("mob001", "Skateboarding while drinking milk challenge!", "SkaterMike23", 23, 0.89),
            ("mob001", "Parkour milk run - extreme edition", "ParkourPro", 45, 0.92),
            ("mob002", "Aesthetic milk photography tips", "ArtisticAnna", 67, 0.85),
            ("mob002", "Milk splash art tutorial", "CreativeCarl", 120, 0.88),
            ("mob003", "I LOVE MILK!!! #mukbang #asmr #milk #drink", "MukbangQueen", 10, 0.95),
            ("mob003", "Trying different types of milk ASMR", "ASMRAngel", 180, 0.91),
            ("mob004", "Post-workout protein milk shake", "FitnessFred", 34, 0.87),
            ("mob004", "Why milk is perfect for muscle recovery", "GymGuru", 95, 0.83),
            ("mob005", "Perfect cereal and milk breakfast", "MomLife23", 28, 0.79),
            ("mob005", "Family milk time traditions", "DadBlogger", 156, 0.81),
        ];
        for (mob_id, title, submitter, duration, confidence) in seed {
            // Seeding cannot fail on a fresh store.
            let _ = store.append(mob_id, AcceptedVideo::new(title, submitter, duration, confidence));
        }
        store
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<AcceptedVideo>>>> {
        self.inner
            .lock()
            .map_err(|_| MilkMobError::Store("mob store lock poisoned".to_string()))
    }
}

impl Default for InMemoryMobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MobStore for InMemoryMobStore {
    fn append(&self, mob_id: &str, video: AcceptedVideo) -> Result<()> {
        let mut map = self.lock()?;
        map.entry(mob_id.to_string()).or_default().push(video);
        Ok(())
    }

    fn feed(&self, mob_id: &str) -> Result<MobFeed> {
        let map = self.lock()?;
        let videos = map.get(mob_id).cloned().unwrap_or_default();
        let average_confidence_pct = if videos.is_empty() {
            0
        } else {
            let mean: f64 =
                videos.iter().map(|v| v.confidence).sum::<f64>() / videos.len() as f64;
            (mean * 100.0).round() as u32
        };
        Ok(MobFeed {
            mob_id: mob_id.to_string(),
            videos,
            average_confidence_pct,
        })
    }

    fn counts(&self) -> Result<HashMap<String, usize>> {
        let map = self.lock()?;
        Ok(map.iter().map(|(k, v)| (k.clone(), v.len())).collect())
    }
}
