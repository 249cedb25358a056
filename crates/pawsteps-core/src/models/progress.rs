//! Versioned training-progress records and their migration chain.
//!
//! Training progress is the one store whose persisted shape has changed
//! across releases. Historical shapes are kept as explicit types and decoded
//! by the version number stored alongside the blob; a pure migration chain
//! rewrites any prior version into the current shape on read.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Current schema version written for training-progress blobs.
pub const PROGRESS_SCHEMA_VERSION: u32 = 2;

/// Training progress, current shape (version 2).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgress {
    /// Identifier of this progress record
    pub id: String,

    /// Lesson ids the handler has marked completed overall
    #[serde(default)]
    pub completed_lessons: Vec<String>,

    /// Free-form overall notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Per-lesson notes, added in version 2
    #[serde(default)]
    pub lesson_notes: HashMap<String, String>,
}

/// Training progress as written by version 1 releases: no per-lesson notes.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingProgressV1 {
    pub id: String,
    #[serde(default)]
    pub completed_lessons: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A training-progress blob decoded at whichever version it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionedProgress {
    V1(TrainingProgressV1),
    V2(TrainingProgress),
}

impl VersionedProgress {
    /// Decodes a payload according to its stored schema version.
    ///
    /// Unknown versions are decoded as the current shape; forward
    /// compatibility is the caller's reset-to-default fallback.
    pub fn decode(version: u32, payload: &str) -> Result<Self> {
        match version {
            1 => Ok(Self::V1(serde_json::from_str(payload)?)),
            _ => Ok(Self::V2(serde_json::from_str(payload)?)),
        }
    }

    /// Runs the migration chain from the decoded version to the current
    /// shape. Pure: no storage side effects.
    pub fn migrate(self) -> TrainingProgress {
        match self {
            Self::V1(v1) => Self::V2(migrate_v1_to_v2(v1)).migrate(),
            Self::V2(current) => current,
        }
    }
}

/// V1 -> V2: fill the missing `lesson_notes` map, preserve everything else.
fn migrate_v1_to_v2(v1: TrainingProgressV1) -> TrainingProgress {
    TrainingProgress {
        id: v1.id,
        completed_lessons: v1.completed_lessons,
        notes: v1.notes,
        lesson_notes: HashMap::new(),
    }
}
