//! Level save/load interchange.
//!
//! A versioned JSON envelope around a level record, the unit the external
//! editor persists. Loading is permissive about gameplay content (the
//! cores don't validate levels) - content problems are logged, not
//! rejected - but structural and version problems surface as [`LoadError`].

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::level::{LevelIssue, PhysicsLevel, PuzzleLevel};

/// Envelope version written by this build
pub const ENVELOPE_VERSION: u32 = 1;

/// A level of either mode, tagged for interchange
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", content = "level", rename_all = "snake_case")]
pub enum LevelRecord {
    Puzzle(PuzzleLevel),
    Physics(PhysicsLevel),
}

impl LevelRecord {
    /// Content problems in the wrapped level (advisory)
    pub fn validate(&self) -> Vec<LevelIssue> {
        match self {
            LevelRecord::Puzzle(level) => level.validate(),
            LevelRecord::Physics(level) => level.validate(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LevelEnvelope {
    version: u32,
    record: LevelRecord,
}

/// Why a saved level could not be loaded
#[derive(Debug)]
pub enum LoadError {
    /// Written by a newer build than this one understands
    UnsupportedVersion(u32),
    /// Malformed JSON or wrong shape
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::UnsupportedVersion(v) => {
                write!(f, "unsupported level envelope version {v}")
            }
            LoadError::Parse(e) => write!(f, "malformed level data: {e}"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Parse(e) => Some(e),
            LoadError::UnsupportedVersion(_) => None,
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}

/// Serialize a level record into the current envelope
pub fn save_level(record: &LevelRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string(&LevelEnvelope {
        version: ENVELOPE_VERSION,
        record: record.clone(),
    })
}

/// Parse a saved level. Content problems are logged and tolerated;
/// structural problems and future versions are errors.
pub fn load_level(json: &str) -> Result<LevelRecord, LoadError> {
    let envelope: LevelEnvelope = serde_json::from_str(json)?;
    if envelope.version > ENVELOPE_VERSION {
        return Err(LoadError::UnsupportedVersion(envelope.version));
    }

    for issue in envelope.record.validate() {
        log::warn!("loaded level has a content problem: {issue}");
    }
    Ok(envelope.record)
}
