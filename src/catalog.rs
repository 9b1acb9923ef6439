//! Read-only content catalog consumed by the algorithms.
//!
//! Tracks, per-track assessments and module lists, and the achievement
//! catalog are authored outside this crate; the hosting application's
//! content loader builds one `ContentCatalog` at startup and the algorithms
//! only ever look things up in it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;
use crate::error::AlgoError;
use crate::types::{Assessment, Module, Track};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCatalog {
    tracks: Vec<Track>,
    /// Assessment per track id.
    assessments: BTreeMap<String, Assessment>,
    /// Module templates per track id, in catalog declaration order.
    modules: BTreeMap<String, Vec<Module>>,
    achievements: Vec<Achievement>,
}

impl ContentCatalog {
    pub fn new(
        tracks: Vec<Track>,
        assessments: Vec<Assessment>,
        modules_by_track: BTreeMap<String, Vec<Module>>,
        achievements: Vec<Achievement>,
    ) -> Self {
        let assessments = assessments
            .into_iter()
            .map(|a| (a.track.clone(), a))
            .collect();
        Self {
            tracks,
            assessments,
            modules: modules_by_track,
            achievements,
        }
    }

    /// Parse a catalog from the JSON document the content pipeline produces.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, track_id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    pub fn assessment(&self, track_id: &str) -> Option<&Assessment> {
        self.assessments.get(track_id)
    }

    /// Module templates for a track, in declaration order.
    pub fn modules(&self, track_id: &str) -> Option<&[Module]> {
        self.modules.get(track_id).map(Vec::as_slice)
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Check that every declared track can actually run the product flows.
    ///
    /// Reports the first track that has no assessment, no questions, or no
    /// modules. Hosts call this once at load time so the session flows can
    /// assume usable content.
    pub fn validate(&self) -> Result<(), AlgoError> {
        if self.tracks.is_empty() {
            return Err(AlgoError::EmptyCatalog("no tracks declared".to_string()));
        }

        for track in &self.tracks {
            match self.assessments.get(&track.id) {
                None => {
                    return Err(AlgoError::EmptyCatalog(format!(
                        "track {} has no assessment",
                        track.id
                    )));
                }
                Some(assessment) if assessment.questions.is_empty() => {
                    return Err(AlgoError::EmptyCatalog(format!(
                        "track {} has an assessment with no questions",
                        track.id
                    )));
                }
                Some(_) => {}
            }

            match self.modules.get(&track.id) {
                None => {
                    return Err(AlgoError::EmptyCatalog(format!(
                        "track {} has no modules",
                        track.id
                    )));
                }
                Some(modules) if modules.is_empty() => {
                    return Err(AlgoError::EmptyCatalog(format!(
                        "track {} has no modules",
                        track.id
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}
