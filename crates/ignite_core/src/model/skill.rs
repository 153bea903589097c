//! Skill mastery domain model.
//!
//! # Responsibility
//! - Define the skill record with its ordered learning stages.
//! - Own the mastery-percentage derivation shared by all write paths.
//!
//! # Invariants
//! - `uuid` is stable; stage IDs are unique within their parent skill.
//! - `progress` always equals `round(100 × completed / total)` stages.
//! - `progress` is recomputed inside every stage mutation; there is no
//!   API that sets it independently.
//! - A skill with zero stages has progress 0.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a skill.
pub type SkillId = Uuid;

/// Identifier for a stage, unique within its parent skill.
pub type StageId = Uuid;

/// One step in a skill's learning timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillStage {
    pub uuid: StageId,
    pub title: String,
    pub is_completed: bool,
}

impl SkillStage {
    /// Creates an incomplete stage with a generated ID.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            title: title.into(),
            is_completed: false,
        }
    }
}

/// A tracked skill with staged mastery progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Stable global ID.
    pub uuid: SkillId,
    pub title: String,
    /// Free-text grouping label, e.g. `"Programming"`.
    pub category: String,
    /// Cached mastery percentage, 0-100. Derived from `stages`.
    pub progress: u8,
    /// Ordered learning timeline.
    pub stages: Vec<SkillStage>,
    /// Optional tutorial link shown by the presentation layer.
    pub video_url: Option<String>,
}

impl Skill {
    /// Creates a skill with a generated stable ID.
    ///
    /// Progress is initialized from the completion state of `stages`.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        stages: Vec<SkillStage>,
    ) -> Self {
        let mut skill = Self {
            uuid: Uuid::new_v4(),
            title: title.into(),
            category: category.into(),
            progress: 0,
            stages,
            video_url: None,
        };
        skill.recompute_progress();
        skill
    }

    /// Flips the named stage and recomputes `progress` in the same call.
    ///
    /// Returns `false` without mutating anything when `stage_id` is absent.
    pub fn toggle_stage(&mut self, stage_id: StageId) -> bool {
        let Some(stage) = self.stages.iter_mut().find(|s| s.uuid == stage_id) else {
            return false;
        };
        stage.is_completed = !stage.is_completed;
        self.recompute_progress();
        true
    }

    /// Returns how many stages are completed.
    pub fn completed_stage_count(&self) -> usize {
        self.stages.iter().filter(|s| s.is_completed).count()
    }

    pub(crate) fn recompute_progress(&mut self) {
        self.progress = mastery_percentage(self.completed_stage_count(), self.stages.len());
    }
}

/// Rounded mastery percentage for `completed` of `total` stages.
///
/// Zero total stages yields 0 rather than a division fault.
pub fn mastery_percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (100.0 * completed as f64 / total as f64).round() as u8
}
