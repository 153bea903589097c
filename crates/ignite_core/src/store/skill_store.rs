//! Skill mastery store.
//!
//! # Responsibility
//! - Own the skill collection and its stage-toggle operation.
//! - Guarantee the cached progress field tracks stage completion.
//!
//! # Invariants
//! - Stage toggle and progress recomputation happen inside one call;
//!   callers never observe a flipped stage with stale progress.
//! - Inserted skills get their progress recomputed on entry, so the
//!   cached field can never arrive inconsistent.

use crate::model::skill::{Skill, SkillId, SkillStage, StageId};
use log::debug;

/// Owned collection of tracked skills.
#[derive(Debug, Clone, Default)]
pub struct SkillStore {
    skills: Vec<Skill>,
}

impl SkillStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates and appends a skill whose stages all start incomplete.
    pub fn add_skill(
        &mut self,
        title: impl Into<String>,
        category: impl Into<String>,
        stage_titles: &[&str],
    ) -> SkillId {
        let stages = stage_titles
            .iter()
            .map(|title| SkillStage::new(*title))
            .collect();
        self.insert_skill(Skill::new(title, category, stages))
    }

    /// Appends a prepared skill, recomputing its progress on entry.
    pub fn insert_skill(&mut self, mut skill: Skill) -> SkillId {
        // A caller-built skill must not smuggle in a stale cached percentage.
        skill.recompute_progress();
        let id = skill.uuid;
        self.skills.push(skill);
        debug!("event=skill_added module=skills uuid={id} total={}", self.skills.len());
        id
    }

    /// Removes the skill with `id`. Returns `false` when `id` is absent.
    pub fn delete_skill(&mut self, id: SkillId) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s.uuid != id);
        let removed = self.skills.len() < before;
        if removed {
            debug!("event=skill_deleted module=skills uuid={id} total={}", self.skills.len());
        }
        removed
    }

    /// Flips the named stage and atomically refreshes the parent skill's
    /// progress. Returns `false` when either id is absent.
    pub fn toggle_stage(&mut self, skill_id: SkillId, stage_id: StageId) -> bool {
        let Some(skill) = self.skills.iter_mut().find(|s| s.uuid == skill_id) else {
            return false;
        };
        let toggled = skill.toggle_stage(stage_id);
        if toggled {
            debug!(
                "event=stage_toggled module=skills skill={skill_id} stage={stage_id} progress={}",
                skill.progress
            );
        }
        toggled
    }

    /// Looks up one skill by id.
    pub fn skill(&self, id: SkillId) -> Option<&Skill> {
        self.skills.iter().find(|s| s.uuid == id)
    }

    /// Skills in display order.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
