use serde::{Deserialize, Serialize};

use super::item::SectionId;

/// Number of sections shown side by side in split view.
pub const COMPARISON_SLOTS: usize = 2;

/// Rolling selection of sections to compare.
///
/// Selecting a selected id deselects it. Selecting into a full buffer drops
/// the first-selected id.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparisonSelection {
    selected: Vec<SectionId>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: SectionId) -> &[SectionId] {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            if self.selected.len() >= COMPARISON_SLOTS {
                self.selected.remove(0);
            }
            self.selected.push(id);
        }
        &self.selected
    }

    pub fn selected(&self) -> &[SectionId] {
        &self.selected
    }

    pub fn contains(&self, id: SectionId) -> bool {
        self.selected.contains(&id)
    }

    /// Both comparison slots are filled
    pub fn is_ready(&self) -> bool {
        self.selected.len() == COMPARISON_SLOTS
    }

    /// How many more sections the user has to pick
    pub fn remaining(&self) -> usize {
        COMPARISON_SLOTS.saturating_sub(self.selected.len())
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
