//! SectionedTranscript - Messages and section markers in one ordered list
//!
//! Position is the only structural signal. A section owns the messages
//! after it up to the next section marker.

use serde::{Deserialize, Serialize};

use super::comparison::ComparisonSelection;
use super::item::{Section, SectionId, TranscriptItem};
use crate::error::{ChatStructureError, Result};
use crate::message::{Message, MessageId};

/// Title and messages of one section, as shown in a split view pane.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SectionContent {
    pub id: SectionId,
    pub title: String,
    pub messages: Vec<Message>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionedTranscript {
    items: Vec<TranscriptItem>,
    #[serde(default)]
    selection: ComparisonSelection,
    #[serde(default)]
    split_view: bool,
}

impl SectionedTranscript {
    pub fn new(items: Vec<TranscriptItem>) -> Self {
        Self {
            items,
            selection: ComparisonSelection::new(),
            split_view: false,
        }
    }

    pub fn items(&self) -> &[TranscriptItem] {
        &self.items
    }

    /// Section markers in transcript order
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.items.iter().filter_map(TranscriptItem::as_section)
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections().find(|s| s.id == id)
    }

    pub fn message_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_section()).count()
    }

    fn section_position(&self, id: SectionId) -> Result<usize> {
        self.items
            .iter()
            .position(|item| matches!(item, TranscriptItem::Section(s) if s.id == id))
            .ok_or(ChatStructureError::UnknownSection(id))
    }

    fn next_item_id(&self) -> Result<u64> {
        match self.items.iter().map(TranscriptItem::id).max() {
            Some(id) => id
                .checked_add(1)
                .ok_or(ChatStructureError::IdSpaceExhausted(id)),
            None => Ok(1),
        }
    }

    /// Splice a new expanded section directly above `message_id`.
    ///
    /// Existing items keep their relative order; nothing is removed. The
    /// title is stored as given; it only has to be non-blank.
    pub fn insert_section_before(
        &mut self,
        message_id: MessageId,
        title: &str,
    ) -> Result<Section> {
        if title.trim().is_empty() {
            return Err(ChatStructureError::EmptyTitle);
        }

        let position = self
            .items
            .iter()
            .position(|item| item.is_message_with_id(message_id))
            .ok_or(ChatStructureError::UnknownMessage(message_id))?;

        let section = Section::new(self.next_item_id()?, title);
        self.items
            .insert(position, TranscriptItem::Section(section.clone()));

        if let Some(TranscriptItem::Message(entry)) = self.items.get_mut(position + 1) {
            entry.has_section = true;
        }

        tracing::info!(
            section_id = section.id,
            message_id = message_id,
            position = position,
            "SectionedTranscript: Inserted section"
        );
        Ok(section)
    }

    /// Flip a section between expanded and collapsed; returns the new state
    pub fn toggle_section(&mut self, section_id: SectionId) -> Result<bool> {
        let position = self.section_position(section_id)?;
        match &mut self.items[position] {
            TranscriptItem::Section(section) => {
                section.is_expanded = !section.is_expanded;
                tracing::debug!(
                    section_id = section_id,
                    is_expanded = section.is_expanded,
                    "SectionedTranscript: Toggled section"
                );
                Ok(section.is_expanded)
            }
            TranscriptItem::Message(_) => Err(ChatStructureError::UnknownSection(section_id)),
        }
    }

    /// Messages strictly between the section and the next section marker
    /// (or the end of the transcript).
    pub fn messages_under(&self, section_id: SectionId) -> Result<Vec<Message>> {
        let start = self.section_position(section_id)?;
        let messages = self.items[start + 1..]
            .iter()
            .map_while(|item| match item {
                TranscriptItem::Section(_) => None,
                TranscriptItem::Message(entry) => Some(entry.message.clone()),
            })
            .collect();
        Ok(messages)
    }

    pub fn section_content(&self, section_id: SectionId) -> Result<SectionContent> {
        let title = self
            .section(section_id)
            .map(|s| s.title.clone())
            .ok_or(ChatStructureError::UnknownSection(section_id))?;
        Ok(SectionContent {
            id: section_id,
            title,
            messages: self.messages_under(section_id)?,
        })
    }

    /// Items left after folding: sections always show, messages under a
    /// collapsed section do not. Messages before the first section always show.
    pub fn visible_items(&self) -> Vec<&TranscriptItem> {
        let mut folded = false;
        self.items
            .iter()
            .filter(|item| match item {
                TranscriptItem::Section(section) => {
                    folded = !section.is_expanded;
                    true
                }
                TranscriptItem::Message(_) => !folded,
            })
            .collect()
    }

    /// Toggle a section in the two-slot comparison buffer
    pub fn select_for_comparison(&mut self, section_id: SectionId) -> Result<&[SectionId]> {
        self.section_position(section_id)?;
        let selected = self.selection.toggle(section_id);
        tracing::debug!(section_id = section_id, selected = ?selected, "SectionedTranscript: Comparison selection");
        Ok(selected)
    }

    pub fn selection(&self) -> &ComparisonSelection {
        &self.selection
    }

    pub fn comparison_ready(&self) -> bool {
        self.selection.is_ready()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Contents of the selected sections, in selection order
    pub fn comparison_contents(&self) -> Result<Vec<SectionContent>> {
        self.selection
            .selected()
            .iter()
            .map(|id| self.section_content(*id))
            .collect()
    }

    pub fn is_split_view(&self) -> bool {
        self.split_view
    }

    /// Enter or leave split view. Entering starts from an empty selection.
    pub fn toggle_split_view(&mut self) -> bool {
        self.split_view = !self.split_view;
        if self.split_view {
            self.selection.clear();
        }
        self.split_view
    }
}
