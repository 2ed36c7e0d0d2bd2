//! Transcript module - Folding chat
//!
//! A flat sequence of messages partitioned by collapsible section markers.

mod comparison;
mod item;
mod sectioned;

pub use comparison::{ComparisonSelection, COMPARISON_SLOTS};
pub use item::{Section, SectionId, TranscriptItem, TranscriptMessage};
pub use sectioned::{SectionContent, SectionedTranscript};
