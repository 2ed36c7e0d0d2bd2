//! Sample data the three chat screens start from.

use crate::error::Result;
use crate::message::Message;
use crate::search::{ConversationCatalog, ConversationSummary, HistoryEntry, SuggestionIndex};
use crate::transcript::{SectionedTranscript, TranscriptItem};
use crate::tree::{Branch, BranchView, ConversationTree};

/// Messages of the open conversation on the standard chat screen.
pub fn current_chat() -> Vec<Message> {
    vec![
        Message::user(1, "How do I perform a git rebase?"),
        Message::assistant(
            2,
            "To perform a git rebase, you need to follow these steps: First, make sure your local branch is up to date. Then use the git rebase command followed by the branch name.",
        ),
        Message::user(3, "What if I encounter conflicts during rebase?"),
        Message::assistant(
            4,
            "When conflicts occur during a rebase, Git will pause the process. You will need to resolve each conflict manually by editing the files.",
        ),
    ]
}

/// Sidebar conversations of the standard chat screen.
pub fn conversation_catalog() -> ConversationCatalog {
    ConversationCatalog::new(
        vec![
            ConversationSummary::new(1, "Git Rebase Tutorial", "Today", "How to perform a git rebase safely..."),
            ConversationSummary::new(
                2,
                "React Component Design",
                "Today",
                "Component design patterns and best practices...",
            ),
        ],
        vec![
            ConversationSummary::new(
                3,
                "Data Engineer Project Summary",
                "Previous 30 Days",
                "Project summary and next steps for the data pipeline...",
            ),
            ConversationSummary::new(
                4,
                "AI Hackathon Team Names",
                "Previous 30 Days",
                "Team organization and project ideas...",
            ),
            ConversationSummary::new(
                5,
                "Human Eye Sensor Function",
                "Previous 30 Days",
                "Documentation for eye tracking implementation...",
            ),
            ConversationSummary::new(
                6,
                "Adding Wait in Vertex AI",
                "September",
                "Adding wait states to workflow implementation...",
            ),
        ],
    )
}

/// Earlier questions offered as input suggestions.
pub fn suggestion_index() -> SuggestionIndex {
    SuggestionIndex::new(vec![
        HistoryEntry::new("How do I perform a git rebase?", "Git Rebase Tutorial"),
        HistoryEntry::new("How to resolve conflicts during a git rebase?", "Git Rebase Tutorial"),
        HistoryEntry::new("What is git reset and how to use it?", "Git Commands Guide"),
        HistoryEntry::new("How to undo git rebase?", "Git Troubleshooting"),
        HistoryEntry::new("Git revert vs reset - what's the difference?", "Git Commands Guide"),
        HistoryEntry::new("How to use git cherry-pick?", "Git Advanced Features"),
    ])
}

/// Root conversation with two alternative continuations.
pub fn branching_tree() -> Result<ConversationTree> {
    ConversationTree::from_branches([
        Branch::root(
            0,
            vec![
                Message::user(1, "How do I perform a git rebase?"),
                Message::assistant(2, "To perform a git rebase, follow these steps..."),
                Message::user(3, "What if I encounter conflicts during rebase?"),
            ],
        ),
        Branch::new(
            1,
            Some(0),
            vec![
                Message::assistant(
                    4,
                    "If you encounter conflicts during a rebase, you'll need to resolve them manually...",
                ),
                Message::user(5, "How do I abort a rebase if needed?"),
            ],
        ),
        Branch::new(
            2,
            Some(0),
            vec![
                Message::user(6, "Can you explain the difference between merge and rebase?"),
                Message::assistant(7, "Certainly! The main difference between merge and rebase is..."),
            ],
        ),
    ])
}

pub fn branching_view() -> Result<BranchView> {
    Ok(BranchView::new(branching_tree()?))
}

/// Folding chat transcript with a single "Git Basics" section.
pub fn folding_transcript() -> SectionedTranscript {
    let mut items = vec![TranscriptItem::section(1, "Git Basics")];
    items.extend(
        [
            Message::user(2, "How do I perform a git rebase?"),
            Message::assistant(3, "To perform a git rebase, follow these steps..."),
            Message::user(5, "What if I encounter conflicts during rebase?"),
            Message::assistant(6, "If you encounter conflicts, here is how to resolve them..."),
            Message::user(7, "How do I use git cherry-pick?"),
            Message::assistant(8, "Git cherry-pick allows you to apply specific commits..."),
            Message::user(9, "What is the difference between merge and rebase?"),
            Message::assistant(10, "The main difference between merge and rebase is..."),
        ]
        .into_iter()
        .map(TranscriptItem::from),
    );
    if let Some(TranscriptItem::Message(first)) = items.get_mut(1) {
        first.has_section = true;
    }
    SectionedTranscript::new(items)
}
