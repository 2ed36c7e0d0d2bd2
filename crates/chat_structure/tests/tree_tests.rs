//! Tests for the branching conversation tree

use chat_structure::fixtures;
use chat_structure::{
    Branch, BranchView, ChatStructureError, ConversationTree, Message, SendOutcome,
};

fn rebase_tree() -> ConversationTree {
    ConversationTree::new(vec![
        Message::user(1, "How do I perform a git rebase?"),
        Message::assistant(2, "To perform a git rebase, follow these steps..."),
        Message::user(3, "What if I encounter conflicts?"),
    ])
}

#[test]
fn test_create_branch_scenario() {
    let mut tree = rebase_tree();

    let branch = tree.create_branch(0, "How do I abort a rebase?").unwrap();
    assert_eq!(branch.id(), 1);
    assert_eq!(branch.messages().len(), 2);

    let chain = tree.resolve_chain(1).unwrap();
    assert_eq!(chain.len(), 5);
    let ids: Vec<_> = chain.iter().map(Message::id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(chain[3].content(), "How do I abort a rebase?");
}

#[test]
fn test_chain_puts_ancestors_first() {
    let mut tree = fixtures::branching_tree().unwrap();
    let grandchild = tree.create_branch(1, "And how do I continue?").unwrap().id();

    let chain = tree.resolve_chain(grandchild).unwrap();
    let ids: Vec<_> = chain.iter().map(Message::id).collect();
    // root, then branch 1, then the new branch
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 8, 9]);

    // sibling branch 2 is not part of branch 1's history
    let sibling: Vec<_> = tree.resolve_chain(2).unwrap().iter().map(Message::id).collect();
    assert_eq!(sibling, vec![1, 2, 3, 6, 7]);
}

#[test]
fn test_new_ids_exceed_existing_ones() {
    let mut tree = fixtures::branching_tree().unwrap();

    for parent in [0, 2, 1, 3] {
        let max_branch = tree.branches().map(Branch::id).max().unwrap();
        let max_message = tree.last_message_id().unwrap();

        let branch = tree.create_branch(parent, "next").unwrap();
        assert!(branch.id() > max_branch);
        assert!(branch.messages().iter().all(|m| m.id() > max_message));
    }
    assert_eq!(tree.len(), 7);
}

#[test]
fn test_ids_exhausted_leave_tree_unchanged() {
    let mut tree =
        ConversationTree::from_branches([Branch::root(0, vec![Message::user(u64::MAX, "hi")])])
            .unwrap();

    assert_eq!(
        tree.create_branch(0, "x").unwrap_err(),
        ChatStructureError::IdSpaceExhausted(u64::MAX)
    );
    assert_eq!(
        tree.append_message(0, "x").unwrap_err(),
        ChatStructureError::IdSpaceExhausted(u64::MAX)
    );
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.resolve_chain(0).unwrap().len(), 1);
}

#[test]
fn test_append_keeps_branch_order() {
    let mut tree = rebase_tree();
    tree.append_message(0, "Thanks!").unwrap();

    let root = tree.branch(0).unwrap();
    let ids: Vec<_> = root.messages().iter().map(Message::id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert!(root.ends_with_assistant());
}

#[test]
fn test_unknown_branch_errors() {
    let tree = rebase_tree();
    assert_eq!(
        tree.resolve_chain(42).unwrap_err(),
        ChatStructureError::UnknownBranch(42)
    );
    assert_eq!(
        tree.fork_points(42).unwrap_err(),
        ChatStructureError::UnknownBranch(42)
    );
}

#[test]
fn test_from_branches_validation() {
    assert_eq!(
        ConversationTree::from_branches([Branch::new(1, Some(0), vec![])]).unwrap_err(),
        ChatStructureError::MissingRoot
    );
    assert_eq!(
        ConversationTree::from_branches([Branch::root(0, vec![]), Branch::root(1, vec![])])
            .unwrap_err(),
        ChatStructureError::MultipleRoots(vec![0, 1])
    );
    assert_eq!(
        ConversationTree::from_branches([Branch::root(0, vec![]), Branch::new(1, Some(5), vec![])])
            .unwrap_err(),
        ChatStructureError::InvalidParent(5)
    );
    assert_eq!(
        ConversationTree::from_branches([Branch::root(0, vec![]), Branch::root(0, vec![])])
            .unwrap_err(),
        ChatStructureError::DuplicateBranch(0)
    );
}

#[test]
fn test_cycle_is_reported_not_looped() {
    let tree = ConversationTree::from_branches([
        Branch::root(0, vec![Message::user(1, "root")]),
        Branch::new(1, Some(3), vec![Message::user(2, "a")]),
        Branch::new(2, Some(1), vec![Message::user(3, "b")]),
        Branch::new(3, Some(2), vec![Message::user(4, "c")]),
    ])
    .unwrap();

    assert_eq!(
        tree.resolve_chain(2).unwrap_err(),
        ChatStructureError::CycleDetected(2)
    );
    assert_eq!(tree.resolve_chain(0).unwrap().len(), 1);
}

#[test]
fn test_serde_roundtrip_revalidates() {
    let mut tree = fixtures::branching_tree().unwrap().with_placeholder_reply("pending");
    tree.create_branch(2, "Which one should I use?").unwrap();

    let json = serde_json::to_string(&tree).unwrap();
    let restored: ConversationTree = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, tree);
    assert_eq!(restored.placeholder_reply(), "pending");

    let broken = r#"{"branches":[{"id":1,"parent_id":0,"messages":[]}],"placeholder_reply":"x"}"#;
    assert!(serde_json::from_str::<ConversationTree>(broken).is_err());
}

#[test]
fn test_branch_view_routing_on_fixture() {
    let mut view = fixtures::branching_view().unwrap();
    assert_eq!(view.active(), 0);

    // root ends on a user turn, so the message is appended in place
    assert_eq!(view.send_message("Any tips?").unwrap(), SendOutcome::Appended(0));
    assert_eq!(view.tree().len(), 3);

    // now the root ends on the placeholder reply, so the next message forks
    assert_eq!(view.send_message("One more thing").unwrap(), SendOutcome::Branched(3));
    assert_eq!(view.active(), 3);
    assert_eq!(view.tree().branch(3).unwrap().parent_id(), Some(0));

    view.set_active(1).unwrap();
    assert_eq!(view.branch_label(view.active()), "Branch 1");
    assert_eq!(
        view.set_active(99).unwrap_err(),
        ChatStructureError::UnknownBranch(99)
    );
}

#[test]
fn test_branch_view_comparison_pane() {
    let mut view = BranchView::new(rebase_tree());
    view.force_branch("Alternative question").unwrap();

    view.toggle_comparison(0).unwrap();
    let active = view.active_chain().unwrap();
    let compared = view.comparison_chain().unwrap().unwrap();
    assert_eq!(active.len(), 5);
    assert_eq!(compared.len(), 3);

    view.clear_comparison();
    assert!(view.comparison_chain().unwrap().is_none());
}
