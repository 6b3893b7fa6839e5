//! Mutable context threaded through one document traversal.
//!
//! Every node is walked between a [`RenderState::checkpoint`] and a
//! [`RenderState::rewind`], so list frames, blockquote depth and span flags
//! return to their pre-entry values once the node's subtree is left, also
//! when the walk aborts half-way.

use crate::markers::{bullet, ordered_marker};
use crate::style::ActiveSpans;

/// Prefix repeated once per blockquote level.
pub(crate) const QUOTE_PREFIX: &str = "┃ ";

/// Indent repeated once per list level.
pub(crate) const LIST_INDENT: &str = "  ";

/// One entered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ListFrame {
    ordered: bool,
    /// Number of the next ordered item; unused for bullet lists.
    next_number: u64,
}

/// Boolean context flags.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Flags {
    heading: bool,
    strong: bool,
    italic: bool,
    list_item: bool,
    blockquote: bool,
}

/// Saved state to return to after a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Checkpoint {
    list_depth: usize,
    blockquote_depth: usize,
    flags: Flags,
}

/// Rendering context for one document.
///
/// The list nesting depth is the length of the frame stack, so the two can
/// never disagree.
#[derive(Debug, Default)]
pub(crate) struct RenderState {
    lists: Vec<ListFrame>,
    blockquote_depth: usize,
    flags: Flags,
}

impl RenderState {
    /// Capture the current nesting and flags.
    pub(crate) fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            list_depth: self.lists.len(),
            blockquote_depth: self.blockquote_depth,
            flags: self.flags,
        }
    }

    /// Return to a checkpoint taken before entering a node.
    pub(crate) fn rewind(&mut self, checkpoint: Checkpoint) {
        self.lists.truncate(checkpoint.list_depth);
        self.blockquote_depth = checkpoint.blockquote_depth;
        self.flags = checkpoint.flags;
    }

    /// Current list nesting depth (0 outside lists).
    pub(crate) fn list_depth(&self) -> usize {
        self.lists.len()
    }

    /// Enter a list. An ordered list starting at 0 is numbered from 1.
    pub(crate) fn push_list(&mut self, ordered: bool, start: u64) {
        self.lists.push(ListFrame {
            ordered,
            next_number: start.max(1),
        });
    }

    /// Marker for the next item of the innermost list.
    ///
    /// Ordered lists advance their counter. An item outside any list gets
    /// the first-level bullet.
    pub(crate) fn next_item_marker(&mut self) -> String {
        let depth = self.lists.len();
        match self.lists.last_mut() {
            Some(frame) if frame.ordered => {
                let number = frame.next_number;
                frame.next_number = frame.next_number.saturating_add(1);
                ordered_marker(number, depth)
            }
            _ => bullet(depth).to_owned(),
        }
    }

    /// Enter a blockquote and return the new depth.
    pub(crate) fn enter_blockquote(&mut self) -> usize {
        self.blockquote_depth += 1;
        self.flags.blockquote = true;
        self.blockquote_depth
    }

    pub(crate) fn enter_heading(&mut self) {
        self.flags.heading = true;
    }

    pub(crate) fn enter_strong(&mut self) {
        self.flags.strong = true;
    }

    pub(crate) fn enter_italic(&mut self) {
        self.flags.italic = true;
    }

    pub(crate) fn enter_list_item(&mut self) {
        self.flags.list_item = true;
    }

    pub(crate) fn in_list_item(&self) -> bool {
        self.flags.list_item
    }

    /// Spans that decide how text is styled.
    pub(crate) fn spans(&self) -> ActiveSpans {
        ActiveSpans {
            heading: self.flags.heading,
            strong: self.flags.strong,
            italic: self.flags.italic,
        }
    }

    /// Indentation written after a hard line break.
    ///
    /// Blockquotes take priority over list items.
    pub(crate) fn continuation_prefix(&self) -> String {
        if self.flags.blockquote {
            QUOTE_PREFIX.repeat(self.blockquote_depth)
        } else if self.flags.list_item {
            LIST_INDENT.repeat(self.lists.len())
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_list_counts_from_start() {
        let mut state = RenderState::default();
        state.push_list(true, 3);
        assert_eq!(state.next_item_marker(), "③");
        assert_eq!(state.next_item_marker(), "④");
    }

    #[test]
    fn test_ordered_list_start_zero_is_one() {
        let mut state = RenderState::default();
        state.push_list(true, 0);
        assert_eq!(state.next_item_marker(), "①");
    }

    #[test]
    fn test_nested_list_markers() {
        let mut state = RenderState::default();
        state.push_list(false, 0);
        assert_eq!(state.next_item_marker(), "•");
        state.push_list(true, 1);
        assert_eq!(state.next_item_marker(), "⑴");
        state.push_list(false, 0);
        assert_eq!(state.next_item_marker(), "▪");
        assert_eq!(state.list_depth(), 3);
    }

    #[test]
    fn test_item_outside_list() {
        let mut state = RenderState::default();
        assert_eq!(state.next_item_marker(), "•");
    }

    #[test]
    fn test_rewind_restores_everything() {
        let mut state = RenderState::default();
        state.push_list(true, 1);
        let checkpoint = state.checkpoint();

        state.push_list(false, 0);
        state.enter_list_item();
        state.enter_strong();
        state.enter_italic();
        state.enter_heading();
        state.enter_blockquote();
        state.enter_blockquote();

        state.rewind(checkpoint);
        assert_eq!(state.checkpoint(), checkpoint);
        assert_eq!(state.list_depth(), 1);
        assert!(!state.in_list_item());
        assert_eq!(state.spans(), ActiveSpans::default());
        assert_eq!(state.continuation_prefix(), "");
    }

    #[test]
    fn test_rewind_keeps_parent_counter() {
        let mut state = RenderState::default();
        state.push_list(true, 1);

        let checkpoint = state.checkpoint();
        state.enter_list_item();
        assert_eq!(state.next_item_marker(), "①");
        state.rewind(checkpoint);

        assert_eq!(state.next_item_marker(), "②");
    }

    #[test]
    fn test_continuation_prefix() {
        let mut state = RenderState::default();
        state.push_list(false, 0);
        state.push_list(false, 0);
        state.enter_list_item();
        assert_eq!(state.continuation_prefix(), "    ");

        state.enter_blockquote();
        state.enter_blockquote();
        assert_eq!(state.continuation_prefix(), "┃ ┃ ");
    }
}
