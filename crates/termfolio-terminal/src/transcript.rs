//! Append-only transcript of the session.

use crate::block::Block;

/// How an entry is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Echo of what the user typed.
    Command,
    Response,
    Error,
    Ascii,
}

/// One line-group of terminal output. Never changes after it is pushed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: u64,
    pub kind: EntryKind,
    pub body: Block,
}

/// Ordered entries with ids that keep counting across `clear`.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its id.
    pub fn push(&mut self, kind: EntryKind, body: Block) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry { id, kind, body });
        id
    }

    /// Drop every entry. Ids are not reused.
    pub fn clear(&mut self) {
        log::debug!("clearing {} transcript entries", self.entries.len());
        self.entries = Vec::new();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Id the next pushed entry will get.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase() {
        let mut t = Transcript::new();
        assert_eq!(t.push(EntryKind::Command, Block::text("a")), 0);
        assert_eq!(t.push(EntryKind::Response, Block::text("b")), 1);
        assert_eq!(t.len(), 2);
        assert_eq!(t.last().unwrap().kind, EntryKind::Response);
    }

    #[test]
    fn clear_keeps_counter() {
        let mut t = Transcript::new();
        t.push(EntryKind::Command, Block::text("a"));
        t.push(EntryKind::Command, Block::text("b"));
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.push(EntryKind::Command, Block::text("c")), 2);
        assert_eq!(t.entries()[0].id, 2);
    }

    #[test]
    fn entries_in_push_order() {
        let mut t = Transcript::new();
        for s in ["x", "y", "z"] {
            t.push(EntryKind::Response, Block::text(s));
        }
        let texts: Vec<&str> = t.entries().iter().filter_map(|e| e.body.as_text()).collect();
        assert_eq!(texts, ["x", "y", "z"]);
        assert_eq!(t.next_id(), 3);
    }
}
