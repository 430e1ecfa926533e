/// Ordered collection of participant entries for the session.
///
/// This is the single authoritative state container. It grows only on
/// submission, shrinks only on explicit removal by position, and never
/// mutates an entry in place. Everything lives in memory for the life
/// of the process.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<Entry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a submitted draft to the end of the list.
    ///
    /// No validation, no deduplication. An all-empty draft is accepted
    /// like any other.
    pub fn submit(&mut self, draft: Draft) {
        self.entries.push(Entry::from(draft));
    }

    /// Drop the entry at `position`, keeping everything else in order.
    ///
    /// An out-of-range position matches nothing and removes nothing.
    /// Not an error.
    pub fn remove(&mut self, position: Position) {
        let mut i = 0;
        self.entries.retain(|_| {
            let keep = i != position;
            i += 1;
            keep
        });
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
}

impl Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (position, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{:<3}{}", position, entry)?;
        }
        Ok(())
    }
}

use super::draft::Draft;
use super::entry::Entry;
use crate::Position;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, opponents: &str) -> Draft {
        Draft {
            name: name.to_string(),
            opponents: opponents.to_string(),
        }
    }

    #[test]
    fn length_tracks_submissions() {
        let mut roster = Roster::new();
        for i in 0..5 {
            roster.submit(draft(&format!("player{}", i), "2"));
            assert!(roster.len() == i + 1);
        }
    }

    #[test]
    fn submission_appends_literal_values() {
        let mut roster = Roster::new();
        roster.submit(draft("Alice", "3"));
        assert!(roster.len() == 1);
        assert!(roster.entries()[0].name == "Alice");
        assert!(roster.entries()[0].opponents == "3");
    }

    #[test]
    fn empty_draft_is_accepted() {
        let mut roster = Roster::new();
        roster.submit(Draft::default());
        assert!(roster.len() == 1);
        assert!(roster.entries()[0].name.is_empty());
        assert!(roster.entries()[0].opponents.is_empty());
    }

    #[test]
    fn removal_keeps_later_entries() {
        let mut roster = Roster::new();
        roster.submit(draft("A", "1"));
        roster.submit(draft("B", "2"));
        roster.remove(0);
        assert!(roster.len() == 1);
        assert!(roster.entries()[0].name == "B");
    }

    #[test]
    fn removal_out_of_range_is_noop() {
        let mut roster = Roster::new();
        roster.submit(draft("A", "1"));
        roster.submit(draft("B", "2"));
        let before = roster.clone();
        roster.remove(5);
        assert!(roster == before);
    }

    #[test]
    fn removal_from_empty_is_noop() {
        let mut roster = Roster::new();
        roster.remove(0);
        assert!(roster.is_empty());
    }
}
