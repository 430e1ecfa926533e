/// Which form input a keystroke belongs to.
///
/// Each input gets its own key, so editing one field can never clobber
/// the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Opponents,
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Opponents => write!(f, "opponents"),
        }
    }
}

/// The in-progress, uncommitted values of the entry form.
///
/// Lives in the form alone; the roster only ever sees a snapshot taken
/// at submission time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub opponents: String,
}

impl Draft {
    /// Overwrite the addressed field, leaving the other untouched.
    pub fn edit(&mut self, field: Field, value: String) {
        log::trace!("EDIT {}", field);
        match field {
            Field::Name => self.name = value,
            Field::Opponents => self.opponents = value,
        }
    }

    /// Snapshot the current values and reset the form to empty strings.
    pub fn take(&mut self) -> Draft {
        std::mem::take(self)
    }
}

use std::fmt::Display;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_are_independent() {
        let mut draft = Draft::default();
        draft.edit(Field::Name, "Alice".to_string());
        draft.edit(Field::Opponents, "3".to_string());
        assert!(draft.name == "Alice");
        assert!(draft.opponents == "3");
        draft.edit(Field::Opponents, "5".to_string());
        assert!(draft.name == "Alice");
        assert!(draft.opponents == "5");
    }

    #[test]
    fn take_resets_to_empty() {
        let mut draft = Draft {
            name: "Alice".to_string(),
            opponents: "3".to_string(),
        };
        let snapshot = draft.take();
        assert!(snapshot.name == "Alice");
        assert!(snapshot.opponents == "3");
        assert!(draft == Draft::default());
    }
}
