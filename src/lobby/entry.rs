/// One submitted player record in the session list.
///
/// Both fields are free text. The opponent count is never parsed to a
/// number anywhere downstream, so it stays a string here.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "numberOfOpponents")]
    pub opponents: String,
}

/// Draft promotion
///
/// An entry is a committed snapshot of a draft. Nothing is checked or
/// coerced on the way in.
impl From<Draft> for Entry {
    fn from(draft: Draft) -> Entry {
        Entry {
            name: draft.name,
            opponents: draft.opponents,
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<16} vs {}", self.name, self.opponents)
    }
}

use super::draft::Draft;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
