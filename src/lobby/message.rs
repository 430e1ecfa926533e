/// User interaction events that mutate lobby state.
///
/// The view layer never touches the roster directly; every mutation is
/// dispatched through [`Roster::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Submit(Draft),
    Remove(Position),
}

impl Roster {
    pub fn apply(&mut self, message: Message) {
        log::debug!("{}", message);
        match message {
            Message::Submit(draft) => self.submit(draft),
            Message::Remove(position) => self.remove(position),
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Message::Submit(draft) => write!(f, "SUBMIT {}", draft.name),
            Message::Remove(position) => write!(f, "REMOVE {}", position),
        }
    }
}

use super::draft::Draft;
use super::roster::Roster;
use crate::Position;
use std::fmt::Display;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_reaches_both_operations() {
        let mut roster = Roster::new();
        roster.apply(Message::Submit(Draft {
            name: "Alice".to_string(),
            opponents: "3".to_string(),
        }));
        roster.apply(Message::Submit(Draft {
            name: "Bob".to_string(),
            opponents: "1".to_string(),
        }));
        roster.apply(Message::Remove(0));
        assert!(roster.len() == 1);
        assert!(roster.entries()[0].name == "Bob");
    }
}
