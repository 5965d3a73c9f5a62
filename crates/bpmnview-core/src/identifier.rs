//! Interned identifiers for BPMN elements.
//!
//! Every semantic element and DI record carries an XML `id`, and DI records
//! point back at semantic elements through `bpmnElement="..."`. [`Id`] interns
//! those strings once so references are `Copy` and compare in constant time.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner shared by every [`Id`].
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// An interned XML element identifier.
///
/// # Examples
///
/// ```
/// use bpmnview_core::identifier::Id;
///
/// let task = Id::new("Task_1");
/// let same = Id::new("Task_1");
///
/// assert_eq!(task, same);
/// assert_eq!(task, "Task_1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Calls `f` with the string this identifier was created from.
    fn with_str<R>(self, f: impl FnOnce(&str) -> R) -> R {
        with_interner(|interner| {
            let value = interner
                .resolve(self.0)
                .expect("Symbol should exist in interner");
            f(value)
        })
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.with_str(str::to_owned);
        f.write_str(&value)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.with_str(|value| value == other)
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("StartEvent_1");
        let id2 = Id::new("StartEvent_1");
        let id3 = Id::new("EndEvent_1");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "StartEvent_1");
    }

    #[test]
    fn test_display() {
        let id = Id::new("Flow_0x1y2z");
        assert_eq!(format!("{id}"), "Flow_0x1y2z");
    }

    #[test]
    fn test_from_str() {
        let id: Id = "Gateway_1".into();
        assert_eq!(id, Id::new("Gateway_1"));
    }

    #[test]
    fn test_hash_and_eq() {
        let mut map = HashMap::new();
        map.insert(Id::new("Lane_1"), "first");
        map.insert(Id::new("Lane_2"), "second");

        assert_eq!(map.get(&Id::new("Lane_1")), Some(&"first"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("Participant_1");

        assert!(id == "Participant_1");
        assert!(id != "Participant");
        assert!(Id::new("") == "");
    }
}
