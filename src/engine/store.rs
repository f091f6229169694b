//! The variable store: named integer slots with an explicit garbage marker.
//!
//! The store is exclusively owned by the engine and mutated only through
//! matched-rule effects (`transition.rs`); renderers read it freely at any
//! time. Slots keep declaration order so displays are stable.

use crate::Value;

/// Ordered mapping from variable name to [`Value`].
///
/// `get` on a name the active lesson never declared returns `Garbage`; the
/// lesson loader seeds every name its rules reference, so in practice every
/// read hits a declared slot.
#[derive(Debug, Clone, Default)]
pub struct VarStore {
    slots: Vec<(&'static str, Value)>,
}

impl VarStore {
    pub fn new() -> Self {
        VarStore { slots: Vec::new() }
    }

    pub fn get(&self, name: &str) -> Value {
        self.slots.iter().find(|(n, _)| *n == name).map(|(_, v)| *v).unwrap_or(Value::Garbage)
    }

    /// Overwrite (or declare) a slot. Always succeeds.
    pub fn set(&mut self, name: &'static str, value: Value) {
        match self.slots.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.slots.push((name, value)),
        }
    }

    /// Replace the entire store. Used on lesson load and replay.
    pub fn reset(&mut self, initial: &[(&'static str, Value)]) {
        self.slots.clear();
        self.slots.extend_from_slice(initial);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.iter().any(|(n, _)| *n == name)
    }

    /// Slots in declaration order.
    pub fn snapshot(&self) -> Vec<(&'static str, Value)> {
        self.slots.clone()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().map(|(n, _)| *n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slot_reads_as_garbage() {
        let store = VarStore::new();
        assert_eq!(store.get("a"), Value::Garbage);
        assert_eq!(store.get("a").as_int(), None);
    }

    #[test]
    fn set_overwrites_and_reset_replaces() {
        let mut store = VarStore::new();
        store.set("a", Value::Int(10));
        store.set("a", Value::Int(42));
        assert_eq!(store.get("a"), Value::Int(42));

        store.reset(&[("x", Value::Garbage), ("y", Value::Int(7))]);
        assert!(!store.contains("a"));
        assert_eq!(store.get("x"), Value::Garbage);
        assert_eq!(store.get("y"), Value::Int(7));
    }

    #[test]
    fn garbage_never_compares_as_zero() {
        let garbage = Value::Garbage;
        assert!(!garbage.exceeds(Value::Int(-1)));
        assert!(!Value::Int(1).exceeds(garbage));
        assert_eq!(garbage.display(), "?");
    }

    #[test]
    fn snapshot_preserves_declaration_order() {
        let mut store = VarStore::new();
        store.set("b", Value::Int(2));
        store.set("a", Value::Int(1));
        let names: Vec<_> = store.names().collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
