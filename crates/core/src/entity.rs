//! Entity trait: identity that survives changes to other attributes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identity key. Two entities with equal keys are the same entity even if
    /// their other attributes differ.
    type Key: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identity key.
    fn key(&self) -> Self::Key;

    /// Whether `other` denotes the same entity.
    fn same_entity(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
