//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Batches are plain entities; products are aggregates and expose their id
/// through `AggregateRoot` instead.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
