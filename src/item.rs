use std::fmt::Debug;
use std::hash::Hash;

/// A record that can be stored in a [`ViewList`](crate::ViewList).
///
/// Every item carries a stable identity: the id is assigned when the item is
/// created and is never reassigned for the lifetime of the item. The store
/// keys all identity-based operations on this id and never uses an item's
/// position as a substitute for it.
///
/// Payload fields are opaque to the store; they are only ever inspected
/// through a [`Predicate`](crate::Predicate) supplied by the caller.
pub trait Item {
    /// The identity type.
    ///
    /// `Debug` is required so that identity errors such as
    /// [`DuplicateId`](crate::DuplicateId) can always be reported.
    type Id: Eq + Hash + Clone + Debug;

    /// Returns the identity of this item.
    fn id(&self) -> &Self::Id;
}
