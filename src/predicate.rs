use std::fmt;
use std::rc::Rc;

use derive_ex::derive_ex;
use parse_display::Display;


/// A test over items, used to derive the view of a [`ViewList`](crate::ViewList).
///
/// A predicate must be a pure function of the item: it is evaluated once per
/// item on every recomputation and must not rely on being called a particular
/// number of times. Cloning is cheap and clones share the underlying function.
///
/// The default predicate is [`Predicate::accept_all`].
#[derive_ex(Clone(bound()), Default)]
#[default(Self::accept_all())]
pub struct Predicate<T: 'static>(RawPredicate<T>);

#[derive_ex(Clone)]
enum RawPredicate<T: 'static> {
    AcceptAll,
    Test(Rc<dyn Fn(&T) -> Result<bool, PredicateError>>),
}

impl<T: 'static> Predicate<T> {
    /// Creates a predicate from an infallible test.
    pub fn new(f: impl Fn(&T) -> bool + 'static) -> Self {
        Self(RawPredicate::Test(Rc::new(move |item| Ok(f(item)))))
    }

    /// Creates a predicate from a test that can fail for individual items.
    ///
    /// A failure only affects the item it was reported for: the store
    /// excludes that item from the view and counts it in
    /// [`ViewList::skipped`](crate::ViewList::skipped).
    pub fn fallible(f: impl Fn(&T) -> Result<bool, PredicateError> + 'static) -> Self {
        Self(RawPredicate::Test(Rc::new(f)))
    }

    /// Creates the identity predicate, which accepts every item.
    pub fn accept_all() -> Self {
        Self(RawPredicate::AcceptAll)
    }

    /// Applies the predicate to one item.
    pub fn eval(&self, item: &T) -> Result<bool, PredicateError> {
        match &self.0 {
            RawPredicate::AcceptAll => Ok(true),
            RawPredicate::Test(f) => f(item),
        }
    }
}

impl<T: 'static> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            RawPredicate::AcceptAll => f.write_str("Predicate::accept_all()"),
            RawPredicate::Test(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Failure reported by a [`Predicate`] for a single item.
#[non_exhaustive]
#[derive(Clone, PartialEq, Eq, Display, Debug)]
#[display("predicate failed: {reason}")]
pub struct PredicateError {
    reason: String,
}

impl PredicateError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl std::error::Error for PredicateError {}
