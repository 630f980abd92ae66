use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::mem::replace;
use std::ops::Index;

use derive_ex::derive_ex;
use serde::{Deserialize, Serialize};
use slabmap::SlabMap;

use crate::{Item, Predicate};


/// A list of items unique by id, with a view derived from a [`Predicate`].
///
/// The list owns two collections at once: the master collection holding every
/// item in insertion order, and the view holding the items currently accepted
/// by the active predicate, in master order. Applying a predicate never
/// discards master items, so any filter can be reversed by applying another
/// one ([`Predicate::accept_all`] restores the full list).
///
/// Every mutation recomputes the view against the active predicate, so the
/// view is always consistent with the master collection.
#[derive_ex(Default)]
#[default(Self::new())]
pub struct ViewList<T: Item + 'static> {
    order: Vec<usize>,
    values: SlabMap<T>,
    index: HashMap<T::Id, usize>,
    view: Vec<usize>,
    predicate: Predicate<T>,
    skipped: usize,
}

impl<T: Item + 'static> ViewList<T> {
    /// Creates an empty list with the identity predicate active.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            values: SlabMap::new(),
            index: HashMap::new(),
            view: Vec::new(),
            predicate: Predicate::accept_all(),
            skipped: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut this = Self::new();
        this.reserve(capacity);
        this
    }

    pub fn capacity(&self) -> usize {
        self.order.capacity()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.order.reserve(additional);
        self.values.reserve(additional);
        self.index.reserve(additional);
    }

    /// Returns the number of items in the master collection.
    ///
    /// The view length is available through [`View::len`].
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the item with the given id, regardless of view membership.
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        let key = *self.index.get(id)?;
        Some(&self.values[key])
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates over the master collection in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.order, &self.values)
    }

    /// Returns the current view.
    ///
    /// The view contains the items accepted by the active predicate, in
    /// master order. It borrows the list, so it reflects exactly one state
    /// and cannot observe later mutations.
    pub fn view(&self) -> View<'_, T> {
        View {
            keys: &self.view,
            values: &self.values,
        }
    }

    /// Returns the number of items excluded from the view because the
    /// predicate failed for them during the last recomputation.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Replaces the whole master collection, keeping the active predicate.
    ///
    /// If two of the given items share an id, no change is made and the
    /// offending id is returned.
    pub fn replace_all(&mut self, items: Vec<T>) -> Result<(), DuplicateId<T::Id>> {
        let mut incoming = Self::with_capacity(items.len());
        for item in items {
            incoming.insert_raw(item)?;
        }
        self.order = incoming.order;
        self.values = incoming.values;
        self.index = incoming.index;
        self.recompute();
        Ok(())
    }

    /// Replaces the active predicate and recomputes the view.
    ///
    /// The master collection is untouched, so applying a different predicate
    /// later can bring previously hidden items back.
    pub fn apply_predicate(&mut self, predicate: Predicate<T>) {
        self.predicate = predicate;
        self.recompute();
    }

    /// Appends one item to the master collection.
    ///
    /// If an item with the same id is already present, no change is made and
    /// the id is returned.
    pub fn insert(&mut self, item: T) -> Result<(), DuplicateId<T::Id>> {
        self.insert_raw(item)?;
        self.recompute();
        Ok(())
    }

    /// Removes the item with the given id and returns it.
    ///
    /// Returns `None` and leaves the list unchanged if the id is not present.
    pub fn remove(&mut self, id: &T::Id) -> Option<T> {
        let key = self.index.remove(id)?;
        self.order.retain(|&k| k != key);
        let removed = self.values.remove(key);
        self.recompute();
        removed
    }

    /// Removes every item. The active predicate is retained.
    pub fn clear(&mut self) {
        self.order.clear();
        self.view.clear();
        self.index.clear();
        self.values = SlabMap::new();
        self.skipped = 0;
    }

    /// Modifies the item with the given id in place.
    ///
    /// Returns `false` and leaves the list unchanged if the id is not
    /// present. The closure must not reassign the item's id.
    ///
    /// # Panics
    ///
    /// Panics if the closure changes the item's id.
    pub fn update(&mut self, id: &T::Id, f: impl FnOnce(&mut T)) -> bool {
        let Some(&key) = self.index.get(id) else {
            return false;
        };
        let item = &mut self.values[key];
        f(item);
        assert!(item.id() == id, "update must not change the item id");
        self.recompute();
        true
    }

    /// Inserts the item, or replaces the item that already has its id.
    ///
    /// A replaced item keeps its position in the master collection and is
    /// returned.
    pub fn upsert(&mut self, item: T) -> Option<T> {
        if let Some(&key) = self.index.get(item.id()) {
            let old = replace(&mut self.values[key], item);
            self.recompute();
            Some(old)
        } else {
            let id = item.id().clone();
            let key = self.values.insert(item);
            self.index.insert(id, key);
            self.order.push(key);
            self.recompute();
            None
        }
    }

    fn insert_raw(&mut self, item: T) -> Result<(), DuplicateId<T::Id>> {
        let id = item.id().clone();
        if self.index.contains_key(&id) {
            return Err(DuplicateId::new(id));
        }
        let key = self.values.insert(item);
        self.index.insert(id, key);
        self.order.push(key);
        Ok(())
    }

    fn recompute(&mut self) {
        self.view.clear();
        self.skipped = 0;
        for &key in &self.order {
            match self.predicate.eval(&self.values[key]) {
                Ok(true) => self.view.push(key),
                Ok(false) => {}
                Err(_) => self.skipped += 1,
            }
        }
    }
}

impl<T: Item + Clone + 'static> Clone for ViewList<T> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len());
        for item in self.iter() {
            let key = list.values.insert(item.clone());
            list.index.insert(item.id().clone(), key);
            list.order.push(key);
        }
        list.predicate = self.predicate.clone();
        list.recompute();
        list
    }
}

impl<T: Item + Debug + 'static> Debug for ViewList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Item + 'static> TryFrom<Vec<T>> for ViewList<T> {
    type Error = DuplicateId<T::Id>;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        list.replace_all(items)?;
        Ok(list)
    }
}

impl<'a, T: Item + 'static> IntoIterator for &'a ViewList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed snapshot of the items currently accepted by the predicate.
#[derive_ex(Clone, Copy, bound())]
pub struct View<'a, T: Item> {
    keys: &'a [usize],
    values: &'a SlabMap<T>,
}

impl<'a, T: Item> View<'a, T> {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        let key = *self.keys.get(index)?;
        Some(&self.values[key])
    }

    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.keys, self.values)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Item> Index<usize> for View<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).expect("index out of bounds")
    }
}

impl<'a, T: Item> IntoIterator for &'a View<'_, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Item + Debug> Debug for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[derive_ex(Clone(bound()))]
pub struct Iter<'a, T> {
    keys: &'a [usize],
    values: &'a SlabMap<T>,
    index: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(keys: &'a [usize], values: &'a SlabMap<T>) -> Self {
        Self {
            keys,
            values,
            index: 0,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let key = *self.keys.get(self.index)?;
        self.index += 1;
        Some(&self.values[key])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.keys.len() - self.index;
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Error returned when an operation would store two items with the same id.
///
/// The operation that returned this error did not modify the list.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DuplicateId<I> {
    id: I,
}

impl<I> DuplicateId<I> {
    fn new(id: I) -> Self {
        Self { id }
    }

    /// The id that was already present.
    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn into_id(self) -> I {
        self.id
    }
}

impl<I: Debug> fmt::Display for DuplicateId<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate item id {:?}", self.id)
    }
}

impl<I: Debug> std::error::Error for DuplicateId<I> {}

impl<T: Item + Serialize + 'static> Serialize for ViewList<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Item + Deserialize<'de> + 'static> Deserialize<'de> for ViewList<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ViewListVisitor<T>(PhantomData<fn(T)>);
        impl<'de, T: Item + Deserialize<'de> + 'static> serde::de::Visitor<'de> for ViewListVisitor<T> {
            type Value = ViewList<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut list = ViewList::new();
                if let Some(size) = seq.size_hint() {
                    list.reserve(size);
                }
                while let Some(item) = seq.next_element()? {
                    list.insert_raw(item).map_err(serde::de::Error::custom)?;
                }
                list.recompute();
                Ok(list)
            }
        }
        deserializer.deserialize_seq(ViewListVisitor(PhantomData))
    }
}
