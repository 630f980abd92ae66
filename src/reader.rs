use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::mem::{replace, swap};
use std::ops::Index;
use std::slice;

use derive_ex::derive_ex;

use crate::{Item, ViewList};

mod diff;

use diff::{diff_keyed, RawChange};

/// Tracks the view of a [`ViewList`] across reads.
///
/// A reader holds its own snapshot of the view and compares it to the list on
/// every [`read`](ViewReader::read), so the list itself keeps no record of
/// who is observing it. Any number of readers can track the same list, each
/// at its own pace, and dropping a reader requires no cleanup.
#[derive_ex(Default)]
#[default(Self::new())]
pub struct ViewReader<T> {
    prev: Vec<T>,
    curr: Vec<T>,
    primed: bool,
}

impl<T> ViewReader<T> {
    pub fn new() -> Self {
        Self {
            prev: Vec::new(),
            curr: Vec::new(),
            primed: false,
        }
    }

    /// Reads the current view and returns it along with the changes since
    /// the previous call.
    ///
    /// The first read reports the whole view as insertions.
    pub fn read(&mut self, list: &ViewList<T>) -> Delta<'_, T>
    where
        T: Item + Clone + PartialEq + 'static,
    {
        swap(&mut self.prev, &mut self.curr);
        self.curr.clear();
        self.curr.extend(list.view().iter().cloned());
        let first = !replace(&mut self.primed, true);
        let script = if first {
            Vec::new()
        } else {
            diff_keyed(&self.prev, &self.curr)
        };
        Delta {
            old: &self.prev,
            new: &self.curr,
            script,
            first,
        }
    }
}

/// The view at one read, plus the changes since the previous read.
pub struct Delta<'a, T> {
    old: &'a [T],
    new: &'a [T],
    script: Vec<RawChange>,
    first: bool,
}

impl<'a, T> Delta<'a, T> {
    /// Returns `true` for the delta produced by a reader's first read.
    pub fn is_first(&self) -> bool {
        self.first
    }

    pub fn len(&self) -> usize {
        self.new.len()
    }

    pub fn is_empty(&self) -> bool {
        self.new.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.new.get(index)
    }

    /// Iterates over the view as of this read.
    pub fn iter(&self) -> slice::Iter<'a, T> {
        self.new.iter()
    }

    /// Iterates over the changes since the previous read as a replay script.
    ///
    /// Applying the changes in order to the previously read view yields the
    /// view as of this read; each index is relative to the sequence state at
    /// that point of the replay. [`ViewChange::apply_to`] performs one step
    /// of such a replay.
    pub fn changes(&self) -> impl Iterator<Item = ViewChange<'a, T>> + '_ {
        use iter_n::iter2::*;
        if self.first {
            self.new
                .iter()
                .enumerate()
                .map(|(index, new_value)| ViewChange::Insert { index, new_value })
                .into_iter0()
        } else {
            let old = self.old;
            let new = self.new;
            self.script
                .iter()
                .map(move |change| change.to_view_change(old, new))
                .into_iter1()
        }
    }
}

impl<T> Index<usize> for Delta<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.get(index).expect("index out of bounds")
    }
}

impl<'a, T> IntoIterator for &'a Delta<'_, T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Delta<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.new).finish()
    }
}

/// One step of a view replay script.
#[derive(Debug, PartialEq)]
#[derive_ex(Clone, Copy, bound())]
pub enum ViewChange<'a, T: ?Sized> {
    Insert {
        index: usize,
        new_value: &'a T,
    },
    Remove {
        index: usize,
        old_value: &'a T,
    },
    Set {
        index: usize,
        old_value: &'a T,
        new_value: &'a T,
    },
    Move {
        old_index: usize,
        new_index: usize,
    },
}

impl<T: Clone> ViewChange<'_, T> {
    /// Applies this change to a sequence kept in sync with the view.
    pub fn apply_to(&self, items: &mut Vec<T>) {
        match *self {
            ViewChange::Insert { index, new_value } => items.insert(index, new_value.clone()),
            ViewChange::Remove { index, .. } => {
                items.remove(index);
            }
            ViewChange::Set { index, new_value, .. } => items[index] = new_value.clone(),
            ViewChange::Move {
                old_index,
                new_index,
            } => match old_index.cmp(&new_index) {
                Ordering::Less => items[old_index..=new_index].rotate_left(1),
                Ordering::Equal => {}
                Ordering::Greater => items[new_index..=old_index].rotate_right(1),
            },
        }
    }
}
