use std::collections::HashMap;

use crate::Item;

use super::ViewChange;

#[derive(Debug)]
pub(super) enum RawChange {
    Insert {
        index: usize,
        new_value: usize,
    },
    Remove {
        index: usize,
        old_value: usize,
    },
    Set {
        index: usize,
        old_value: usize,
        new_value: usize,
    },
    Move {
        old_index: usize,
        new_index: usize,
    },
}

impl RawChange {
    pub(super) fn to_view_change<'a, T>(&self, old: &'a [T], new: &'a [T]) -> ViewChange<'a, T> {
        match *self {
            RawChange::Insert { index, new_value } => ViewChange::Insert {
                index,
                new_value: &new[new_value],
            },
            RawChange::Remove { index, old_value } => ViewChange::Remove {
                index,
                old_value: &old[old_value],
            },
            RawChange::Set {
                index,
                old_value,
                new_value,
            } => ViewChange::Set {
                index,
                old_value: &old[old_value],
                new_value: &new[new_value],
            },
            RawChange::Move {
                old_index,
                new_index,
            } => ViewChange::Move {
                old_index,
                new_index,
            },
        }
    }
}

/// Computes a replay script that rewrites `old` into `new`.
///
/// Items are matched by id. Indexes in the script refer to the sequence as it
/// stands at that point of the replay, not to fixed positions in `old` or
/// `new`. Worst case is quadratic in the number of displaced items.
pub(super) fn diff_keyed<T>(old: &[T], new: &[T]) -> Vec<RawChange>
where
    T: Item + PartialEq,
{
    let new_pos: HashMap<&T::Id, usize> =
        new.iter().enumerate().map(|(i, x)| (x.id(), i)).collect();
    let old_pos: HashMap<&T::Id, usize> =
        old.iter().enumerate().map(|(i, x)| (x.id(), i)).collect();

    let mut script = Vec::new();

    // Descending order keeps the remaining indexes valid during replay.
    for (index, item) in old.iter().enumerate().rev() {
        if !new_pos.contains_key(item.id()) {
            script.push(RawChange::Remove {
                index,
                old_value: index,
            });
        }
    }

    // New indexes of the retained items, still in old order.
    let mut cur: Vec<usize> = old
        .iter()
        .filter_map(|item| new_pos.get(item.id()).copied())
        .collect();

    for j in 0..new.len() {
        if cur.get(j) == Some(&j) {
            continue;
        }
        // cur[..j] already reads 0..j, so j can only appear further right.
        match cur[j..].iter().position(|&v| v == j) {
            Some(offset) => {
                let k = j + offset;
                cur.remove(k);
                cur.insert(j, j);
                script.push(RawChange::Move {
                    old_index: k,
                    new_index: j,
                });
            }
            None => {
                cur.insert(j, j);
                script.push(RawChange::Insert {
                    index: j,
                    new_value: j,
                });
            }
        }
    }

    for (index, item) in new.iter().enumerate() {
        if let Some(&old_index) = old_pos.get(item.id()) {
            if old[old_index] != *item {
                script.push(RawChange::Set {
                    index,
                    old_value: old_index,
                    new_value: index,
                });
            }
        }
    }

    script
}
