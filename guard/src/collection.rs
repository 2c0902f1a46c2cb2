//! Guards over sequences and other counted containers.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Display;

use crate::error::{ArgumentError, Result, ViolationKind, messages};

/// A container that knows how many elements it holds.
pub trait Collection {
    fn count(&self) -> usize;
}

impl<T> Collection for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    fn count(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Collection for HashSet<T, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for BTreeSet<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

/// Fail if any element is less than or equal to `threshold`.
///
/// A missing collection passes: there is nothing in it to violate the bound.
pub fn reject_collection_with_values_at_or_below<'a, I, T>(
    collection: Option<I>,
    threshold: T,
    param_name: &str,
) -> Result<()>
where
    I: IntoIterator<Item = &'a T>,
    T: PartialOrd + Display + 'a,
{
    let Some(collection) = collection else {
        return Ok(());
    };
    if collection.into_iter().any(|value| *value <= threshold) {
        return Err(ArgumentError::new(
            ViolationKind::Range,
            param_name,
            messages::values_must_exceed(&threshold),
        ));
    }
    Ok(())
}

/// Fail if the collection is missing or holds no elements.
pub fn reject_null_or_empty_collection<C>(collection: Option<&C>, param_name: &str) -> Result<()>
where
    C: Collection + ?Sized,
{
    match collection {
        Some(items) if items.count() > 0 => Ok(()),
        _ => Err(null_or_empty(param_name)),
    }
}

/// Read-only view variant of [`reject_null_or_empty_collection`].
pub fn reject_null_or_empty_read_only_collection<T>(
    collection: Option<&[T]>,
    param_name: &str,
) -> Result<()> {
    reject_null_or_empty_collection(collection, param_name)
}

fn null_or_empty(param_name: &str) -> ArgumentError {
    ArgumentError::new(
        ViolationKind::Emptiness,
        param_name,
        messages::NULL_OR_EMPTY_COLLECTION,
    )
}
