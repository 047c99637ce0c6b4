//! Write-once, type-erased storage behind an option set.
//!
//! The registry keeps two co-indexed maps: stored values and the descriptor of
//! each value's runtime type. A key is present in both or in neither, and once
//! set it is never replaced or removed.

use std::collections::HashMap;

use crate::value::Slot;
use crate::{Descriptor, ErrorKind, OptionKey, Value};

#[derive(Default)]
pub(crate) struct Registry {
    values: HashMap<OptionKey, Slot>,
    descriptors: HashMap<OptionKey, Descriptor>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::DuplicatedKey`] if the key already holds a value
    pub(crate) fn set(&mut self, key: OptionKey, value: Value) -> Result<(), ErrorKind> {
        if self.values.contains_key(&key) {
            return Err(ErrorKind::DuplicatedKey);
        }

        let (slot, descriptor) = value.into_parts();
        self.descriptors.insert(key.clone(), descriptor);
        self.values.insert(key, slot);
        Ok(())
    }

    /// Returns the stored value and its descriptor.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::NotFound`] if the key was never set
    pub(crate) fn get(&self, key: &str) -> Result<(&Slot, Descriptor), ErrorKind> {
        match (self.values.get(key), self.descriptors.get(key)) {
            (Some(slot), Some(descriptor)) => Ok((slot, *descriptor)),
            _ => Err(ErrorKind::NotFound),
        }
    }

    pub(crate) fn descriptor(&self, key: &str) -> Option<Descriptor> {
        self.descriptors.get(key).copied()
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &OptionKey> {
        self.values.keys()
    }
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
