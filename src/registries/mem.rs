// font-install/src/registries/mem.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A registry that keeps font registrations in memory.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::io;

use crate::error::RegistryError;
use crate::registry::FontRegistry;

/// A registry that keeps font registrations in memory.
///
/// It can be told to reject every write, which is what registering without administrator rights
/// looks like.
#[derive(Debug, Default)]
pub struct MemRegistry {
    values: RefCell<BTreeMap<String, OsString>>,
    failure: Option<io::ErrorKind>,
}

impl MemRegistry {
    /// Creates an empty registry that accepts every write.
    pub fn new() -> MemRegistry {
        MemRegistry::default()
    }

    /// Creates a registry whose writes all fail with an error of the given kind.
    pub fn failing(kind: io::ErrorKind) -> MemRegistry {
        MemRegistry {
            values: RefCell::new(BTreeMap::new()),
            failure: Some(kind),
        }
    }

    /// Returns the file name registered under `value_name`, if any.
    pub fn get(&self, value_name: &str) -> Option<OsString> {
        self.values.borrow().get(value_name).cloned()
    }

    /// Returns a snapshot of every registration, ordered by value name.
    pub fn values(&self) -> BTreeMap<String, OsString> {
        self.values.borrow().clone()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl FontRegistry for MemRegistry {
    fn register_font(&self, value_name: &str, file_name: &OsStr) -> Result<(), RegistryError> {
        if let Some(kind) = self.failure {
            return Err(RegistryError::SetValue {
                value_name: value_name.to_owned(),
                data: file_name.to_string_lossy().into_owned(),
                source: io::Error::new(kind, "registry is read-only"),
            });
        }
        self.values
            .borrow_mut()
            .insert(value_name.to_owned(), file_name.to_owned());
        Ok(())
    }
}
