// font-install/src/registry.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A common interface to the store that makes installed fonts visible to applications.

use std::ffi::OsStr;

use crate::error::RegistryError;

/// A place installed fonts are announced to the system.
pub trait FontRegistry {
    /// Records that the font file `file_name`, which lives in the fonts directory, is installed
    /// under `value_name`.
    ///
    /// An existing entry with the same value name is overwritten.
    fn register_font(&self, value_name: &str, file_name: &OsStr) -> Result<(), RegistryError>;
}

impl<'a, R> FontRegistry for &'a R
where
    R: FontRegistry + ?Sized,
{
    #[inline]
    fn register_font(&self, value_name: &str, file_name: &OsStr) -> Result<(), RegistryError> {
        (**self).register_font(value_name, file_name)
    }
}
