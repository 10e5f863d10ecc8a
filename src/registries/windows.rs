// font-install/src/registries/windows.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The Windows font registry under `HKEY_LOCAL_MACHINE`.

use log::debug;
use std::ffi::OsStr;
use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_SET_VALUE};
use winreg::RegKey;

use crate::config::InstallConfig;
use crate::error::RegistryError;
use crate::registry::FontRegistry;

/// The Windows font registry.
///
/// Writing requires administrator rights. The key is opened for each registration and closed
/// when the `RegKey` drops, whether or not the write succeeded.
#[derive(Clone, Debug)]
pub struct WindowsRegistry {
    key: String,
}

impl WindowsRegistry {
    /// Targets the given subkey of `HKEY_LOCAL_MACHINE`.
    pub fn new<S>(key: S) -> WindowsRegistry
    where
        S: Into<String>,
    {
        WindowsRegistry { key: key.into() }
    }

    /// Targets the subkey named by `config`.
    #[inline]
    pub fn from_config(config: &InstallConfig) -> WindowsRegistry {
        WindowsRegistry::new(config.registry_key.clone())
    }
}

impl FontRegistry for WindowsRegistry {
    fn register_font(&self, value_name: &str, file_name: &OsStr) -> Result<(), RegistryError> {
        let fonts_key = RegKey::predef(HKEY_LOCAL_MACHINE)
            .open_subkey_with_flags(&self.key, KEY_SET_VALUE)
            .map_err(|source| RegistryError::Open {
                key: self.key.clone(),
                source,
            })?;

        fonts_key
            .set_value(value_name, &file_name)
            .map_err(|source| RegistryError::SetValue {
                value_name: value_name.to_owned(),
                data: file_name.to_string_lossy().into_owned(),
                source,
            })?;
        debug!("set HKLM\\{}\\{} = {:?}", self.key, value_name, file_name);
        Ok(())
    }
}
