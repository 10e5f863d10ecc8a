// font-install/src/config.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Where fonts get installed to.

use std::path::PathBuf;

#[cfg(target_family = "windows")]
use log::warn;
#[cfg(target_family = "windows")]
use std::ffi::OsString;
#[cfg(target_family = "windows")]
use std::os::windows::ffi::OsStringExt;
#[cfg(target_family = "windows")]
use winapi::shared::minwindef::{MAX_PATH, UINT};
#[cfg(target_family = "windows")]
use winapi::um::sysinfoapi;

/// The fonts directory of a stock Windows installation.
pub const DEFAULT_FONTS_DIR: &str = r"C:\Windows\Fonts";

/// The `HKEY_LOCAL_MACHINE` subkey listing installed fonts.
pub const DEFAULT_FONTS_REGISTRY_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion\Fonts";

/// Installation targets.
///
/// The defaults point at the system font store. Tests and unusual setups can redirect both the
/// fonts directory and the registry key.
#[derive(Clone, Debug, PartialEq)]
pub struct InstallConfig {
    /// The directory font files are copied into.
    pub fonts_dir: PathBuf,
    /// The registry subkey, relative to `HKEY_LOCAL_MACHINE`, that fonts are registered under.
    pub registry_key: String,
    /// Whether a copied font file is deleted again when registering it fails.
    pub rollback_on_registry_failure: bool,
}

impl Default for InstallConfig {
    fn default() -> InstallConfig {
        InstallConfig {
            fonts_dir: default_fonts_dir(),
            registry_key: DEFAULT_FONTS_REGISTRY_KEY.to_owned(),
            rollback_on_registry_failure: true,
        }
    }
}

impl InstallConfig {
    /// Returns the default configuration for this system.
    #[inline]
    pub fn new() -> InstallConfig {
        InstallConfig::default()
    }

    /// Sets the directory font files are copied into.
    pub fn fonts_dir<P>(mut self, fonts_dir: P) -> InstallConfig
    where
        P: Into<PathBuf>,
    {
        self.fonts_dir = fonts_dir.into();
        self
    }

    /// Sets the registry subkey fonts are registered under.
    pub fn registry_key<S>(mut self, registry_key: S) -> InstallConfig
    where
        S: Into<String>,
    {
        self.registry_key = registry_key.into();
        self
    }

    /// Sets whether a failed registration deletes the copied file.
    pub fn rollback(mut self, rollback: bool) -> InstallConfig {
        self.rollback_on_registry_failure = rollback;
        self
    }
}

#[cfg(target_family = "windows")]
fn default_fonts_dir() -> PathBuf {
    let mut buffer = vec![0; MAX_PATH];
    let len = unsafe { sysinfoapi::GetWindowsDirectoryW(buffer.as_mut_ptr(), buffer.len() as UINT) };
    if len == 0 || len as usize > buffer.len() {
        warn!("GetWindowsDirectoryW failed; assuming {}", DEFAULT_FONTS_DIR);
        return PathBuf::from(DEFAULT_FONTS_DIR);
    }
    buffer.truncate(len as usize);

    let mut path = PathBuf::from(OsString::from_wide(&buffer));
    path.push("Fonts");
    path
}

#[cfg(not(target_family = "windows"))]
fn default_fonts_dir() -> PathBuf {
    PathBuf::from(DEFAULT_FONTS_DIR)
}
