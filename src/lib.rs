// font-install/src/lib.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `font-install` copies TrueType and OpenType fonts into the system fonts directory and
//! registers them so that applications can find them.
//!
//! The interesting part is reading a font's `name` table to decide what to call it:
//!
//! * The display name is the font's full name (name ID 4). A font without one is named after its
//!   file.
//! * The family name is the typographic family (name ID 16), falling back to the legacy family
//!   (name ID 1). It may be empty.
//!
//! The rest is plumbing. [`Installer`](install::Installer) reads each file, builds a
//! [`FontRecord`](font::FontRecord), writes the file into the configured fonts directory, and
//! records it in a [`FontRegistry`](registry::FontRegistry): the Windows registry in production,
//! or [`MemRegistry`](registries::MemRegistry) elsewhere.
//!
//! ```no_run
//! use font_install::config::InstallConfig;
//! use font_install::install::Installer;
//! use font_install::registries::MemRegistry;
//!
//! let installer = Installer::new(InstallConfig::new().fonts_dir("scratch"), MemRegistry::new());
//! let report = installer.install_path("fonts", |_| ()).unwrap();
//! println!("{} installed, {} failed", report.installed.len(), report.failures.len());
//! ```

pub mod config;
pub mod error;
pub mod file_type;
pub mod font;
pub mod install;
pub mod loader;
pub mod loaders;
pub mod name_id;
pub mod registries;
pub mod registry;
