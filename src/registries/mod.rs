// font-install/src/registries/mod.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Implementations of [`FontRegistry`](crate::registry::FontRegistry).
//!
//! The Windows registry is the real store. The in-memory registry lets the installer run against
//! a scratch directory without touching the system.

#[cfg(target_family = "windows")]
pub mod windows;
#[cfg(target_family = "windows")]
pub use self::windows::WindowsRegistry;

mod mem;

pub use self::mem::MemRegistry;
