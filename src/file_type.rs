// font-install/src/file_type.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The type of a font file, as determined by its extension.

use std::path::Path;

/// The container types this crate knows how to install.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileType {
    /// A TrueType font (`.ttf`).
    TrueType,
    /// An OpenType font (`.otf`).
    OpenType,
}

impl FileType {
    /// Determines the file type from the extension of `path`.
    ///
    /// The comparison is case-insensitive. Returns `None` for any other extension, including
    /// collections (`.ttc`/`.otc`) and paths with no extension at all.
    pub fn from_path<P>(path: P) -> Option<FileType>
    where
        P: AsRef<Path>,
    {
        let extension = path.as_ref().extension()?.to_str()?;
        match &*extension.to_ascii_lowercase() {
            "ttf" => Some(FileType::TrueType),
            "otf" => Some(FileType::OpenType),
            _ => None,
        }
    }
}
