// font-install/src/loader.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Provides a common interface to the font parser that reads table data out of font binaries.

use std::sync::Arc;

use crate::error::ParseError;
use crate::name_id::NameId;

/// A four-byte OpenType table tag, e.g. `*b"name"`.
pub type TableTag = [u8; 4];

/// The tag of the naming table.
pub const TABLE_TAG_NAME: TableTag = *b"name";

/// The US English Windows language ID.
pub const LANGUAGE_ID_EN_US: u16 = 0x0409;

/// The platform a `name` record was written for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Unicode platform (0).
    Unicode,
    /// Macintosh platform (1).
    Macintosh,
    /// ISO platform (2), deprecated.
    Iso,
    /// Windows platform (3).
    Windows,
    /// Custom platform (4).
    Custom,
}

/// A single decoded record from a `name` table.
#[derive(Clone, Debug, PartialEq)]
pub struct NameEntry {
    /// What the string describes.
    pub name_id: NameId,
    /// The platform the record targets.
    pub platform: Platform,
    /// The platform-specific language ID.
    pub language_id: u16,
    /// The decoded string, exactly as stored (trailing NULs included).
    pub value: String,
}

impl NameEntry {
    /// Orders duplicate records: Windows US English first, then any Windows record, then the
    /// rest. Lower is better.
    pub(crate) fn preference(&self) -> u8 {
        match (self.platform, self.language_id) {
            (Platform::Windows, LANGUAGE_ID_EN_US) => 0,
            (Platform::Windows, _) => 1,
            _ => 2,
        }
    }
}

/// Parses raw font data and exposes the pieces needed to describe the font.
///
/// Any OpenType-table-aware parser can sit behind this trait. The default is
/// [`TtfLoader`](crate::loaders::ttf::TtfLoader).
pub trait Loader: Sized {
    /// Loads a font from raw font data (the contents of a `.ttf`/`.otf` file).
    ///
    /// Fails if the data is not a font container the parser understands.
    fn from_bytes(font_data: Arc<Vec<u8>>) -> Result<Self, ParseError>;

    /// Returns true if and only if the font contains a table with the given tag.
    fn has_table(&self, tag: TableTag) -> bool;

    /// Returns every record of the `name` table that could be decoded to a string, in table
    /// order.
    fn name_entries(&self) -> Vec<NameEntry>;
}
