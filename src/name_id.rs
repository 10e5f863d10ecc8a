// font-install/src/name_id.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Identifiers for the strings stored in a font's `name` table.

use std::fmt::{self, Display, Formatter};

/// The semantic role of a `name` table string.
///
/// These are taken from the OpenType specification:
/// <https://docs.microsoft.com/en-us/typography/opentype/spec/name#name-ids>.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NameId {
    /// Copyright notice.
    Copyright,
    /// The legacy font family name, limited to four styles per family.
    FontFamily,
    /// The legacy subfamily name: "Regular", "Bold", "Italic", or "Bold Italic".
    FontSubfamily,
    /// Unique font identifier.
    UniqueId,
    /// The complete, human-readable name of the font, e.g. "Arial Bold".
    FullName,
    /// Version string.
    Version,
    /// PostScript name.
    PostScriptName,
    /// Trademark notice.
    Trademark,
    /// Manufacturer name.
    Manufacturer,
    /// Designer name.
    Designer,
    /// Description of the typeface.
    Description,
    /// URL of the font vendor.
    VendorUrl,
    /// URL of the typeface designer.
    DesignerUrl,
    /// License description.
    License,
    /// URL where the license can be found.
    LicenseUrl,
    /// The typographic family, which groups any number of styles under one name.
    PreferredFamily,
    /// The typographic subfamily.
    PreferredSubfamily,
    /// Macintosh-only compatible full name.
    CompatibleFull,
    /// Sample text.
    SampleText,
    /// PostScript CID findfont name.
    PostScriptCid,
    /// WWS family name.
    WwsFamily,
    /// WWS subfamily name.
    WwsSubfamily,
    /// Light background palette.
    LightBackgroundPalette,
    /// Dark background palette.
    DarkBackgroundPalette,
    /// Variations PostScript name prefix.
    VariationsPostScriptNamePrefix,
    /// Any other ID, including the font-specific range starting at 256.
    Other(u16),
}

impl NameId {
    /// Maps a raw name ID to its identifier.
    pub fn from_u16(id: u16) -> NameId {
        match id {
            0 => NameId::Copyright,
            1 => NameId::FontFamily,
            2 => NameId::FontSubfamily,
            3 => NameId::UniqueId,
            4 => NameId::FullName,
            5 => NameId::Version,
            6 => NameId::PostScriptName,
            7 => NameId::Trademark,
            8 => NameId::Manufacturer,
            9 => NameId::Designer,
            10 => NameId::Description,
            11 => NameId::VendorUrl,
            12 => NameId::DesignerUrl,
            13 => NameId::License,
            14 => NameId::LicenseUrl,
            16 => NameId::PreferredFamily,
            17 => NameId::PreferredSubfamily,
            18 => NameId::CompatibleFull,
            19 => NameId::SampleText,
            20 => NameId::PostScriptCid,
            21 => NameId::WwsFamily,
            22 => NameId::WwsSubfamily,
            23 => NameId::LightBackgroundPalette,
            24 => NameId::DarkBackgroundPalette,
            25 => NameId::VariationsPostScriptNamePrefix,
            other => NameId::Other(other),
        }
    }

    /// Returns the raw name ID.
    pub fn to_u16(self) -> u16 {
        match self {
            NameId::Copyright => 0,
            NameId::FontFamily => 1,
            NameId::FontSubfamily => 2,
            NameId::UniqueId => 3,
            NameId::FullName => 4,
            NameId::Version => 5,
            NameId::PostScriptName => 6,
            NameId::Trademark => 7,
            NameId::Manufacturer => 8,
            NameId::Designer => 9,
            NameId::Description => 10,
            NameId::VendorUrl => 11,
            NameId::DesignerUrl => 12,
            NameId::License => 13,
            NameId::LicenseUrl => 14,
            NameId::PreferredFamily => 16,
            NameId::PreferredSubfamily => 17,
            NameId::CompatibleFull => 18,
            NameId::SampleText => 19,
            NameId::PostScriptCid => 20,
            NameId::WwsFamily => 21,
            NameId::WwsSubfamily => 22,
            NameId::LightBackgroundPalette => 23,
            NameId::DarkBackgroundPalette => 24,
            NameId::VariationsPostScriptNamePrefix => 25,
            NameId::Other(id) => id,
        }
    }
}

impl From<u16> for NameId {
    #[inline]
    fn from(id: u16) -> NameId {
        NameId::from_u16(id)
    }
}

impl Display for NameId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let label = match *self {
            NameId::Copyright => "copyright",
            NameId::FontFamily => "font family",
            NameId::FontSubfamily => "font subfamily",
            NameId::UniqueId => "unique id",
            NameId::FullName => "full name",
            NameId::Version => "version",
            NameId::PostScriptName => "PostScript name",
            NameId::Trademark => "trademark",
            NameId::Manufacturer => "manufacturer",
            NameId::Designer => "designer",
            NameId::Description => "description",
            NameId::VendorUrl => "vendor URL",
            NameId::DesignerUrl => "designer URL",
            NameId::License => "license",
            NameId::LicenseUrl => "license URL",
            NameId::PreferredFamily => "preferred family",
            NameId::PreferredSubfamily => "preferred subfamily",
            NameId::CompatibleFull => "compatible full name",
            NameId::SampleText => "sample text",
            NameId::PostScriptCid => "PostScript CID name",
            NameId::WwsFamily => "WWS family",
            NameId::WwsSubfamily => "WWS subfamily",
            NameId::LightBackgroundPalette => "light background palette",
            NameId::DarkBackgroundPalette => "dark background palette",
            NameId::VariationsPostScriptNamePrefix => "variations PostScript name prefix",
            NameId::Other(id) => return write!(f, "name id {}", id),
        };
        f.write_str(label)
    }
}
