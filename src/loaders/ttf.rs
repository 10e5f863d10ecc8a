// font-install/src/loaders/ttf.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A loader that uses the `ttf-parser` crate to read font tables.

use log::trace;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;
use ttf_parser::name::{Name, PlatformId};
use ttf_parser::{Face, Tag};

use crate::error::ParseError;
use crate::loader::{Loader, NameEntry, Platform, TableTag};
use crate::name_id::NameId;

const MACINTOSH_ROMAN_ENCODING_ID: u16 = 0;
const WINDOWS_SYMBOL_ENCODING_ID: u16 = 0;
const WINDOWS_UNICODE_BMP_ENCODING_ID: u16 = 1;
const WINDOWS_UNICODE_FULL_ENCODING_ID: u16 = 10;

/// A loader backed by `ttf-parser`.
///
/// The data is validated once in `from_bytes`. `ttf_parser::Face` borrows its input, so a face is
/// re-created on demand for each query; that only reads the table directory.
#[derive(Clone)]
pub struct TtfLoader {
    font_data: Arc<Vec<u8>>,
}

/// The default loader.
pub type Font = TtfLoader;

impl TtfLoader {
    fn face(&self) -> Option<Face<'_>> {
        Face::parse(&self.font_data, 0).ok()
    }
}

impl Loader for TtfLoader {
    fn from_bytes(font_data: Arc<Vec<u8>>) -> Result<Self, ParseError> {
        Face::parse(&font_data, 0).map_err(|error| ParseError(error.to_string()))?;
        Ok(TtfLoader { font_data })
    }

    fn has_table(&self, tag: TableTag) -> bool {
        self.face()
            .map_or(false, |face| face.raw_face().table(Tag::from_bytes(&tag)).is_some())
    }

    fn name_entries(&self) -> Vec<NameEntry> {
        let face = match self.face() {
            Some(face) => face,
            None => return vec![],
        };
        let mut entries = vec![];
        for name in face.names() {
            let value = match decode_name(&name) {
                Some(value) => value,
                None => {
                    trace!(
                        "skipping undecodable name record {} (platform {:?}, encoding {})",
                        name.name_id,
                        name.platform_id,
                        name.encoding_id
                    );
                    continue;
                }
            };
            entries.push(NameEntry {
                name_id: NameId::from_u16(name.name_id),
                platform: platform_for_platform_id(name.platform_id),
                language_id: name.language_id,
                value,
            });
        }
        entries
    }
}

impl Debug for TtfLoader {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let mut debug = fmt.debug_struct("TtfLoader");
        debug.field("len", &self.font_data.len());
        if let Some(face) = self.face() {
            debug
                .field("tables", &face.raw_face().table_records.len())
                .field("names", &face.names().len());
        }
        debug.finish()
    }
}

fn decode_name(name: &Name) -> Option<String> {
    match (name.platform_id, name.encoding_id) {
        (PlatformId::Unicode, _) => Some(decode_utf16_be(name.name)),
        (PlatformId::Windows, WINDOWS_SYMBOL_ENCODING_ID)
        | (PlatformId::Windows, WINDOWS_UNICODE_BMP_ENCODING_ID)
        | (PlatformId::Windows, WINDOWS_UNICODE_FULL_ENCODING_ID) => Some(decode_utf16_be(name.name)),
        (PlatformId::Macintosh, MACINTOSH_ROMAN_ENCODING_ID) => Some(decode_mac_roman(name.name)),
        _ => None,
    }
}

fn platform_for_platform_id(platform_id: PlatformId) -> Platform {
    match platform_id {
        PlatformId::Unicode => Platform::Unicode,
        PlatformId::Macintosh => Platform::Macintosh,
        PlatformId::Iso => Platform::Iso,
        PlatformId::Windows => Platform::Windows,
        PlatformId::Custom => Platform::Custom,
    }
}

// Unpaired surrogates become U+FFFD. A trailing odd byte is ignored.
pub(crate) fn decode_utf16_be(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]));
    std::char::decode_utf16(units)
        .map(|unit| unit.unwrap_or(std::char::REPLACEMENT_CHARACTER))
        .collect()
}

pub(crate) fn decode_mac_roman(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&byte| {
            if byte < 0x80 {
                char::from(byte)
            } else {
                let code_point = MAC_ROMAN_HIGH_HALF[(byte - 0x80) as usize];
                std::char::from_u32(u32::from(code_point)).unwrap_or(std::char::REPLACEMENT_CHARACTER)
            }
        })
        .collect()
}

// Mac OS Roman, 0x80..=0xFF.
static MAC_ROMAN_HIGH_HALF: [u16; 128] = [
    0x00C4, 0x00C5, 0x00C7, 0x00C9, 0x00D1, 0x00D6, 0x00DC, 0x00E1, 0x00E0, 0x00E2, 0x00E4, 0x00E3,
    0x00E5, 0x00E7, 0x00E9, 0x00E8, 0x00EA, 0x00EB, 0x00ED, 0x00EC, 0x00EE, 0x00EF, 0x00F1, 0x00F3,
    0x00F2, 0x00F4, 0x00F6, 0x00F5, 0x00FA, 0x00F9, 0x00FB, 0x00FC, 0x2020, 0x00B0, 0x00A2, 0x00A3,
    0x00A7, 0x2022, 0x00B6, 0x00DF, 0x00AE, 0x00A9, 0x2122, 0x00B4, 0x00A8, 0x2260, 0x00C6, 0x00D8,
    0x221E, 0x00B1, 0x2264, 0x2265, 0x00A5, 0x00B5, 0x2202, 0x2211, 0x220F, 0x03C0, 0x222B, 0x00AA,
    0x00BA, 0x03A9, 0x00E6, 0x00F8, 0x00BF, 0x00A1, 0x00AC, 0x221A, 0x0192, 0x2248, 0x2206, 0x00AB,
    0x00BB, 0x2026, 0x00A0, 0x00C0, 0x00C3, 0x00D5, 0x0152, 0x0153, 0x2013, 0x2014, 0x201C, 0x201D,
    0x2018, 0x2019, 0x00F7, 0x25CA, 0x00FF, 0x0178, 0x2044, 0x20AC, 0x2039, 0x203A, 0xFB01, 0xFB02,
    0x2021, 0x00B7, 0x201A, 0x201E, 0x2030, 0x00C2, 0x00CA, 0x00C1, 0x00CB, 0x00C8, 0x00CD, 0x00CE,
    0x00CF, 0x00CC, 0x00D3, 0x00D4, 0xF8FF, 0x00D2, 0x00DA, 0x00DB, 0x00D9, 0x0131, 0x02C6, 0x02DC,
    0x00AF, 0x02D8, 0x02D9, 0x02DA, 0x00B8, 0x02DD, 0x02DB, 0x02C7,
];

#[cfg(test)]
mod test {
    use super::{decode_mac_roman, decode_utf16_be, TtfLoader};
    use crate::font::FontRecord;
    use crate::loader::{Loader, Platform, TABLE_TAG_NAME};
    use crate::name_id::NameId;
    use crate::test::{utf16_be, NameRecord, SfntBuilder};
    use std::sync::Arc;

    #[test]
    fn mac_roman() {
        assert_eq!(decode_mac_roman(b"Garamond"), "Garamond");
        assert_eq!(decode_mac_roman(&[0x8E, 0x74, 0x8E]), "\u{e9}t\u{e9}");
        assert_eq!(decode_mac_roman(&[0xA9, 0x20, 0xCA]), "\u{a9} \u{a0}");
    }

    #[test]
    fn utf16_is_decoded_lossily() {
        assert_eq!(decode_utf16_be(&utf16_be("Example")), "Example");
        assert_eq!(decode_utf16_be(&[0xD8, 0x3D, 0xDE, 0x00]), "\u{1f600}");
        assert_eq!(decode_utf16_be(&[0x00, 0x41, 0xD8, 0x00, 0x00, 0x42]), "A\u{fffd}B");
        assert_eq!(decode_utf16_be(&[0x00, 0x41, 0x00]), "A");
    }

    #[test]
    fn garbage_does_not_parse() {
        assert!(TtfLoader::from_bytes(Arc::new(b"definitely not a font".to_vec())).is_err());
        assert!(TtfLoader::from_bytes(Arc::new(vec![])).is_err());
    }

    #[test]
    fn reports_table_presence() {
        let with_names = SfntBuilder::new().name(NameRecord::windows(4, "Example")).build();
        let loader = TtfLoader::from_bytes(Arc::new(with_names)).unwrap();
        assert!(loader.has_table(TABLE_TAG_NAME));
        assert!(loader.has_table(*b"head"));
        assert!(!loader.has_table(*b"glyf"));

        let without_names = SfntBuilder::new().build();
        let loader = TtfLoader::from_bytes(Arc::new(without_names)).unwrap();
        assert!(!loader.has_table(TABLE_TAG_NAME));
        assert!(loader.name_entries().is_empty());
    }

    #[test]
    fn decodes_windows_and_macintosh_records() {
        let data = SfntBuilder::new()
            .name(NameRecord::macintosh(1, b"Example"))
            .name(NameRecord::windows(4, "Example Sans Bold"))
            .build();
        let loader = TtfLoader::from_bytes(Arc::new(data)).unwrap();
        let entries = loader.name_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name_id, NameId::FontFamily);
        assert_eq!(entries[0].platform, Platform::Macintosh);
        assert_eq!(entries[0].value, "Example");
        assert_eq!(entries[1].name_id, NameId::FullName);
        assert_eq!(entries[1].platform, Platform::Windows);
        assert_eq!(entries[1].value, "Example Sans Bold");
    }

    #[test]
    fn decodes_windows_full_unicode_records() {
        let data = SfntBuilder::new()
            .name(NameRecord {
                platform_id: 3,
                encoding_id: 10,
                language_id: 0x0409,
                name_id: 4,
                bytes: utf16_be("Example Sans Bold"),
            })
            .build();
        let loader = TtfLoader::from_bytes(Arc::new(data.clone())).unwrap();
        let entries = loader.name_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].platform, Platform::Windows);
        assert_eq!(entries[0].value, "Example Sans Bold");

        let font = FontRecord::from_bytes("ExampleSans-Bold.ttf", data).unwrap();
        assert_eq!(font.display_name(), "Example Sans Bold");
        assert_eq!(
            font.name_fields().get(&NameId::FullName).map(|value| &**value),
            Some("Example Sans Bold")
        );
    }

    #[test]
    fn skips_legacy_cjk_encodings() {
        let data = SfntBuilder::new()
            .name(NameRecord {
                platform_id: 3,
                encoding_id: 2,
                language_id: 0x0411,
                name_id: 4,
                bytes: b"\x83\x65\x83\x58\x83\x67".to_vec(),
            })
            .build();
        let loader = TtfLoader::from_bytes(Arc::new(data)).unwrap();
        assert!(loader.name_entries().is_empty());
    }
}
