// font-install/src/font.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Display metadata extracted from a font file, ready to be installed.

use log::debug;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::ExtractionError;
use crate::file_type::FileType;
use crate::loader::{Loader, NameEntry, TABLE_TAG_NAME};
use crate::loaders;
use crate::name_id::NameId;

/// The suffix Windows expects on the value names of installed TrueType and OpenType fonts.
pub const REGISTRY_VALUE_SUFFIX: &str = " (TrueType)";

/// A font file together with the names needed to register it.
///
/// A `FontRecord` only exists for files that parsed successfully and contain a `name` table; the
/// display name is never empty.
#[derive(Clone, Debug)]
pub struct FontRecord {
    source_file_name: String,
    file_type: FileType,
    display_name: String,
    family_name: String,
    name_fields: HashMap<NameId, String>,
    data: Arc<Vec<u8>>,
}

impl FontRecord {
    /// Extracts metadata from the contents of a `.ttf`/`.otf` file using the default loader.
    ///
    /// `file_name` is the path the data was read from. Only its extension is inspected; it also
    /// serves as the display name if the font does not declare a full name.
    pub fn from_bytes(file_name: &str, data: Vec<u8>) -> Result<FontRecord, ExtractionError> {
        FontRecord::from_bytes_with::<loaders::default::Font>(file_name, data)
    }

    /// Like [`FontRecord::from_bytes`], with a caller-chosen loader.
    pub fn from_bytes_with<L>(file_name: &str, data: Vec<u8>) -> Result<FontRecord, ExtractionError>
    where
        L: Loader,
    {
        let file_type = FileType::from_path(file_name)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(file_name.to_owned()))?;

        let data = Arc::new(data);
        let name_fields = {
            let font = L::from_bytes(data.clone()).map_err(|error| ExtractionError::MalformedFont {
                file_name: file_name.to_owned(),
                reason: error.to_string(),
            })?;
            if !font.has_table(TABLE_TAG_NAME) {
                return Err(ExtractionError::MissingNameTable(file_name.to_owned()));
            }
            collect_name_fields(font.name_entries())
        };

        let mut display_name = non_empty_field(&name_fields, NameId::FullName)
            .unwrap_or_default()
            .to_owned();
        let family_name = non_empty_field(&name_fields, NameId::PreferredFamily)
            .or_else(|| non_empty_field(&name_fields, NameId::FontFamily))
            .unwrap_or_default()
            .to_owned();
        if display_name.is_empty() {
            debug!("{} declares no full name; using the file name", file_name);
            display_name = file_name.to_owned();
        }

        Ok(FontRecord {
            source_file_name: file_name.to_owned(),
            file_type,
            display_name,
            family_name,
            name_fields,
            data,
        })
    }

    /// The path the font was read from, as supplied.
    #[inline]
    pub fn source_file_name(&self) -> &str {
        &self.source_file_name
    }

    /// The base file name, which is what the font is installed as.
    pub fn file_name(&self) -> &str {
        Path::new(&self.source_file_name)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.source_file_name)
    }

    #[inline]
    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    /// The full name of the font, e.g. "Arial Bold", or the source file name if the font has
    /// none.
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The typographic family if present, else the legacy family. May be empty.
    #[inline]
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// The typographic subfamily if present, else the legacy subfamily.
    pub fn subfamily_name(&self) -> Option<&str> {
        non_empty_field(&self.name_fields, NameId::PreferredSubfamily)
            .or_else(|| non_empty_field(&self.name_fields, NameId::FontSubfamily))
    }

    /// Returns the PostScript name of the font, if it declares one.
    pub fn postscript_name(&self) -> Option<&str> {
        non_empty_field(&self.name_fields, NameId::PostScriptName)
    }

    /// Every decodable string in the `name` table, one per name ID.
    #[inline]
    pub fn name_fields(&self) -> &HashMap<NameId, String> {
        &self.name_fields
    }

    /// The raw contents of the font file.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The name this font is registered under.
    #[inline]
    pub fn registry_value_name(&self) -> String {
        registry_value_name(&self.display_name)
    }
}

/// Builds the registry value name for a font with the given display name.
///
/// Some fonts pad fixed-width name strings with NULs, which survive decoding; they are removed
/// here because a value name containing them is truncated by the registry.
pub fn registry_value_name(display_name: &str) -> String {
    let mut value_name = String::with_capacity(display_name.len() + REGISTRY_VALUE_SUFFIX.len());
    value_name.push_str(display_name);
    value_name.push_str(REGISTRY_VALUE_SUFFIX);
    value_name.retain(|c| c != '\0');
    value_name
}

fn collect_name_fields(entries: Vec<NameEntry>) -> HashMap<NameId, String> {
    let mut chosen: HashMap<NameId, NameEntry> = HashMap::new();
    for entry in entries {
        let replace = match chosen.get(&entry.name_id) {
            None => true,
            Some(existing) => entry.preference() < existing.preference(),
        };
        if replace {
            chosen.insert(entry.name_id, entry);
        }
    }
    chosen
        .into_iter()
        .map(|(name_id, entry)| (name_id, entry.value))
        .collect()
}

fn non_empty_field(fields: &HashMap<NameId, String>, name_id: NameId) -> Option<&str> {
    fields
        .get(&name_id)
        .map(|value| &**value)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod test {
    use super::{registry_value_name, FontRecord};
    use crate::error::{ExtractionError, ParseError};
    use crate::file_type::FileType;
    use crate::loader::{Loader, NameEntry, TableTag};
    use crate::name_id::NameId;
    use crate::test::{NameRecord, SfntBuilder};
    use std::sync::Arc;

    const FULL_NAME: u16 = 4;
    const FONT_FAMILY: u16 = 1;
    const PREFERRED_FAMILY: u16 = 16;

    #[test]
    fn full_name_becomes_display_name() {
        let data = SfntBuilder::new()
            .name(NameRecord::windows(FONT_FAMILY, "Example Sans"))
            .name(NameRecord::windows(FULL_NAME, "Example Sans Bold"))
            .build();
        let font = FontRecord::from_bytes("fonts/ExampleSans-Bold.ttf", data).unwrap();
        assert_eq!(font.display_name(), "Example Sans Bold");
        assert_eq!(font.family_name(), "Example Sans");
        assert_eq!(font.source_file_name(), "fonts/ExampleSans-Bold.ttf");
        assert_eq!(font.file_name(), "ExampleSans-Bold.ttf");
        assert_eq!(font.file_type(), FileType::TrueType);
    }

    #[test]
    fn missing_full_name_falls_back_to_file_name() {
        let data = SfntBuilder::new()
            .name(NameRecord::windows(FONT_FAMILY, "Example Sans"))
            .build();
        let font = FontRecord::from_bytes("ExampleSans.ttf", data).unwrap();
        assert_eq!(font.display_name(), "ExampleSans.ttf");
    }

    #[test]
    fn empty_full_name_falls_back_to_file_name() {
        let data = SfntBuilder::new().name(NameRecord::windows(FULL_NAME, "")).build();
        let font = FontRecord::from_bytes("Blank.OTF", data).unwrap();
        assert_eq!(font.display_name(), "Blank.OTF");
        assert_eq!(font.family_name(), "");
    }

    #[test]
    fn empty_name_table_is_accepted() {
        let data = SfntBuilder::new().empty_name_table().build();
        let font = FontRecord::from_bytes("Nameless.ttf", data).unwrap();
        assert_eq!(font.display_name(), "Nameless.ttf");
        assert!(font.name_fields().is_empty());
    }

    #[test]
    fn preferred_family_wins_over_font_family() {
        let data = SfntBuilder::new()
            .name(NameRecord::windows(FONT_FAMILY, "Example Sans Light"))
            .name(NameRecord::windows(PREFERRED_FAMILY, "Example Sans"))
            .build();
        let font = FontRecord::from_bytes("ExampleSans-Light.otf", data).unwrap();
        assert_eq!(font.family_name(), "Example Sans");
    }

    #[test]
    fn empty_preferred_family_falls_back_to_font_family() {
        let data = SfntBuilder::new()
            .name(NameRecord::windows(PREFERRED_FAMILY, ""))
            .name(NameRecord::windows(FONT_FAMILY, "Example Serif"))
            .build();
        let font = FontRecord::from_bytes("ExampleSerif.ttf", data).unwrap();
        assert_eq!(font.family_name(), "Example Serif");
    }

    #[test]
    fn windows_english_record_is_chosen_among_duplicates() {
        let data = SfntBuilder::new()
            .name(NameRecord::macintosh(FULL_NAME, b"Example Mac"))
            .name(NameRecord::windows_with_language(FULL_NAME, 0x0407, "Beispiel Fett"))
            .name(NameRecord::windows(FULL_NAME, "Example Bold"))
            .name(NameRecord::windows_with_language(FULL_NAME, 0x040C, "Exemple Gras"))
            .build();
        let font = FontRecord::from_bytes("Example-Bold.ttf", data).unwrap();
        assert_eq!(font.display_name(), "Example Bold");
        assert_eq!(font.name_fields()[&NameId::FullName], "Example Bold");
    }

    #[test]
    fn every_name_is_recorded() {
        let data = SfntBuilder::new()
            .name(NameRecord::windows(0, "Copyright 2018"))
            .name(NameRecord::windows(2, "Bold"))
            .name(NameRecord::windows(6, "ExampleSans-Bold"))
            .name(NameRecord::windows(256, "Swash"))
            .build();
        let font = FontRecord::from_bytes("ExampleSans-Bold.ttf", data).unwrap();
        let fields = font.name_fields();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[&NameId::Copyright], "Copyright 2018");
        assert_eq!(fields[&NameId::Other(256)], "Swash");
        assert_eq!(font.subfamily_name(), Some("Bold"));
        assert_eq!(font.postscript_name(), Some("ExampleSans-Bold"));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let data = SfntBuilder::new().name(NameRecord::windows(FULL_NAME, "Example")).build();
        for file_name in &["Example.ttc", "Example.woff", "Example"] {
            match FontRecord::from_bytes(file_name, data.clone()) {
                Err(ExtractionError::UnsupportedFormat(name)) => assert_eq!(name, *file_name),
                other => panic!("unexpected result for {}: {:?}", file_name, other),
            }
        }
    }

    #[test]
    fn garbage_is_malformed() {
        for data in &[vec![], b"OTTO".to_vec(), vec![0xFF; 512]] {
            match FontRecord::from_bytes("Broken.ttf", data.clone()) {
                Err(ExtractionError::MalformedFont { file_name, .. }) => {
                    assert_eq!(file_name, "Broken.ttf")
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[test]
    fn font_without_name_table_is_rejected() {
        let data = SfntBuilder::new().opentype().build();
        match FontRecord::from_bytes("Glyphs.otf", data) {
            Err(ExtractionError::MissingNameTable(name)) => assert_eq!(name, "Glyphs.otf"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    struct PanickingLoader;

    impl Loader for PanickingLoader {
        fn from_bytes(_: Arc<Vec<u8>>) -> Result<Self, ParseError> {
            panic!("unsupported files must not be parsed")
        }

        fn has_table(&self, _: TableTag) -> bool {
            unreachable!()
        }

        fn name_entries(&self) -> Vec<NameEntry> {
            unreachable!()
        }
    }

    #[test]
    fn extension_is_checked_before_parsing() {
        let result = FontRecord::from_bytes_with::<PanickingLoader>("notes.txt", vec![0; 16]);
        assert!(matches!(result, Err(ExtractionError::UnsupportedFormat(_))));
    }

    #[test]
    fn registry_value_name_strips_nul() {
        assert_eq!(registry_value_name("Example Sans Bold"), "Example Sans Bold (TrueType)");
        assert_eq!(registry_value_name("Example\0 Sans\0\0\0"), "Example Sans (TrueType)");
        assert!(!registry_value_name("\0\0").contains('\0'));
    }

    #[test]
    fn nul_padded_full_name_is_kept_until_registration() {
        let data = SfntBuilder::new()
            .name(NameRecord::windows(FULL_NAME, "Padded\0\0"))
            .build();
        let font = FontRecord::from_bytes("Padded.ttf", data).unwrap();
        assert_eq!(font.display_name(), "Padded\0\0");
        assert_eq!(font.registry_value_name(), "Padded (TrueType)");
    }
}
