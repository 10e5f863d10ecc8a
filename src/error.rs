// font-install/src/error.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Various types of errors that `font-install` can return.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Reasons why metadata could not be extracted from a font file.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The file extension is not `.ttf` or `.otf`.
    #[error("file {0} is not a supported font file")]
    UnsupportedFormat(String),

    /// The data failed to parse as a font container.
    #[error("font {file_name} is malformed: {reason}")]
    MalformedFont {
        /// The file name as supplied by the caller.
        file_name: String,
        /// What the parser reported.
        reason: String,
    },

    /// The font parsed, but has no `name` table to derive a display name from.
    #[error("font {0} does not contain a name table")]
    MissingNameTable(String),
}

/// A font parser rejected the data it was given.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ParseError(pub String);

/// Reasons why a font could not be registered with the system.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry key could not be opened for writing.
    #[error("failed to open registry key [HKLM:{key}]: {source}")]
    Open {
        /// The subkey path under `HKEY_LOCAL_MACHINE`.
        key: String,
        /// The underlying OS error.
        source: io::Error,
    },

    /// The value could not be written.
    #[error("failed to set registry value [{value_name}, {data}]: {source}")]
    SetValue {
        /// The registry value name.
        value_name: String,
        /// The file name the value was supposed to point at.
        data: String,
        /// The underlying OS error.
        source: io::Error,
    },
}

/// Reasons why a single font file failed to install.
///
/// Each variant carries the numeric code reported to the user; see [`InstallError::code`].
#[derive(Debug, Error)]
pub enum InstallError {
    /// The source file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Metadata extraction failed.
    #[error(transparent)]
    Extract(#[from] ExtractionError),

    /// The font could not be copied into the fonts directory.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The font was copied but could not be registered.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl InstallError {
    /// The numeric code printed next to the failure.
    ///
    /// * 2: the source file could not be read.
    /// * 3: the file is not an installable font.
    /// * 4: copying or registering the font failed.
    pub fn code(&self) -> i32 {
        match *self {
            InstallError::Read { .. } => 2,
            InstallError::Extract(_) => 3,
            InstallError::Write { .. } | InstallError::Registry(_) => 4,
        }
    }
}

/// The path given on the command line could not be inspected.
///
/// Unlike [`InstallError`], this aborts the whole run.
#[derive(Debug, Error)]
#[error("{}: {source}", .path.display())]
pub struct PathStatError {
    /// The path as supplied.
    pub path: PathBuf,
    /// The underlying I/O error.
    #[source]
    pub source: io::Error,
}
