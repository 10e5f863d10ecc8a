// font-install/src/install.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Copies font files into the fonts directory and registers them.
//!
//! Installation is a single sequential pass. A font that fails to install is reported and the
//! rest of the batch carries on; only a path that cannot be inspected at all stops the run.

use log::{debug, info, warn};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::InstallConfig;
use crate::error::{InstallError, PathStatError};
use crate::font::FontRecord;
use crate::registry::FontRegistry;

/// A font that was copied and registered.
#[derive(Clone, Debug, PartialEq)]
pub struct InstalledFont {
    /// Where the font file now lives.
    pub path: PathBuf,
    /// The registry value the font is registered under.
    pub value_name: String,
    /// The display name read from the font.
    pub display_name: String,
    /// The family name read from the font. May be empty.
    pub family_name: String,
}

/// A font file that could not be installed.
#[derive(Debug)]
pub struct Failure {
    /// The file that failed.
    pub path: PathBuf,
    /// How to refer to the file in messages: the entry name inside a directory, or the path as
    /// given for a single file.
    pub name: String,
    /// What went wrong.
    pub error: InstallError,
}

impl Failure {
    /// The numeric code of the error; see [`InstallError::code`].
    #[inline]
    pub fn code(&self) -> i32 {
        self.error.code()
    }
}

/// The outcome of installing a file or a directory of files.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Fonts that were installed, in the order they were attempted.
    pub installed: Vec<InstalledFont>,
    /// Files that failed, in the order they were attempted.
    pub failures: Vec<Failure>,
}

impl BatchReport {
    /// Returns true if no file failed.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// The number of files that were attempted.
    #[inline]
    pub fn attempted(&self) -> usize {
        self.installed.len() + self.failures.len()
    }
}

/// Progress notifications from [`Installer::install_path`].
#[derive(Debug)]
pub enum Progress<'a> {
    /// About to install this file.
    Installing(&'a Path),
    /// The file was installed.
    Installed(&'a InstalledFont),
    /// The file failed to install.
    Failed(&'a Failure),
}

/// Installs fonts into the directory and registry named by an [`InstallConfig`].
#[derive(Debug)]
pub struct Installer<R> {
    config: InstallConfig,
    registry: R,
}

impl<R> Installer<R>
where
    R: FontRegistry,
{
    /// Creates an installer that copies fonts to `config.fonts_dir` and registers them with
    /// `registry`.
    pub fn new(config: InstallConfig, registry: R) -> Installer<R> {
        Installer { config, registry }
    }

    #[inline]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Installs the font file at `path`.
    ///
    /// The file is read, its metadata extracted, the file copied into the fonts directory under
    /// its base name (replacing any file of that name), and a registry value written for it.
    pub fn install_font<P>(&self, path: P) -> Result<InstalledFont, InstallError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| InstallError::Read {
            path: path.to_owned(),
            source,
        })?;
        let font = FontRecord::from_bytes(&path.to_string_lossy(), data)?;
        debug!(
            "{}: display name {:?}, family {:?}",
            path.display(),
            font.display_name(),
            font.family_name()
        );
        match path.file_name() {
            Some(file_name) => self.install_as(&font, file_name),
            None => self.install_record(&font),
        }
    }

    /// Copies and registers a font whose metadata has already been extracted.
    ///
    /// If registration fails and rollback is enabled, the copied file is removed again before the
    /// error is returned.
    pub fn install_record(&self, font: &FontRecord) -> Result<InstalledFont, InstallError> {
        self.install_as(font, OsStr::new(font.file_name()))
    }

    // `file_name` is kept apart from the record so that names which are not valid Unicode survive.
    fn install_as(&self, font: &FontRecord, file_name: &OsStr) -> Result<InstalledFont, InstallError> {
        let destination = self.config.fonts_dir.join(file_name);
        fs::write(&destination, font.data()).map_err(|source| InstallError::Write {
            path: destination.clone(),
            source,
        })?;
        debug!("copied {} to {}", font.source_file_name(), destination.display());

        let value_name = font.registry_value_name();
        if let Err(error) = self.registry.register_font(&value_name, file_name) {
            if self.config.rollback_on_registry_failure {
                self.roll_back(&destination);
            }
            return Err(InstallError::Registry(error));
        }
        info!("installed {} as {:?}", destination.display(), value_name);

        Ok(InstalledFont {
            path: destination,
            value_name,
            display_name: font.display_name().to_owned(),
            family_name: font.family_name().to_owned(),
        })
    }

    /// Installs a single font file, or every file directly inside a directory.
    ///
    /// Directory entries are visited in file name order and subdirectories are skipped. Every
    /// attempt is reported to `on_progress` as it happens. The only error is failing to inspect
    /// `path` itself; per-file failures are collected in the returned report.
    pub fn install_path<P, F>(&self, path: P, mut on_progress: F) -> Result<BatchReport, PathStatError>
    where
        P: AsRef<Path>,
        F: FnMut(Progress),
    {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|source| PathStatError {
            path: path.to_owned(),
            source,
        })?;

        let mut report = BatchReport::default();
        if !metadata.is_dir() {
            let name = path.display().to_string();
            self.install_one(path, name, &mut report, &mut on_progress);
            return Ok(report);
        }

        let entries = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!("skipping unreadable entry in {}: {}", path.display(), error);
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            self.install_one(entry.path(), name, &mut report, &mut on_progress);
        }
        Ok(report)
    }

    fn install_one<F>(&self, path: &Path, name: String, report: &mut BatchReport, on_progress: &mut F)
    where
        F: FnMut(Progress),
    {
        on_progress(Progress::Installing(path));
        match self.install_font(path) {
            Ok(installed) => {
                on_progress(Progress::Installed(&installed));
                report.installed.push(installed);
            }
            Err(error) => {
                let failure = Failure {
                    path: path.to_owned(),
                    name,
                    error,
                };
                on_progress(Progress::Failed(&failure));
                report.failures.push(failure);
            }
        }
    }

    fn roll_back(&self, destination: &Path) {
        match fs::remove_file(destination) {
            Ok(()) => info!("removed {} after failed registration", destination.display()),
            Err(error) => warn!(
                "failed to remove {} after failed registration: {}",
                destination.display(),
                error
            ),
        }
    }
}
