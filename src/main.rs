// font-install/src/main.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Installs a font file, or every font file in a directory, into the system font store.

use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

use font_install::install::{Installer, Progress};
use font_install::registry::FontRegistry;

#[cfg(test)]
#[path = "test.rs"]
mod fixtures;

/// The path could not be inspected, or this platform has no font registry.
const EXIT_PATH_ERROR: i32 = 1;
/// At least one font failed to install.
const EXIT_INSTALL_FAILED: i32 = 3;

/// Installs TrueType and OpenType fonts for all users. Requires administrator rights.
#[derive(Parser, Debug)]
#[command(name = "font-install", version, about, long_about = None)]
struct Args {
    /// A `.ttf`/`.otf` file, or a directory whose fonts should all be installed
    path: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    #[cfg(target_family = "windows")]
    {
        use font_install::config::InstallConfig;
        use font_install::registries::WindowsRegistry;

        let config = InstallConfig::default();
        let registry = WindowsRegistry::from_config(&config);
        let code = run(
            &Installer::new(config, registry),
            &args.path,
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        );
        process::exit(code);
    }

    #[cfg(not(target_family = "windows"))]
    {
        use font_install::error::PathStatError;
        use std::fs;

        // A bad path is reported the same way on every platform.
        if let Err(source) = fs::metadata(&args.path) {
            eprintln!("{}", PathStatError { path: args.path, source });
            process::exit(EXIT_PATH_ERROR);
        }
        eprintln!(
            "Cannot install {}: font registration is only supported on Windows",
            args.path.display()
        );
        process::exit(EXIT_PATH_ERROR);
    }
}

/// Installs `path`, printing progress to `out` and failures to `err`. Returns the exit code.
///
/// Console write errors are ignored; they must not abort a half-finished batch.
#[cfg_attr(not(any(test, target_family = "windows")), allow(dead_code))]
fn run<R, O, E>(installer: &Installer<R>, path: &Path, out: &mut O, err: &mut E) -> i32
where
    R: FontRegistry,
    O: Write,
    E: Write,
{
    let result = installer.install_path(path, |progress| match progress {
        Progress::Installing(path) => {
            let _ = writeln!(out, "Now installing font {}", path.display());
        }
        Progress::Installed(_) => {}
        Progress::Failed(failure) => {
            let _ = writeln!(
                err,
                "Error [{}] installing font [{}]: {}",
                failure.code(),
                failure.name,
                failure.error
            );
        }
    });

    match result {
        Err(error) => {
            let _ = writeln!(err, "{}", error);
            EXIT_PATH_ERROR
        }
        Ok(ref report) if report.is_success() => 0,
        Ok(report) => {
            log::info!(
                "{} of {} fonts failed to install",
                report.failures.len(),
                report.attempted()
            );
            EXIT_INSTALL_FAILED
        }
    }
}

#[cfg(test)]
mod test {
    use super::fixtures::{NameRecord, SfntBuilder};
    use super::{run, EXIT_INSTALL_FAILED, EXIT_PATH_ERROR};
    use font_install::config::InstallConfig;
    use font_install::install::Installer;
    use font_install::registries::MemRegistry;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn example_font() -> Vec<u8> {
        SfntBuilder::new()
            .name(NameRecord::windows(1, "Example Sans"))
            .name(NameRecord::windows(4, "Example Sans Bold"))
            .build()
    }

    // Returns the exit code, stdout and stderr of installing `path` into `fonts_dir`.
    fn install(fonts_dir: &Path, path: &Path) -> (i32, String, String) {
        let installer = Installer::new(InstallConfig::new().fonts_dir(fonts_dir), MemRegistry::new());
        let (mut out, mut err) = (vec![], vec![]);
        let code = run(&installer, path, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn successful_install_exits_zero() {
        let source = TempDir::new().unwrap();
        let fonts = TempDir::new().unwrap();
        let path = source.path().join("ExampleSans-Bold.ttf");
        fs::write(&path, example_font()).unwrap();

        let (code, out, err) = install(fonts.path(), &path);
        assert_eq!(code, 0);
        assert_eq!(out, format!("Now installing font {}\n", path.display()));
        assert!(err.is_empty(), "{}", err);
        assert!(fonts.path().join("ExampleSans-Bold.ttf").exists());
    }

    #[test]
    fn any_failure_exits_three() {
        let source = TempDir::new().unwrap();
        let fonts = TempDir::new().unwrap();
        fs::write(source.path().join("A.ttf"), example_font()).unwrap();
        fs::write(source.path().join("B.ttf"), b"not a font").unwrap();

        let (code, out, err) = install(fonts.path(), source.path());
        assert_eq!(code, EXIT_INSTALL_FAILED);
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains(&format!(
            "Now installing font {}",
            source.path().join("B.ttf").display()
        )));
        assert_eq!(err.lines().count(), 1);
        assert!(err.starts_with("Error [3] installing font [B.ttf]: "), "{}", err);
        assert!(fonts.path().join("A.ttf").exists());
    }

    #[test]
    fn missing_path_exits_one() {
        let fonts = TempDir::new().unwrap();
        let missing = fonts.path().join("no-such-font.ttf");

        let (code, out, err) = install(fonts.path(), &missing);
        assert_eq!(code, EXIT_PATH_ERROR);
        assert!(out.is_empty(), "{}", out);
        assert!(err.starts_with(&missing.display().to_string()), "{}", err);
    }
}
