//! Font discovery for PDF rendering
//!
//! `genpdf` needs a TrueType family on disk (`<Name>-Regular.ttf`,
//! `<Name>-Bold.ttf`, `<Name>-Italic.ttf`, `<Name>-BoldItalic.ttf`). Directories
//! are searched in this order:
//! 1. `CAR_SALES_FONTS_DIR`
//! 2. the configured `report.fonts_dir`
//! 3. `assets/fonts` next to the executable
//! 4. `assets/fonts` under the crate manifest
//! 5. well-known system font directories

use anyhow::{anyhow, Result};
use genpdf::fonts::{self, FontData, FontFamily};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the font directory
pub const FONTS_DIR_ENV: &str = "CAR_SALES_FONTS_DIR";

/// Family names tried in each directory
const FAMILY_NAMES: &[&str] = &["Roboto", "LiberationSans"];

const STYLE_SUFFIXES: &[&str] = &["Regular", "Bold", "Italic", "BoldItalic"];

const SYSTEM_FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/liberation2",
    "/usr/share/fonts/liberation-sans",
    "/usr/share/fonts/liberation",
    "/Library/Fonts",
];

fn font_directory_candidates(configured: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env::var_os(FONTS_DIR_ENV) {
        if !path.is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }

    if let Some(path) = configured {
        candidates.push(path.to_path_buf());
    }

    if let Ok(current_exe) = env::current_exe() {
        if let Some(bin_dir) = current_exe.parent() {
            candidates.push(bin_dir.join("assets/fonts"));
        }
    }

    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"));
    candidates.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));

    let mut unique = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !unique.contains(&candidate) {
            unique.push(candidate);
        }
    }
    unique
}

/// First family name whose four style files all exist in `dir`
fn family_in(dir: &Path) -> Option<&'static str> {
    FAMILY_NAMES.iter().copied().find(|name| {
        STYLE_SUFFIXES
            .iter()
            .all(|style| dir.join(format!("{}-{}.ttf", name, style)).is_file())
    })
}

/// Locate a usable font directory and family name
pub fn resolve_font_family(configured: Option<&Path>) -> Result<(PathBuf, &'static str)> {
    let mut attempts = Vec::new();

    for candidate in font_directory_candidates(configured) {
        if !candidate.is_dir() {
            attempts.push(format!("{} (directory missing)", candidate.display()));
            continue;
        }
        match family_in(&candidate) {
            Some(name) => {
                log::debug!("Using font family {} from {}", name, candidate.display());
                return Ok((candidate, name));
            }
            None => attempts.push(format!("{} (no complete family)", candidate.display())),
        }
    }

    Err(anyhow!(
        "Unable to locate fonts for the PDF report. Checked: {}. Set {} to a directory containing {}-Regular.ttf and friends.",
        attempts.join(", "),
        FONTS_DIR_ENV,
        FAMILY_NAMES.join("/")
    ))
}

/// Load the font family used for the report
pub fn default_font_family(configured: Option<&Path>) -> Result<FontFamily<FontData>> {
    let (directory, name) = resolve_font_family(configured)?;
    fonts::from_files(&directory, name, None).map_err(|err| {
        anyhow!(
            "Failed to load font family '{}' from {}: {}",
            name,
            directory.display(),
            err
        )
    })
}

/// Whether any font family can be found
#[cfg(test)]
pub fn fonts_available(configured: Option<&Path>) -> bool {
    resolve_font_family(configured).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_family_requires_all_styles() {
        let dir = tempfile::tempdir().unwrap();
        for style in ["Regular", "Bold", "Italic"] {
            fs::write(dir.path().join(format!("Roboto-{}.ttf", style)), b"").unwrap();
        }
        assert_eq!(family_in(dir.path()), None);

        fs::write(dir.path().join("Roboto-BoldItalic.ttf"), b"").unwrap();
        assert_eq!(family_in(dir.path()), Some("Roboto"));
    }

    #[test]
    fn test_configured_dir_is_searched() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = font_directory_candidates(Some(dir.path()));
        assert!(candidates.contains(&dir.path().to_path_buf()));
        assert!(candidates.iter().any(|c| c.ends_with("assets/fonts")));
    }

    #[test]
    fn test_resolves_configured_family() {
        let dir = tempfile::tempdir().unwrap();
        for style in STYLE_SUFFIXES {
            fs::write(dir.path().join(format!("LiberationSans-{}.ttf", style)), b"").unwrap();
        }
        // An env override could win; only check when it is unset.
        if env::var_os(FONTS_DIR_ENV).is_none() {
            let (found, name) = resolve_font_family(Some(dir.path())).unwrap();
            assert_eq!(found, dir.path());
            assert_eq!(name, "LiberationSans");
        }
    }
}
