//! `micromod.toml` profile discovery and loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use micromod_recipe::Selection;

/// File name searched for when no profile is given explicitly.
pub const PROFILE_FILE: &str = "micromod.toml";

/// Read a selection profile from an explicit path.
pub fn load(path: &Path) -> Result<Selection> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let selection =
        Selection::from_toml(&content).with_context(|| format!("parsing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded profile");
    Ok(selection)
}

/// Search upward from `start_dir` for a `micromod.toml`, parse it and return
/// it along with the file it was read from.
pub fn find_and_load(start_dir: &Path) -> Result<Option<(Selection, PathBuf)>> {
    let mut dir = start_dir.to_path_buf();
    loop {
        let candidate = dir.join(PROFILE_FILE);
        if candidate.is_file() {
            let selection = load(&candidate)?;
            return Ok(Some((selection, candidate)));
        }
        if !dir.pop() {
            break;
        }
    }
    Ok(None)
}

/// Command-line overrides applied on top of a profile.
#[derive(Debug, Default)]
pub struct Overrides<'a> {
    pub platform: Option<&'a str>,
    pub board: Option<&'a str>,
    pub cppstd: Option<&'a str>,
}

/// Build the selection for one pass: explicit profile, else a discovered
/// one, else defaults; then the command-line overrides.
pub fn selection(
    cwd: &Path,
    profile: Option<&Path>,
    overrides: &Overrides<'_>,
) -> Result<Selection> {
    let mut selection = match profile {
        Some(path) => load(path)?,
        None => find_and_load(cwd)?
            .map(|(s, _)| s)
            .unwrap_or_default(),
    };
    if let Some(platform) = overrides.platform {
        selection = selection.with_platform(platform);
    }
    if let Some(board) = overrides.board {
        selection = selection.with_board(board);
    }
    if let Some(cppstd) = overrides.cppstd {
        selection = selection.with_cppstd(cppstd);
    }
    Ok(selection)
}

/// Template written by `micromod init`.
pub fn template(board: &str) -> String {
    format!(
        r#"[options]
platform = "micromod"
micromod_board = "{board}"

[settings]
cppstd = "20"
"#
    )
}
