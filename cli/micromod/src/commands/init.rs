//! `micromod init`: write a starter profile.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use micromod_recipe::{validate, Selection};

use crate::profile::{self, PROFILE_FILE};

/// Write `micromod.toml` for `board` into `dir`.
pub fn run(dir: &Path, board: &str) -> Result<()> {
    let path = dir.join(PROFILE_FILE);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    // Refuse to write a profile that would not configure.
    validate(&Selection::new(micromod_recipe::REQUIRED_PLATFORM, board))?;

    fs::write(&path, profile::template(board))
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_loadable_profile() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), "mod-lpc40-v5").unwrap();
        let s = profile::load(&dir.path().join(PROFILE_FILE)).unwrap();
        assert_eq!(s.board_id(), "mod-lpc40-v5");
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), "mod-lpc40-v5").unwrap();
        assert!(run(dir.path(), "mod-stm32f1-v4").is_err());
    }

    #[test]
    fn rejects_unknown_board() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(dir.path(), "mod-esp32").is_err());
        assert!(!dir.path().join(PROFILE_FILE).exists());
    }
}
