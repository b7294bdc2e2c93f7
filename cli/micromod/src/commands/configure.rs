//! `micromod configure`: run one configuration pass and print its artifacts.

use std::path::Path;

use anyhow::{bail, Result};
use micromod_recipe::{configure, Emitted, Selection};

/// Output formats accepted by `--format`.
const FORMATS: &str = "human, json, toml or cmake";

/// Configure `selection` and print the result in `format`.
///
/// On failure nothing is printed to stdout; the error propagates to `main`.
pub fn run(selection: Selection, format: Option<&str>) -> Result<()> {
    let format = format.unwrap_or("human");
    if !matches!(format, "human" | "json" | "toml" | "cmake") {
        bail!("unknown format '{format}' (expected {FORMATS})");
    }

    let emitted = configure(selection)?;
    print!("{}", render(&emitted, format)?);
    Ok(())
}

/// Render the artifacts of a pass.
pub fn render(emitted: &Emitted, format: &str) -> Result<String> {
    let out = match format {
        "json" => format!("{}\n", serde_json::to_string_pretty(emitted)?),
        "toml" => toml::to_string_pretty(emitted)?,
        "cmake" => {
            let mut s = emitted.variables.to_cmake_args().join(" ");
            s.push('\n');
            s
        }
        "human" => human(emitted),
        other => bail!("unknown format '{other}' (expected {FORMATS})"),
    };
    Ok(out)
}

fn human(emitted: &Emitted) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "Board {} -> platform group {}\n\n",
        emitted.descriptor.board_id, emitted.descriptor.platform_group
    ));
    s.push_str("Requirements:\n");
    for req in &emitted.requirements {
        s.push_str(&format!(
            "  {}{}\n",
            req.reference(),
            if req.transitive_header_exposure {
                " (transitive headers)"
            } else {
                ""
            }
        ));
    }
    s.push_str("\nBuild variables:\n");
    for (k, v) in emitted.variables.iter() {
        s.push_str(&format!("  {k} = {v}\n"));
    }
    s
}

/// Check a profile without printing artifacts.
pub fn check(cwd: &Path, profile: Option<&Path>) -> Result<()> {
    let selection = crate::profile::selection(cwd, profile, &Default::default())?;
    let emitted = configure(selection)?;
    println!(
        "ok: {} resolves to {}",
        emitted.descriptor.board_id,
        emitted.requirements[0].reference()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lpc40() -> Emitted {
        configure(Selection::new("micromod", "mod-lpc40-v5")).unwrap()
    }

    #[test]
    fn human_lists_requirement_and_variables() {
        let out = render(&lpc40(), "human").unwrap();
        assert!(out.contains("libhal-arm-mcu/[^1.4.0] (transitive headers)"));
        assert!(out.contains("LIBHAL_MICROMOD_BOARD = mod-lpc40-v5"));
        assert!(out.contains("LIBHAL_PLATFORM_LIBRARY = arm-mcu"));
    }

    #[test]
    fn cmake_args_in_order() {
        let out = render(&lpc40(), "cmake").unwrap();
        assert_eq!(
            out,
            "-DLIBHAL_MICROMOD_BOARD=mod-lpc40-v5 -DLIBHAL_PLATFORM_LIBRARY=arm-mcu\n"
        );
    }

    #[test]
    fn json_output_parses() {
        let out = render(&lpc40(), "json").unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["requirements"][0]["package-name"], "libhal-arm-mcu");
        assert_eq!(v["variables"]["LIBHAL_PLATFORM_LIBRARY"], "arm-mcu");
    }

    #[test]
    fn toml_output_parses() {
        let out = render(&lpc40(), "toml").unwrap();
        let v: toml::Value = toml::from_str(&out).unwrap();
        assert_eq!(
            v["variables"]["LIBHAL_MICROMOD_BOARD"].as_str(),
            Some("mod-lpc40-v5")
        );
    }

    #[test]
    fn invalid_selection_fails() {
        assert!(run(Selection::new("micromod", "unknown-board"), None).is_err());
        assert!(run(Selection::default(), Some("json")).is_err());
    }

    #[test]
    fn unknown_format_fails_before_configuring() {
        assert!(run(Selection::new("micromod", "mod-lpc40-v5"), Some("xml")).is_err());
    }

    #[test]
    fn check_with_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.toml");
        std::fs::write(&path, crate::profile::template("mod-stm32f1-v5")).unwrap();
        assert!(check(dir.path(), Some(&path)).is_ok());
    }
}
