//! `micromod info`: package metadata exported to consumers.

use anyhow::{bail, Result};
use micromod_recipe::package_info;

/// Print the package info.
pub fn run(format: Option<&str>) -> Result<()> {
    let info = package_info();
    match format {
        Some("json") => println!("{}", serde_json::to_string_pretty(&info)?),
        Some("human") | None => {
            println!("Libraries:    {}", info.libs.join(", "));
            println!("CMake target: {}", info.cmake_target_name);
            println!("Build environment:");
            for (k, v) in info.build_env.iter() {
                println!("  {k}={v}");
            }
        }
        Some(other) => bail!("unknown format '{other}' (expected human or json)"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert!(run(None).is_ok());
        assert!(run(Some("json")).is_ok());
        assert!(run(Some("toml")).is_err());
    }
}
