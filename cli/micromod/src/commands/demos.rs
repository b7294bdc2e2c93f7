//! `micromod demos`: per-demo configure steps.

use anyhow::Result;
use micromod_recipe::demos::{demo_build_folder, demo_plan, DemoApp};

/// Print the configure arguments for each demo, or just `only`.
pub fn run(platform: &str, only: Option<&str>) -> Result<()> {
    let only = only.map(str::parse::<DemoApp>).transpose()?;
    println!("Build folder: {}", demo_build_folder(platform));
    for (demo, vars) in demo_plan() {
        if only.is_some_and(|d| d != demo) {
            continue;
        }
        println!("  {:<18} {}", demo, vars.to_cmake_args().join(" "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_and_single() {
        assert!(run("micromod", None).is_ok());
        assert!(run("micromod", Some("blinker")).is_ok());
        assert!(run("micromod", Some("can_sniffer")).is_err());
    }
}
