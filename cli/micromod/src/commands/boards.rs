//! `micromod boards`: board catalogue listing and description.

use anyhow::{bail, Result};
use micromod_boards::{Board, BoardRegistry, PlatformGroup, REGISTRY_REVISION};

/// List all supported boards.
pub fn list() -> Result<()> {
    let registry = BoardRegistry::global();
    println!("Supported boards (registry {REGISTRY_REVISION}):");
    println!();
    for d in registry.boards() {
        println!(
            "  {:<18} {:<10} {}",
            d.board_id,
            d.platform_group,
            d.version_constraint.reference(&d.package_name)
        );
    }
    println!();
    println!("Use 'micromod boards describe <board>' for details.");
    Ok(())
}

/// Describe one board in detail.
pub fn describe(board_id: &str, format: Option<&str>) -> Result<()> {
    let Ok(board) = board_id.parse::<Board>() else {
        bail!("unknown board: '{board_id}'. Use 'micromod boards list' to see supported boards.");
    };
    let d = BoardRegistry::global().get(board);

    match format {
        Some("json") => {
            println!("{}", serde_json::to_string_pretty(d)?);
            return Ok(());
        }
        Some("toml") => {
            print!("{}", toml::to_string_pretty(d)?);
            return Ok(());
        }
        Some("human") | None => {}
        Some(other) => bail!("unknown format '{other}' (expected human, json or toml)"),
    }

    let group = board.platform_group();
    println!("=== Board: {} ===", d.board_id);
    println!("  MCU:            {}", board.mcu());
    println!("  Platform group: {}", d.platform_group);
    println!("  Package:        {}", d.package_name);
    println!("  Version:        {}", d.version_constraint);
    if let (Ok(lo), Ok(hi)) = (
        d.version_constraint.lower_bound(),
        d.version_constraint.upper_bound(),
    ) {
        println!("                  >={lo}, <{hi}");
    }
    println!(
        "  Headers:        {}",
        if d.transitive_header_exposure {
            "transitive"
        } else {
            "private"
        }
    );
    println!("  Shares driver with: {}", siblings(group, board).join(", "));
    Ok(())
}

fn siblings(group: PlatformGroup, board: Board) -> Vec<&'static str> {
    let others: Vec<_> = group
        .boards()
        .filter(|b| *b != board)
        .map(|b| b.id())
        .collect();
    if others.is_empty() {
        vec!["(none)"]
    } else {
        others
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_succeeds() {
        assert!(list().is_ok());
    }

    #[test]
    fn describe_known_board() {
        assert!(describe("mod-lpc40-v5", None).is_ok());
        assert!(describe("mod-stm32f1-v4", Some("json")).is_ok());
        assert!(describe("mod-stm32f1-v5", Some("toml")).is_ok());
    }

    #[test]
    fn describe_unknown_board() {
        assert!(describe("nonexistent", None).is_err());
    }

    #[test]
    fn describe_unknown_format() {
        assert!(describe("mod-lpc40-v5", Some("yaml")).is_err());
    }

    #[test]
    fn stm32_siblings() {
        let s = siblings(PlatformGroup::ArmMcu, Board::ModStm32f1V4);
        assert_eq!(s, ["mod-lpc40-v5", "mod-stm32f1-v5"]);
    }
}
