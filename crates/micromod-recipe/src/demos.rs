//! Build plan for the demo applications.
//!
//! Each demo is configured separately with its own variable set. Building
//! them and reporting per-demo results is left to the native build.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::emit::BuildVariableSet;

/// Build variable selecting which demo to compile.
pub const DEMO_VARIABLE: &str = "LIBHAL_MICROMOD_DEMO";

/// Error for an unknown demo name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown demo: '{0}'")]
pub struct UnknownDemo(pub String);

/// A demo application shipped with the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoApp {
    /// Toggles the on-board LED.
    Blinker,
    /// Prints a greeting over the console serial port.
    HelloWorld,
    /// Echoes console input back to the sender.
    ConsoleLoopback,
}

impl DemoApp {
    /// Demos built by default, in build order.
    pub const ALL: [DemoApp; 3] = [DemoApp::Blinker, DemoApp::HelloWorld, DemoApp::ConsoleLoopback];

    /// Application name.
    pub fn name(self) -> &'static str {
        match self {
            DemoApp::Blinker => "blinker",
            DemoApp::HelloWorld => "hello_world",
            DemoApp::ConsoleLoopback => "console_loopback",
        }
    }
}

impl fmt::Display for DemoApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DemoApp {
    type Err = UnknownDemo;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoApp::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnknownDemo(s.to_string()))
    }
}

/// Variables for configuring one demo.
pub fn demo_variables(demo: DemoApp) -> BuildVariableSet {
    let mut vars = BuildVariableSet::new();
    vars.insert(DEMO_VARIABLE, demo.name());
    vars
}

/// Build folder for the demos of one platform profile.
pub fn demo_build_folder(platform: &str) -> String {
    format!("build/{platform}")
}

/// One configure step per demo, in build order.
pub fn demo_plan() -> Vec<(DemoApp, BuildVariableSet)> {
    DemoApp::ALL
        .into_iter()
        .map(|d| (d, demo_variables(d)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_covers_all_demos_in_order() {
        let plan = demo_plan();
        let names: Vec<_> = plan.iter().map(|(d, _)| d.name()).collect();
        assert_eq!(names, ["blinker", "hello_world", "console_loopback"]);
        for (demo, vars) in &plan {
            assert_eq!(vars.len(), 1);
            assert_eq!(vars.get(DEMO_VARIABLE), Some(demo.name()));
        }
    }

    #[test]
    fn demo_names_parse() {
        assert_eq!("hello_world".parse::<DemoApp>().unwrap(), DemoApp::HelloWorld);
        assert_eq!(
            "can_sniffer".parse::<DemoApp>().unwrap_err(),
            UnknownDemo("can_sniffer".into())
        );
    }

    #[test]
    fn build_folder_is_per_platform() {
        assert_eq!(demo_build_folder("mod-lpc40-v5"), "build/mod-lpc40-v5");
    }
}
