//! Artifacts handed to the dependency-graph builder and the native build.

use std::collections::BTreeMap;

use micromod_boards::{BoardDescriptor, VersionConstraint};
use serde::Serialize;

/// Build variable carrying the raw board identifier.
pub const BOARD_VARIABLE: &str = "LIBHAL_MICROMOD_BOARD";

/// Build variable carrying the resolved platform group.
pub const PLATFORM_LIBRARY_VARIABLE: &str = "LIBHAL_PLATFORM_LIBRARY";

/// A requirement on a driver package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct DependencyRequirement {
    /// Package to depend on.
    pub package_name: String,
    /// Acceptable versions.
    pub version_constraint: VersionConstraint,
    /// Consumers need the package's headers at compile time, not only its
    /// link-time symbols.
    pub transitive_header_exposure: bool,
}

impl DependencyRequirement {
    /// Package reference such as `libhal-arm-mcu/[^1.4.0]`.
    pub fn reference(&self) -> String {
        self.version_constraint.reference(&self.package_name)
    }
}

/// Ordered string variables for the native build configurator.
///
/// Backed by a `BTreeMap`, so iteration and serialization order is the same
/// on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildVariableSet(BTreeMap<String, String>);

impl BuildVariableSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Value of a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as `-DKEY=VALUE` cache arguments, in key order.
    pub fn to_cmake_args(&self) -> Vec<String> {
        self.iter().map(|(k, v)| format!("-D{k}={v}")).collect()
    }
}

/// The single driver package requirement for a resolved board.
pub fn emit_requirement(descriptor: &BoardDescriptor) -> DependencyRequirement {
    DependencyRequirement {
        package_name: descriptor.package_name.clone(),
        version_constraint: descriptor.version_constraint.clone(),
        transitive_header_exposure: descriptor.transitive_header_exposure,
    }
}

/// The board and platform-library variables for a resolved board.
///
/// `raw_board_id` is passed through unchanged so the native build can make
/// board-specific decisions beyond the platform group.
pub fn emit_variables(descriptor: &BoardDescriptor, raw_board_id: &str) -> BuildVariableSet {
    let mut vars = BuildVariableSet::new();
    vars.insert(BOARD_VARIABLE, raw_board_id);
    vars.insert(PLATFORM_LIBRARY_VARIABLE, descriptor.platform_group.as_str());
    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use micromod_boards::{Board, BoardRegistry};

    fn lpc40() -> &'static BoardDescriptor {
        BoardRegistry::global().get(Board::ModLpc40V5)
    }

    #[test]
    fn requirement_for_lpc40() {
        let req = emit_requirement(lpc40());
        assert_eq!(req.package_name, "libhal-arm-mcu");
        assert_eq!(req.version_constraint.as_str(), "^1.4.0");
        assert!(req.transitive_header_exposure);
        assert_eq!(req.reference(), "libhal-arm-mcu/[^1.4.0]");
    }

    #[test]
    fn variables_for_lpc40() {
        let vars = emit_variables(lpc40(), "mod-lpc40-v5");
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get(BOARD_VARIABLE), Some("mod-lpc40-v5"));
        assert_eq!(vars.get(PLATFORM_LIBRARY_VARIABLE), Some("arm-mcu"));
    }

    #[test]
    fn variable_order_is_stable() {
        let vars = emit_variables(lpc40(), "mod-lpc40-v5");
        let keys: Vec<_> = vars.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, [BOARD_VARIABLE, PLATFORM_LIBRARY_VARIABLE]);
        assert_eq!(
            vars.to_cmake_args(),
            [
                "-DLIBHAL_MICROMOD_BOARD=mod-lpc40-v5",
                "-DLIBHAL_PLATFORM_LIBRARY=arm-mcu",
            ]
        );
    }

    #[test]
    fn every_board_requires_transitive_headers() {
        for d in BoardRegistry::global().boards() {
            assert!(emit_requirement(d).transitive_header_exposure);
        }
    }

    #[test]
    fn variables_serialize_as_flat_map() {
        let vars = emit_variables(lpc40(), "mod-lpc40-v5");
        assert_eq!(
            serde_json::to_string(&vars).unwrap(),
            r#"{"LIBHAL_MICROMOD_BOARD":"mod-lpc40-v5","LIBHAL_PLATFORM_LIBRARY":"arm-mcu"}"#
        );
    }
}
