//! Metadata the built package exports to its consumers.

use serde::Serialize;

use crate::emit::{BuildVariableSet, PLATFORM_LIBRARY_VARIABLE};
use crate::validate::REQUIRED_PLATFORM;

/// Name of the package this recipe builds.
pub const PACKAGE_NAME: &str = "libhal-micromod";

/// Build-environment variable naming the platform.
pub const PLATFORM_VARIABLE: &str = "LIBHAL_PLATFORM";

/// Link and build-environment information for consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PackageInfo {
    /// Libraries to link.
    pub libs: Vec<String>,
    /// Imported CMake target.
    pub cmake_target_name: String,
    /// Variables defined in consumers' build environment.
    pub build_env: BuildVariableSet,
}

/// Package info for `libhal-micromod`.
///
/// Consumers see the platform and platform library as "micromod" regardless
/// of which driver group was resolved underneath.
pub fn package_info() -> PackageInfo {
    let mut build_env = BuildVariableSet::new();
    build_env.insert(PLATFORM_VARIABLE, REQUIRED_PLATFORM);
    build_env.insert(PLATFORM_LIBRARY_VARIABLE, REQUIRED_PLATFORM);
    PackageInfo {
        libs: vec![PACKAGE_NAME.to_string()],
        cmake_target_name: "libhal::micromod".to_string(),
        build_env,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_micromod_target() {
        let info = package_info();
        assert_eq!(info.libs, ["libhal-micromod"]);
        assert_eq!(info.cmake_target_name, "libhal::micromod");
        assert_eq!(info.build_env.get("LIBHAL_PLATFORM"), Some("micromod"));
        assert_eq!(info.build_env.get("LIBHAL_PLATFORM_LIBRARY"), Some("micromod"));
    }
}
