//! Caret version constraints for driver package requirements.
//!
//! Wraps the `semver` crate. A constraint such as `^1.4.0` admits every
//! version `>=1.4.0` and `<2.0.0`: the lower bound is inclusive and the upper
//! bound is the next major release, exclusive.

use std::fmt;

use semver::{Comparator, Op, Version, VersionReq};
use serde::Serialize;

use crate::error::{BoardError, Result};

/// A minimum-inclusive, next-major-exclusive version range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VersionConstraint(String);

impl VersionConstraint {
    /// Parse and check a caret constraint like `^1.4.0`.
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let constraint = Self(text.into());
        constraint.comparator()?;
        Ok(constraint)
    }

    /// Wrap a constraint from the static board table without checking it.
    ///
    /// The registry tests parse every table entry.
    pub(crate) fn from_static(text: &'static str) -> Self {
        Self(text.to_string())
    }

    /// The constraint text, exactly as written in the registry.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a `semver` requirement.
    pub fn parse(&self) -> Result<VersionReq> {
        VersionReq::parse(&self.0).map_err(|e| self.invalid(e.to_string()))
    }

    /// The inclusive minimum version.
    pub fn lower_bound(&self) -> Result<Version> {
        let c = self.comparator()?;
        // comparator() guarantees minor and patch are present
        Ok(Version::new(
            c.major,
            c.minor.unwrap_or(0),
            c.patch.unwrap_or(0),
        ))
    }

    /// The exclusive upper bound: the next major release.
    pub fn upper_bound(&self) -> Result<Version> {
        let c = self.comparator()?;
        Ok(Version::new(c.major + 1, 0, 0))
    }

    /// Check whether a concrete version satisfies the constraint.
    pub fn matches(&self, version: &Version) -> Result<bool> {
        Ok(self.parse()?.matches(version))
    }

    /// Render a package reference of the form `name/[constraint]`.
    pub fn reference(&self, package_name: &str) -> String {
        format!("{package_name}/[{}]", self.0)
    }

    fn comparator(&self) -> Result<Comparator> {
        let req = self.parse()?;
        let [c] = req.comparators.as_slice() else {
            return Err(self.invalid(format!(
                "expected a single comparator, found {}",
                req.comparators.len()
            )));
        };
        // semver reads a bare "1.4.0" as caret; require the explicit form
        if c.op != Op::Caret || !self.0.trim_start().starts_with('^') {
            return Err(self.invalid("expected a caret (^) range".into()));
        }
        if c.minor.is_none() || c.patch.is_none() {
            return Err(self.invalid("lower bound must be a full major.minor.patch version".into()));
        }
        if c.major == 0 {
            // ^0.x narrows to the next minor, not the next major
            return Err(self.invalid("major version must be at least 1".into()));
        }
        if !c.pre.is_empty() {
            return Err(self.invalid("pre-release lower bounds are not allowed".into()));
        }
        Ok(c.clone())
    }

    fn invalid(&self, detail: String) -> BoardError {
        BoardError::InvalidConstraint {
            constraint: self.0.clone(),
            detail,
        }
    }
}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn caret_bounds() {
        let c = VersionConstraint::new("^1.4.0").unwrap();
        assert_eq!(c.lower_bound().unwrap(), v("1.4.0"));
        assert_eq!(c.upper_bound().unwrap(), v("2.0.0"));
    }

    #[test]
    fn caret_matching() {
        let c = VersionConstraint::new("^1.4.0").unwrap();
        assert!(c.matches(&v("1.4.0")).unwrap());
        assert!(c.matches(&v("1.9.3")).unwrap());
        assert!(!c.matches(&v("1.3.9")).unwrap());
        assert!(!c.matches(&v("2.0.0")).unwrap());
    }

    #[test]
    fn package_reference() {
        let c = VersionConstraint::new("^1.4.0").unwrap();
        assert_eq!(c.reference("libhal-arm-mcu"), "libhal-arm-mcu/[^1.4.0]");
        assert_eq!(c.to_string(), "^1.4.0");
    }

    #[test]
    fn rejects_garbage() {
        let err = VersionConstraint::new("not-a-version").unwrap_err();
        assert!(matches!(err, BoardError::InvalidConstraint { .. }));
    }

    #[test]
    fn rejects_non_caret_ranges() {
        assert!(VersionConstraint::new(">=1.0.0, <2.0.0").is_err());
        assert!(VersionConstraint::new("=1.0.0").is_err());
        assert!(VersionConstraint::new("~1.2.0").is_err());
        assert!(VersionConstraint::new("1.4.0").is_err());
    }

    #[test]
    fn rejects_partial_and_zero_major() {
        assert!(VersionConstraint::new("^1.4").is_err());
        assert!(VersionConstraint::new("^0.2.1").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let c = VersionConstraint::new("^1.4.0").unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"^1.4.0\"");
    }
}
