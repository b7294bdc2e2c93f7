//! Configuration resolution for the libhal-micromod package.
//!
//! Given a platform discriminator and a MicroMod board identifier, decides
//! what should be built and against which driver package:
//!
//! 1. [`validate`] checks the [`Selection`] and fails fast
//! 2. [`resolve`] maps the validated board to its registry descriptor
//! 3. [`emit_requirement`] and [`emit_variables`] derive the dependency
//!    requirement and the native build variables
//!
//! [`configure`] runs the whole pass. Nothing here compiles code or touches
//! the filesystem.

pub mod demos;
pub mod emit;
pub mod error;
pub mod package;
pub mod pipeline;
pub mod resolve;
pub mod selection;
pub mod validate;

pub use emit::{emit_requirement, emit_variables, BuildVariableSet, DependencyRequirement};
pub use error::{ConfigError, ProfileError, Result};
pub use package::{package_info, PackageInfo};
pub use pipeline::{configure, Emitted, Phase};
pub use resolve::resolve;
pub use selection::{Selection, UNSPECIFIED};
pub use validate::{validate, ValidatedBoard, REQUIRED_PLATFORM};
