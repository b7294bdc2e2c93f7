//! Board registry for the libhal MicroMod processor interface.
//!
//! Maps each supported MicroMod processor board to the platform driver
//! package that implements it:
//! - **Boards**: closed set of selectable board identifiers
//! - **Platform groups**: driver packages shared by boards with a common
//!   microcontroller architecture
//! - **Version constraints**: caret ranges on the driver package

pub mod board;
pub mod constraint;
pub mod error;
pub mod registry;

pub use board::{Board, PlatformGroup};
pub use constraint::VersionConstraint;
pub use error::{BoardError, Result};
pub use registry::{BoardDescriptor, BoardRegistry, REGISTRY_REVISION};
