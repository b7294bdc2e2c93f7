//! Single-pass configuration pipeline.
//!
//! Each state consumes the previous one, so a pass can only move forward:
//!
//! ```text
//! Unconfigured --validate--> Validated --resolve--> Resolved --emit--> Emitted
//!       \
//!        +--(any rule fails)--> Failed
//! ```
//!
//! Nothing is produced on failure.

use std::fmt;

use micromod_boards::BoardDescriptor;
use serde::Serialize;
use tracing::{debug, info_span};

use crate::emit::{emit_requirement, emit_variables, BuildVariableSet, DependencyRequirement};
use crate::error::Result;
use crate::resolve::resolve;
use crate::selection::Selection;
use crate::validate::{validate, ValidatedBoard};

/// Pipeline phase, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Selection captured, nothing checked yet.
    Unconfigured,
    /// Selection passed every validation rule.
    Validated,
    /// Board descriptor looked up.
    Resolved,
    /// Requirement and build variables produced.
    Emitted,
    /// Validation rejected the selection.
    Failed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Unconfigured => "unconfigured",
            Phase::Validated => "validated",
            Phase::Resolved => "resolved",
            Phase::Emitted => "emitted",
            Phase::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// A selection that has not been checked yet.
#[derive(Debug, Clone)]
pub struct Unconfigured {
    selection: Selection,
}

impl Unconfigured {
    /// Start a pass from a selection.
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }

    /// Run the validator.
    pub fn validate(self) -> Result<Validated> {
        match validate(&self.selection) {
            Ok(board) => {
                debug!(phase = %Phase::Validated, "transition");
                Ok(Validated {
                    selection: self.selection,
                    board,
                })
            }
            Err(e) => {
                debug!(phase = %Phase::Failed, "transition");
                Err(e)
            }
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        Phase::Unconfigured
    }
}

/// A selection whose platform and board passed validation.
#[derive(Debug, Clone)]
pub struct Validated {
    selection: Selection,
    board: ValidatedBoard,
}

impl Validated {
    /// The validated board.
    pub fn board(&self) -> &ValidatedBoard {
        &self.board
    }

    /// Look up the board's descriptor.
    pub fn resolve(self) -> Resolved {
        let descriptor = resolve(&self.board);
        debug!(phase = %Phase::Resolved, "transition");
        Resolved {
            selection: self.selection,
            descriptor,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        Phase::Validated
    }
}

/// A board resolved to its descriptor.
#[derive(Debug, Clone)]
pub struct Resolved {
    selection: Selection,
    descriptor: &'static BoardDescriptor,
}

impl Resolved {
    /// The resolved descriptor.
    pub fn descriptor(&self) -> &BoardDescriptor {
        self.descriptor
    }

    /// Derive the requirement and build variables.
    pub fn emit(self) -> Emitted {
        let requirement = emit_requirement(self.descriptor);
        let variables = emit_variables(self.descriptor, self.selection.board_id());
        debug!(phase = %Phase::Emitted, requirement = %requirement.reference(), "transition");
        Emitted {
            descriptor: self.descriptor.clone(),
            requirements: vec![requirement],
            variables,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        Phase::Resolved
    }
}

/// Everything one successful pass produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Emitted {
    /// The resolved board.
    pub descriptor: BoardDescriptor,
    /// Driver package requirements; exactly one entry.
    pub requirements: Vec<DependencyRequirement>,
    /// Variables for the native build.
    pub variables: BuildVariableSet,
}

impl Emitted {
    /// Current phase.
    pub fn phase(&self) -> Phase {
        Phase::Emitted
    }
}

/// Run a complete pass over `selection`.
pub fn configure(selection: Selection) -> Result<Emitted> {
    let span = info_span!(
        "configure",
        platform = selection.platform_kind(),
        board = selection.board_id()
    );
    let _enter = span.enter();

    Ok(Unconfigured::new(selection).validate()?.resolve().emit())
}
