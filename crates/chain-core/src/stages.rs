//! The three work order stages and a factory keyed by stage name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ChainError;
use crate::handler::{Handler, Stage};

type Successor = Option<Box<dyn Handler>>;

/// Checks that the work order itself is well formed.
#[derive(Debug, Default)]
pub struct Validator {
    next: Successor,
}

impl Validator {
    pub const STAGE: Stage = Stage {
        name: "validator",
        sentinel: "Valid request",
        success: "Validation succeeded",
        failure: "Validation failed",
    };

    pub fn new() -> Self {
        Self::default()
    }
}

impl Handler for Validator {
    fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler {
        &mut **self.next.insert(next)
    }

    fn handle_request(&self, request: &str) -> String {
        Self::STAGE.resolve(request, self.next.as_deref())
    }

    fn stage(&self) -> &Stage {
        &Self::STAGE
    }

    fn next(&self) -> Option<&dyn Handler> {
        self.next.as_deref()
    }
}

/// Checks that someone is free to pick the work order up.
#[derive(Debug, Default)]
pub struct AvailabilityChecker {
    next: Successor,
}

impl AvailabilityChecker {
    pub const STAGE: Stage = Stage {
        name: "availability",
        sentinel: "Available request",
        success: "Availability check succeeded",
        failure: "Availability check failed",
    };

    pub fn new() -> Self {
        Self::default()
    }
}

impl Handler for AvailabilityChecker {
    fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler {
        &mut **self.next.insert(next)
    }

    fn handle_request(&self, request: &str) -> String {
        Self::STAGE.resolve(request, self.next.as_deref())
    }

    fn stage(&self) -> &Stage {
        &Self::STAGE
    }

    fn next(&self) -> Option<&dyn Handler> {
        self.next.as_deref()
    }
}

/// Checks that the work order can still meet its deadline.
#[derive(Debug, Default)]
pub struct DeadlineChecker {
    next: Successor,
}

impl DeadlineChecker {
    pub const STAGE: Stage = Stage {
        name: "deadline",
        sentinel: "On time request",
        success: "Deadline check succeeded",
        failure: "Deadline check failed",
    };

    pub fn new() -> Self {
        Self::default()
    }
}

impl Handler for DeadlineChecker {
    fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler {
        &mut **self.next.insert(next)
    }

    fn handle_request(&self, request: &str) -> String {
        Self::STAGE.resolve(request, self.next.as_deref())
    }

    fn stage(&self) -> &Stage {
        &Self::STAGE
    }

    fn next(&self) -> Option<&dyn Handler> {
        self.next.as_deref()
    }
}

/// Stage selector used by configuration and the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageKind {
    Validator,
    Availability,
    Deadline,
}

impl StageKind {
    /// Canonical pipeline order.
    pub const ALL: [StageKind; 3] = [
        StageKind::Validator,
        StageKind::Availability,
        StageKind::Deadline,
    ];

    pub fn as_str(&self) -> &'static str {
        self.stage().name
    }

    pub fn stage(&self) -> &'static Stage {
        match self {
            StageKind::Validator => &Validator::STAGE,
            StageKind::Availability => &AvailabilityChecker::STAGE,
            StageKind::Deadline => &DeadlineChecker::STAGE,
        }
    }

    /// Builds a fresh, unlinked handler for this stage.
    pub fn into_handler(self) -> Box<dyn Handler> {
        match self {
            StageKind::Validator => Box::new(Validator::new()),
            StageKind::Availability => Box::new(AvailabilityChecker::new()),
            StageKind::Deadline => Box::new(DeadlineChecker::new()),
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StageKind {
    type Err = ChainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "validator" | "validation" => Ok(StageKind::Validator),
            "availability" | "availability-checker" => Ok(StageKind::Availability),
            "deadline" | "deadline-checker" => Ok(StageKind::Deadline),
            _ => Err(ChainError::UnknownStage(raw.trim().to_string())),
        }
    }
}
