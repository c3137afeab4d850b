//! Chain assembly and inspection.

use std::iter;

use serde::Serialize;
use tracing::debug;

use crate::errors::ChainError;
use crate::handler::Handler;
use crate::stages::{AvailabilityChecker, DeadlineChecker, StageKind, Validator};

/// Owns the head of a linked handler chain.
#[derive(Debug)]
pub struct Chain {
    head: Box<dyn Handler>,
}

/// How a single request travelled through the chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Route {
    pub request: String,
    pub visited: Vec<&'static str>,
    pub resolved_by: Option<&'static str>,
    pub result: String,
}

impl Chain {
    pub fn new(head: Box<dyn Handler>) -> Self {
        Self { head }
    }

    /// Validator -> AvailabilityChecker -> DeadlineChecker.
    pub fn standard() -> Self {
        let mut validator = Validator::new();
        validator
            .set_next(Box::new(AvailabilityChecker::new()))
            .set_next(Box::new(DeadlineChecker::new()));
        Self::new(Box::new(validator))
    }

    /// Links one fresh handler per entry, in order. Repeated stages are
    /// allowed and each gets its own node.
    pub fn from_stages(stages: &[StageKind]) -> Result<Self, ChainError> {
        let mut remaining = stages.iter().rev();
        let last = remaining.next().ok_or(ChainError::EmptyChain)?;

        let mut head = last.into_handler();
        for kind in remaining {
            let mut node = kind.into_handler();
            node.set_next(head);
            head = node;
        }

        debug!(len = stages.len(), "chain assembled");
        Ok(Self::new(head))
    }

    pub fn handle_request(&self, request: &str) -> String {
        self.head.handle_request(request)
    }

    pub fn head(&self) -> &dyn Handler {
        &*self.head
    }

    /// Mutable access to the head, e.g. to relink it after assembly.
    pub fn head_mut(&mut self) -> &mut dyn Handler {
        &mut *self.head
    }

    /// Walks the current links from the head to the terminal node.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Handler> + '_ {
        let head: &dyn Handler = &*self.head;
        iter::successors(Some(head), |node| node.next())
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.iter().map(|node| node.name()).collect()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Handles `request` from the head and records which nodes it reached.
    /// The result is exactly what `handle_request` returns.
    pub fn route(&self, request: &str) -> Route {
        let mut visited = Vec::new();
        let mut resolved_by = None;
        for node in self.iter() {
            visited.push(node.name());
            if node.stage().matches(request) {
                resolved_by = Some(node.name());
                break;
            }
        }

        Route {
            request: request.to_string(),
            visited,
            resolved_by,
            result: self.handle_request(request),
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::standard()
    }
}
