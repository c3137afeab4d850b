//! The handler contract shared by every node in a chain.

use std::fmt;

use tracing::debug;

/// A node in the chain. Each node owns at most one successor.
pub trait Handler: fmt::Debug {
    /// Installs `next` as this node's successor, dropping any previous one,
    /// and returns the node just installed so links can be written fluently:
    /// `a.set_next(b).set_next(c)`.
    fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler;

    /// Resolves `request` locally or forwards it unchanged to the successor.
    fn handle_request(&self, request: &str) -> String;

    /// The predicate and literals this node answers with.
    fn stage(&self) -> &Stage;

    /// The current successor, if any.
    fn next(&self) -> Option<&dyn Handler>;

    fn name(&self) -> &'static str {
        self.stage().name
    }
}

/// Sentinel and outcome literals for a single validation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub name: &'static str,
    pub sentinel: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

impl Stage {
    pub fn matches(&self, request: &str) -> bool {
        request == self.sentinel
    }

    /// Exact match answers with the success literal. Otherwise the request
    /// goes to `next` as-is and its answer is returned untouched; with no
    /// successor the stage's own failure literal is the result.
    pub fn resolve(&self, request: &str, next: Option<&dyn Handler>) -> String {
        if self.matches(request) {
            debug!(stage = self.name, "request resolved");
            return self.success.to_string();
        }

        match next {
            Some(next) => {
                debug!(stage = self.name, next = next.name(), "forwarding request");
                next.handle_request(request)
            }
            None => {
                debug!(stage = self.name, "no successor, rejecting request");
                self.failure.to_string()
            }
        }
    }
}
