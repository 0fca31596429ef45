//! Per-parse state: rule resolution, fuel, tracing, fatal errors.
//!
//! # Fuel
//!
//! Execution fuel is opt-in and never replenishes; every parser invocation
//! burns one unit. Recursion fuel is on by default and restores when a rule
//! call returns, so it bounds nesting depth rather than total work.
//! Left-recursive rules exhaust recursion fuel instead of overflowing the
//! stack. Input that nests rules `N` deep needs a recursion limit above `N`.
//!
//! # Fatal errors
//!
//! Running out of fuel records a [`RuntimeError`] and aborts: every
//! combinator checks [`ParseContext::consume_fuel`] on entry and fails, so
//! the whole parse unwinds with `None` and the caller collects the error via
//! [`ParseContext::finish`].

use crate::combinators::ParserRef;
use crate::registry::Registry;

use super::error::RuntimeError;
use super::trace::Tracer;

pub const DEFAULT_RECURSION_FUEL: u32 = 512;

/// Fuel limits applied to each parse. `None` = infinite.
///
/// By default a parse may do unbounded work but nest rule calls at most
/// [`DEFAULT_RECURSION_FUEL`] deep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseLimits {
    pub exec_fuel: Option<u32>,
    pub recursion_fuel: Option<u32>,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            exec_fuel: None,
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }
}

pub struct ParseContext<'r> {
    registry: &'r Registry,
    tracer: &'r mut dyn Tracer,
    exec_fuel_remaining: Option<u32>,
    recursion_fuel_limit: Option<u32>,
    depth: u32,
    fatal_error: Option<RuntimeError>,
}

impl<'r> ParseContext<'r> {
    pub fn new(registry: &'r Registry, tracer: &'r mut dyn Tracer) -> Self {
        let limits = registry.limits();
        Self {
            registry,
            tracer,
            exec_fuel_remaining: limits.exec_fuel,
            recursion_fuel_limit: limits.recursion_fuel,
            depth: 0,
            fatal_error: None,
        }
    }

    /// The registry identifier references resolve against.
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Parser registered under `name`, looked up now rather than when the
    /// referencing parser was built.
    pub fn resolve(&self, name: &str) -> Option<&'r ParserRef> {
        self.registry.lookup(name)
    }

    pub fn tracer(&mut self) -> &mut dyn Tracer {
        &mut *self.tracer
    }

    /// Burn one unit of execution fuel.
    ///
    /// Returns `false` when the parse must stop, either because fuel just ran
    /// out or because an earlier fatal error is pending.
    pub fn consume_fuel(&mut self) -> bool {
        if self.fatal_error.is_some() {
            return false;
        }
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                self.abort(RuntimeError::ExecFuelExhausted);
                return false;
            }
            *remaining -= 1;
        }
        true
    }

    /// Enter a rule call. Returns `false` (and aborts) past the recursion limit.
    pub fn enter_rule(&mut self) -> bool {
        if let Some(limit) = self.recursion_fuel_limit
            && self.depth >= limit
        {
            self.abort(RuntimeError::RecursionLimitExceeded);
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn exit_rule(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Rule calls currently open.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Record a fatal error. The first one wins.
    pub fn abort(&mut self, error: RuntimeError) {
        if self.fatal_error.is_none() {
            self.fatal_error = Some(error);
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.fatal_error.is_some()
    }

    pub fn finish(self) -> Result<(), RuntimeError> {
        match self.fatal_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
