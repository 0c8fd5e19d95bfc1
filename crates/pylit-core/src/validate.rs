//! Resource-guard visitor — nesting depth, container and string sizes.
//!
//! The third visitor over the value tree, and the proof that a new
//! traversal target needs no tree change. It walks a parsed tree before
//! conversion, enforcing configurable [`Limits`] and gathering per-variant
//! statistics into a [`Report`]. The first violation aborts the walk.
//!
//! Non-finite floats are rejected here even though the scanner cannot
//! produce them: trees can also be built by hand, and neither converter
//! has a faithful spelling for them.

use crate::error::PylitError;
use crate::value::{Scalar, Value, Visitor};

/// Limits enforced by [`Validator`].
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum nesting depth, scalars included.
    pub max_depth: usize,
    /// Maximum element count for any single container.
    pub max_container_len: usize,
    /// Maximum character count for any single string scalar.
    pub max_string_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 100,
            max_container_len: 100_000,
            max_string_len: 10_000,
        }
    }
}

/// Statistics gathered by a successful validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub scalars: usize,
    pub lists: usize,
    pub tuples: usize,
    pub sets: usize,
    pub dicts: usize,
    /// Deepest nesting level reached, counting every node.
    pub max_depth: usize,
    pub total_nodes: usize,
}

/// Walks a value tree checking [`Limits`]; call-local, one tree per
/// instance.
pub struct Validator {
    limits: Limits,
    depth: usize,
    report: Report,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

impl Validator {
    pub fn new(limits: Limits) -> Self {
        Self {
            limits,
            depth: 0,
            report: Report::default(),
        }
    }

    /// Walk the tree. Returns the statistics report, or the first limit
    /// violation as [`PylitError::Limit`].
    pub fn check(mut self, value: &Value) -> Result<Report, PylitError> {
        value.accept(&mut self)?;
        Ok(self.report)
    }

    fn enter(&mut self) -> Result<(), PylitError> {
        self.depth += 1;
        self.report.max_depth = self.report.max_depth.max(self.depth);
        self.report.total_nodes += 1;
        if self.depth > self.limits.max_depth {
            return Err(PylitError::Limit(format!(
                "nesting of {} levels exceeds the maximum of {}",
                self.depth, self.limits.max_depth
            )));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn check_len(&self, kind: &str, len: usize) -> Result<(), PylitError> {
        if len > self.limits.max_container_len {
            return Err(PylitError::Limit(format!(
                "{kind} of {len} elements exceeds the maximum of {}",
                self.limits.max_container_len
            )));
        }
        Ok(())
    }

    fn sequence(&mut self, kind: &str, items: &[Value]) -> Result<(), PylitError> {
        self.enter()?;
        self.check_len(kind, items.len())?;
        for item in items {
            item.accept(self)?;
        }
        self.leave();
        Ok(())
    }
}

impl Visitor for Validator {
    type Output = Result<(), PylitError>;

    fn visit_scalar(&mut self, scalar: &Scalar) -> Self::Output {
        self.enter()?;
        self.report.scalars += 1;
        match scalar {
            Scalar::Str(s) => {
                let len = s.chars().count();
                if len > self.limits.max_string_len {
                    return Err(PylitError::Limit(format!(
                        "string of {len} characters exceeds the maximum of {}",
                        self.limits.max_string_len
                    )));
                }
            }
            Scalar::Float(x) if !x.is_finite() => {
                return Err(PylitError::Limit(format!("non-finite float {x}")));
            }
            _ => {}
        }
        self.leave();
        Ok(())
    }

    fn visit_list(&mut self, items: &[Value]) -> Self::Output {
        self.report.lists += 1;
        self.sequence("list", items)
    }

    fn visit_tuple(&mut self, items: &[Value]) -> Self::Output {
        self.report.tuples += 1;
        self.sequence("tuple", items)
    }

    fn visit_set(&mut self, items: &[Value]) -> Self::Output {
        self.report.sets += 1;
        self.sequence("set", items)
    }

    fn visit_dict(&mut self, entries: &[(Value, Value)]) -> Self::Output {
        self.report.dicts += 1;
        self.enter()?;
        self.check_len("dict", entries.len())?;
        for (key, value) in entries {
            key.accept(self)?;
            value.accept(self)?;
        }
        self.leave();
        Ok(())
    }
}

/// Validate with the stock limits.
pub fn validate(value: &Value) -> Result<Report, PylitError> {
    Validator::default().check(value)
}
