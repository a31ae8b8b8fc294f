//! Op-resolution requests.
//!
//! A `Request` captures what a caller needs from an op: an optional name,
//! the types a candidate's declared signature must satisfy, an optional
//! output type, and the argument types to be supplied. The surrounding
//! registry iterates candidates and calls [`Request::satisfies_with`] once
//! per candidate, threading a fresh [`Bindings`] table per attempt; on
//! total failure it reports the request's [`Display`](fmt::Display) dump.
//!
//! Requests are immutable value objects. Equality and hashing are
//! structural over all four fields, so content-identical requests built
//! from separately allocated parts are interchangeable as cache keys.

use std::fmt;

use crate::solve::{check_generic_assignability, is_assignable, Bindings};
use crate::ty::Type;
use crate::universe::Universe;

/// Identifies an op by name and/or required types, along with the
/// argument types to pass to it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Request {
    /// Name of the op, or `None` for any name.
    name: Option<String>,

    /// Types the op's declared signature must satisfy, or `None` for no
    /// constraint. `None` and `Some([])` differ: an empty list is a
    /// present constraint that every candidate trivially passes.
    types: Option<Box<[Type]>>,

    /// Required output type, or `None` for unconstrained.
    out_type: Option<Type>,

    /// Argument types, gaps already filtered out.
    args: Box<[Type]>,
}

impl Request {
    /// Create a request. Unspecified slots in `types` and `args` are
    /// dropped; the order of the remaining entries is preserved.
    ///
    /// Descriptor well-formedness is not validated here; a malformed
    /// descriptor surfaces as an ordinary mismatch when matched.
    pub fn new(
        name: Option<String>,
        types: Option<Vec<Option<Type>>>,
        out_type: Option<Type>,
        args: Vec<Option<Type>>,
    ) -> Self {
        Self {
            name,
            types: types.map(filter_slots),
            out_type,
            args: filter_slots(args),
        }
    }

    /// Create a request matching any name.
    pub fn from_types(
        types: Vec<Option<Type>>,
        out_type: Option<Type>,
        args: Vec<Option<Type>>,
    ) -> Self {
        Self::new(None, Some(types), out_type, args)
    }

    /// Create a named request.
    pub fn named(
        name: impl Into<String>,
        types: Vec<Option<Type>>,
        out_type: Option<Type>,
        args: Vec<Option<Type>>,
    ) -> Self {
        Self::new(Some(name.into()), Some(types), out_type, args)
    }

    /// The op name, or `None` for any name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The required types, as an independent copy the caller may mutate
    /// freely. `None` means no constraint.
    pub fn types(&self) -> Option<Vec<Type>> {
        self.types.as_ref().map(|ts| ts.to_vec())
    }

    /// Borrowed view of the required types, for the matching hot path.
    pub fn types_ref(&self) -> Option<&[Type]> {
        self.types.as_deref()
    }

    /// The required output type, or `None` for unconstrained.
    pub fn out_type(&self) -> Option<&Type> {
        self.out_type.as_ref()
    }

    /// The argument types, as an independent copy the caller may mutate
    /// freely.
    pub fn args(&self) -> Vec<Type> {
        self.args.to_vec()
    }

    /// Borrowed view of the argument types.
    pub fn args_ref(&self) -> &[Type] {
        &self.args
    }

    /// A label identifying the request's scope: the name and the display
    /// names of the required types, joined with `/`. Absent and empty
    /// segments are omitted entirely.
    pub fn label(&self) -> String {
        let mut out = String::new();
        if let Some(name) = &self.name {
            append_segment(&mut out, name);
        }
        if let Some(types) = &self.types {
            for ty in types.iter() {
                append_segment(&mut out, &ty.display_name());
            }
        }
        out
    }

    /// Check whether `candidate` satisfies the required types, with a
    /// binding table private to this call.
    pub fn satisfies(&self, candidate: &Type, universe: &Universe) -> bool {
        self.satisfies_with(candidate, universe, &mut Bindings::new())
    }

    /// Check whether `candidate` satisfies the required types.
    ///
    /// Required types are checked in order and the first failure ends
    /// the pass. `bindings` accumulates variable resolutions across the
    /// whole pass, so a variable shared by several required types must
    /// deduce compatible concrete types; bindings recorded before a
    /// failure are left in place.
    #[tracing::instrument(level = "trace", skip(self, universe, bindings), fields(label = %self.label()))]
    pub fn satisfies_with(
        &self,
        candidate: &Type,
        universe: &Universe,
        bindings: &mut Bindings,
    ) -> bool {
        let Some(types) = &self.types else {
            return true;
        };
        for required in types.iter() {
            let ok = match required {
                Type::Named(_) => is_assignable(universe, candidate, required),
                Type::Applied { .. } | Type::Var(_) => {
                    check_generic_assignability(universe, candidate, required, bindings)
                }
            };
            if !ok {
                tracing::trace!(required = %required, candidate = %candidate, "mismatch");
                return false;
            }
        }
        true
    }
}

/// Drop unspecified slots, preserving the order of the rest.
fn filter_slots(slots: Vec<Option<Type>>) -> Box<[Type]> {
    slots.into_iter().flatten().collect()
}

fn append_segment(out: &mut String, segment: &str) {
    if segment.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push('/');
    }
    out.push_str(segment);
}

impl fmt::Display for Request {
    /// Multi-line dump for error reporting. Not part of equality.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "Name: \"{name}\", ")?;
        }
        f.write_str("Types: ")?;
        match &self.types {
            Some(types) => {
                f.write_str("[")?;
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{ty}")?;
                }
                f.write_str("]")?;
            }
            None => f.write_str("(any)")?,
        }
        f.write_str("\nInput Types:\n")?;
        if self.args.is_empty() {
            f.write_str("\t\t* (none)\n")?;
        } else {
            for arg in self.args.iter() {
                writeln!(f, "\t\t* {arg}")?;
            }
        }
        f.write_str("Output Type:\n")?;
        match &self.out_type {
            Some(out) => write!(f, "\t\t* {out}"),
            None => f.write_str("\t\t*"),
        }
    }
}
