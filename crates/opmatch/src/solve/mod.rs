//! Constraint checking with type-variable unification.
//!
//! The solver decides whether a candidate's declared type satisfies a
//! single required type descriptor. Two comparison strategies, selected
//! by the shape of the required type:
//!
//! - plain named constraints use nominal assignability against the
//!   [`Universe`](crate::Universe), with no variable involvement
//! - applied or variable constraints use generic assignability, deducing
//!   concrete types for variables by structural unification against the
//!   candidate's argument positions
//!
//! Deduced bindings accumulate in a caller-owned [`Bindings`] table for
//! the duration of one resolution attempt, so a variable reused across
//! several required types must resolve consistently. The solver never
//! rolls back partial bindings on failure; callers supply a fresh table
//! per candidate when bindings must not leak between attempts.
//!
//! Every outcome is a plain boolean. A mismatch, including a binding
//! conflict, is the expected signal for "try the next candidate", not an
//! error.

use rustc_hash::FxHashMap;

use crate::ty::{Type, TypeVar};
use crate::universe::Universe;

/// Type-variable bindings for one resolution attempt.
///
/// Maps each variable to the concrete type deduced for it so far. Owned
/// by the caller of the solver and discarded (or cleared) between
/// attempts; never shared across concurrent attempts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    map: FxHashMap<TypeVar, Type>,
}

impl Bindings {
    /// Create an empty binding table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The type currently bound to `var`, if any.
    pub fn get(&self, var: &TypeVar) -> Option<&Type> {
        self.map.get(var)
    }

    /// Record a binding, replacing any previous one.
    pub fn bind(&mut self, var: TypeVar, ty: Type) {
        self.map.insert(var, ty);
    }

    /// Number of bound variables.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check whether no variable has been bound yet.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drop all bindings, readying the table for a new attempt.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Iterate over the recorded bindings.
    pub fn iter(&self) -> impl Iterator<Item = (&TypeVar, &Type)> {
        self.map.iter()
    }
}

/// Nominal/structural assignability: may `from` stand in wherever `to`
/// is expected? No variable binding is involved.
///
/// - identical descriptors are always assignable
/// - named-to-named follows the universe's conformance relation
/// - applied-to-named widens to the bare base (`List<f64>` where `Seq`
///   is expected, given `List` conforms to `Seq`)
/// - applied-to-applied requires a conforming base, equal arity, and
///   identical type arguments (arguments are invariant)
/// - a bare variable on either side matches only its exact self
pub fn is_assignable(universe: &Universe, from: &Type, to: &Type) -> bool {
    if from == to {
        return true;
    }
    match (from, to) {
        (Type::Named(f), Type::Named(t)) => universe.conforms(f, t),
        (Type::Applied { name: f, .. }, Type::Named(t)) => universe.conforms(f, t),
        (
            Type::Applied {
                name: f,
                args: from_args,
            },
            Type::Applied {
                name: t,
                args: to_args,
            },
        ) => {
            universe.conforms(f, t) && from_args == to_args
        }
        _ => false,
    }
}

/// Generic assignability: may `candidate` stand in for `required`,
/// treating variables in `required` as slots to resolve?
///
/// Variables deduce their concrete type from the candidate's
/// corresponding position. A fresh variable binds and succeeds; an
/// already-bound variable succeeds only if the newly deduced type equals
/// or conforms to its existing binding. Bindings recorded here stay in
/// `bindings` even when a later step fails.
pub fn check_generic_assignability(
    universe: &Universe,
    candidate: &Type,
    required: &Type,
    bindings: &mut Bindings,
) -> bool {
    match required {
        Type::Var(var) => match bindings.get(var) {
            Some(bound) => {
                let ok = is_assignable(universe, candidate, bound);
                if !ok {
                    tracing::trace!(
                        var = %var,
                        bound = %bound,
                        deduced = %candidate,
                        "binding conflict"
                    );
                }
                ok
            }
            None => {
                tracing::trace!(var = %var, ty = %candidate, "binding variable");
                bindings.bind(var.clone(), candidate.clone());
                true
            }
        },

        Type::Applied {
            name: req_name,
            args: req_args,
        } => {
            let Type::Applied {
                name: cand_name,
                args: cand_args,
            } = candidate
            else {
                return false;
            };
            if !universe.conforms(cand_name, req_name) {
                return false;
            }
            if cand_args.len() != req_args.len() {
                return false;
            }
            // A declared arity that disagrees with the argument count marks
            // the descriptor malformed; treat it as an ordinary mismatch.
            if let Some(arity) = universe.arity(req_name) {
                if req_args.len() != arity {
                    tracing::trace!(name = %req_name, "malformed application, arity mismatch");
                    return false;
                }
            }
            cand_args
                .iter()
                .zip(req_args.iter())
                .all(|(cand, req)| check_generic_assignability(universe, cand, req, bindings))
        }

        Type::Named(_) => is_assignable(universe, candidate, required),
    }
}
