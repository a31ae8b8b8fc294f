//! Op-resolution requests and generic type matching.
//!
//! A [`Request`] describes the op a caller needs: an optional name, the
//! type constraints a candidate's declared signature must satisfy, an
//! optional output type, and the argument types to supply. The
//! surrounding registry iterates candidate signatures and asks each one
//! whether it satisfies the request; this crate decides eligibility and
//! supplies the diagnostic text for failures, but never executes an op.
//!
//! # Matching
//!
//! Plain named constraints are checked by nominal assignability against
//! a [`Universe`] of registered conformance relations. Applied (generic)
//! constraints additionally resolve type variables by unifying against
//! the candidate's argument positions, accumulating deductions in a
//! per-attempt [`Bindings`] table so one variable reused across several
//! constraints must resolve consistently.
//!
//! # Usage
//!
//! ```
//! use opmatch::{Request, Type, Universe};
//!
//! let mut universe = Universe::new();
//! universe.register("Shape", 0, Vec::<String>::new())?;
//! universe.register("Circle", 0, ["Shape"])?;
//!
//! let request = Request::named(
//!     "geom.size",
//!     vec![Some(Type::named("Shape"))],
//!     None,
//!     vec![Some(Type::named("Shape"))],
//! );
//!
//! assert!(request.satisfies(&Type::named("Circle"), &universe));
//! assert_eq!(request.label(), "geom.size/Shape");
//! # Ok::<(), opmatch::UniverseError>(())
//! ```

mod request;
mod solve;
mod ty;
mod universe;

pub use request::Request;
pub use solve::{check_generic_assignability, is_assignable, Bindings};
pub use ty::{Type, TypeVar};
pub use universe::{TypeEntry, Universe, UniverseError};
