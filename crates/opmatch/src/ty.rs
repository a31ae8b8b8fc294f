//! Type descriptors for op matching.
//!
//! A `Type` describes what a request requires or what a candidate declares.
//! It is a tagged variant so the solver can branch on shape rather than on
//! run-time inspection:
//!
//! - `Named`: a plain nominal reference (`Shape`, `f64`)
//! - `Applied`: a generic application (`List<f64>`, `Pair<Shape, T>`)
//! - `Var`: a type variable to be resolved during matching (`T`)
//!
//! All variants hash and compare structurally, so descriptors can key
//! caches and binding tables directly.

use std::fmt;

/// A type variable appearing inside a required type descriptor.
///
/// Variables are identified by their declared name; two occurrences of
/// `T` in the same request refer to the same variable and must resolve
/// to compatible concrete types within one matching attempt.
#[derive(Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct TypeVar(Box<str>);

impl TypeVar {
    /// Create a type variable with the given name.
    pub fn new(name: impl Into<Box<str>>) -> Self {
        TypeVar(name.into())
    }

    /// The variable's declared name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A type descriptor.
///
/// Children of `Applied` are boxed into a slice so the enum stays small
/// and descriptors stay cheap to clone when a binding is recorded.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// Plain nominal reference.
    Named(Box<str>),

    /// Generic application: the base name with type arguments.
    /// For example, `List<f64>` is `Applied { name: "List", args: [f64] }`.
    Applied {
        /// The generic base name.
        name: Box<str>,
        /// The type arguments, possibly containing variables.
        args: Box<[Type]>,
    },

    /// Type variable slot, resolved against the candidate during matching.
    Var(TypeVar),
}

impl Type {
    /// Construct a plain named type.
    pub fn named(name: impl Into<Box<str>>) -> Self {
        Type::Named(name.into())
    }

    /// Construct a generic application.
    pub fn applied(name: impl Into<Box<str>>, args: impl IntoIterator<Item = Type>) -> Self {
        Type::Applied {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Construct a type variable.
    pub fn var(name: impl Into<Box<str>>) -> Self {
        Type::Var(TypeVar::new(name))
    }

    /// Check if this is a type variable.
    pub fn is_var(&self) -> bool {
        matches!(self, Type::Var(_))
    }

    /// Check if this is a generic application.
    pub fn is_applied(&self) -> bool {
        matches!(self, Type::Applied { .. })
    }

    /// The nominal base name, if any.
    ///
    /// Variables have no base name; they stand for a type yet unknown.
    pub fn base_name(&self) -> Option<&str> {
        match self {
            Type::Named(name) | Type::Applied { name, .. } => Some(name),
            Type::Var(_) => None,
        }
    }

    /// The type arguments (empty for non-applied descriptors).
    pub fn args(&self) -> &[Type] {
        match self {
            Type::Applied { args, .. } => args,
            Type::Named(_) | Type::Var(_) => &[],
        }
    }

    /// Human-readable display name, e.g. `Pair<Shape, T>`.
    ///
    /// Used by request labels and error dumps.
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Named(name) => f.write_str(name),
            Type::Applied { name, args } => {
                f.write_str(name)?;
                f.write_str("<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(arg, f)?;
                }
                f.write_str(">")
            }
            Type::Var(var) => fmt::Display::fmt(var, f),
        }
    }
}
