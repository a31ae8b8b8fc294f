//! Registry of named types and their conformance relations.
//!
//! The `Universe` is the assignability oracle: it records which named
//! types exist, their generic arity, and which other types each one may
//! stand in for (its declared supertypes or capabilities).
//!
//! # Design
//!
//! - Entries live in a single `Vec<TypeEntry>`; the name index holds
//!   `usize` positions into it (`BTreeMap` for deterministic iteration)
//! - Conformance edges name their target, so registration validates that
//!   every target is already registered; the relation is therefore acyclic
//! - Names the universe has never seen conform only to themselves, which
//!   makes malformed descriptors fail matching conservatively instead of
//!   erroring

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

/// Errors from universe registration.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum UniverseError {
    /// The name is already registered.
    #[error("type `{0}` is already registered")]
    Duplicate(String),

    /// A conformance edge names a type that has not been registered.
    #[error("type `{name}` declares conformance to unregistered type `{target}`")]
    UnknownTarget {
        /// The type being registered.
        name: String,
        /// The unregistered conformance target.
        target: String,
    },
}

/// A registered named type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeEntry {
    /// The type's name.
    pub name: String,

    /// Number of generic parameters (0 for non-generic types).
    pub arity: usize,

    /// Names of types this one may stand in for (direct edges only;
    /// `conforms` computes the transitive closure).
    pub conforms_to: Vec<String>,
}

/// Registry of named types and conformance relations.
#[derive(Clone, Debug, Default)]
pub struct Universe {
    /// All registered entries.
    entries: Vec<TypeEntry>,

    /// Name -> entry index.
    by_name: BTreeMap<String, usize>,
}

impl Universe {
    /// Create an empty universe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named type.
    ///
    /// `conforms_to` lists the direct supertypes/capabilities; each must
    /// already be registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        arity: usize,
        conforms_to: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<(), UniverseError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(UniverseError::Duplicate(name));
        }

        let conforms_to: Vec<String> = conforms_to.into_iter().map(Into::into).collect();
        for target in &conforms_to {
            if !self.by_name.contains_key(target) {
                return Err(UniverseError::UnknownTarget {
                    name,
                    target: target.clone(),
                });
            }
        }

        let index = self.entries.len();
        self.entries.push(TypeEntry {
            name: name.clone(),
            arity,
            conforms_to,
        });
        self.by_name.insert(name, index);
        Ok(())
    }

    /// Look up a registered entry by name.
    pub fn entry(&self, name: &str) -> Option<&TypeEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Declared generic arity of a name, if registered.
    pub fn arity(&self, name: &str) -> Option<usize> {
        self.entry(name).map(|e| e.arity)
    }

    /// Check whether the universe knows this name.
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the universe is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether `sub` may stand in wherever `sup` is expected.
    ///
    /// Reflexive, and transitive over declared conformance edges. An
    /// unregistered name conforms only to itself.
    pub fn conforms(&self, sub: &str, sup: &str) -> bool {
        if sub == sup {
            return true;
        }

        // Worklist traversal over declared edges.
        let mut visited = FxHashSet::default();
        let mut work = vec![sub];
        while let Some(current) = work.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(entry) = self.entry(current) else {
                continue;
            };
            for target in &entry.conforms_to {
                if target == sup {
                    return true;
                }
                work.push(target);
            }
        }
        false
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Test code uses expect for clarity")]
mod tests;
