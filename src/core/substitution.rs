use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::core::{RDFTriple, Term, Variable};

/// Mapping from variables to constants produced by a successful match.
/// The empty substitution stands for a match that binds nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Substitution {
    bindings: BTreeMap<Variable, String>,
}

impl Substitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `var` to `value`. Returns false, leaving the substitution
    /// unchanged, if `var` is already bound to a different constant.
    pub fn bind(&mut self, var: Variable, value: &str) -> bool {
        match self.bindings.get(&var) {
            Some(existing) => existing == value,
            None => {
                self.bindings.insert(var, value.to_string());
                true
            }
        }
    }

    pub fn get(&self, var: &Variable) -> Option<&str> {
        self.bindings.get(var).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> {
        self.bindings.iter().map(|(var, value)| (var, value.as_str()))
    }

    /// Two substitutions are compatible when they agree on every shared variable.
    pub fn is_compatible(&self, other: &Substitution) -> bool {
        // iterate over the smaller side
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        small.iter().all(|(var, value)| large.get(var).map_or(true, |v| v == value))
    }

    /// Union of both substitutions, or `None` on a binding conflict.
    pub fn merged(&self, other: &Substitution) -> Option<Substitution> {
        if !self.is_compatible(other) {
            return None;
        }
        let mut bindings = self.bindings.clone();
        for (var, value) in &other.bindings {
            bindings.entry(var.clone()).or_insert_with(|| value.clone());
        }
        Some(Substitution { bindings })
    }

    /// Replace every bound variable of `pattern` with its constant.
    pub fn apply(&self, pattern: &RDFTriple) -> RDFTriple {
        let apply = |term: &Term| match term {
            Term::Variable(var) => self.get(var).map_or_else(|| term.clone(), Term::constant),
            Term::Constant(_) => term.clone(),
        };
        RDFTriple::new(apply(&pattern.subject), apply(&pattern.predicate), apply(&pattern.object))
    }

    /// Restrict to `vars`; unbound variables are skipped.
    pub fn project(&self, vars: &[Variable]) -> Substitution {
        let bindings = vars
            .iter()
            .filter_map(|var| self.bindings.get_key_value(var))
            .map(|(var, value)| (var.clone(), value.clone()))
            .collect();
        Substitution { bindings }
    }
}

impl FromIterator<(Variable, String)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Variable, String)>>(iter: I) -> Self {
        Substitution { bindings: iter.into_iter().collect() }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} -> {}", var, value)?;
        }
        write!(f, "}}")
    }
}
