use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::lexer::is_numeric;

/// One procedure parameter. `marker` is the keyword that precedes the
/// argument at call sites (`andballoons:`); `None` means the argument is
/// positional (after a bare `:` marker, or first after a keyword-style name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub marker: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    pub params: Vec<Param>,
}

impl Signature {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Declared variables and procedures for one validation pass. A single flat
/// namespace: names declared anywhere are visible everywhere after.
#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: BTreeSet<String>,
    procedures: BTreeMap<String, Signature>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-declaring a name is not an error.
    pub fn declare_variable(&mut self, name: &str) {
        self.variables.insert(name.to_owned());
    }

    pub fn is_variable(&self, name: &str) -> bool {
        self.variables.contains(name)
    }

    /// A numeric literal or a declared name.
    pub fn is_value(&self, word: &str) -> bool {
        is_numeric(word) || self.is_variable(word)
    }

    /// Register a procedure and make its parameters visible as variables.
    pub fn define_procedure(&mut self, name: &str, signature: Signature) {
        for param in &signature.params {
            self.declare_variable(&param.name);
        }
        self.procedures.insert(name.to_owned(), signature);
    }

    pub fn procedure(&self, name: &str) -> Option<&Signature> {
        self.procedures.get(name)
    }

    pub fn summary(&self, tokens: usize) -> Summary {
        Summary {
            tokens,
            variables: self.variables.iter().cloned().collect(),
            procedures: self
                .procedures
                .iter()
                .map(|(name, sig)| {
                    let params = sig.params.iter().map(|p| p.name.clone()).collect();
                    (name.clone(), params)
                })
                .collect(),
        }
    }
}

/// What a successful pass saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub tokens: usize,
    pub variables: Vec<String>,
    pub procedures: BTreeMap<String, Vec<String>>,
}
