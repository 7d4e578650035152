//! Arithmetic assignment puzzle over an expression tree.
//!
//! The tree combines non-negative integer constants and single-digit
//! variables with `+` and `*`. A variable holding 0 is unassigned; solving
//! means assigning every variable a value in 1..=9 so the tree evaluates to
//! the target.
//!
//! Puzzles deserialize from JSON such as
//! `{"tree": {"mul": [{"var": "a"}, {"num": 3}]}, "target": 15}`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::PuzzleError;
use crate::state::PuzzleState;

/// Smallest value a variable can be assigned
pub const MIN_DIGIT: u8 = 1;
/// Largest value a variable can be assigned
pub const MAX_DIGIT: u8 = 9;
/// Marker for a variable that has not been assigned yet
pub const UNASSIGNED: u8 = 0;

/// Expression tree node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExprTree {
    Num(u64),
    Var(String),
    Add(Vec<ExprTree>),
    Mul(Vec<ExprTree>),
}

impl ExprTree {
    pub fn num(value: u64) -> Self {
        ExprTree::Num(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        ExprTree::Var(name.into())
    }

    pub fn add(children: Vec<ExprTree>) -> Self {
        ExprTree::Add(children)
    }

    pub fn mul(children: Vec<ExprTree>) -> Self {
        ExprTree::Mul(children)
    }

    /// Evaluate with `lookup` supplying variable values.
    ///
    /// Arithmetic saturates at `u64::MAX`.
    pub fn eval_with<F>(&self, lookup: &F) -> u64
    where
        F: Fn(&str) -> u64,
    {
        match self {
            ExprTree::Num(n) => *n,
            ExprTree::Var(name) => lookup(name),
            ExprTree::Add(children) => children
                .iter()
                .fold(0u64, |acc, c| acc.saturating_add(c.eval_with(lookup))),
            ExprTree::Mul(children) => children
                .iter()
                .fold(1u64, |acc, c| acc.saturating_mul(c.eval_with(lookup))),
        }
    }

    /// Insert every variable in the tree into `variables` as unassigned,
    /// leaving existing entries untouched.
    pub fn populate_variables(&self, variables: &mut BTreeMap<String, u8>) {
        match self {
            ExprTree::Num(_) => {}
            ExprTree::Var(name) => {
                variables.entry(name.clone()).or_insert(UNASSIGNED);
            }
            ExprTree::Add(children) | ExprTree::Mul(children) => {
                for child in children {
                    child.populate_variables(variables);
                }
            }
        }
    }

    /// Check structural well-formedness.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        match self {
            ExprTree::Num(_) => Ok(()),
            ExprTree::Var(name) if name.is_empty() => {
                Err(PuzzleError::Invalid("variable with empty name".to_string()))
            }
            ExprTree::Var(_) => Ok(()),
            ExprTree::Add(children) | ExprTree::Mul(children) => {
                if children.is_empty() {
                    return Err(PuzzleError::Invalid(format!(
                        "operator '{}' has no operands",
                        self.operator_symbol().unwrap_or('?')
                    )));
                }
                children.iter().try_for_each(ExprTree::validate)
            }
        }
    }

    fn operator_symbol(&self) -> Option<char> {
        match self {
            ExprTree::Add(_) => Some('+'),
            ExprTree::Mul(_) => Some('*'),
            _ => None,
        }
    }
}

impl fmt::Display for ExprTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprTree::Num(n) => write!(f, "{n}"),
            ExprTree::Var(name) => write!(f, "{name}"),
            ExprTree::Add(children) | ExprTree::Mul(children) => {
                let op = self.operator_symbol().unwrap_or('?');
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {op} ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// JSON form of a puzzle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleSpec {
    pub tree: ExprTree,
    pub target: u64,
    /// Pre-assigned variable values; omitted variables start unassigned
    #[serde(default)]
    pub variables: BTreeMap<String, u8>,
}

/// Expression-tree puzzle state.
///
/// Extensions are enumerated by variable name, then by value from 1 to 9.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionTreePuzzle {
    tree: ExprTree,
    variables: BTreeMap<String, u8>,
    target: u64,
}

impl ExpressionTreePuzzle {
    /// Create a puzzle with every variable unassigned.
    pub fn new(tree: ExprTree, target: u64) -> Result<Self, PuzzleError> {
        Self::with_assignments(tree, target, BTreeMap::new())
    }

    /// Create a puzzle with some variables already assigned.
    pub fn with_assignments(
        tree: ExprTree,
        target: u64,
        assigned: BTreeMap<String, u8>,
    ) -> Result<Self, PuzzleError> {
        tree.validate()?;
        let mut variables = BTreeMap::new();
        tree.populate_variables(&mut variables);

        for (name, value) in assigned {
            if value > MAX_DIGIT {
                return Err(PuzzleError::Invalid(format!(
                    "variable '{name}' has value {value}, expected {UNASSIGNED}..={MAX_DIGIT}"
                )));
            }
            match variables.get_mut(&name) {
                Some(slot) => *slot = value,
                None => {
                    return Err(PuzzleError::Invalid(format!(
                        "variable '{name}' does not appear in the tree"
                    )))
                }
            }
        }

        Ok(Self {
            tree,
            variables,
            target,
        })
    }

    pub fn from_spec(spec: PuzzleSpec) -> Result<Self, PuzzleError> {
        Self::with_assignments(spec.tree, spec.target, spec.variables)
    }

    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        let spec: PuzzleSpec = serde_json::from_str(json)?;
        Self::from_spec(spec)
    }

    pub fn tree(&self) -> &ExprTree {
        &self.tree
    }

    pub fn variables(&self) -> &BTreeMap<String, u8> {
        &self.variables
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// Names of unassigned variables, in name order.
    pub fn unassigned(&self) -> SmallVec<[&str; 8]> {
        self.variables
            .iter()
            .filter(|(_, v)| **v == UNASSIGNED)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Return a copy with `name` set to `value`.
    pub fn assign(&self, name: &str, value: u8) -> Result<Self, PuzzleError> {
        if !(MIN_DIGIT..=MAX_DIGIT).contains(&value) {
            return Err(PuzzleError::Invalid(format!(
                "value {value} for '{name}' is outside {MIN_DIGIT}..={MAX_DIGIT}"
            )));
        }
        if !self.variables.contains_key(name) {
            return Err(PuzzleError::Invalid(format!(
                "variable '{name}' does not appear in the tree"
            )));
        }
        Ok(self.assigned_unchecked(name, value))
    }

    fn assigned_unchecked(&self, name: &str, value: u8) -> Self {
        let mut next = self.clone();
        next.variables.insert(name.to_string(), value);
        next
    }

    /// Value of the tree with unassigned variables replaced by `fill`.
    fn eval_filled(&self, fill: u8) -> u64 {
        self.tree.eval_with(&|name| {
            let v = self.variables.get(name).copied().unwrap_or(UNASSIGNED);
            u64::from(if v == UNASSIGNED { fill } else { v })
        })
    }

    /// Smallest and largest values any completion of this puzzle can reach.
    ///
    /// Both operators are monotone over non-negative operands, so filling the
    /// unassigned variables with the extreme digits gives tight bounds.
    pub fn bounds(&self) -> (u64, u64) {
        (self.eval_filled(MIN_DIGIT), self.eval_filled(MAX_DIGIT))
    }
}

impl fmt::Display for ExpressionTreePuzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.variables.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}\n{} = {}", self.tree, self.target)
    }
}

impl PuzzleState for ExpressionTreePuzzle {
    type Key = String;

    fn extensions(&self) -> Vec<Self> {
        let unassigned = self.unassigned();
        let mut result = Vec::with_capacity(unassigned.len() * usize::from(MAX_DIGIT));
        for name in unassigned {
            for value in MIN_DIGIT..=MAX_DIGIT {
                result.push(self.assigned_unchecked(name, value));
            }
        }
        result
    }

    fn is_solved(&self) -> bool {
        self.unassigned().is_empty() && self.eval_filled(UNASSIGNED) == self.target
    }

    fn fail_fast(&self) -> bool {
        let (min, max) = self.bounds();
        if min > self.target || max < self.target {
            return true;
        }
        self.unassigned().is_empty() && min != self.target
    }

    fn identity(&self) -> String {
        self.to_string()
    }
}
