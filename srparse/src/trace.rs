//! Derivation traces recorded by the engine.

use crate::parser::{ParserData, ParserStats};
use crate::stack::Stack;
use std::fmt;

/// One step taken by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step<D: ParserData> {
    /// The lookahead was shifted and the automaton moved to the given state.
    Shift(D::StateID),
    /// The given production was reduced.
    Reduce(D::ProdID),
    /// The input was accepted.
    Accept,
}

impl<D: ParserData> Step<D> {
    /// Compact form: `S5`, `R6`, `ACCEPT`.
    pub fn code(&self) -> String {
        match self {
            Step::Shift(state) => format!("S{}", Into::<usize>::into(*state)),
            Step::Reduce(prod) => format!("R{}", Into::<usize>::into(*prod)),
            Step::Accept => String::from("ACCEPT"),
        }
    }
}

impl<D: ParserData> fmt::Display for Step<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Shift(state) => write!(f, "shift {}", Into::<usize>::into(*state)),
            Step::Reduce(prod) => write!(f, "reduce {}", Into::<usize>::into(*prod)),
            Step::Accept => f.write_str("accept"),
        }
    }
}

/// The ordered, append-only record of one parse.
///
/// `steps` holds every shift, reduce and the final accept. When history
/// recording is enabled, `history` holds the stack as it stood initially
/// and after every shift and reduce. The accept step leaves the stack
/// unchanged, so an accepted trace has exactly one snapshot per step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trace<D: ParserData> {
    pub steps: Vec<Step<D>>,
    pub history: Vec<Stack<D>>,
}

impl<D: ParserData> Trace<D> {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.steps.last(), Some(Step::Accept))
    }

    /// Steps rendered with [`Step::code`], one per element.
    pub fn codes(&self) -> Vec<String> {
        self.steps.iter().map(Step::code).collect()
    }
}

impl<D: ParserData> Default for Trace<D> {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of an accepted parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derivation<D: ParserData> {
    pub trace: Trace<D>,
    /// The final stack: a single start-symbol frame above the floor.
    pub stack: Stack<D>,
    pub stats: ParserStats,
}
