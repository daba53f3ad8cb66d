//! The parser stack: an explicit sequence of `(symbol, state)` frames
//! resting on a floor state.

use crate::parser::{ParserData, ParserTokenID};
use std::fmt;

/// A grammar symbol held in a stack frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol<T, N>
where
    T: ParserTokenID,
    N: ParserTokenID,
{
    /// A shifted terminal.
    Terminal(T),
    /// The left-hand side of a reduced production.
    Nonterminal(N),
}

impl<T, N> Symbol<T, N>
where
    T: ParserTokenID,
    N: ParserTokenID,
{
    pub fn label(&self) -> &'static str {
        match self {
            Symbol::Terminal(t) => t.label(),
            Symbol::Nonterminal(n) => n.label(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }
}

impl<T, N> fmt::Display for Symbol<T, N>
where
    T: ParserTokenID,
    N: ParserTokenID,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One stack entry: a symbol and the state entered after pushing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<D: ParserData> {
    pub symbol: Symbol<D::Terminal, D::Nonterminal>,
    pub state: D::StateID,
}

/// The parser stack.
///
/// The floor holds the start state and is never popped; `frames` holds one
/// entry per shifted terminal or reduced nonterminal still on the stack.
/// The state on top (the last frame's state, or the floor when there are no
/// frames) always indexes the next action lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<D: ParserData> {
    floor: D::StateID,
    frames: Vec<Frame<D>>,
}

impl<D: ParserData> Stack<D> {
    /// Creates a stack holding only the floor state.
    pub fn new(floor: D::StateID) -> Self {
        Self {
            floor,
            frames: Vec::new(),
        }
    }

    pub fn frames(&self) -> &[Frame<D>] {
        &self.frames
    }

    /// Number of frames above the floor.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The state on top of the stack.
    pub fn top_state(&self) -> D::StateID {
        self.frames.last().map_or(self.floor, |frame| frame.state)
    }

    pub fn push(&mut self, symbol: Symbol<D::Terminal, D::Nonterminal>, state: D::StateID) {
        self.frames.push(Frame { symbol, state });
    }

    /// Pops exactly `n` frames.
    ///
    /// Returns `None` and leaves the stack untouched when fewer than `n`
    /// frames sit above the floor.
    pub fn pop(&mut self, n: usize) -> Option<()> {
        let keep = self.frames.len().checked_sub(n)?;
        self.frames.truncate(keep);
        Some(())
    }

    /// Logs the stack at trace level with the incoming lookahead marked.
    pub fn dump_state(&self, incoming: impl fmt::Display) {
        let mut output = smartstring::alias::String::new();
        output.push_str(&format!("<{}>  ", Into::<usize>::into(self.floor)));
        for frame in &self.frames {
            output.push_str(&format!(
                "{}  <{}>  ",
                frame.symbol,
                Into::<usize>::into(frame.state)
            ));
        }
        output.push_str(&format!("<-  {}", incoming));
        log::trace!("{}", output);
    }
}

/// Renders the stack as the concatenation of its floor state followed by
/// each frame's symbol and state, e.g. `0E1+6T9`.
impl<D: ParserData> fmt::Display for Stack<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Into::<usize>::into(self.floor))?;
        for frame in &self.frames {
            write!(f, "{}{}", frame.symbol, Into::<usize>::into(frame.state))?;
        }
        Ok(())
    }
}
