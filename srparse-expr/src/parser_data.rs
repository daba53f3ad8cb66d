//! Parse tables for the arithmetic-expression grammar.
//!
//! ```text
//! 1. E -> E + T
//! 2. E -> T
//! 3. T -> T * F
//! 4. T -> F
//! 5. F -> ( E )
//! 6. F -> id
//! ```
//!
//! The 12-state SLR(1) automaton for this grammar is fixed; the tables below
//! are static data laid out the way `aslr` emits them, with a separate goto
//! table for the three nonterminals.

use srparse::{ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID};
use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateID(u8);

impl ParserStateID for StateID {
    const COUNT: usize = 12;
}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

impl TryFrom<usize> for StateID {
    type Error = TableError;

    fn try_from(index: usize) -> Result<Self, TableError> {
        if index < StateID::COUNT {
            Ok(StateID(index as u8))
        } else {
            Err(TableError::StateOutOfRange(index))
        }
    }
}

impl StateID {
    pub fn all() -> impl Iterator<Item = StateID> {
        (0..StateID::COUNT as u8).map(StateID)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Terminal {
    Id = 0,
    Plus = 1,
    Asterisk = 2,
    LeftParen = 3,
    RightParen = 4,
    End = 5,
    /// Recognized by the lexer but outside the grammar: its action column
    /// is all errors.
    Equals = 6,
}

impl ParserTokenID for Terminal {
    const COUNT: usize = 7;

    fn label(&self) -> &'static str {
        Terminal::LABELS[Into::<usize>::into(*self)]
    }
}

impl From<Terminal> for usize {
    fn from(t: Terminal) -> Self {
        t as usize
    }
}

impl Terminal {
    pub const LABELS: &'static [&str] = &[
        "id", // 0
        "+",  // 1
        "*",  // 2
        "(",  // 3
        ")",  // 4
        "$",  // 5
        "=",  // 6
    ];

    pub const ALL: [Terminal; 7] = [
        Terminal::Id,
        Terminal::Plus,
        Terminal::Asterisk,
        Terminal::LeftParen,
        Terminal::RightParen,
        Terminal::End,
        Terminal::Equals,
    ];

    /// The single-character operator terminal for `c`, if any.
    pub fn from_operator(c: char) -> Option<Terminal> {
        match c {
            '=' => Some(Terminal::Equals),
            '+' => Some(Terminal::Plus),
            '*' => Some(Terminal::Asterisk),
            '(' => Some(Terminal::LeftParen),
            ')' => Some(Terminal::RightParen),
            _ => None,
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Nonterminal {
    E = 0,
    T = 1,
    F = 2,
}

impl ParserTokenID for Nonterminal {
    const COUNT: usize = 3;

    fn label(&self) -> &'static str {
        Nonterminal::LABELS[Into::<usize>::into(*self)]
    }
}

impl From<Nonterminal> for usize {
    fn from(n: Nonterminal) -> Self {
        n as usize
    }
}

impl Nonterminal {
    pub const LABELS: &'static [&str] = &["E", "T", "F"];

    pub const ALL: [Nonterminal; 3] = [Nonterminal::E, Nonterminal::T, Nonterminal::F];
}

impl fmt::Display for Nonterminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Productions, numbered 1 to 6 as in the grammar listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ProdID {
    E1 = 1,
    E2 = 2,
    T1 = 3,
    T2 = 4,
    F1 = 5,
    F2 = 6,
}

impl ParserProdID for ProdID {
    type Nonterminal = Nonterminal;

    const COUNT: usize = 6;

    fn label(&self) -> &'static str {
        ProdID::LABELS[self.index()]
    }
    fn lhs(&self) -> Nonterminal {
        ProdID::LHS_TOKENS[self.index()]
    }
    fn size(&self) -> usize {
        ProdID::SIZES[self.index()]
    }
}

impl From<ProdID> for usize {
    fn from(p: ProdID) -> Self {
        p as usize
    }
}

impl ProdID {
    pub const LABELS: &'static [&str] = &[
        "E -> E + T", // 1
        "E -> T",     // 2
        "T -> T * F", // 3
        "T -> F",     // 4
        "F -> ( E )", // 5
        "F -> id",    // 6
    ];

    pub const LHS_TOKENS: &[Nonterminal] = &[
        Nonterminal::E, // 1
        Nonterminal::E, // 2
        Nonterminal::T, // 3
        Nonterminal::T, // 4
        Nonterminal::F, // 5
        Nonterminal::F, // 6
    ];

    pub const SIZES: &[usize] = &[
        3, // 1
        1, // 2
        3, // 3
        1, // 4
        3, // 5
        1, // 6
    ];

    pub const ALL: [ProdID; 6] = [
        ProdID::E1,
        ProdID::E2,
        ProdID::T1,
        ProdID::T2,
        ProdID::F1,
        ProdID::F2,
    ];

    fn index(&self) -> usize {
        Into::<usize>::into(*self) - 1
    }
}

/// Problems found by [`ParData::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("state {0} is out of range")]
    StateOutOfRange(usize),
    #[error("state {0} is unreachable from the start state")]
    Unreachable(usize),
    #[error("state {0} has no action for any terminal")]
    DeadState(usize),
    #[error("production {0} is never reduced")]
    UnusedProduction(usize),
}

pub type Action = ParserAction<StateID, ProdID>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParData;

impl ParData {
    const TAB: [[Action; Terminal::COUNT]; StateID::COUNT] = [
        /* STATE 0 */
        [
            Action::Shift(StateID(5)), /* 0(id) */
            Action::Error,             /* 1(+) */
            Action::Error,             /* 2(*) */
            Action::Shift(StateID(4)), /* 3(() */
            Action::Error,             /* 4()) */
            Action::Error,             /* 5($) */
            Action::Error,             /* 6(=) */
        ],
        /* STATE 1 */
        [
            Action::Error,             /* 0(id) */
            Action::Shift(StateID(6)), /* 1(+) */
            Action::Error,             /* 2(*) */
            Action::Error,             /* 3(() */
            Action::Error,             /* 4()) */
            Action::Accept,            /* 5($) */
            Action::Error,             /* 6(=) */
        ],
        /* STATE 2 */
        [
            Action::Error,              /* 0(id) */
            Action::Reduce(ProdID::E2), /* 1(+) */
            Action::Shift(StateID(7)),  /* 2(*) */
            Action::Error,              /* 3(() */
            Action::Reduce(ProdID::E2), /* 4()) */
            Action::Reduce(ProdID::E2), /* 5($) */
            Action::Error,              /* 6(=) */
        ],
        /* STATE 3 */
        [
            Action::Error,              /* 0(id) */
            Action::Reduce(ProdID::T2), /* 1(+) */
            Action::Reduce(ProdID::T2), /* 2(*) */
            Action::Error,              /* 3(() */
            Action::Reduce(ProdID::T2), /* 4()) */
            Action::Reduce(ProdID::T2), /* 5($) */
            Action::Error,              /* 6(=) */
        ],
        /* STATE 4 */
        [
            Action::Shift(StateID(5)), /* 0(id) */
            Action::Error,             /* 1(+) */
            Action::Error,             /* 2(*) */
            Action::Shift(StateID(4)), /* 3(() */
            Action::Error,             /* 4()) */
            Action::Error,             /* 5($) */
            Action::Error,             /* 6(=) */
        ],
        /* STATE 5 */
        [
            Action::Error,              /* 0(id) */
            Action::Reduce(ProdID::F2), /* 1(+) */
            Action::Reduce(ProdID::F2), /* 2(*) */
            Action::Error,              /* 3(() */
            Action::Reduce(ProdID::F2), /* 4()) */
            Action::Reduce(ProdID::F2), /* 5($) */
            Action::Error,              /* 6(=) */
        ],
        /* STATE 6 */
        [
            Action::Shift(StateID(5)), /* 0(id) */
            Action::Error,             /* 1(+) */
            Action::Error,             /* 2(*) */
            Action::Shift(StateID(4)), /* 3(() */
            Action::Error,             /* 4()) */
            Action::Error,             /* 5($) */
            Action::Error,             /* 6(=) */
        ],
        /* STATE 7 */
        [
            Action::Shift(StateID(5)), /* 0(id) */
            Action::Error,             /* 1(+) */
            Action::Error,             /* 2(*) */
            Action::Shift(StateID(4)), /* 3(() */
            Action::Error,             /* 4()) */
            Action::Error,             /* 5($) */
            Action::Error,             /* 6(=) */
        ],
        /* STATE 8 */
        [
            Action::Error,              /* 0(id) */
            Action::Shift(StateID(6)),  /* 1(+) */
            Action::Error,              /* 2(*) */
            Action::Error,              /* 3(() */
            Action::Shift(StateID(11)), /* 4()) */
            Action::Error,              /* 5($) */
            Action::Error,              /* 6(=) */
        ],
        /* STATE 9 */
        [
            Action::Error,              /* 0(id) */
            Action::Reduce(ProdID::E1), /* 1(+) */
            Action::Shift(StateID(7)),  /* 2(*) */
            Action::Error,              /* 3(() */
            Action::Reduce(ProdID::E1), /* 4()) */
            Action::Reduce(ProdID::E1), /* 5($) */
            Action::Error,              /* 6(=) */
        ],
        /* STATE 10 */
        [
            Action::Error,              /* 0(id) */
            Action::Reduce(ProdID::T1), /* 1(+) */
            Action::Reduce(ProdID::T1), /* 2(*) */
            Action::Error,              /* 3(() */
            Action::Reduce(ProdID::T1), /* 4()) */
            Action::Reduce(ProdID::T1), /* 5($) */
            Action::Error,              /* 6(=) */
        ],
        /* STATE 11 */
        [
            Action::Error,              /* 0(id) */
            Action::Reduce(ProdID::F1), /* 1(+) */
            Action::Reduce(ProdID::F1), /* 2(*) */
            Action::Error,              /* 3(() */
            Action::Reduce(ProdID::F1), /* 4()) */
            Action::Reduce(ProdID::F1), /* 5($) */
            Action::Error,              /* 6(=) */
        ],
    ];

    const GOTO: [[Option<StateID>; Nonterminal::COUNT]; StateID::COUNT] = [
        /* STATE 0 */ [Some(StateID(1)), Some(StateID(2)), Some(StateID(3))],
        /* STATE 1 */ [None, None, None],
        /* STATE 2 */ [None, None, None],
        /* STATE 3 */ [None, None, None],
        /* STATE 4 */ [Some(StateID(8)), Some(StateID(2)), Some(StateID(3))],
        /* STATE 5 */ [None, None, None],
        /* STATE 6 */ [None, Some(StateID(9)), Some(StateID(3))],
        /* STATE 7 */ [None, None, Some(StateID(10))],
        /* STATE 8 */ [None, None, None],
        /* STATE 9 */ [None, None, None],
        /* STATE 10 */ [None, None, None],
        /* STATE 11 */ [None, None, None],
    ];

    /// Checks the tables for structural defects: every state must be
    /// reachable from the start state through shifts and gotos, every
    /// state must have at least one non-error action, and every production
    /// must be reduced somewhere.
    pub fn validate() -> Result<(), TableError> {
        let mut seen = [false; StateID::COUNT];
        let mut queue = VecDeque::from([Self::start_state()]);
        seen[Into::<usize>::into(Self::start_state())] = true;
        while let Some(state) = queue.pop_front() {
            let shifts = Terminal::ALL
                .iter()
                .filter_map(|&t| match Self::lookup(state, t) {
                    Action::Shift(next) => Some(next),
                    _ => None,
                });
            let gotos = Nonterminal::ALL
                .iter()
                .filter_map(|&n| Self::goto(state, n));
            for next in shifts.chain(gotos) {
                let i: usize = next.into();
                if i >= StateID::COUNT {
                    return Err(TableError::StateOutOfRange(i));
                }
                if !seen[i] {
                    seen[i] = true;
                    queue.push_back(next);
                }
            }
        }
        if let Some(i) = seen.iter().position(|&s| !s) {
            return Err(TableError::Unreachable(i));
        }
        for state in StateID::all() {
            if Terminal::ALL
                .iter()
                .all(|&t| Self::lookup(state, t) == Action::Error)
            {
                return Err(TableError::DeadState(state.into()));
            }
        }
        for prod in ProdID::ALL {
            let reduced = StateID::all().any(|state| {
                Terminal::ALL
                    .iter()
                    .any(|&t| Self::lookup(state, t) == Action::Reduce(prod))
            });
            if !reduced {
                return Err(TableError::UnusedProduction(prod.into()));
            }
        }
        Ok(())
    }
}

impl ParserData for ParData {
    type StateID = StateID;
    type Terminal = Terminal;
    type Nonterminal = Nonterminal;
    type ProdID = ProdID;

    #[inline]
    fn start_state() -> StateID {
        StateID(0)
    }
    #[inline]
    fn lookup(state_id: StateID, terminal: Terminal) -> Action {
        Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(terminal)]
    }
    #[inline]
    fn goto(state_id: StateID, nonterminal: Nonterminal) -> Option<StateID> {
        Self::GOTO[Into::<usize>::into(state_id)][Into::<usize>::into(nonterminal)]
    }
}
