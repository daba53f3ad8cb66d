// Tables for a tiny nested-list grammar used by the engine tests:
//
//   1. S -> a
//   2. S -> ( S )
//
// `TestData<FLAW>` reproduces the sound tables for `Flaw::NONE` and breaks
// them in one specific way for each other flaw.

use crate::parser::{ParserAction, ParserData, ParserProdID, ParserStateID, ParserTokenID, Token};
use crate::{Position, Span};
use std::fmt;

pub struct Flaw;

impl Flaw {
    pub const NONE: u8 = 0;
    /// Rule 1 pops three frames.
    pub const LONG_RULE: u8 = 1;
    /// The goto table is empty.
    pub const NO_GOTO: u8 = 2;
    /// State 0 reduces an empty rule and goes back to itself.
    pub const LOOP: u8 = 3;
    /// State 2 shifts the end-marker instead of accepting.
    pub const SHIFT_END: u8 = 4;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateID(pub u8);

impl ParserStateID for StateID {
    const COUNT: usize = 6;
}

impl From<StateID> for usize {
    fn from(s: StateID) -> Self {
        s.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Term {
    A = 0,
    Open = 1,
    Close = 2,
    End = 3,
}

impl Term {
    pub const LABELS: &'static [&str] = &["a", "(", ")", "$"];
}

impl ParserTokenID for Term {
    const COUNT: usize = 4;

    fn label(&self) -> &'static str {
        Term::LABELS[Into::<usize>::into(*self)]
    }
}

impl From<Term> for usize {
    fn from(t: Term) -> Self {
        t as usize
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonTerm;

impl ParserTokenID for NonTerm {
    const COUNT: usize = 1;

    fn label(&self) -> &'static str {
        "S"
    }
}

impl From<NonTerm> for usize {
    fn from(_: NonTerm) -> Self {
        0
    }
}

impl fmt::Display for NonTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ProdID {
    A = 1,
    Paren = 2,
    Empty = 3,
    Long = 4,
}

impl ProdID {
    pub const LABELS: &'static [&str] = &["S -> a", "S -> ( S )", "S ->", "S -> a a a"];
    pub const SIZES: &[usize] = &[1, 3, 0, 3];
}

impl ParserProdID for ProdID {
    type Nonterminal = NonTerm;

    const COUNT: usize = 4;

    fn label(&self) -> &'static str {
        ProdID::LABELS[Into::<usize>::into(*self) - 1]
    }
    fn lhs(&self) -> NonTerm {
        NonTerm
    }
    fn size(&self) -> usize {
        ProdID::SIZES[Into::<usize>::into(*self) - 1]
    }
}

impl From<ProdID> for usize {
    fn from(p: ProdID) -> Self {
        p as usize
    }
}

type Action = ParserAction<StateID, ProdID>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestData<const FLAW: u8>;

impl<const FLAW: u8> TestData<FLAW> {
    const TAB: [[Action; 4]; 6] = [
        /* STATE 0 */
        [
            Action::Shift(StateID(1)),
            Action::Shift(StateID(3)),
            Action::Error,
            Action::Error,
        ],
        /* STATE 1 */
        [
            Action::Error,
            Action::Error,
            Action::Reduce(ProdID::A),
            Action::Reduce(ProdID::A),
        ],
        /* STATE 2 */
        [Action::Error, Action::Error, Action::Error, Action::Accept],
        /* STATE 3 */
        [
            Action::Shift(StateID(1)),
            Action::Shift(StateID(3)),
            Action::Error,
            Action::Error,
        ],
        /* STATE 4 */
        [
            Action::Error,
            Action::Error,
            Action::Shift(StateID(5)),
            Action::Error,
        ],
        /* STATE 5 */
        [
            Action::Error,
            Action::Error,
            Action::Reduce(ProdID::Paren),
            Action::Reduce(ProdID::Paren),
        ],
    ];

    const GOTO: [Option<StateID>; 6] = [
        Some(StateID(2)),
        None,
        None,
        Some(StateID(4)),
        None,
        None,
    ];
}

impl<const FLAW: u8> ParserData for TestData<FLAW> {
    type StateID = StateID;
    type Terminal = Term;
    type Nonterminal = NonTerm;
    type ProdID = ProdID;

    fn start_state() -> StateID {
        StateID(0)
    }

    fn lookup(state_id: StateID, terminal: Term) -> Action {
        let action = Self::TAB[Into::<usize>::into(state_id)][Into::<usize>::into(terminal)];
        match (FLAW, action) {
            (Flaw::LONG_RULE, Action::Reduce(ProdID::A)) => Action::Reduce(ProdID::Long),
            (Flaw::LOOP, _) if state_id == StateID(0) => Action::Reduce(ProdID::Empty),
            (Flaw::SHIFT_END, Action::Accept) => Action::Shift(StateID(2)),
            _ => action,
        }
    }

    fn goto(state_id: StateID, _nonterminal: NonTerm) -> Option<StateID> {
        match FLAW {
            Flaw::NO_GOTO => None,
            Flaw::LOOP if state_id == StateID(0) => Some(StateID(0)),
            _ => Self::GOTO[Into::<usize>::into(state_id)],
        }
    }
}

#[derive(Debug, Clone)]
pub struct TestToken {
    pub id: Term,
    pub span: Option<Span>,
}

impl Token for TestToken {
    type TokenID = Term;

    fn token_id(&self) -> Term {
        self.id
    }
    fn span(&self) -> Option<Span> {
        self.span
    }
}

/// One token per character of `input` (`a`, `(`, `)`), then the end-marker.
pub fn tokens(input: &str) -> Vec<TestToken> {
    let mut out: Vec<TestToken> = input
        .chars()
        .enumerate()
        .map(|(i, c)| TestToken {
            id: match c {
                'a' => Term::A,
                '(' => Term::Open,
                ')' => Term::Close,
                _ => panic!("unexpected test input {c:?}"),
            },
            span: Some(Span::new(Position::new(0, i), Position::new(0, i + 1))),
        })
        .collect();
    let end = Position::new(0, out.len());
    out.push(TestToken {
        id: Term::End,
        span: Some(Span::new(end, end)),
    });
    out
}
