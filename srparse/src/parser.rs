use crate::error::{ParseFailure, ParserError};
use crate::stack::{Stack, Symbol};
use crate::trace::{Derivation, Step, Trace};
use crate::Span;
use std::fmt::{Debug, Display};
use std::marker::PhantomData;

/// An entry of the action table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserAction<US, UP>
where
    US: ParserStateID,
    UP: ParserProdID,
{
    Error,
    Accept,
    Shift(US),
    Reduce(UP),
}

pub trait ParserStateID: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
}

/// Identifies a terminal or nonterminal of a grammar.
pub trait ParserTokenID: Copy + Debug + Display + Eq + Into<usize> {
    const COUNT: usize;

    fn label(&self) -> &'static str;
}

/// Identifies a production. `Into<usize>` yields the rule number.
pub trait ParserProdID: Copy + Debug + Eq + Into<usize> {
    type Nonterminal: ParserTokenID;

    const COUNT: usize;

    fn label(&self) -> &'static str;
    /// Left-hand side of the production.
    fn lhs(&self) -> Self::Nonterminal;
    /// Right-hand-side length: the number of frames a reduction pops.
    fn size(&self) -> usize;
}

type Action<D> = ParserAction<<D as ParserData>::StateID, <D as ParserData>::ProdID>;

/// Static parse tables: an action table indexed by `(state, terminal)` and
/// a goto table indexed by `(state, nonterminal)`.
pub trait ParserData: Copy + Debug + Eq + 'static {
    type StateID: ParserStateID;
    type Terminal: ParserTokenID;
    type Nonterminal: ParserTokenID;
    type ProdID: ParserProdID<Nonterminal = Self::Nonterminal>;

    fn start_state() -> Self::StateID;

    fn lookup(
        state_id: Self::StateID,
        terminal: Self::Terminal,
    ) -> ParserAction<Self::StateID, Self::ProdID>;

    /// Successor state after reducing to `nonterminal` with `state_id`
    /// exposed, or `None` when the table has no entry.
    fn goto(state_id: Self::StateID, nonterminal: Self::Nonterminal) -> Option<Self::StateID>;
}

/// A token consumed by the engine.
pub trait Token: Debug {
    type TokenID: ParserTokenID;

    fn token_id(&self) -> Self::TokenID;
    fn span(&self) -> Option<Span>;
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Record a snapshot of the stack after every shift and reduce.
    pub record_history: bool,
    /// Upper bound on the number of engine steps, if any.
    pub max_steps: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            max_steps: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    pub tokens: usize,
    pub shifts: usize,
    pub reductions: usize,
}

/// The table-driven shift-reduce engine.
///
/// A `Parser` holds only its configuration; the tables are static and every
/// call to [`parse`](Parser::parse) owns its stack and trace, so a single
/// parser can serve independent parses from several threads at once.
#[derive(Debug, Clone)]
pub struct Parser<D: ParserData> {
    config: ParserConfig,
    _marker: PhantomData<D>,
}

impl<D: ParserData> Default for Parser<D> {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl<D: ParserData> Parser<D> {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            _marker: PhantomData,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Runs the automaton over `tokens`, which must end with the grammar's
    /// end-marker.
    ///
    /// Returns the derivation on accept. On failure the error comes back
    /// together with the trace recorded up to the offending lookahead.
    pub fn parse<T>(&self, tokens: &[T]) -> Result<Derivation<D>, ParseFailure<D>>
    where
        T: Token<TokenID = D::Terminal>,
    {
        let mut trace = Trace::new();
        let mut stats = ParserStats::default();
        match self.run(tokens, &mut trace, &mut stats) {
            Ok(stack) => Ok(Derivation {
                trace,
                stack,
                stats,
            }),
            Err(error) => {
                log::debug!("parse failed: {}", error);
                Err(ParseFailure { error, trace })
            }
        }
    }

    fn run<T>(
        &self,
        tokens: &[T],
        trace: &mut Trace<D>,
        stats: &mut ParserStats,
    ) -> Result<Stack<D>, ParserError<D::Terminal>>
    where
        T: Token<TokenID = D::Terminal>,
    {
        let mut tokens = tokens.iter();
        let mut token = tokens.next().ok_or(ParserError::EmptyInput)?;
        stats.tokens += 1;

        let mut stack = Stack::new(D::start_state());
        self.record(trace, &stack);

        let mut steps = 0usize;
        loop {
            if let Some(limit) = self.config.max_steps {
                if steps >= limit {
                    return Err(ParserError::StepLimit { limit });
                }
            }
            steps += 1;

            let state = stack.top_state();
            if log::log_enabled!(log::Level::Trace) {
                stack.dump_state(token.token_id());
            }

            match D::lookup(state, token.token_id()) {
                Action::<D>::Shift(new_state) => {
                    log::trace!("Shift {:?}", new_state);
                    stack.push(Symbol::Terminal(token.token_id()), new_state);
                    trace.steps.push(Step::Shift(new_state));
                    stats.shifts += 1;
                    token = tokens.next().ok_or(ParserError::UnexpectedEnd)?;
                    stats.tokens += 1;
                }

                Action::<D>::Reduce(prod_id) => {
                    log::trace!(
                        "Reduce {:?}({}): {}",
                        prod_id,
                        Into::<usize>::into(prod_id),
                        prod_id.label()
                    );
                    let needed = prod_id.size();
                    let depth = stack.depth();
                    stack
                        .pop(needed)
                        .ok_or(ParserError::StackUnderflow { needed, depth })?;
                    let exposed = stack.top_state();
                    let lhs = prod_id.lhs();
                    let new_state =
                        D::goto(exposed, lhs).ok_or_else(|| ParserError::MissingGoto {
                            state: exposed.into(),
                            nonterminal: lhs.label(),
                        })?;
                    stack.push(Symbol::Nonterminal(lhs), new_state);
                    trace.steps.push(Step::Reduce(prod_id));
                    stats.reductions += 1;
                }

                Action::<D>::Accept => {
                    log::trace!("Accept");
                    trace.steps.push(Step::Accept);
                    return Ok(stack);
                }

                Action::<D>::Error => {
                    return Err(ParserError::Syntax {
                        token: token.token_id(),
                        state: state.into(),
                        span: token.span(),
                    });
                }
            }

            self.record(trace, &stack);
        }
    }

    fn record(&self, trace: &mut Trace<D>, stack: &Stack<D>) {
        if self.config.record_history {
            trace.history.push(stack.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Parser, ParserConfig};
    use crate::test_parser_data::{Flaw, Term, TestData, TestToken, tokens};
    use crate::{ParserError, Step, Symbol};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    type Sound = TestData<{ Flaw::NONE }>;

    #[test]
    fn accepts_single_a() {
        init_logger();
        let parser = Parser::<Sound>::default();
        let d = parser.parse(&tokens("a")).unwrap();
        assert_eq!(d.trace.codes(), ["S1", "R1", "ACCEPT"]);
        assert_eq!(d.stack.to_string(), "0S2");
        assert_eq!(d.stats.shifts, 1);
        assert_eq!(d.stats.reductions, 1);
        assert_eq!(d.stats.tokens, 2);
    }

    #[test]
    fn reduces_nested_list() {
        init_logger();
        // S -> ( S ) | a
        let parser = Parser::<Sound>::default();
        let d = parser.parse(&tokens("((a))")).unwrap();
        assert_eq!(
            d.trace.codes(),
            ["S3", "S3", "S1", "R1", "S5", "R2", "S5", "R2", "ACCEPT"]
        );
        assert_eq!(d.stack.depth(), 1);
        assert!(matches!(
            d.stack.frames()[0].symbol,
            Symbol::Nonterminal(_)
        ));
    }

    #[test]
    fn history_tracks_every_stack_change() {
        let parser = Parser::<Sound>::default();
        let d = parser.parse(&tokens("(a)")).unwrap();
        let history: Vec<String> = d.trace.history.iter().map(|s| s.to_string()).collect();
        assert_eq!(history, ["0", "0(3", "0(3a1", "0(3S4", "0(3S4)5", "0S2"]);
        assert_eq!(d.trace.history.len(), d.trace.steps.len());
    }

    #[test]
    fn history_can_be_disabled() {
        let parser = Parser::<Sound>::new(ParserConfig {
            record_history: false,
            ..ParserConfig::default()
        });
        let d = parser.parse(&tokens("a")).unwrap();
        assert!(d.trace.history.is_empty());
        assert!(d.trace.is_accepted());
    }

    #[test]
    fn syntax_error_carries_token_state_and_trace() {
        init_logger();
        let parser = Parser::<Sound>::default();
        let failure = parser.parse(&tokens("(a(")).unwrap_err();
        let ParserError::Syntax { token, state, span } = failure.error else {
            panic!("expected syntax error, got {:?}", failure.error);
        };
        assert_eq!(token, Term::Open);
        assert_eq!(state, 1);
        assert_eq!(span.unwrap().start.column, 2);
        assert_eq!(failure.trace.codes(), ["S3", "S1"]);
        assert!(!failure.trace.is_accepted());
    }

    #[test]
    fn empty_token_sequence_is_rejected() {
        let parser = Parser::<Sound>::default();
        let failure = parser.parse::<TestToken>(&[]).unwrap_err();
        assert_eq!(failure.error, ParserError::EmptyInput);
        assert!(failure.trace.steps.is_empty());
    }

    #[test]
    fn missing_end_marker_is_unexpected_end() {
        let parser = Parser::<Sound>::default();
        let mut toks = tokens("a");
        toks.pop();
        let failure = parser.parse(&toks).unwrap_err();
        assert_eq!(failure.error, ParserError::UnexpectedEnd);
        assert_eq!(failure.trace.steps, [Step::Shift(crate::test_parser_data::StateID(1))]);
    }

    #[test]
    fn oversized_rule_underflows() {
        let parser = Parser::<TestData<{ Flaw::LONG_RULE }>>::default();
        let failure = parser.parse(&tokens("a")).unwrap_err();
        assert_eq!(
            failure.error,
            ParserError::StackUnderflow {
                needed: 3,
                depth: 1
            }
        );
        assert!(failure.error.is_internal());
    }

    #[test]
    fn missing_goto_is_structural() {
        let parser = Parser::<TestData<{ Flaw::NO_GOTO }>>::default();
        let failure = parser.parse(&tokens("a")).unwrap_err();
        assert_eq!(
            failure.error,
            ParserError::MissingGoto {
                state: 0,
                nonterminal: "S"
            }
        );
    }

    #[test]
    fn looping_table_hits_step_limit() {
        let parser = Parser::<TestData<{ Flaw::LOOP }>>::new(ParserConfig {
            max_steps: Some(64),
            ..ParserConfig::default()
        });
        let failure = parser.parse(&tokens("a")).unwrap_err();
        assert_eq!(failure.error, ParserError::StepLimit { limit: 64 });
        assert_eq!(failure.trace.steps.len(), 64);
    }

    #[test]
    fn shifting_past_end_marker_is_unexpected_end() {
        let parser = Parser::<TestData<{ Flaw::SHIFT_END }>>::default();
        let failure = parser.parse(&tokens("a")).unwrap_err();
        assert_eq!(failure.error, ParserError::UnexpectedEnd);
    }

    #[test]
    fn parser_is_shareable_across_threads() {
        let parser = Parser::<Sound>::default();
        std::thread::scope(|s| {
            let handles: Vec<_> = ["a", "(a)", "((a))", "(("]
                .into_iter()
                .map(|input| {
                    let parser = &parser;
                    s.spawn(move || parser.parse(&tokens(input)).is_ok())
                })
                .collect();
            let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(results, [true, true, true, false]);
        });
    }
}
