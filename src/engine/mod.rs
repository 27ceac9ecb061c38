// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! A backtracking engine that runs a program of predicates in sequence. The
//! program for the lattice enumeration is built in [`crate::partition`]; the
//! engine itself knows nothing about lattices.
//!
//! # Architecture
//!
//! The engine keeps a stack with one entry per active predicate invocation.
//! Each entry records which predicate is running, its round, and whether it
//! is in call mode or working through a set of choices.
//!
//! Execution follows a WAM-like model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! Backtracking only pops the stack. Predicates that write into the context
//! overwrite their own state on each retry, so there is nothing to undo.
//!
//! # Example
//!
//! ```
//! use ice_lattice::context::SearchContext;
//! use ice_lattice::engine::{EngineBuilder, Predicate, PredicateResult};
//! use ice_lattice::predicates::SuspendPredicate;
//!
//! #[derive(Debug)]
//! struct Noop;
//!
//! impl Predicate for Noop {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Success
//!     }
//! }
//!
//! let mut ctx = SearchContext::default();
//! let engine = EngineBuilder::new()
//!     .add(Box::new(Noop))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! // Consumed on exhaustion, handed back on suspend.
//! let engine = engine.search(&mut ctx).expect("suspends");
//! assert_eq!(engine.statistics(), (2, 0));
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;

/// Initial capacity of the predicate stack. One cell predicate per lattice
/// cell dominates the depth.
const INITIAL_STACK_SIZE: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// try_pred has not yet been called for this entry.
    Call,
    /// Working through choices: `next` is the next one to retry.
    Retry { next: usize, of: usize },
}

impl Mode {
    /// A predicate that succeeded without choices has nothing left to retry.
    const EXHAUSTED: Mode = Mode::Retry { next: 0, of: 0 };
}

/// Stack entry tracking the state of one predicate invocation.
#[derive(Debug)]
struct StackEntry {
    predicate_index: usize,
    round: usize,
    mode: Mode,
}

impl StackEntry {
    fn call(predicate_index: usize, round: usize) -> Self {
        Self {
            predicate_index,
            round,
            mode: Mode::Call,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    predicates: Vec<Box<dyn Predicate>>,
    stack: Vec<StackEntry>,
    try_count: u64,
    retry_count: u64,
}

impl SearchEngine {
    /// Create an engine running `predicates` in order.
    ///
    /// Prefer [`EngineBuilder`], which guarantees the program ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(INITIAL_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Run the search until it suspends or is exhausted.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if a predicate suspended; calling search() again
    ///   resumes by backtracking out of the suspending predicate
    /// - `None` once every choice has been explored
    ///
    /// Results are delivered as side effects on `ctx`.
    ///
    /// # Panics
    ///
    /// Panics if the program runs off its end (no terminal predicate), or if
    /// retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.predicates.is_empty() {
            return None;
        }

        if self.stack.is_empty() {
            self.stack.push(StackEntry::call(0, 0));
        } else {
            // Resuming: the top entry is the predicate that suspended.
            self.stack.pop();
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                return None;
            };
            let index = entry.predicate_index;
            let round = entry.round;

            match entry.mode {
                Mode::Call => {
                    self.try_count += 1;
                    match self.predicates[index].try_pred(ctx, round) {
                        PredicateResult::Success => {
                            // Deterministic: backtracking into it must pop it.
                            entry.mode = Mode::EXHAUSTED;
                            self.advance(index)
                        }
                        PredicateResult::SuccessSamePredicate => {
                            entry.mode = Mode::EXHAUSTED;
                            self.stack.push(StackEntry::call(index, round + 1))
                        }
                        PredicateResult::Failure => {
                            self.stack.pop();
                        }
                        PredicateResult::Choices(n) => {
                            entry.mode = Mode::Retry { next: 0, of: n };
                        }
                        PredicateResult::Suspend => return Some(self),
                    }
                }
                Mode::Retry { next, of } => {
                    if next >= of {
                        self.stack.pop();
                        continue;
                    }
                    entry.mode = Mode::Retry { next: next + 1, of };
                    self.retry_count += 1;
                    match self.predicates[index].retry_pred(ctx, round, next) {
                        PredicateResult::Success => self.advance(index),
                        PredicateResult::SuccessSamePredicate => {
                            self.stack.push(StackEntry::call(index, round + 1))
                        }
                        PredicateResult::Failure => {}
                        result @ (PredicateResult::Choices(_) | PredicateResult::Suspend) => {
                            panic!(
                                "{}::retry_pred returned invalid result: {:?}",
                                self.predicates[index].name(),
                                result
                            );
                        }
                    }
                }
            }
        }
    }

    fn advance(&mut self, index: usize) {
        let next = index + 1;
        if next >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 Every program must terminate with a terminal predicate."
            );
        }
        self.stack.push(StackEntry::call(next, 0));
    }

    /// Returns (try_count, retry_count) accumulated over all calls to search().
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Assembles a predicate program.
///
/// The builder only yields an engine after [`terminal`](Self::terminal), so a
/// built program cannot run off its end.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

/// A program that has been closed by a terminal predicate.
#[derive(Debug)]
pub struct TerminatedBuilder {
    predicates: Vec<Box<dyn Predicate>>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Append a predicate only when `predicate` is Some.
    pub fn add_optional(self, predicate: Option<Box<dyn Predicate>>) -> Self {
        match predicate {
            Some(predicate) => self.add(predicate),
            None => self,
        }
    }

    /// Close the program with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder {
            predicates: self.predicates,
        }
    }
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.predicates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{FailPredicate, SuspendPredicate};

    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    #[derive(Debug)]
    struct AlwaysFail;

    impl Predicate for AlwaysFail {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Failure
        }
    }

    /// Offers `n` choices and records the ones retried.
    #[derive(Debug)]
    struct Choose {
        n: usize,
        seen: std::rc::Rc<std::cell::RefCell<Vec<usize>>>,
    }

    impl Predicate for Choose {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.n)
        }

        fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
            self.seen.borrow_mut().push(choice);
            PredicateResult::Success
        }
    }

    /// Succeeds on the same predicate for `rounds` rounds.
    #[derive(Debug)]
    struct Rounds {
        rounds: usize,
        seen: std::rc::Rc<std::cell::RefCell<Vec<usize>>>,
    }

    impl Predicate for Rounds {
        fn try_pred(&mut self, _ctx: &mut SearchContext, round: usize) -> PredicateResult {
            self.seen.borrow_mut().push(round);
            if round + 1 < self.rounds {
                PredicateResult::SuccessSamePredicate
            } else {
                PredicateResult::Success
            }
        }
    }

    #[derive(Debug)]
    struct BadRetry;

    impl Predicate for BadRetry {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(1)
        }

        fn retry_pred(&mut self, _ctx: &mut SearchContext, _round: usize, _choice: usize) -> PredicateResult {
            PredicateResult::Suspend
        }
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = SearchContext::default();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx);
        assert!(engine.is_some());
        assert_eq!(engine.unwrap().statistics(), (2, 0));
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = SearchContext::default();
        let engine = SearchEngine::new(vec![Box::new(AlwaysFail)]);
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = SearchContext::default();
        let engine = SearchEngine::new(vec![]);
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = SearchContext::default();
        let engine = SearchEngine::new(vec![Box::new(AlwaysSucceed)]);
        let _ = engine.search(&mut ctx);
    }

    #[test]
    #[should_panic(expected = "invalid result")]
    fn test_retry_cannot_suspend() {
        let mut ctx = SearchContext::default();
        let engine = EngineBuilder::new()
            .add(Box::new(BadRetry))
            .terminal(Box::new(FailPredicate))
            .build();
        let _ = engine.search(&mut ctx);
    }

    #[test]
    fn test_choices_are_all_explored_before_exhaustion() {
        let mut ctx = SearchContext::default();
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let engine = EngineBuilder::new()
            .add(Box::new(Choose {
                n: 3,
                seen: seen.clone(),
            }))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_resume_after_suspend_continues_with_next_choice() {
        let mut ctx = SearchContext::default();
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let engine = EngineBuilder::new()
            .add(Box::new(Choose {
                n: 2,
                seen: seen.clone(),
            }))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let engine = engine.search(&mut ctx).expect("first solution");
        assert_eq!(*seen.borrow(), vec![0]);
        let engine = engine.search(&mut ctx).expect("second solution");
        assert_eq!(*seen.borrow(), vec![0, 1]);
        assert!(engine.search(&mut ctx).is_none());
    }

    #[test]
    fn test_rounds_increment_on_same_predicate() {
        let mut ctx = SearchContext::default();
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let engine = EngineBuilder::new()
            .add(Box::new(Rounds {
                rounds: 4,
                seen: seen.clone(),
            }))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 3]);
    }

    /// Counts how often it is tried.
    #[derive(Debug)]
    struct CountTries(std::rc::Rc<std::cell::Cell<usize>>);

    impl Predicate for CountTries {
        fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
            self.0.set(self.0.get() + 1);
            PredicateResult::Success
        }
    }

    #[test]
    fn test_backtracking_pops_deterministic_predicates() {
        let mut ctx = SearchContext::default();
        let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let tries = std::rc::Rc::new(std::cell::Cell::new(0));
        let engine = EngineBuilder::new()
            .add(Box::new(Choose {
                n: 2,
                seen: seen.clone(),
            }))
            .add(Box::new(CountTries(tries.clone())))
            .add(Box::new(CountTries(tries.clone())))
            .terminal(Box::new(FailPredicate))
            .build();

        assert!(engine.search(&mut ctx).is_none());
        // Each deterministic predicate runs once per choice, never again on backtrack.
        assert_eq!(tries.get(), 4);
        assert_eq!(*seen.borrow(), vec![0, 1]);
    }

    #[test]
    fn test_deterministic_program_ending_in_fail_terminates() {
        let mut ctx = SearchContext::default();
        let tries = std::rc::Rc::new(std::cell::Cell::new(0));
        let engine = EngineBuilder::new()
            .add(Box::new(CountTries(tries.clone())))
            .terminal(Box::new(FailPredicate))
            .build();
        assert!(engine.search(&mut ctx).is_none());
        assert_eq!(tries.get(), 1);
    }

    #[test]
    fn test_add_optional() {
        let mut ctx = SearchContext::default();
        let engine = EngineBuilder::new()
            .add_optional(None)
            .add_optional(Some(Box::new(AlwaysSucceed)))
            .terminal(Box::new(SuspendPredicate))
            .build();
        let engine = engine.search(&mut ctx).expect("suspends");
        assert_eq!(engine.statistics(), (2, 0));
    }
}
