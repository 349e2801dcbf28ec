//! Outcomes of a single parse attempt and the furthest-failure merge.

use std::cmp::Ordering;

use llparse_core::{Expected, Value};

/// Expectation reported when input remains where none should.
pub const END_OF_INPUT: &str = "end of input";

/// Result of running one node at one offset.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Success(Success),
    Failure(Failure),
}

/// A match: where it ended and what it produced.
#[derive(Clone, Debug, PartialEq)]
pub struct Success {
    /// Offset just past the consumed text.
    pub position: usize,
    pub value: Value,
    /// Deepest failure observed while producing this success, kept so that
    /// an enclosing combinator can still report it. Never behind `position`.
    pub furthest: Option<Failure>,
}

/// A mismatch: the deepest offset reached and what would have matched there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    pub position: usize,
    pub expected: Expected,
}

impl Failure {
    pub fn new(position: usize, expected: Expected) -> Self {
        Self { position, expected }
    }

    /// Keeps the deeper failure; on a tie unions the expectations, `self`'s first.
    pub fn merge(mut self, other: Failure) -> Failure {
        match self.position.cmp(&other.position) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => {
                self.expected.union(other.expected);
                self
            }
        }
    }
}

/// Folds `new` into the accumulated failure.
pub(crate) fn merge_into(acc: &mut Option<Failure>, new: Option<Failure>) {
    let Some(new) = new else {
        return;
    };
    *acc = Some(match acc.take() {
        Some(old) => old.merge(new),
        None => new,
    });
}

/// Failure that ends a sequence or an unfinished repetition.
///
/// The failing step wins unless a failure carried by an earlier success lies
/// strictly beyond it.
pub(crate) fn merge_failure(acc: Option<Failure>, failure: Failure) -> Failure {
    match acc {
        Some(acc) if acc.position > failure.position => acc,
        _ => failure,
    }
}

impl Success {
    pub fn new(position: usize, value: Value) -> Self {
        Self {
            position,
            value,
            furthest: None,
        }
    }

    /// Attaches `furthest` unless it lies behind the end of the match.
    pub(crate) fn with_furthest(mut self, furthest: Option<Failure>) -> Self {
        self.furthest = furthest.filter(|f| f.position >= self.position);
        self
    }
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// End of the match on success, failure offset otherwise.
    pub fn position(&self) -> usize {
        match self {
            Outcome::Success(s) => s.position,
            Outcome::Failure(f) => f.position,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Outcome::Success(s) => Some(&s.value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn expected(&self) -> Option<&Expected> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(f) => Some(&f.expected),
        }
    }

    pub fn into_result(self) -> Result<Success, Failure> {
        match self {
            Outcome::Success(s) => Ok(s),
            Outcome::Failure(f) => Err(f),
        }
    }
}

impl From<Success> for Outcome {
    fn from(success: Success) -> Self {
        Outcome::Success(success)
    }
}

impl From<Failure> for Outcome {
    fn from(failure: Failure) -> Self {
        Outcome::Failure(failure)
    }
}
