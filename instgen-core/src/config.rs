//! Generation parameters.

use alloc::string::String;
use core::fmt;
use core::ops::RangeInclusive;

/// Parameters of program generation.
///
/// The default configuration draws a statement count between 5 and 10,
/// but then generates 20 statements regardless.
/// Set `statements` to `None` to honor the drawn count instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Prefix of generated identifiers, followed by a number
    pub prefix: String,
    /// Range from which a statement count is drawn for every program
    pub drawn_statements: RangeInclusive<usize>,
    /// Fixed statement count; if given, the drawn count is ignored
    pub statements: Option<usize>,
    /// Nesting level beyond which expressions are always leaves
    pub max_depth: usize,
    /// Largest integer literal
    pub max_literal: u32,
    /// A statement is an assignment with probability `1/assign_odds`.
    pub assign_odds: usize,
    /// A non-capped expression is a leaf with probability `1/leaf_odds`.
    pub leaf_odds: usize,
    /// An expression is parenthesized with probability `1/paren_odds`.
    pub paren_odds: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: "asdASD123".into(),
            drawn_statements: 5..=10,
            statements: Some(20),
            max_depth: 10,
            max_literal: 20,
            assign_odds: 3,
            leaf_odds: 3,
            paren_odds: 4,
        }
    }
}

impl Config {
    /// Check that the configuration can be used for generation.
    pub fn validate(&self) -> Result<(), Error> {
        let mut chars = self.prefix.chars();
        match chars.next() {
            None => return Err(Error::EmptyPrefix),
            Some(c) if !c.is_ascii_alphabetic() => return Err(Error::Prefix(self.prefix.clone())),
            Some(_) => (),
        }
        if !chars.all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::Prefix(self.prefix.clone()));
        }

        let (lo, hi) = (self.drawn_statements.start(), self.drawn_statements.end());
        if lo > hi {
            return Err(Error::StatementRange(*lo, *hi));
        }
        // the size of the range must be representable
        if hi - lo == usize::MAX {
            return Err(Error::StatementSpan(*lo, *hi));
        }

        let odds = [
            ("assignment", self.assign_odds),
            ("leaf", self.leaf_odds),
            ("parenthesization", self.paren_odds),
        ];
        match odds.into_iter().find(|(_, n)| *n == 0) {
            Some((what, _)) => Err(Error::ZeroOdds(what)),
            None => Ok(()),
        }
    }

    /// Statement count to use, given the count drawn for the current program.
    pub fn statement_count(&self, drawn: usize) -> usize {
        self.statements.unwrap_or(drawn)
    }
}

/// Invalid configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// identifier prefix is empty
    EmptyPrefix,
    /// identifier prefix is not a letter followed by letters and digits
    Prefix(String),
    /// lower bound of statement range exceeds upper bound
    StatementRange(usize, usize),
    /// statement range has more than `usize::MAX` elements
    StatementSpan(usize, usize),
    /// odds of some choice are `1/0`
    ZeroOdds(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyPrefix => write!(f, "identifier prefix must not be empty"),
            Self::Prefix(p) => write!(
                f,
                "identifier prefix {p:?} must be a letter followed by letters and digits"
            ),
            Self::StatementRange(lo, hi) => {
                write!(f, "statement range {lo}..={hi} is empty")
            }
            Self::StatementSpan(lo, hi) => {
                write!(f, "statement range {lo}..={hi} is too large")
            }
            Self::ZeroOdds(what) => write!(f, "odds of {what} must be positive"),
        }
    }
}

impl std::error::Error for Error {}
