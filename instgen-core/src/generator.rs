//! Generation of programs, statements, expressions and values.

use crate::choose::Choose;
use crate::token::{Op, Token, Tokens};
use crate::Config;
use alloc::{format, string::String};
use indexmap::IndexSet;
use log::{debug, trace};

/// Names of the variables declared so far in a program.
///
/// Insertion order is kept, so that picking a variable by index is uniform and
/// reproducible for a given random source.
pub type IdentSet = IndexSet<String>;

/// Program generator.
///
/// All random decisions are taken by the source `R`;
/// given the same source state and configuration, output is identical.
pub struct Generator<'a, R: ?Sized> {
    rng: &'a mut R,
    config: &'a Config,
}

impl<'a, R: Choose + ?Sized> Generator<'a, R> {
    /// Create a generator from a random source and a configuration.
    pub fn new(rng: &'a mut R, config: &'a Config) -> Self {
        Self { rng, config }
    }

    /// Generate a whole program.
    ///
    /// Statements are separated by `;` and a newline.
    pub fn program(&mut self) -> Tokens {
        let mut vars = IdentSet::new();
        let drawn = self.rng.in_range(self.config.drawn_statements.clone());
        let count = self.config.statement_count(drawn);
        debug!("drew statement count {drawn}, generating {count} statements");

        let mut out = Tokens::new();
        for i in 0..count {
            if i > 0 {
                out.push(Token::Semi);
                out.push(Token::Newline);
            }
            let stmt = self.statement(&mut vars);
            trace!("statement {i}: {stmt}");
            out.append(stmt);
        }
        out
    }

    /// Generate a statement, which is either an expression or an assignment.
    ///
    /// An assignment `x = e ; x` declares a fresh variable `x`.
    /// `x` is added to `vars` only after `e` has been generated,
    /// so `e` never refers to `x`.
    pub fn statement(&mut self, vars: &mut IdentSet) -> Tokens {
        if !self.rng.one_in(self.config.assign_odds) {
            return self.expression(vars, 1);
        }

        let x = self.ident(vars);
        let rhs = self.expression(vars, 1);

        let mut out = Tokens::from(Token::Ident(x.clone()));
        out.push(Token::Assign);
        out.append(rhs);
        out.push(Token::Semi);
        out.push(Token::Ident(x.clone()));

        trace!("declared {x}");
        let fresh = vars.insert(x);
        assert!(fresh, "identifier declared twice");
        out
    }

    /// Generate an expression at the given nesting level, starting from 1.
    ///
    /// Beyond the depth cap, the expression is always a single value.
    pub fn expression(&mut self, vars: &IdentSet, depth: usize) -> Tokens {
        // the leaf decision is drawn even when the cap is exceeded
        let leaf = self.rng.one_in(self.config.leaf_odds);
        let out = if leaf || depth > self.config.max_depth {
            Tokens::from(self.value(vars))
        } else {
            let op = *self.rng.pick(&Op::ALL);
            let mut out = self.expression(vars, depth + 1);
            out.push(Token::Op(op));
            out.append(self.expression(vars, depth + 1));
            out
        };

        if self.rng.one_in(self.config.paren_odds) {
            out.parenthesize()
        } else {
            out
        }
    }

    /// Generate a reference to a declared variable or an integer literal.
    ///
    /// If no variable is declared yet, this always yields a literal.
    pub fn value(&mut self, vars: &IdentSet) -> Token {
        if !vars.is_empty() && self.rng.one_in(2) {
            self.reference(vars)
        } else {
            let max = self.config.max_literal as usize;
            // `max_literal` is a `u32`, so this cannot truncate
            Token::Int(self.rng.in_range(0..=max) as u32)
        }
    }

    fn reference(&mut self, vars: &IdentSet) -> Token {
        assert!(!vars.is_empty(), "reference without declared variables");
        Token::Ident(vars[self.rng.below(vars.len())].clone())
    }

    /// Name of the next variable to be declared.
    ///
    /// This is unique as long as `vars` grows only via [`Self::statement`].
    pub fn ident(&self, vars: &IdentSet) -> String {
        format!("{}{}", self.config.prefix, vars.len())
    }
}
