//! Tokens of generated programs.

use alloc::{string::String, vec::Vec};
use core::fmt::{self, Display, Formatter};

/// Binary arithmetic operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
}

impl Op {
    /// All operators, in the order they are drawn from.
    pub const ALL: [Op; 3] = [Op::Add, Op::Sub, Op::Mul];

    /// Textual form of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// Atomic lexical unit of a generated program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Variable name, either declared or referenced
    Ident(String),
    /// Non-negative integer literal
    Int(u32),
    /// Arithmetic operator
    Op(Op),
    /// `=`
    Assign,
    /// `;`
    Semi,
    /// Line break between statements
    Newline,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Ident(x) => x.fmt(f),
            Self::Int(i) => i.fmt(f),
            Self::Op(op) => op.fmt(f),
            Self::Assign => "=".fmt(f),
            Self::Semi => ";".fmt(f),
            Self::Newline => "\n".fmt(f),
            Self::LParen => "(".fmt(f),
            Self::RParen => ")".fmt(f),
        }
    }
}

/// Token sequence, rendered by joining tokens with single spaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tokens(pub Vec<Token>);

impl Tokens {
    /// Create an empty token sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single token.
    pub fn push(&mut self, t: Token) {
        self.0.push(t)
    }

    /// Append all tokens of another sequence.
    pub fn append(&mut self, mut other: Tokens) {
        self.0.append(&mut other.0)
    }

    /// Surround the sequence with parentheses.
    pub fn parenthesize(self) -> Self {
        let mut out = Vec::with_capacity(self.0.len() + 2);
        out.push(Token::LParen);
        out.extend(self.0);
        out.push(Token::RParen);
        Self(out)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> core::slice::Iter<'_, Token> {
        self.0.iter()
    }

    /// Split the sequence into statements.
    ///
    /// Statements are separated by `;` directly followed by a newline.
    /// A `;` inside an assignment statement (`x = e ; x`) is not a separator.
    pub fn statements(&self) -> Vec<&[Token]> {
        let mut stmts = Vec::new();
        let mut start = 0;
        let mut i = 0;
        while i < self.0.len() {
            if self.0[i] == Token::Semi && self.0.get(i + 1) == Some(&Token::Newline) {
                stmts.push(&self.0[start..i]);
                i += 2;
                start = i;
            } else {
                i += 1;
            }
        }
        if start < self.0.len() || !stmts.is_empty() {
            stmts.push(&self.0[start..]);
        }
        stmts
    }

    /// Names of all identifier tokens, in order of appearance.
    pub fn idents(&self) -> impl Iterator<Item = &str> {
        self.iter().filter_map(|t| match t {
            Token::Ident(x) => Some(x.as_str()),
            _ => None,
        })
    }

    /// Values of all integer literals, in order of appearance.
    pub fn literals(&self) -> impl Iterator<Item = u32> + '_ {
        self.iter().filter_map(|t| match t {
            Token::Int(i) => Some(*i),
            _ => None,
        })
    }
}

impl From<Token> for Tokens {
    fn from(t: Token) -> Self {
        Self(Vec::from([t]))
    }
}

impl FromIterator<Token> for Tokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Tokens {
    type Item = Token;
    type IntoIter = alloc::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Display for Tokens {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            write!(f, "{first}")?;
        }
        iter.try_for_each(|t| write!(f, " {t}"))
    }
}
