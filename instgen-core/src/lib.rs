//! Random program generator for the Instant language.
//!
//! Instant programs are sequences of statements separated by `;`,
//! where each statement is either an arithmetic expression or
//! an assignment of an expression to a variable.
//! Generated programs serve as test inputs for parsers, interpreters and compilers.
//!
//! Every program only refers to variables that were assigned before.
//! Apart from that, generated programs need not be meaningful;
//! for example, parentheses are inserted at random,
//! without regard to operator precedence.
//!
//! ~~~
//! use instgen_core::{generate, Config};
//!
//! let config = Config::default();
//! let program = generate(&config, 42);
//!
//! // generation is deterministic for a given seed
//! assert_eq!(program, generate(&config, 42));
//! // by default, 20 statements are generated
//! assert_eq!(program.statements().len(), 20);
//! assert!(program.literals().all(|i| i <= 20));
//!
//! let text = program.to_string();
//! assert!(!text.starts_with(' '));
//! ~~~
#![warn(missing_docs)]

extern crate alloc;

pub mod choose;
pub mod config;
mod generator;
mod token;

pub use choose::Choose;
pub use config::Config;
pub use generator::{Generator, IdentSet};
pub use token::{Op, Token, Tokens};

use rand::{rngs::StdRng, SeedableRng};

/// Generate a program from a seeded pseudo-random generator.
///
/// The same seed and configuration always yield the same program.
pub fn generate(config: &Config, seed: u64) -> Tokens {
    log::debug!("generating program with seed {seed}");
    let rng = &mut StdRng::seed_from_u64(seed);
    Generator::new(rng, config).program()
}
