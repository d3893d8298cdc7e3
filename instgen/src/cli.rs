//! Command-line argument parsing
use clap::Parser;
use instgen_core::Config;
use std::time::{SystemTime, UNIX_EPOCH};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("INSTGEN_COMMIT"), ")");

/// Generate a random Instant program and print it to standard output.
///
/// Programs consist of assignments and arithmetic expressions
/// over integer literals and previously assigned variables.
#[derive(Debug, Default, Parser)]
#[command(name = "instgen", version = VERSION)]
pub struct Cli {
    /// Seed of the pseudo-random generator [default: current time]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of statements to generate [default: 20]
    #[arg(short = 'n', long, conflicts_with = "drawn_statements")]
    pub statements: Option<usize>,

    /// Generate as many statements as drawn between the minimum and maximum
    #[arg(long)]
    pub drawn_statements: bool,

    /// Lower bound of drawn statement counts [default: 5]
    #[arg(long, value_name = "N")]
    pub min_statements: Option<usize>,

    /// Upper bound of drawn statement counts [default: 10]
    #[arg(long, value_name = "N")]
    pub max_statements: Option<usize>,

    /// Nesting level beyond which expressions are single values [default: 10]
    #[arg(short = 'd', long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Largest integer literal [default: 20]
    #[arg(long, value_name = "N")]
    pub max_literal: Option<u32>,

    /// Prefix of variable names [default: asdASD123]
    #[arg(long)]
    pub prefix: Option<String>,
}

impl Cli {
    /// Configuration obtained by overriding defaults with given options.
    pub fn config(&self) -> Config {
        let default = Config::default();
        let min = self.min_statements.unwrap_or(*default.drawn_statements.start());
        let max = self.max_statements.unwrap_or(*default.drawn_statements.end());
        let statements = if self.drawn_statements {
            None
        } else {
            self.statements.or(default.statements)
        };
        Config {
            prefix: self.prefix.clone().unwrap_or(default.prefix),
            drawn_statements: min..=max,
            statements,
            max_depth: self.max_depth.unwrap_or(default.max_depth),
            max_literal: self.max_literal.unwrap_or(default.max_literal),
            ..default
        }
    }

    /// Given seed, or the current time in nanoseconds.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            let now = SystemTime::now().duration_since(UNIX_EPOCH);
            // truncation keeps the fast-changing low bits
            now.map_or(0, |d| d.as_nanos() as u64)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(core::iter::once("instgen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        assert_eq!(parse(&[]).config(), Config::default());
        assert_eq!(Cli::default().config(), Config::default());
    }

    #[test]
    fn overrides() {
        let cli = parse(&["-n", "3", "-d", "2", "--max-literal", "9", "--prefix", "v"]);
        let config = cli.config();
        assert_eq!(config.statements, Some(3));
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.max_literal, 9);
        assert_eq!(config.prefix, "v");

        let cli = parse(&["--drawn-statements", "--min-statements", "1"]);
        let config = cli.config();
        assert_eq!(config.statements, None);
        assert_eq!(config.drawn_statements, 1..=10);
    }

    #[test]
    fn seed() {
        assert_eq!(parse(&["--seed", "12"]).seed(), 12);
    }

    #[test]
    fn conflicts() {
        let args = ["instgen", "-n", "3", "--drawn-statements"];
        assert!(Cli::try_parse_from(args).is_err());
        assert!(Cli::try_parse_from(["instgen", "--seed", "x"]).is_err());
    }
}
