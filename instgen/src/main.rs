mod cli;

use clap::Parser;
use cli::Cli;
use core::fmt::{self, Display, Formatter};
use instgen_core::{config, generate, Tokens};
use std::io::{self, IsTerminal, Write};
use std::process::{ExitCode, Termination};

fn main() -> ExitCode {
    use env_logger::Env;
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "instgen=warn"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    // on invalid arguments, this prints usage and exits with status 2
    let cli = Cli::parse();

    match real_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.report()
        }
    }
}

fn real_main(cli: &Cli) -> Result<(), Error> {
    let config = cli.config();
    config.validate()?;
    log::debug!("{config:?}");

    let seed = cli.seed();
    log::info!("seed: {seed}");

    let program = generate(&config, seed);
    match with_stdout(|out| print(out, &program)) {
        // the reader lost interest, which is fine
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        r => Ok(r?),
    }
}

fn print(w: &mut dyn Write, program: &Tokens) -> io::Result<()> {
    writeln!(w, "{program}")?;
    w.flush()
}

fn with_stdout<T>(f: impl FnOnce(&mut dyn Write) -> T) -> T {
    let stdout = io::stdout();
    if stdout.is_terminal() {
        f(&mut stdout.lock())
    } else {
        f(&mut io::BufWriter::new(stdout.lock()))
    }
}

#[derive(Debug)]
enum Error {
    Config(config::Error),
    Io(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl Termination for Error {
    fn report(self) -> ExitCode {
        ExitCode::from(match self {
            Self::Io(_) => 2,
            Self::Config(_) => 3,
        })
    }
}

impl From<config::Error> for Error {
    fn from(e: config::Error) -> Self {
        Self::Config(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
