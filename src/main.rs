use std::{
    fs::read_to_string,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
    rc::Rc,
    time::Instant,
};

use clap::{Parser as ClapParser, Subcommand};
use juxt::{
    errors::errors::{Error, ErrorImpl},
    lexer::lexer::tokenize,
    parse_source, render_error, Position,
};

#[derive(ClapParser, Debug)]
#[command(version, about = "Lexer and parser for the juxt expression language", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints one token per line
    Tokens {
        /// Source file, `-` or nothing for stdin
        file: Option<PathBuf>,
    },
    /// Prints the syntax tree
    Parse {
        /// Source file, `-` or nothing for stdin
        file: Option<PathBuf>,
    },
    /// Prints the program in canonical form
    Fmt {
        /// Source file, `-` or nothing for stdin
        file: Option<PathBuf>,
    },
}

/// Label used in diagnostics for `file`.
fn source_label(file: &Option<PathBuf>) -> String {
    match file {
        Some(path) if path.as_os_str() != "-" => path.file_name().map_or_else(
            || path.to_string_lossy().into_owned(),
            |name| name.to_string_lossy().into_owned(),
        ),
        _ => String::from("<stdin>"),
    }
}

/// Returns the source text and the label used in diagnostics.
fn read_source(file: Option<PathBuf>) -> Result<(String, String), (Error, String)> {
    let label = source_label(&file);
    let read = match file {
        Some(path) if path.as_os_str() != "-" => read_to_string(&path),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source).map(|_| source)
        }
    };

    match read {
        Ok(source) => Ok((source, label)),
        Err(err) => Err(io_failure(err, label)),
    }
}

fn run(command: Commands) -> Result<(), (Error, String)> {
    match command {
        Commands::Tokens { file } => {
            let (source, label) = read_source(file)?;
            let tokens = tokenize(source.clone(), Some(label)).map_err(|err| (err, source))?;

            for token in tokens {
                println!("{}", token);
            }
        }
        Commands::Parse { file } => {
            let (source, label) = read_source(file)?;
            let start = Instant::now();
            let ast = parse_source(source.clone(), Some(label)).map_err(|err| (err, source))?;
            log::info!("parsed in {:?}", start.elapsed());

            println!("{:#?}", ast);
        }
        Commands::Fmt { file } => {
            let (source, label) = read_source(file)?;
            let ast = parse_source(source.clone(), Some(label)).map_err(|err| (err, source))?;

            println!("{}", ast);
        }
    }

    Ok(())
}

fn io_failure(err: io::Error, label: String) -> (Error, String) {
    (
        Error::new(
            ErrorImpl::Io {
                message: err.to_string(),
            },
            Position::start(Rc::new(label)),
        ),
        String::new(),
    )
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err((error, source)) => {
            eprint!("{}", render_error(&error, &source));
            ExitCode::FAILURE
        }
    }
}
