use std::{
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use scanner::{Category, Scanner};

#[derive(Parser)]
#[command(name = "scanner")]
#[command(version, about = "Print the token stream of a source file", long_about = None)]
struct Cli {
    /// Source file to scan; reads stdin when omitted
    input: Option<PathBuf>,

    /// Exit with status 1 if any ERROR token was produced
    #[arg(long)]
    deny_errors: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let mut stdout = io::stdout().lock();
    let errors = match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned());
            dump_tokens(BufReader::new(file), file_name, &mut stdout)?
        }
        None => dump_tokens(io::stdin().lock(), None, &mut stdout)?,
    };

    if rejects(cli.deny_errors, errors) {
        warn!("{} unrecognised character(s)", errors);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

// Writes one line per token to `out` and returns how many were ERROR.
fn dump_tokens<R: BufRead, W: Write>(source: R, file: Option<String>, out: &mut W) -> Result<usize> {
    let start = Instant::now();
    let mut scanner = Scanner::new(source, file);
    let mut errors = 0;

    for token in scanner.tokens() {
        let token = token.context("scanning stopped")?;

        if token.category == Category::Error {
            errors += 1;
        }

        writeln!(out, "{}", token.debug_line())?;
    }

    info!("Tokenized in {:?}", start.elapsed());

    Ok(errors)
}

fn rejects(deny_errors: bool, errors: usize) -> bool {
    deny_errors && errors > 0
}

#[cfg(test)]
mod tests {
    use std::io::{self, BufReader, Cursor, Read};

    use super::{dump_tokens, rejects};

    fn dump(source: &str) -> (String, usize) {
        let mut out = Vec::new();
        let errors = dump_tokens(Cursor::new(source), None, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), errors)
    }

    #[test]
    fn test_dump_tokens_output() {
        let (output, errors) = dump("x @ y");

        assert_eq!(output, "IDENT (x)\nERROR (@)\nIDENT (y)\nEOF\n");
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_dump_tokens_clean_source() {
        let (output, errors) = dump("if n >= 10 -> n # done\n");

        assert_eq!(output, "IF\nIDENT (n)\nGTEQ\nNUMERAL (10)\nARROW\nIDENT (n)\nEOF\n");
        assert_eq!(errors, 0);
    }

    #[test]
    fn test_deny_errors_exit_status() {
        let (_, errors) = dump("x @ y");
        assert!(rejects(true, errors));
        assert!(!rejects(false, errors));

        let (_, errors) = dump("x y");
        assert!(!rejects(true, errors));
    }

    struct BrokenSource;

    impl Read for BrokenSource {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "unreadable"))
        }
    }

    #[test]
    fn test_dump_tokens_reports_read_failure() {
        let mut out = Vec::new();
        let error = dump_tokens(BufReader::new(BrokenSource), None, &mut out).unwrap_err();

        assert!(error.to_string().contains("scanning stopped"));
        assert!(out.is_empty());
    }
}
