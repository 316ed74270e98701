//! Stoker demo driver.
//!
//! Thin wrapper around the `stoker` engine: reads a file or stdin,
//! configures the tokenizer from command-line flags, and prints one
//! formatted token per line, final `Token[EOF]` included.

mod args;

use std::fs::File;
use std::io;
use std::sync::Once;

use stoker::{BufferSource, CharSource, ReaderSource, ScanError, Tokenizer};

use crate::args::TokenizeOptions;

/// Built-in sample text exercising most token kinds; `stoker demo` scans
/// it with lowercase mode on.
const DEMO_TEXT: &str = "a 'Hello'. 'T'his is text * * + + \n . \r that will 12-34 be split into tokens abc123 123abc. 1.3453 + 1 = 2 a//gg";

static TRACING_INIT: Once = Once::new();

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "tokenize" => {
            if args.len() < 3 {
                eprintln!("Usage: stoker tokenize <file|-> [options]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --eol               Report line terminators as EOL tokens");
                eprintln!("  --slash-star        Recognize /* ... */ comments");
                eprintln!("  --slash-slash       Recognize // ... comments");
                eprintln!("  --lower             Lowercase word tokens");
                eprintln!("  --no-numbers        Switch number recognition off");
                eprintln!("  --ordinary=<chars>  Demote each listed character to ordinary");
                std::process::exit(1);
            }

            let options = match TokenizeOptions::parse(&args[3..]) {
                Ok(options) => options,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!("Usage: stoker tokenize <file|-> [options]");
                    std::process::exit(1);
                }
            };

            tokenize_path(&args[2], &options);
        }
        "demo" => {
            let mut tokenizer = Tokenizer::new(BufferSource::from(DEMO_TEXT));
            tokenizer.lower_case_mode(true);
            tokenizer.parse_numbers(true);

            if let Err(e) = print_tokens(&mut tokenizer) {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("stoker {}", env!("CARGO_PKG_VERSION"));
            println!("Table-driven stream tokenizer");
        }
        command => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Tokenize one file (or stdin for `-`) and print its token stream.
fn tokenize_path(path: &str, options: &TokenizeOptions) {
    let source: Box<dyn CharSource> = if path == "-" {
        Box::new(ReaderSource::new(io::stdin().lock()))
    } else {
        match File::open(path) {
            Ok(file) => Box::new(ReaderSource::new(file)),
            Err(e) => {
                eprintln!("error: cannot open '{path}': {e}");
                std::process::exit(1);
            }
        }
    };

    let mut tokenizer = Tokenizer::new(source);
    if let Err(e) = options.configure(&mut tokenizer) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    tracing::debug!(path, ?options, "tokenizing");
    if let Err(e) = print_tokens(&mut tokenizer) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Print every token through and including `Token[EOF]`.
fn print_tokens<S: CharSource>(tokenizer: &mut Tokenizer<S>) -> Result<(), ScanError> {
    loop {
        let kind = tokenizer.next_token()?;
        println!("{tokenizer}");
        if kind.is_eof() {
            return Ok(());
        }
    }
}

fn print_usage() {
    println!("Stoker (table-driven stream tokenizer)");
    println!();
    println!("Usage: stoker <command> [options]");
    println!();
    println!("Commands:");
    println!("  tokenize <file|->  Tokenize a file (or stdin) and print each token");
    println!("  demo               Tokenize the built-in sample text");
    println!("  help               Show this help message");
    println!("  version            Show version information");
    println!();
    println!("Tokenize options:");
    println!("  --eol               Report line terminators as EOL tokens");
    println!("  --slash-star        Recognize /* ... */ comments");
    println!("  --slash-slash       Recognize // ... comments");
    println!("  --lower             Lowercase word tokens");
    println!("  --no-numbers        Switch number recognition off");
    println!("  --ordinary=<chars>  Demote each listed character to ordinary");
}

/// Initialize tracing output, gated on `RUST_LOG`.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn demo_text_token_stream_snapshot() {
        let mut tokenizer = Tokenizer::new(BufferSource::from(DEMO_TEXT));
        tokenizer.lower_case_mode(true);
        tokenizer.parse_numbers(true);

        let mut lines = Vec::new();
        loop {
            let kind = match tokenizer.next_token() {
                Ok(kind) => kind,
                Err(e) => panic!("unexpected scan error: {e}"),
            };
            lines.push(tokenizer.to_string());
            if kind.is_eof() {
                break;
            }
        }

        let expected: Vec<&str> = vec![
            "Token[a], line 1",
            "Token['Hello'], line 1",
            // A lone `.` is a malformed number and falls back to a word.
            "Token[.], line 1",
            "Token['T'], line 1",
            "Token[his], line 1",
            "Token[is], line 1",
            "Token[text], line 1",
            "Token['*'], line 1",
            "Token['*'], line 1",
            "Token['+'], line 1",
            "Token['+'], line 1",
            "Token[.], line 2",
            "Token[that], line 3",
            "Token[will], line 3",
            "Token[n=12], line 3",
            "Token[n=-34], line 3",
            "Token[be], line 3",
            "Token[split], line 3",
            "Token[into], line 3",
            "Token[tokens], line 3",
            "Token[abc123], line 3",
            "Token[n=123], line 3",
            // `.` is a numeric constituent, so the word run absorbs it.
            "Token[abc.], line 3",
            "Token[n=1.3453], line 3",
            "Token['+'], line 3",
            "Token[n=1], line 3",
            "Token['='], line 3",
            "Token[n=2], line 3",
            // `//` after the `a` is a default comment character running to
            // end of input; no token comes of it.
            "Token[a], line 3",
            "Token[EOF], line 3",
        ];
        assert_eq!(lines, expected);
    }
}
