use arithlex_core::config::runtime::LoggingPreferences;
use arithlex_core::logging::{self, codes};
use arithlex_core::scanner;
use arithlex_core::tokens::{Token, TokenSequence};
use arithlex_core::{log_info, log_success};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Install env-derived preferences, then the global logging system
    logging::config::init_runtime_preferences(LoggingPreferences::default())?;
    logging::init_global_logging()?;

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <expression> [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    if args[1] == "--help" || args[1] == "-h" {
        print_help(&args[0]);
        return Ok(());
    }

    let options = parse_options(&args[1..]);

    let line = match options.expression {
        Some(ref line) => line,
        None => {
            eprintln!("Error: no expression given");
            std::process::exit(1);
        }
    };

    log_info!(
        "arithlex starting",
        "expression_chars" => line.chars().count()
    );

    match scanner::scan_line(line) {
        Ok(tokens) => {
            if options.json {
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            } else {
                print_tokens(&tokens);
            }
            log_success!(
                codes::success::OPERATION_COMPLETED_SUCCESSFULLY,
                "Expression tokenized",
                "tokens" => tokens.len()
            );
        }
        Err(error) => {
            report_failure(&error);
            std::process::exit(1);
        }
    }

    Ok(())
}

#[derive(Debug, Default)]
struct CliOptions {
    expression: Option<String>,
    json: bool,
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();

    for arg in args {
        match arg.as_str() {
            "--json" => {
                options.json = true;
            }
            other if other.starts_with("--") => {
                eprintln!("Warning: Unknown option '{}'", other);
            }
            other => {
                if options.expression.is_none() {
                    options.expression = Some(other.to_string());
                } else {
                    eprintln!("Warning: Extra argument '{}' ignored", other);
                }
            }
        }
    }

    options
}

fn print_help(program_name: &str) {
    println!("arithlex v{}", env!("CARGO_PKG_VERSION"));
    println!("Table-driven tokenizer for single-line arithmetic expressions");
    println!();
    println!("USAGE:");
    println!("    {} <expression> [options]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <expression>    The arithmetic expression to tokenize");
    println!();
    println!("OPTIONS:");
    println!("    --help, -h      Show this help message");
    println!("    --json          Print the token sequence as JSON");
    println!();
    println!("OUTPUT:");
    println!("    Number tokens go to stdout with their parsed value;");
    println!("    all other tokens go to stderr.");
    println!();
    println!("EXAMPLES:");
    println!("    {} \"1 + 2\"", program_name);
    println!("    {} \"(3.5*4)/2\" --json", program_name);
    println!();
    println!("EXIT STATUS:");
    println!("    0    Expression tokenized successfully");
    println!("    1    Scan failed (unrecognized character, invalid number, limits)");
}

fn token_line(token: &Token) -> String {
    if let Some(value) = token.value {
        format!(
            "Token\t{}\tType\t{}\tValue\t{}",
            token.text,
            token.label(),
            value
        )
    } else {
        format!("Token\t{}\tType\t{}", token.text, token.label())
    }
}

fn print_tokens(tokens: &TokenSequence) {
    for token in tokens.iter() {
        let token = &token.value;
        if token.is_number() {
            println!("{}", token_line(token));
        } else {
            eprintln!("{}", token_line(token));
        }
    }
}

fn report_failure(error: &scanner::ScanError) {
    eprintln!("FAILED: {}", error);
    eprintln!("===============================");

    if let Some(partial) = error.partial_tokens() {
        if !partial.is_empty() {
            eprintln!("Tokens recognized before the failure:");
            print_tokens(partial);
        }
    }
}
