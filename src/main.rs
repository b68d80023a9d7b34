use std::{env, fs::read_to_string, process::ExitCode};

use pylet::{
    display_error,
    lexer::{lexer::Tokenizer, tokens::TokenKind},
    parser::expr::parse_expression,
};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() == 3 && args[1] == "--expr" {
        return run_expression(&args[2]);
    }

    if args.len() != 2 {
        eprintln!("Usage: pylet <path/to/source.pyl>");
        eprintln!("       pylet --expr \"<expression>\"");
        return ExitCode::FAILURE;
    }

    let file_path = &args[1];
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: {}: {}", file_path, error);
            return ExitCode::FAILURE;
        }
    };

    run_token_dump(&source, file_path)
}

/// Dumps the token stream of a source file, one token per line.
fn run_token_dump(source: &str, file_path: &str) -> ExitCode {
    let mut tokenizer = Tokenizer::new(source);

    loop {
        match tokenizer.next() {
            Ok(token) => {
                if token.kind == TokenKind::EOF {
                    return ExitCode::SUCCESS;
                }
                token.debug();
            }
            Err(error) => {
                display_error(&error, source, file_path);
                return ExitCode::FAILURE;
            }
        }
    }
}

/// Parses one expression given on the command line and prints its tree.
fn run_expression(source: &str) -> ExitCode {
    let mut tokenizer = Tokenizer::new(source);

    match parse_expression(&mut tokenizer) {
        Ok(tree) => {
            println!("{}", tree);
            ExitCode::SUCCESS
        }
        Err(error) => {
            display_error(&error, source, "<expr>");
            ExitCode::FAILURE
        }
    }
}
