mod ast;
mod cli;
mod parser;
mod repl;
mod tokenizer;

use cli::parse_file;
use repl::repl_loop;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 2 && (args[1].ends_with(".scm") || args[1].ends_with(".ss")) {
        let input_file = &args[1];

        match parse_file(input_file) {
            Ok(()) => {}
            Err(e) => println!("Error: {}", e),
        }
    } else if args.len() > 1 {
        println!("Usage:");
        println!("  schemer             - Start the parser REPL");
        println!("  schemer <file.scm>  - Parse a .scm/.ss file and print its syntax trees");
    } else {
        println!("Schemer Parser REPL v0.1.0");
        println!("Type expressions to parse, or press Ctrl+D to quit.");
        println!();
        repl_loop();
    }
}
