/// REPL (Read-Parse-Print-Loop) for inspecting parsed expressions
///
/// Evaluation is out of scope for the front end; each line is parsed and
/// the resulting syntax trees are printed back in s-expression form.
use crate::parser::parse_program;
use std::io::{self, Write};

pub fn repl_loop() {
    loop {
        print!("schemer> ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => {
                // EOF (Ctrl+D) - read_line returns 0 bytes read
                println!("Goodbye!");
                break;
            }
            Ok(_) => {
                let input = input.trim();

                if input.is_empty() {
                    continue;
                }

                match parse_program(input) {
                    Ok(nodes) => {
                        for node in &nodes {
                            println!("{}", node);
                        }
                    }
                    Err(error) => println!("Parse error: {}", error),
                }
            }
            Err(error) => {
                println!("Error reading input: {}", error);
                break;
            }
        }
    }
}
