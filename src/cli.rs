/// CLI commands for parsing source files
use crate::parser::parse_program;
use std::fs;

/// Parse a .scm file and print each top-level expression
pub fn parse_file(input_file: &str) -> Result<(), String> {
    let file_content = fs::read_to_string(input_file)
        .map_err(|e| format!("Failed to read file '{}': {}", input_file, e))?;

    let expressions = parse_program(&file_content)
        .map_err(|e| format!("Parse error in '{}': {}", input_file, e))?;

    for expression in &expressions {
        println!("{}", expression);
    }

    Ok(())
}
