use crate::ast::Node;
use crate::tokenizer::tokenize;
use std::error::Error;
use std::fmt;

/// Classified parse failures, each carrying the token index it occurred at
///
/// Parsing is fail-fast: no recovery is attempted, no partial tree is
/// returned, and the earliest problem wins.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The position ran past the token sequence while an expression was
    /// still expected.
    UnexpectedEndOfInput { position: usize },
    /// A `)` appeared where an expression start was required.
    UnexpectedClosingParen { position: usize },
    /// A `(` was opened but input ended before its matching `)`.
    UnterminatedList { open_position: usize },
    /// Program level only: tokens remained after the last complete
    /// top-level expression.
    TrailingTokens { position: usize, token: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEndOfInput { position } => {
                write!(f, "unexpected end of input at token {}", position)
            }
            ParseError::UnexpectedClosingParen { position } => {
                write!(f, "unexpected ')' at token {}", position)
            }
            ParseError::UnterminatedList { open_position } => {
                write!(f, "unterminated list opened at token {}", open_position)
            }
            ParseError::TrailingTokens { position, token } => {
                write!(f, "trailing '{}' at token {}", token, position)
            }
        }
    }
}

impl Error for ParseError {}

/// Parse one expression starting at `position`, returning the node and the
/// position where parsing should continue.
///
/// Pure and reentrant: the same tokens and starting position always yield
/// the same result, and no state is kept between calls. Recursion depth
/// equals the nesting depth of the source; there is no explicit stack.
pub fn parse_expression(tokens: &[String], position: usize) -> Result<(Node, usize), ParseError> {
    let token = tokens
        .get(position)
        .ok_or(ParseError::UnexpectedEndOfInput { position })?;

    match token.as_str() {
        "(" => parse_list(tokens, position),
        ")" => Err(ParseError::UnexpectedClosingParen { position }),
        atom => Ok((parse_atom(atom), position + 1)),
    }
}

/// Parse a parenthesized list whose `(` sits at `open_position`.
fn parse_list(tokens: &[String], open_position: usize) -> Result<(Node, usize), ParseError> {
    let mut elements = Vec::new();
    let mut position = open_position + 1;

    loop {
        match tokens.get(position) {
            None => return Err(ParseError::UnterminatedList { open_position }),
            Some(token) if token == ")" => {
                return Ok((Node::new_list(elements), position + 1));
            }
            Some(_) => {
                let (element, next_position) = parse_expression(tokens, position)?;
                elements.push(element);
                position = next_position;
            }
        }
    }
}

/// Classify a non-paren token by its shape: number, boolean, or symbol.
fn parse_atom(token: &str) -> Node {
    if is_number(token) {
        if let Ok(value) = token.parse::<f64>() {
            return Node::new_number(value);
        }
    }

    match token {
        "#t" | "#T" | "#true" | "true" => Node::new_boolean(true),
        "#f" | "#F" | "#false" | "false" => Node::new_boolean(false),
        _ => Node::new_symbol(token),
    }
}

/// Lexical test for numeric tokens: after removing at most one leading `-`
/// and at most one `.`, the remainder must be nonempty decimal digits.
///
/// Deliberately stricter than `f64::from_str`: a bare `-` or `.` is a
/// symbol (Scheme uses `-` and `->` as ordinary identifiers), and so are
/// `1e5`, `inf`, and `NaN`.
fn is_number(token: &str) -> bool {
    let unsigned = token.strip_prefix('-').unwrap_or(token);
    let digits = unsigned.replacen('.', "", 1);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Parse a whole program: every top-level expression from the start of the
/// source until the token sequence is exhausted.
///
/// An empty or whitespace-only source is a valid empty program. A stray `)`
/// after at least one complete expression is reported as trailing garbage;
/// at token 0 it is the same unexpected-closing-paren failure a
/// single-expression parse would produce.
pub fn parse_program(source: &str) -> Result<Vec<Node>, ParseError> {
    let tokens = tokenize(source);
    let mut nodes = Vec::new();
    let mut position = 0;

    while position < tokens.len() {
        if tokens[position] == ")" && !nodes.is_empty() {
            return Err(ParseError::TrailingTokens {
                position,
                token: tokens[position].clone(),
            });
        }
        let (node, next_position) = parse_expression(&tokens, position)?;
        nodes.push(node);
        position = next_position;
    }

    Ok(nodes)
}
