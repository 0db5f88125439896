/// Tokenizer - converts raw source text into an ordered sequence of tokens
///
/// Tokens are verbatim string slices of the source; no kind tag is attached.
/// The parser re-derives the classification from the literal text, so the
/// tokenizer never fails: malformed lexemes are passed through and rejected
/// (or not) at parse time.
///
/// `(` and `)` are always single-character tokens. String literals and
/// character literals are scanned as atomic tokens even when they contain
/// whitespace or parens, which is why a plain split-on-whitespace pass is
/// not enough here.
pub fn tokenize(source: &str) -> Vec<String> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '(' | ')' => {
                flush_buffer(&mut tokens, &mut buffer);
                tokens.push(c.to_string());
            }
            '"' => {
                flush_buffer(&mut tokens, &mut buffer);
                i = scan_string_literal(&chars, i, &mut buffer);
                flush_buffer(&mut tokens, &mut buffer);
            }
            ';' => {
                flush_buffer(&mut tokens, &mut buffer);
                i = skip_comment(&chars, i);
            }
            '#' if chars.get(i + 1) == Some(&'\\') => {
                // Character literal: the char after #\ is taken verbatim,
                // even a paren or a space. Named characters (#\space) keep
                // accumulating through the ordinary atom path afterwards.
                buffer.push('#');
                buffer.push('\\');
                i += 2;
                if i < chars.len() {
                    buffer.push(chars[i]);
                }
            }
            c if c.is_whitespace() => {
                flush_buffer(&mut tokens, &mut buffer);
            }
            _ => {
                buffer.push(c);
            }
        }
        i += 1;
    }

    flush_buffer(&mut tokens, &mut buffer);
    tokens
}

/// Scan a string literal starting at the opening quote, appending it
/// verbatim (quotes included) to the buffer.
///
/// Returns the index of the closing quote, or the end of input if the
/// literal is unterminated; the partial token is still emitted (fail-late).
fn scan_string_literal(chars: &[char], start: usize, buffer: &mut String) -> usize {
    buffer.push('"');
    let mut i = start + 1;
    let mut escaped = false;

    while i < chars.len() {
        let c = chars[i];
        buffer.push(c);
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            break;
        }
        i += 1;
    }

    i
}

/// Skip a comment (from ';' to end of line), returning the index of the
/// terminating newline or the end of input.
fn skip_comment(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i] != '\n' {
        i += 1;
    }
    i
}

fn flush_buffer(tokens: &mut Vec<String>, buffer: &mut String) {
    if !buffer.is_empty() {
        tokens.push(std::mem::take(buffer));
    }
}
