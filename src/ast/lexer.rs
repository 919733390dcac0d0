use logos::{internal::LexerInternal, Lexer, Logos};
use std::fmt;

#[derive(Clone)]
pub struct Extras<'a> {
    pub arena: &'a bumpalo::Bump,
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = Extras<'s>)]
pub enum Token<'a> {
    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(":")]
    Colon,

    #[token("=")]
    Equal,

    #[token("!")]
    Exclam,

    #[token("&")]
    Ampersand,

    #[token("|")]
    Pipe,

    #[token("$")]
    Dollar,

    #[token("@")]
    At,

    #[token("...")]
    Ellipsis,

    #[regex(r"[_a-zA-Z][_0-9a-zA-Z]*", |lex| lex.slice())]
    Name(&'a str),

    #[regex(r"-?([1-9][0-9]*|0)[.][0-9]+([eE][+-]?[0-9]+)?", lex_number)]
    #[regex("-?([1-9][0-9]*|0)[eE][+-]?[0-9]+", lex_number)]
    Float(&'a str),

    #[regex(r"-?([1-9][0-9]*|0)", lex_number)]
    Integer(&'a str),

    #[token("\"", lex_string)]
    String(&'a str),

    #[token("\"\"\"", lex_block_string)]
    BlockString(&'a str),

    #[error]
    #[regex(r"([ ,\t\n\r\f\u{FEFF}]+|#[^\n\r]*)+", logos::skip)]
    Error,

    /// Token indicates the end of the input
    End,
}

impl<'a> Token<'a> {
    /// Returns whether this token is a string or block string literal.
    pub(crate) fn is_string(&self) -> bool {
        matches!(self, Token::String(_) | Token::BlockString(_))
    }
}

#[derive(Logos, Debug, PartialEq)]
pub(crate) enum StringPart {
    #[regex(r#"[^\x00-\x08\x0A-\x1F\\"]+"#)]
    Text,

    #[regex(r"\\u[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]")]
    EscapedCodepoint,

    #[token(r#"\""#)]
    EscapedQuote,
    #[token(r#"\\"#)]
    EscapedBackslash,
    #[token(r#"\/"#)]
    EscapedSlash,
    #[token(r#"\b"#)]
    EscapedBackspace,
    #[token(r#"\f"#)]
    EscapedFormfeed,
    #[token(r#"\n"#)]
    EscapedNewline,
    #[token(r#"\r"#)]
    EscapedReturn,
    #[token(r#"\t"#)]
    EscapedTab,

    #[token("\"")]
    EndString,

    #[error]
    Error,
}

/// Rejects numbers that run straight into a digit, a dot, or a name, like `0123` or `12abc`.
#[inline]
fn lex_number<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<&'a str> {
    match lex.remainder().chars().next() {
        Some(c) if c == '.' || c == '_' || c.is_ascii_alphanumeric() => None,
        _ => Some(lex.slice()),
    }
}

#[inline]
fn lex_escaped_string<'a>(lex: &mut Lexer<'a, Token<'a>>, mut output: String) -> Option<&'a str> {
    let mut sublex = StringPart::lexer(lex.remainder());
    while let Some(token) = sublex.next() {
        match token {
            StringPart::Error => break,
            StringPart::Text => output.push_str(sublex.slice()),
            StringPart::EscapedQuote => output.push('"'),
            StringPart::EscapedBackslash => output.push('\\'),
            StringPart::EscapedSlash => output.push('/'),
            StringPart::EscapedBackspace => output.push(8 as char),
            StringPart::EscapedFormfeed => output.push(12 as char),
            StringPart::EscapedNewline => output.push('\n'),
            StringPart::EscapedReturn => output.push('\r'),
            StringPart::EscapedTab => output.push('\t'),
            StringPart::EscapedCodepoint => output.push(codepoint(&sublex.slice()[2..])?),
            StringPart::EndString => {
                lex.bump_unchecked(sublex.span().end);
                return Some(lex.extras.arena.alloc_str(&output));
            }
        }
    }
    None
}

/// Decodes the four hex digits of a `\u` escape, which must name a Unicode scalar value.
#[inline]
fn codepoint(digits: &str) -> Option<char> {
    use lexical_core::*;
    const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
    const OPTIONS: ParseIntegerOptions = ParseIntegerOptions::new();
    parse_with_options::<u32, FORMAT>(digits.as_bytes(), &OPTIONS)
        .ok()
        .and_then(std::char::from_u32)
}

/// Control characters other than tab, newline and carriage return may not appear in source text.
#[inline]
fn is_control(c: char) -> bool {
    c < ' ' && c != '\t' && c != '\n' && c != '\r'
}

fn lex_string<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<&'a str> {
    // Most strings contain no escapes and can be sliced out of the source directly
    let remainder = lex.remainder();
    for (i, c) in remainder.char_indices() {
        match c {
            '\n' | '\r' => return None,
            c if is_control(c) => return None,
            '\\' => {
                lex.bump_unchecked(i);
                return lex_escaped_string(lex, remainder[0..i].to_string());
            }
            '"' => {
                lex.bump_unchecked(i + 1);
                return Some(&remainder[0..i]);
            }
            _ => {}
        }
    }
    None
}

fn lex_block_string<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<&'a str> {
    let remainder = lex.remainder();
    let bytes = remainder.as_bytes();
    let mut raw = String::new();
    let mut last = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i..].starts_with(br#"\""""#) {
            raw.push_str(&remainder[last..i]);
            raw.push_str(r#"""""#);
            i += 4;
            last = i;
        } else if bytes[i..].starts_with(br#"""""#) {
            raw.push_str(&remainder[last..i]);
            lex.bump_unchecked(i + 3);
            return Some(lex.extras.arena.alloc_str(&block_string_value(&raw)));
        } else if is_control(bytes[i] as char) {
            return None;
        } else {
            i += 1;
        }
    }
    None
}

#[inline]
fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|c| *c == b' ' || *c == b'\t').count()
}

#[inline]
pub(crate) fn is_blank(line: &str) -> bool {
    leading_whitespace(line) == line.len()
}

/// Turns the raw content of a block string into its value.
///
/// The common indentation of all lines after the first is removed, and leading and trailing
/// blank lines are dropped.
pub(crate) fn block_string_value(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    let mut lines: Vec<&str> = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            if index == 0 {
                line
            } else {
                line.get(common_indent..).unwrap_or("")
            }
        })
        .collect();

    while lines.first().map_or(false, |line| is_blank(line)) {
        lines.remove(0);
    }
    while lines.last().map_or(false, |line| is_blank(line)) {
        lines.pop();
    }
    lines.join("\n")
}

/// Returns the source text an error token covers.
///
/// Malformed numbers are widened over the characters that follow them, so `0123` is reported
/// as a whole rather than as its leading `0`.
pub(crate) fn error_lexeme(source: &str, span: logos::Span) -> &str {
    let lexeme = &source[span.clone()];
    if lexeme.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        let rest = &source[span.end..];
        let len = rest
            .find(|c: char| c != '.' && c != '_' && !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        &source[span.start..span.end + len]
    } else {
        lexeme
    }
}

/// Reasons for which a source text fails to form a valid token.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum LexicalError {
    UnterminatedBlockString,
    UnterminatedString,
    InvalidEscapeSequence,
    InvalidCharacter,
    InvalidNumber,
    UnexpectedCharacter,
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexicalError::UnterminatedBlockString => f.write_str("Unterminated block string"),
            LexicalError::UnterminatedString => f.write_str("Unterminated string"),
            LexicalError::InvalidEscapeSequence => f.write_str("Invalid escape sequence in string"),
            LexicalError::InvalidCharacter => f.write_str("Invalid character in string"),
            LexicalError::InvalidNumber => f.write_str("Invalid number"),
            LexicalError::UnexpectedCharacter => f.write_str("Unexpected character"),
        }
    }
}

/// Classifies the error token at `span`.
pub(crate) fn describe_error(source: &str, span: logos::Span) -> LexicalError {
    let lexeme = &source[span.clone()];
    if lexeme.starts_with(r#"""""#) {
        let bytes = source[span.end..].as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i..].starts_with(br#"\""""#) {
                i += 4;
            } else if bytes[i..].starts_with(br#"""""#) {
                break;
            } else if is_control(bytes[i] as char) {
                return LexicalError::InvalidCharacter;
            } else {
                i += 1;
            }
        }
        LexicalError::UnterminatedBlockString
    } else if lexeme.starts_with('"') {
        let mut chars = source[span.end..].chars();
        while let Some(c) = chars.next() {
            match c {
                '"' => break,
                '\n' | '\r' => return LexicalError::UnterminatedString,
                c if is_control(c) => return LexicalError::InvalidCharacter,
                '\\' => match chars.next() {
                    Some('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {}
                    Some('u') => {
                        let digits: String = chars.by_ref().take(4).collect();
                        let valid = digits.len() == 4
                            && digits.chars().all(|c| c.is_ascii_hexdigit())
                            && codepoint(&digits).is_some();
                        if !valid {
                            return LexicalError::InvalidEscapeSequence;
                        }
                    }
                    _ => return LexicalError::InvalidEscapeSequence,
                },
                _ => {}
            }
        }
        LexicalError::UnterminatedString
    } else if lexeme.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        LexicalError::InvalidNumber
    } else {
        LexicalError::UnexpectedCharacter
    }
}
