//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's returned whenever lexing or parsing a
//! source text fails. Parsing is fail-fast, so a single [Error] always describes the first
//! problem that was found in a source text.

use logos::Span;
use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message, the offending lexeme, a [Location], and a
/// context string. For parsing the context string is populated with a snippet of the source text
/// that points at the offending token.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) lexeme: Option<String>,
    pub(crate) location: Option<Location>,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// The kind of failure an [Error] describes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// The source text contains characters that don't form a valid token, e.g. an invalid
    /// character, an unterminated string, an invalid escape sequence, or a malformed number.
    Lexical,
    /// The tokens of the source text don't match the grammar production that was being parsed.
    Syntax,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: Option<ErrorType>) -> Self {
        Self {
            message: message.into(),
            lexeme: None,
            location: None,
            context: None,
            error_type: error_type.unwrap_or(ErrorType::Syntax),
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>>(
        message: S,
        location: Option<Location>,
        context: S,
        error_type: Option<ErrorType>,
    ) -> Self {
        Self {
            message: message.into(),
            lexeme: None,
            location,
            context: Some(context.into()),
            error_type: error_type.unwrap_or(ErrorType::Syntax),
        }
    }

    /// Attaches the offending lexeme to this error.
    pub fn with_lexeme<S: Into<String>>(mut self, lexeme: S) -> Self {
        self.lexeme = Some(lexeme.into());
        self
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the source text of the token that caused this error, if there was one.
    ///
    /// When parsing fails because the source text ended unexpectedly this is `None`.
    pub fn lexeme(&self) -> Option<&str> {
        self.lexeme.as_deref()
    }

    /// Returns the location of the current error.
    pub fn location(&self) -> &Option<Location> {
        &self.location
    }

    /// Returns whether this is a lexical or a syntax error.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let mut formatted = match self.error_type {
            ErrorType::Lexical => format!("Lexical Error: {}", self.message),
            ErrorType::Syntax => format!("Syntax Error: {}", self.message),
        };

        if let Some(ref location) = self.location {
            formatted = format!("{} at {}", formatted, location);
        }

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

/// Renders the lines around `span` with line numbers and marks the span with carets.
///
/// The line preceding the span's line is included for orientation.
pub(crate) fn print_span(source: &str, span: Span) -> String {
    let mut out = String::new();
    let location = get_location(source, span.clone());

    let line_start = source[..span.start].rfind('\n').map_or(0, |idx| idx + 1);
    let start = source[..line_start.saturating_sub(1)]
        .rfind('\n')
        .map_or(0, |idx| idx + 1);
    let first_line = if line_start == 0 {
        location.line
    } else {
        location.line - 1
    };

    let end = source[span.end..]
        .find('\n')
        .map_or(source.len(), |idx| idx + span.end);

    let snippet = &source[start..end];
    let line_count = snippet.split('\n').count();
    let line_num_pad = (first_line + line_count - 1).to_string().len();
    for (index, line) in snippet.split('\n').enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let line_num = (first_line + index).to_string();
        out.push_str(&" ".repeat(line_num_pad - line_num.len() + 1));
        out.push_str(&line_num);
        out.push_str(" | ");
        out.push_str(line.trim_end_matches('\r'));
    }
    if !source[span.start..span.end].contains('\n') {
        let marked = source[span.start..span.end].chars().count().max(1);
        out.push('\n');
        out.push_str(&" ".repeat(line_num_pad + 1));
        out.push_str(" | ");
        out.push_str(&" ".repeat(location.column - 1));
        out.push_str(&"^".repeat(marked));
    };

    out
}

/// A position in a source text.
///
/// `line` and `column` are 1-based and the column counts characters, not bytes. The `offset` is
/// the 0-based byte offset into the source text.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

pub(crate) fn get_location(source: &str, span: Span) -> Location {
    let prefix = &source[..span.start];
    let line = prefix.matches('\n').count() + 1;
    let line_start = prefix.rfind('\n').map_or(0, |idx| idx + 1);
    let column = prefix[line_start..].chars().count() + 1;

    Location {
        offset: span.start,
        line,
        column,
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_on_first_line() {
        let location = get_location("query { $ }", 8..9);
        assert_eq!(
            location,
            Location {
                offset: 8,
                line: 1,
                column: 9
            }
        );
    }

    #[test]
    fn location_after_newline() {
        let source = "{\n  a\n}";
        let location = get_location(source, 6..7);
        assert_eq!(location.line, 3);
        assert_eq!(location.column, 1);
        assert_eq!(location.to_string(), "3:1");
    }

    #[test]
    fn location_counts_characters() {
        let source = "{ \"ü\" ? }";
        let offset = source.find('?').unwrap();
        assert_eq!(get_location(source, offset..offset + 1).column, 7);
    }

    #[test]
    fn span_snippet() {
        let source = "query {\n  field(\n}";
        let offset = source.rfind('}').unwrap();
        let snippet = print_span(source, offset..offset + 1);
        assert_eq!(snippet, " 2 |   field(\n 3 | }\n   | ^");
    }

    #[test]
    fn span_snippet_at_end_of_input() {
        let source = "{ a";
        let snippet = print_span(source, 3..3);
        assert_eq!(snippet, " 1 | { a\n   |    ^");
    }

    #[test]
    fn print_with_and_without_context() {
        let error = Error::new_with_context(
            "Expected Selection, found \"}\"",
            Some(Location {
                offset: 2,
                line: 1,
                column: 3,
            }),
            " 1 | {}",
            Some(ErrorType::Syntax),
        )
        .with_lexeme("}");
        assert_eq!(
            error.print(false),
            "Syntax Error: Expected Selection, found \"}\" at 1:3"
        );
        assert_eq!(
            error.to_string(),
            "Syntax Error: Expected Selection, found \"}\" at 1:3\n 1 | {}"
        );
        assert_eq!(error.lexeme(), Some("}"));
        assert_eq!(error.error_type(), ErrorType::Syntax);
    }
}
