//! `graphql_syntax`
//! =========
//!
//! _A GraphQL lexer, parser and printer._
//!
//! The **`graphql_syntax`** library turns GraphQL source text into a typed, arena-allocated AST
//! and prints that AST back into canonical GraphQL source text. It covers the whole GraphQL
//! language: queries, mutations, subscriptions and fragments as well as schema, type and
//! directive definitions and their extensions.
//!
//! Parsing is fail-fast. The first lexical or syntax problem aborts parsing with an
//! [`error::Error`] that carries its line, column and a snippet of the offending source.
//!
//! Printing is deterministic, and re-parsing printed output yields an AST that's structurally
//! equal to the original one.
//!
//! ```
//! use graphql_syntax::ast::*;
//!
//! let ctx = ASTContext::new();
//! let ast = Document::parse(&ctx, "query Q($id: ID!) { node(id: $id) { id } }").unwrap();
//! assert_eq!(
//!     ast.print(),
//!     "query Q($id: ID!) {\n  node(id: $id) {\n    id\n  }\n}"
//! );
//! ```
//!
//! [A good place to start learning more about this crate is the `ast` module...](ast)

pub mod ast;
pub mod error;

pub use bumpalo;
