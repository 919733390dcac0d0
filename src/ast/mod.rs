//! # GraphQL Language AST
//!
//! The `graphql_syntax::ast` module contains the GraphQL language AST and traits to parse and
//! print it. The AST covers both executable documents (operations and fragments) and the type
//! system definition language (schemas, types, directives and their extensions).
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its three main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - [`ParseNode`], a trait using which AST Nodes are parsed from source text
//! - [`PrintNode`], a trait using which AST Nodes are printed into source text
//!
//! The following workflow describes the minimum that's done using this module and while an AST
//! Context is active in the given scope.
//!
//! ```
//! use graphql_syntax::ast::*;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Parse a source text into a Document AST root node
//! let ast = Document::parse(&ctx, "{ field }").unwrap();
//!
//! // Print the Document node to an output String
//! let output = ast.print();
//! assert_eq!(output, "{\n  field\n}");
//! ```
//!
//! Any node may be parsed on its own, which is mostly useful for tests and tooling:
//!
//! ```
//! use graphql_syntax::ast::*;
//!
//! let ctx = ASTContext::new();
//! let of_type = Type::parse(&ctx, "[String!]!").unwrap();
//! assert_eq!(of_type.named_type().name, "String");
//! ```

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
mod lexer;
mod parser;
mod printer;
mod type_system;

pub use ast::*;
pub use ast_kind::ASTKind;
pub use parser::{parse_document, ParseNode};
pub use printer::PrintNode;
pub use type_system::*;
