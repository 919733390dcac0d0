use super::ast::*;
use super::ast_kind::ASTKind;
use super::lexer::{self, Extras, LexicalError, Token};
use super::type_system::*;
use crate::error::{get_location, print_span, Error, ErrorType, Result};
use bumpalo::collections::Vec;
use logos::{Lexer, Logos};

use private::ParseNode as _;

type ParseResult<T> = std::result::Result<T, ASTKind>;

pub(crate) mod private {
    use super::{
        get_location, lexer, print_span, ASTContext, ASTKind, Error, ErrorType, Extras, Lexer,
        LexicalError, Logos, ParseResult, Span, Token,
    };

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains the AST context's arena and a [Lexer].
    pub struct ParserContext<'a> {
        pub(crate) arena: &'a bumpalo::Bump,
        pub(crate) peek: Option<Token<'a>>,
        pub(crate) iter: Lexer<'a, Token<'a>>,
        /// Set while parsing constant values, which may not contain variables.
        pub(crate) in_const: bool,
        /// Span of the token that was last pulled from the lexer
        token_span: logos::Span,
        /// Whether the token that was last pulled from the lexer is an error token
        token_is_error: bool,
        /// End of the token that was last consumed
        prev_end: usize,
    }

    #[inline]
    fn lex<'a>(
        iter: &mut Lexer<'a, Token<'a>>,
        token_span: &mut logos::Span,
        token_is_error: &mut bool,
    ) -> Token<'a> {
        match iter.next() {
            Some(token) => {
                *token_span = iter.span();
                *token_is_error = token == Token::Error;
                token
            }
            None => {
                let end = iter.source().len();
                *token_span = end..end;
                *token_is_error = false;
                Token::End
            }
        }
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given AST context and initialize it with an input source
        /// string to parse from.
        pub(crate) fn new(ctx: &'a ASTContext, source: &'a str) -> Self {
            let extras = Extras { arena: &ctx.arena };
            ParserContext {
                arena: &ctx.arena,
                peek: None,
                iter: Token::lexer_with_extras(source, extras),
                in_const: false,
                token_span: 0..0,
                token_is_error: false,
                prev_end: 0,
            }
        }

        #[inline]
        pub(crate) fn next(&mut self) -> Token<'a> {
            let token = match self.peek.take() {
                Some(token) => token,
                None => lex(
                    &mut self.iter,
                    &mut self.token_span,
                    &mut self.token_is_error,
                ),
            };
            self.prev_end = self.token_span.end;
            token
        }

        #[inline]
        pub(crate) fn peek(&mut self) -> &Token<'a> {
            let ParserContext {
                peek,
                iter,
                token_span,
                token_is_error,
                ..
            } = self;
            peek.get_or_insert_with(|| lex(iter, token_span, token_is_error))
        }

        /// Checks whether the upcoming token is `token` without consuming it.
        #[inline]
        pub(crate) fn at(&mut self, token: Token<'a>) -> bool {
            *self.peek() == token
        }

        /// Consumes the upcoming token if it is `token`.
        #[inline]
        pub(crate) fn eat(&mut self, token: Token<'a>) -> bool {
            let found = self.at(token);
            if found {
                self.next();
            }
            found
        }

        /// Consumes the next token, which must be `token`.
        #[inline]
        pub(crate) fn expect(&mut self, token: Token<'a>, kind: ASTKind) -> ParseResult<()> {
            if self.next() == token {
                Ok(())
            } else {
                Err(kind)
            }
        }

        /// Consumes the next token, which must be a name.
        #[inline]
        pub(crate) fn name(&mut self, kind: ASTKind) -> ParseResult<&'a str> {
            match self.next() {
                Token::Name(name) => Ok(name),
                _ => Err(kind),
            }
        }

        /// Returns the offset at which the upcoming token starts.
        #[inline]
        pub(crate) fn start(&mut self) -> usize {
            self.peek();
            self.token_span.start
        }

        /// Returns a span from `start` to the end of the last consumed token.
        #[inline]
        pub(crate) fn span_from(&self, start: usize) -> Span {
            Span::new(start, self.prev_end.max(start))
        }

        #[inline]
        pub(crate) fn source(&self) -> &'a str {
            self.iter.source()
        }

        /// Runs `parse` in a constant context, in which values may not contain variables.
        #[inline]
        pub(crate) fn constant<T>(
            &mut self,
            parse: impl FnOnce(&mut Self) -> ParseResult<T>,
        ) -> ParseResult<T> {
            let in_const = std::mem::replace(&mut self.in_const, true);
            let result = parse(self);
            self.in_const = in_const;
            result
        }

        /// Converts a failed production into an [Error] pointing at the last token that was
        /// pulled from the lexer, which is always the offending token.
        pub(crate) fn error(&self, kind: ASTKind) -> Error {
            let source = self.source();
            let span = self.token_span.clone();
            let location = Some(get_location(source, span.clone()));
            let context = print_span(source, span.clone());
            if self.token_is_error {
                let lexeme = lexer::error_lexeme(source, span.clone());
                let reason = lexer::describe_error(source, span);
                let message = match reason {
                    LexicalError::InvalidNumber | LexicalError::UnexpectedCharacter => {
                        format!("{} {:?}", reason, lexeme)
                    }
                    _ => reason.to_string(),
                };
                Error::new_with_context(message, location, context, Some(ErrorType::Lexical))
                    .with_lexeme(lexeme)
            } else if span.is_empty() {
                let message = format!("Expected {}, found end of input", kind);
                Error::new_with_context(message, location, context, Some(ErrorType::Syntax))
            } else {
                let lexeme = &source[span];
                let message = format!("Expected {}, found {:?}", kind, lexeme);
                Error::new_with_context(message, location, context, Some(ErrorType::Syntax))
                    .with_lexeme(lexeme)
            }
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode<'a>: Sized {
        fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Self>;
    }
}

/// Trait for parsing AST Nodes from source texts using recursive descent and a lexer.
///
/// This trait is implemented by all AST Nodes and can hence be used to granularly parse GraphQL language.
/// However, mostly this will be used via `Document::parse`.
pub trait ParseNode<'a>: private::ParseNode<'a> {
    /// Parse an input source text into the implementor's AST Node structure and allocate the
    /// resulting AST into the current AST Context's arena.
    fn parse<T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Self> {
        let source = ctx.alloc_string(source.to_string());
        let mut parser_ctx = private::ParserContext::new(ctx, source);
        let result = Self::new_with_ctx(&mut parser_ctx).and_then(|value| match parser_ctx.next() {
            Token::End => Ok(value),
            _ => Err(ASTKind::End),
        });
        match result {
            Ok(value) => Ok(ctx.alloc(value)),
            Err(kind) => Err(parser_ctx.error(kind)),
        }
    }
}

impl<'a, T: private::ParseNode<'a>> ParseNode<'a> for T {}

/// Parses a source text into a [Document] that's allocated into the given AST Context.
///
/// Parsing stops at the first lexical or syntax error, which is returned with its location.
pub fn parse_document<'a>(ctx: &'a ASTContext, source: &str) -> Result<&'a Document<'a>> {
    log::trace!("Parsing document of {} bytes", source.len());
    match Document::parse(ctx, source) {
        Ok(document) => {
            log::debug!("Parsed {} definitions", document.definitions.len());
            Ok(document)
        }
        Err(error) => {
            log::debug!("Failed to parse document: {}", error.print(false));
            Err(error)
        }
    }
}

/// Parses a non-empty list enclosed by `open` and `close`. The list is empty if the upcoming
/// token isn't `open`.
#[inline]
fn delimited_with_ctx<'a, T>(
    ctx: &mut private::ParserContext<'a>,
    open: Token<'a>,
    close: Token<'a>,
    mut item: impl FnMut(&mut private::ParserContext<'a>) -> ParseResult<T>,
) -> ParseResult<Vec<'a, T>> {
    let mut items = Vec::new_in(ctx.arena);
    if ctx.eat(open) {
        loop {
            items.push(item(ctx)?);
            if ctx.eat(close) {
                break;
            }
        }
    }
    Ok(items)
}

/// Parses one or more items separated by `separator`, which may also precede the first item.
#[inline]
fn separated_with_ctx<'a, T>(
    ctx: &mut private::ParserContext<'a>,
    separator: Token<'a>,
    mut item: impl FnMut(&mut private::ParserContext<'a>) -> ParseResult<T>,
) -> ParseResult<Vec<'a, T>> {
    let mut items = Vec::new_in(ctx.arena);
    ctx.eat(separator);
    loop {
        items.push(item(ctx)?);
        if !ctx.eat(separator) {
            return Ok(items);
        }
    }
}

impl<'a> private::ParseNode<'a> for BooleanValue {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<BooleanValue> {
        let start = ctx.start();
        let value = match ctx.next() {
            Token::Name("true") => true,
            Token::Name("false") => false,
            _ => return Err(ASTKind::Boolean),
        };
        Ok(BooleanValue {
            value,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for EnumValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<EnumValue<'a>> {
        let start = ctx.start();
        match ctx.name(ASTKind::Enum)? {
            "true" | "false" | "null" => Err(ASTKind::Enum),
            value => Ok(EnumValue {
                value,
                span: ctx.span_from(start),
            }),
        }
    }
}

macro_rules! parse_number {
    ($($for_type:ident => $token:ident, $kind:ident),+ $(,)?) => {
        $(
            impl<'a> private::ParseNode<'a> for $for_type<'a> {
                #[inline]
                fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
                    let start = ctx.start();
                    match ctx.next() {
                        Token::$token(value) => Ok($for_type {
                            value,
                            span: ctx.span_from(start),
                        }),
                        _ => Err(ASTKind::$kind),
                    }
                }
            }
        )+
    };
}

parse_number!(
    FloatValue => Float, Float,
    IntValue => Integer, Int,
);

impl<'a> private::ParseNode<'a> for StringValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<StringValue<'a>> {
        let start = ctx.start();
        let (value, block) = match ctx.next() {
            Token::String(value) => (value, false),
            Token::BlockString(value) => (value, true),
            _ => return Err(ASTKind::String),
        };
        Ok(StringValue {
            value,
            block,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Variable<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Variable<'a>> {
        let start = ctx.start();
        ctx.expect(Token::Dollar, ASTKind::Variable)?;
        let name = ctx.name(ASTKind::Variable)?;
        Ok(Variable {
            name,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Value<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Value<'a>> {
        let in_const = ctx.in_const;
        match ctx.peek() {
            Token::Name("null") => {
                ctx.next();
                Ok(Value::Null)
            }
            Token::Dollar if in_const => Err(ASTKind::ConstValue),
            Token::Dollar => Variable::new_with_ctx(ctx).map(Value::Variable),
            Token::Name("true" | "false") => BooleanValue::new_with_ctx(ctx).map(Value::Boolean),
            Token::Name(_) => EnumValue::new_with_ctx(ctx).map(Value::Enum),
            Token::Float(_) => FloatValue::new_with_ctx(ctx).map(Value::Float),
            Token::Integer(_) => IntValue::new_with_ctx(ctx).map(Value::Int),
            Token::String(_) | Token::BlockString(_) => {
                StringValue::new_with_ctx(ctx).map(Value::String)
            }
            Token::BracketOpen => ListValue::new_with_ctx(ctx).map(Value::List),
            Token::BraceOpen => ObjectValue::new_with_ctx(ctx).map(Value::Object),
            _ => Err(ASTKind::Value),
        }
    }
}

impl<'a> private::ParseNode<'a> for ObjectField<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ObjectField<'a>> {
        let start = ctx.start();
        let name = ctx.name(ASTKind::ObjectField)?;
        ctx.expect(Token::Colon, ASTKind::ObjectField)?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(ObjectField {
            name,
            value,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for ObjectValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ObjectValue<'a>> {
        let start = ctx.start();
        if !ctx.eat(Token::BraceOpen) {
            return Err(ASTKind::Object);
        }
        let mut children = Vec::new_in(ctx.arena);
        while !ctx.eat(Token::BraceClose) {
            children.push(ObjectField::new_with_ctx(ctx)?);
        }
        Ok(ObjectValue {
            children,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for ListValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ListValue<'a>> {
        let start = ctx.start();
        if !ctx.eat(Token::BracketOpen) {
            return Err(ASTKind::List);
        }
        let mut children = Vec::new_in(ctx.arena);
        while !ctx.eat(Token::BracketClose) {
            children.push(Value::new_with_ctx(ctx)?);
        }
        Ok(ListValue {
            children,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Argument<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Argument<'a>> {
        let start = ctx.start();
        let name = ctx.name(ASTKind::Argument)?;
        ctx.expect(Token::Colon, ASTKind::Argument)?;
        let value = Value::new_with_ctx(ctx)?;
        Ok(Argument {
            name,
            value,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Arguments<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Arguments<'a>> {
        let children =
            delimited_with_ctx(ctx, Token::ParenOpen, Token::ParenClose, Argument::new_with_ctx)?;
        Ok(Arguments { children })
    }
}

impl<'a> private::ParseNode<'a> for Directive<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Directive<'a>> {
        let start = ctx.start();
        ctx.expect(Token::At, ASTKind::Directive)?;
        let name = ctx.name(ASTKind::Directive)?;
        let arguments = Arguments::new_with_ctx(ctx)?;
        Ok(Directive {
            name,
            arguments,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Directives<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Directives<'a>> {
        let mut children = Vec::new_in(ctx.arena);
        while ctx.at(Token::At) {
            children.push(Directive::new_with_ctx(ctx)?);
        }
        Ok(Directives { children })
    }
}

impl<'a> private::ParseNode<'a> for Field<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Field<'a>> {
        let start = ctx.start();
        let name_or_alias = ctx.name(ASTKind::Field)?;
        let (alias, name) = if ctx.eat(Token::Colon) {
            (Some(name_or_alias), ctx.name(ASTKind::Field)?)
        } else {
            (None, name_or_alias)
        };
        let arguments = Arguments::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for FragmentSpread<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FragmentSpread<'a>> {
        let start = ctx.start();
        ctx.eat(Token::Ellipsis);
        if ctx.at(Token::Name("on")) {
            return Err(ASTKind::FragmentSpread);
        }
        let name = NamedType::new_with_ctx(ctx).map_err(|_| ASTKind::FragmentSpread)?;
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(FragmentSpread {
            name,
            directives,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for NamedType<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<NamedType<'a>> {
        let start = ctx.start();
        let name = ctx.name(ASTKind::NamedType)?;
        Ok(NamedType {
            name,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for InlineFragment<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<InlineFragment<'a>> {
        let start = ctx.start();
        ctx.eat(Token::Ellipsis);
        let type_condition = if ctx.eat(Token::Name("on")) {
            Some(NamedType::new_with_ctx(ctx)?)
        } else {
            None
        };
        let directives = Directives::new_with_ctx(ctx)?;
        if !ctx.at(Token::BraceOpen) {
            return Err(ASTKind::InlineFragment);
        }
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(InlineFragment {
            type_condition,
            directives,
            selection_set,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Selection<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Selection<'a>> {
        match ctx.peek() {
            Token::Name(_) => Field::new_with_ctx(ctx).map(Selection::Field),
            Token::Ellipsis => {
                let start = ctx.start();
                ctx.next();
                match ctx.peek() {
                    Token::At | Token::BraceOpen | Token::Name("on") => {
                        let fragment = InlineFragment::new_with_ctx(ctx)?;
                        Ok(Selection::InlineFragment(InlineFragment {
                            span: Span::new(start, fragment.span.end),
                            ..fragment
                        }))
                    }
                    Token::Name(_) => {
                        let spread = FragmentSpread::new_with_ctx(ctx)?;
                        Ok(Selection::FragmentSpread(FragmentSpread {
                            span: Span::new(start, spread.span.end),
                            ..spread
                        }))
                    }
                    _ => Err(ASTKind::Selection),
                }
            }
            _ => Err(ASTKind::Selection),
        }
    }
}

impl<'a> private::ParseNode<'a> for SelectionSet<'a> {
    /// A missing selection set is parsed as an empty one, while `{}` is an error.
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<SelectionSet<'a>> {
        if !ctx.at(Token::BraceOpen) {
            return Ok(SelectionSet::default_in(ctx.arena));
        }
        let start = ctx.start();
        let selections =
            delimited_with_ctx(ctx, Token::BraceOpen, Token::BraceClose, Selection::new_with_ctx)?;
        Ok(SelectionSet {
            selections,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for Type<'a> {
    /// Rejects a second `!`, since a non-null type can't wrap another non-null type.
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Type<'a>> {
        let start = ctx.start();
        let of_type = match ctx.next() {
            Token::BracketOpen => {
                let inner = Type::new_with_ctx(ctx)?;
                ctx.expect(Token::BracketClose, ASTKind::ListType)?;
                Type::ListType(ctx.arena.alloc(inner))
            }
            Token::Name(name) => Type::NamedType(NamedType {
                name,
                span: ctx.span_from(start),
            }),
            _ => return Err(ASTKind::Type),
        };
        if !ctx.eat(Token::Exclam) {
            Ok(of_type)
        } else if ctx.at(Token::Exclam) {
            Err(ASTKind::NonNullType)
        } else {
            Ok(Type::NonNullType(ctx.arena.alloc(of_type)))
        }
    }
}

/// Parses an optional `= value` default, which must be constant.
#[inline]
fn default_value_with_ctx<'a>(
    ctx: &mut private::ParserContext<'a>,
) -> ParseResult<Option<Value<'a>>> {
    if ctx.eat(Token::Equal) {
        ctx.constant(Value::new_with_ctx).map(Some)
    } else {
        Ok(None)
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<VariableDefinition<'a>> {
        let start = ctx.start();
        let variable = Variable::new_with_ctx(ctx)?;
        ctx.expect(Token::Colon, ASTKind::VariableDefinition)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = default_value_with_ctx(ctx)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        Ok(VariableDefinition {
            variable,
            of_type,
            default_value,
            directives,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinitions<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<VariableDefinitions<'a>> {
        let children = delimited_with_ctx(
            ctx,
            Token::ParenOpen,
            Token::ParenClose,
            VariableDefinition::new_with_ctx,
        )?;
        Ok(VariableDefinitions { children })
    }
}

impl<'a> private::ParseNode<'a> for FragmentDefinition<'a> {
    /// A fragment can't be named `on`.
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FragmentDefinition<'a>> {
        let start = ctx.start();
        ctx.expect(Token::Name("fragment"), ASTKind::FragmentDefinition)?;
        if ctx.at(Token::Name("on")) {
            return Err(ASTKind::FragmentDefinition);
        }
        let name = NamedType::new_with_ctx(ctx)?;
        ctx.expect(Token::Name("on"), ASTKind::FragmentDefinition)?;
        let type_condition = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        if !ctx.at(Token::BraceOpen) {
            return Err(ASTKind::FragmentDefinition);
        }
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for OperationKind {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<OperationKind> {
        match ctx.next() {
            Token::Name("query") => Ok(OperationKind::Query),
            Token::Name("mutation") => Ok(OperationKind::Mutation),
            Token::Name("subscription") => Ok(OperationKind::Subscription),
            _ => Err(ASTKind::OperationKind),
        }
    }
}

impl<'a> private::ParseNode<'a> for OperationDefinition<'a> {
    /// A bare selection set is parsed as an anonymous query.
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<OperationDefinition<'a>> {
        let start = ctx.start();
        if ctx.at(Token::BraceOpen) {
            let selection_set = SelectionSet::new_with_ctx(ctx)?;
            return Ok(OperationDefinition {
                operation: OperationKind::Query,
                name: None,
                variable_definitions: VariableDefinitions::default_in(ctx.arena),
                directives: Directives::default_in(ctx.arena),
                selection_set,
                span: ctx.span_from(start),
            });
        }
        let operation =
            OperationKind::new_with_ctx(ctx).map_err(|_| ASTKind::OperationDefinition)?;
        let name = match ctx.peek() {
            Token::Name(_) => Some(NamedType::new_with_ctx(ctx)?),
            _ => None,
        };
        let variable_definitions = VariableDefinitions::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        if !ctx.at(Token::BraceOpen) {
            return Err(ASTKind::OperationDefinition);
        }
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            span: ctx.span_from(start),
        })
    }
}

/// Parses the description that may precede a type-system definition.
#[inline]
fn description_with_ctx<'a>(
    ctx: &mut private::ParserContext<'a>,
) -> ParseResult<Description<'a>> {
    if ctx.peek().is_string() {
        StringValue::new_with_ctx(ctx).map(Some)
    } else {
        Ok(None)
    }
}

/// Type-system definitions, which are introduced by a keyword after an optional description.
///
/// The same body is parsed for extensions, which omit the description and must add at least one
/// directive or member to the type they extend.
trait TypeSystemNode<'a>: Sized {
    const KEYWORD: &'static str;
    const KIND: ASTKind;

    /// Parses everything that follows the keyword.
    fn body_with_ctx(
        ctx: &mut private::ParserContext<'a>,
        description: Description<'a>,
        start: usize,
    ) -> ParseResult<Self>;

    /// Checks whether this node adds nothing when it's used as an extension.
    fn is_empty_extension(&self) -> bool;

    /// Checks whether this node is complete when it's used as a definition.
    fn is_complete_definition(&self) -> bool {
        true
    }
}

#[inline]
fn definition_body_with_ctx<'a, T: TypeSystemNode<'a>>(
    ctx: &mut private::ParserContext<'a>,
    description: Description<'a>,
    start: usize,
) -> ParseResult<T> {
    let definition = ctx.constant(|ctx| T::body_with_ctx(ctx, description, start))?;
    if definition.is_complete_definition() {
        Ok(definition)
    } else {
        Err(T::KIND)
    }
}

#[inline]
fn extension_body_with_ctx<'a, T: TypeSystemNode<'a>>(
    ctx: &mut private::ParserContext<'a>,
    start: usize,
) -> ParseResult<T> {
    let extension = ctx.constant(|ctx| T::body_with_ctx(ctx, None, start))?;
    if extension.is_empty_extension() {
        Err(ASTKind::TypeSystemExtension)
    } else {
        Ok(extension)
    }
}

#[inline]
fn definition_with_ctx<'a, T: TypeSystemNode<'a>>(
    ctx: &mut private::ParserContext<'a>,
) -> ParseResult<T> {
    let start = ctx.start();
    let description = description_with_ctx(ctx)?;
    match ctx.next() {
        Token::Name(keyword) if keyword == T::KEYWORD => {
            definition_body_with_ctx(ctx, description, start)
        }
        _ => Err(T::KIND),
    }
}

macro_rules! parse_type_system_node {
    ($($for_type:ident),+) => {
        $(
            impl<'a> private::ParseNode<'a> for $for_type<'a> {
                #[inline]
                fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Self> {
                    definition_with_ctx(ctx)
                }
            }
        )+
    };
}

parse_type_system_node!(
    SchemaDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    DirectiveDefinition
);

impl<'a> private::ParseNode<'a> for RootOperationTypeDefinition<'a> {
    #[inline]
    fn new_with_ctx(
        ctx: &mut private::ParserContext<'a>,
    ) -> ParseResult<RootOperationTypeDefinition<'a>> {
        let start = ctx.start();
        let operation = OperationKind::new_with_ctx(ctx)?;
        ctx.expect(Token::Colon, ASTKind::RootOperationTypeDefinition)?;
        let named_type = NamedType::new_with_ctx(ctx)?;
        Ok(RootOperationTypeDefinition {
            operation,
            named_type,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for RootOperationTypeDefinitions<'a> {
    #[inline]
    fn new_with_ctx(
        ctx: &mut private::ParserContext<'a>,
    ) -> ParseResult<RootOperationTypeDefinitions<'a>> {
        let children = delimited_with_ctx(
            ctx,
            Token::BraceOpen,
            Token::BraceClose,
            RootOperationTypeDefinition::new_with_ctx,
        )?;
        Ok(RootOperationTypeDefinitions { children })
    }
}

impl<'a> TypeSystemNode<'a> for SchemaDefinition<'a> {
    const KEYWORD: &'static str = "schema";
    const KIND: ASTKind = ASTKind::SchemaDefinition;

    fn body_with_ctx(
        ctx: &mut private::ParserContext<'a>,
        description: Description<'a>,
        start: usize,
    ) -> ParseResult<Self> {
        let directives = Directives::new_with_ctx(ctx)?;
        let operation_types = RootOperationTypeDefinitions::new_with_ctx(ctx)?;
        Ok(SchemaDefinition {
            description,
            directives,
            operation_types,
            span: ctx.span_from(start),
        })
    }

    fn is_empty_extension(&self) -> bool {
        self.directives.is_empty() && self.operation_types.is_empty()
    }

    fn is_complete_definition(&self) -> bool {
        !self.operation_types.is_empty()
    }
}

impl<'a> TypeSystemNode<'a> for ScalarTypeDefinition<'a> {
    const KEYWORD: &'static str = "scalar";
    const KIND: ASTKind = ASTKind::ScalarTypeDefinition;

    fn body_with_ctx(
        ctx: &mut private::ParserContext<'a>,
        description: Description<'a>,
        start: usize,
    ) -> ParseResult<Self> {
        let name = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(ScalarTypeDefinition {
            description,
            name,
            directives,
            span: ctx.span_from(start),
        })
    }

    fn is_empty_extension(&self) -> bool {
        self.directives.is_empty()
    }
}

impl<'a> private::ParseNode<'a> for ImplementsInterfaces<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ImplementsInterfaces<'a>> {
        let children = if ctx.eat(Token::Name("implements")) {
            separated_with_ctx(ctx, Token::Ampersand, NamedType::new_with_ctx)?
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(ImplementsInterfaces { children })
    }
}

impl<'a> private::ParseNode<'a> for InputValueDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<InputValueDefinition<'a>> {
        let start = ctx.start();
        let description = description_with_ctx(ctx)?;
        let name = ctx.name(ASTKind::InputValueDefinition)?;
        ctx.expect(Token::Colon, ASTKind::InputValueDefinition)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = default_value_with_ctx(ctx)?;
        let directives = ctx.constant(Directives::new_with_ctx)?;
        Ok(InputValueDefinition {
            description,
            name,
            of_type,
            default_value,
            directives,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for ArgumentsDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<ArgumentsDefinition<'a>> {
        let children = delimited_with_ctx(
            ctx,
            Token::ParenOpen,
            Token::ParenClose,
            InputValueDefinition::new_with_ctx,
        )?;
        Ok(ArgumentsDefinition { children })
    }
}

impl<'a> private::ParseNode<'a> for FieldDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FieldDefinition<'a>> {
        let start = ctx.start();
        let description = description_with_ctx(ctx)?;
        let name = ctx.name(ASTKind::FieldDefinition)?;
        let arguments = ArgumentsDefinition::new_with_ctx(ctx)?;
        ctx.expect(Token::Colon, ASTKind::FieldDefinition)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            of_type,
            directives,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for FieldsDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<FieldsDefinition<'a>> {
        let children = delimited_with_ctx(
            ctx,
            Token::BraceOpen,
            Token::BraceClose,
            FieldDefinition::new_with_ctx,
        )?;
        Ok(FieldsDefinition { children })
    }
}

impl<'a> TypeSystemNode<'a> for ObjectTypeDefinition<'a> {
    const KEYWORD: &'static str = "type";
    const KIND: ASTKind = ASTKind::ObjectTypeDefinition;

    fn body_with_ctx(
        ctx: &mut private::ParserContext<'a>,
        description: Description<'a>,
        start: usize,
    ) -> ParseResult<Self> {
        let name = NamedType::new_with_ctx(ctx)?;
        let interfaces = ImplementsInterfaces::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let fields = FieldsDefinition::new_with_ctx(ctx)?;
        Ok(ObjectTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            span: ctx.span_from(start),
        })
    }

    fn is_empty_extension(&self) -> bool {
        self.interfaces.is_empty() && self.directives.is_empty() && self.fields.is_empty()
    }
}

impl<'a> TypeSystemNode<'a> for InterfaceTypeDefinition<'a> {
    const KEYWORD: &'static str = "interface";
    const KIND: ASTKind = ASTKind::InterfaceTypeDefinition;

    fn body_with_ctx(
        ctx: &mut private::ParserContext<'a>,
        description: Description<'a>,
        start: usize,
    ) -> ParseResult<Self> {
        let name = NamedType::new_with_ctx(ctx)?;
        let interfaces = ImplementsInterfaces::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let fields = FieldsDefinition::new_with_ctx(ctx)?;
        Ok(InterfaceTypeDefinition {
            description,
            name,
            interfaces,
            directives,
            fields,
            span: ctx.span_from(start),
        })
    }

    fn is_empty_extension(&self) -> bool {
        self.interfaces.is_empty() && self.directives.is_empty() && self.fields.is_empty()
    }
}

impl<'a> private::ParseNode<'a> for UnionMemberTypes<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<UnionMemberTypes<'a>> {
        let children = if ctx.eat(Token::Equal) {
            separated_with_ctx(ctx, Token::Pipe, NamedType::new_with_ctx)?
        } else {
            Vec::new_in(ctx.arena)
        };
        Ok(UnionMemberTypes { children })
    }
}

impl<'a> TypeSystemNode<'a> for UnionTypeDefinition<'a> {
    const KEYWORD: &'static str = "union";
    const KIND: ASTKind = ASTKind::UnionTypeDefinition;

    fn body_with_ctx(
        ctx: &mut private::ParserContext<'a>,
        description: Description<'a>,
        start: usize,
    ) -> ParseResult<Self> {
        let name = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let types = UnionMemberTypes::new_with_ctx(ctx)?;
        Ok(UnionTypeDefinition {
            description,
            name,
            directives,
            types,
            span: ctx.span_from(start),
        })
    }

    fn is_empty_extension(&self) -> bool {
        self.directives.is_empty() && self.types.is_empty()
    }
}

impl<'a> private::ParseNode<'a> for EnumValueDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<EnumValueDefinition<'a>> {
        let start = ctx.start();
        let description = description_with_ctx(ctx)?;
        let name = match ctx.name(ASTKind::EnumValueDefinition)? {
            "true" | "false" | "null" => return Err(ASTKind::EnumValueDefinition),
            name => name,
        };
        let directives = Directives::new_with_ctx(ctx)?;
        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            span: ctx.span_from(start),
        })
    }
}

impl<'a> private::ParseNode<'a> for EnumValuesDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<EnumValuesDefinition<'a>> {
        let children = delimited_with_ctx(
            ctx,
            Token::BraceOpen,
            Token::BraceClose,
            EnumValueDefinition::new_with_ctx,
        )?;
        Ok(EnumValuesDefinition { children })
    }
}

impl<'a> TypeSystemNode<'a> for EnumTypeDefinition<'a> {
    const KEYWORD: &'static str = "enum";
    const KIND: ASTKind = ASTKind::EnumTypeDefinition;

    fn body_with_ctx(
        ctx: &mut private::ParserContext<'a>,
        description: Description<'a>,
        start: usize,
    ) -> ParseResult<Self> {
        let name = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let values = EnumValuesDefinition::new_with_ctx(ctx)?;
        Ok(EnumTypeDefinition {
            description,
            name,
            directives,
            values,
            span: ctx.span_from(start),
        })
    }

    fn is_empty_extension(&self) -> bool {
        self.directives.is_empty() && self.values.is_empty()
    }
}

impl<'a> private::ParseNode<'a> for InputFieldsDefinition<'a> {
    #[inline]
    fn new_with_ctx(
        ctx: &mut private::ParserContext<'a>,
    ) -> ParseResult<InputFieldsDefinition<'a>> {
        let children = delimited_with_ctx(
            ctx,
            Token::BraceOpen,
            Token::BraceClose,
            InputValueDefinition::new_with_ctx,
        )?;
        Ok(InputFieldsDefinition { children })
    }
}

impl<'a> TypeSystemNode<'a> for InputObjectTypeDefinition<'a> {
    const KEYWORD: &'static str = "input";
    const KIND: ASTKind = ASTKind::InputObjectTypeDefinition;

    fn body_with_ctx(
        ctx: &mut private::ParserContext<'a>,
        description: Description<'a>,
        start: usize,
    ) -> ParseResult<Self> {
        let name = NamedType::new_with_ctx(ctx)?;
        let directives = Directives::new_with_ctx(ctx)?;
        let fields = InputFieldsDefinition::new_with_ctx(ctx)?;
        Ok(InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
            span: ctx.span_from(start),
        })
    }

    fn is_empty_extension(&self) -> bool {
        self.directives.is_empty() && self.fields.is_empty()
    }
}

impl<'a> private::ParseNode<'a> for DirectiveLocation {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<DirectiveLocation> {
        match ctx.next() {
            Token::Name(name) => DirectiveLocation::from_name(name),
            _ => None,
        }
        .ok_or(ASTKind::DirectiveLocation)
    }
}

impl<'a> private::ParseNode<'a> for DirectiveLocations<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<DirectiveLocations<'a>> {
        let children = separated_with_ctx(ctx, Token::Pipe, DirectiveLocation::new_with_ctx)?;
        Ok(DirectiveLocations { children })
    }
}

impl<'a> TypeSystemNode<'a> for DirectiveDefinition<'a> {
    const KEYWORD: &'static str = "directive";
    const KIND: ASTKind = ASTKind::DirectiveDefinition;

    fn body_with_ctx(
        ctx: &mut private::ParserContext<'a>,
        description: Description<'a>,
        start: usize,
    ) -> ParseResult<Self> {
        ctx.expect(Token::At, ASTKind::DirectiveDefinition)?;
        let name = ctx.name(ASTKind::DirectiveDefinition)?;
        let arguments = ArgumentsDefinition::new_with_ctx(ctx)?;
        let repeatable = ctx.eat(Token::Name("repeatable"));
        ctx.expect(Token::Name("on"), ASTKind::DirectiveDefinition)?;
        let locations = DirectiveLocations::new_with_ctx(ctx)?;
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            span: ctx.span_from(start),
        })
    }

    /// Directives can't be extended.
    fn is_empty_extension(&self) -> bool {
        true
    }
}

/// Parses the body of a type definition or type extension introduced by `keyword`.
#[inline]
fn type_body_with_ctx<'a>(
    ctx: &mut private::ParserContext<'a>,
    keyword: &str,
    description: Description<'a>,
    start: usize,
    extension: bool,
) -> Option<ParseResult<TypeDefinition<'a>>> {
    macro_rules! body {
        ($for_type:ident) => {
            if extension {
                extension_body_with_ctx::<$for_type>(ctx, start)
            } else {
                definition_body_with_ctx::<$for_type>(ctx, description, start)
            }
        };
    }

    let result = match keyword {
        "scalar" => body!(ScalarTypeDefinition).map(TypeDefinition::Scalar),
        "type" => body!(ObjectTypeDefinition).map(TypeDefinition::Object),
        "interface" => body!(InterfaceTypeDefinition).map(TypeDefinition::Interface),
        "union" => body!(UnionTypeDefinition).map(TypeDefinition::Union),
        "enum" => body!(EnumTypeDefinition).map(TypeDefinition::Enum),
        "input" => body!(InputObjectTypeDefinition).map(TypeDefinition::InputObject),
        _ => return None,
    };
    Some(result)
}

impl<'a> private::ParseNode<'a> for TypeDefinition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<TypeDefinition<'a>> {
        let start = ctx.start();
        let description = description_with_ctx(ctx)?;
        match ctx.next() {
            Token::Name(keyword) => type_body_with_ctx(ctx, keyword, description, start, false)
                .unwrap_or(Err(ASTKind::TypeDefinition)),
            _ => Err(ASTKind::TypeDefinition),
        }
    }
}

#[inline]
fn type_system_definition_with_ctx<'a>(
    ctx: &mut private::ParserContext<'a>,
) -> ParseResult<Definition<'a>> {
    let start = ctx.start();
    let description = description_with_ctx(ctx)?;
    match ctx.next() {
        Token::Name("schema") => {
            definition_body_with_ctx(ctx, description, start).map(Definition::Schema)
        }
        Token::Name("directive") => {
            definition_body_with_ctx(ctx, description, start).map(Definition::Directive)
        }
        Token::Name(keyword) => type_body_with_ctx(ctx, keyword, description, start, false)
            .unwrap_or(Err(ASTKind::TypeSystemDefinition))
            .map(Definition::Type),
        _ => Err(ASTKind::TypeSystemDefinition),
    }
}

#[inline]
fn type_system_extension_with_ctx<'a>(
    ctx: &mut private::ParserContext<'a>,
) -> ParseResult<Definition<'a>> {
    let start = ctx.start();
    ctx.expect(Token::Name("extend"), ASTKind::TypeSystemExtension)?;
    match ctx.name(ASTKind::TypeSystemExtension)? {
        "schema" => extension_body_with_ctx(ctx, start).map(Definition::SchemaExtension),
        keyword => type_body_with_ctx(ctx, keyword, None, start, true)
            .unwrap_or(Err(ASTKind::TypeSystemExtension))
            .map(Definition::TypeExtension),
    }
}

impl<'a> private::ParseNode<'a> for Definition<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Definition<'a>> {
        match ctx.peek() {
            Token::BraceOpen | Token::Name("query" | "mutation" | "subscription") => {
                OperationDefinition::new_with_ctx(ctx).map(Definition::Operation)
            }
            Token::Name("fragment") => {
                FragmentDefinition::new_with_ctx(ctx).map(Definition::Fragment)
            }
            Token::Name("extend") => type_system_extension_with_ctx(ctx),
            Token::String(_)
            | Token::BlockString(_)
            | Token::Name(
                "schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"
                | "directive",
            ) => type_system_definition_with_ctx(ctx),
            _ => Err(ASTKind::Definition),
        }
    }
}

impl<'a> private::ParseNode<'a> for Document<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut private::ParserContext<'a>) -> ParseResult<Document<'a>> {
        let start = ctx.start();
        let mut definitions = Vec::new_in(ctx.arena);
        while !ctx.at(Token::End) {
            definitions.push(Definition::new_with_ctx(ctx)?);
        }
        if definitions.is_empty() {
            return Err(ASTKind::Definition);
        }
        Ok(Document {
            definitions,
            size_hint: ctx.source().len(),
            span: ctx.span_from(start),
        })
    }
}

#[cfg(test)]
mod tests {
    use bumpalo::collections::Vec;

    use crate::ast::*;
    use crate::error::{ErrorType, Location};

    fn assert_parse<'a, T: 'a>(ctx: &'a ASTContext, source: &'a str, expected: T)
    where
        T: ParseNode<'a> + std::fmt::Debug + PartialEq,
    {
        assert_eq!(*T::parse(ctx, source).unwrap(), expected);
    }

    fn assert_error<'a, T: 'a>(
        ctx: &'a ASTContext,
        source: &'a str,
        message: &str,
        line: usize,
        column: usize,
    ) where
        T: ParseNode<'a> + std::fmt::Debug,
    {
        let error = T::parse(ctx, source).unwrap_err();
        assert_eq!(error.message(), message);
        let location = error.location().unwrap();
        assert_eq!((location.line, location.column), (line, column));
    }

    fn leaf<'a>(ctx: &'a ASTContext, name: &'a str) -> Field<'a> {
        Field {
            alias: None,
            name,
            arguments: Arguments::default_in(&ctx.arena),
            directives: Directives::default_in(&ctx.arena),
            selection_set: SelectionSet::default_in(&ctx.arena),
            span: Span::default(),
        }
    }

    #[test]
    fn error() {
        let ctx = ASTContext::new();
        let result = Document::parse(&ctx, "query { document { $ }}");

        assert_eq!(
            result.err().unwrap().location,
            Some(Location {
                offset: 19,
                column: 20,
                line: 1
            })
        );

        let result = Document::parse(
            &ctx,
            "query {
            document {
                $
            }
        }",
        );
        let location = result.err().unwrap().location.unwrap();
        assert_eq!((location.line, location.column), (3, 17));
    }

    #[test]
    fn error_messages() {
        let ctx = ASTContext::new();
        assert_error::<Document>(
            &ctx,
            "{ field { } }",
            "Expected Selection, found \"}\"",
            1,
            11,
        );
        assert_error::<Document>(&ctx, "", "Expected Definition, found end of input", 1, 1);
        assert_error::<Document>(
            &ctx,
            "# only a comment\n",
            "Expected Definition, found end of input",
            2,
            1,
        );
        assert_error::<Document>(&ctx, "{ a", "Expected Selection, found end of input", 1, 4);
        assert_error::<Type>(&ctx, "Name!!", "Expected Non-null Type, found \"!\"", 1, 6);
        assert_error::<Field>(&ctx, "a()", "Expected Argument, found \")\"", 1, 3);
        assert_error::<Type>(&ctx, "Int extra", "Expected end of input, found \"extra\"", 1, 5);
        assert_error::<Value>(&ctx, "1 2", "Expected end of input, found \"2\"", 1, 3);
        assert_error::<SelectionSet>(&ctx, "{ a } }", "Expected end of input, found \"}\"", 1, 7);
        assert_error::<Document>(
            &ctx,
            "query ($a: Int = $b) { a }",
            "Expected Constant Value, found \"$\"",
            1,
            18,
        );
        assert_error::<Document>(
            &ctx,
            "fragment on on T { a }",
            "Expected Fragment Definition, found \"on\"",
            1,
            10,
        );
        assert_error::<Document>(
            &ctx,
            "query Q() { a }",
            "Expected Variable, found \")\"",
            1,
            9,
        );
    }

    #[test]
    fn lexical_errors() {
        let ctx = ASTContext::new();
        let error = Document::parse(&ctx, "{ a(x: 0123) }").unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Lexical);
        assert_eq!(error.message(), "Invalid number \"0123\"");
        assert_eq!(error.lexeme(), Some("0123"));
        assert_eq!(error.location().unwrap().column, 8);

        let error = Document::parse(&ctx, "{ a(x: \"abc) }").unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Lexical);
        assert_eq!(error.message(), "Unterminated string");

        let error = Document::parse(&ctx, "{ a(x: \"\\q\") }").unwrap_err();
        assert_eq!(error.message(), "Invalid escape sequence in string");

        let error = Document::parse(&ctx, "{ a(x: \"\\uD83D\\uDE00\") }").unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Lexical);
        assert_eq!(error.message(), "Invalid escape sequence in string");
        assert_eq!(error.location().unwrap().column, 8);

        let error = Document::parse(&ctx, "{ a(x: \"a\u{1}b\") }").unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Lexical);
        assert_eq!(error.message(), "Invalid character in string");

        let error = Document::parse(&ctx, "{\n  a ?\n}").unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Lexical);
        assert_eq!(error.message(), "Unexpected character \"?\"");
        assert_eq!(
            error.print(false),
            "Lexical Error: Unexpected character \"?\" at 2:5"
        );
    }

    #[test]
    fn named_type() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "TypeName", NamedType::from("TypeName"));
    }

    #[test]
    fn variable() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "$test", Variable::from("test"));
        assert_parse(&ctx, "$ test", Variable::from("test"));
    }

    #[test]
    fn lists() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "[]", ListValue::default_in(&ctx.arena));

        let list_children = Vec::from_iter_in([Value::Null, Value::Null], &ctx.arena);
        assert_parse(
            &ctx,
            "[null, null]",
            ListValue {
                children: list_children,
                span: Span::default(),
            },
        );
    }

    #[test]
    fn objects() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "{}", ObjectValue::default_in(&ctx.arena));
        let list_children = Vec::from_iter_in(
            [
                ObjectField {
                    name: "test",
                    value: Value::Boolean(true.into()),
                    span: Span::default(),
                },
                ObjectField {
                    name: "test",
                    value: Value::Boolean(false.into()),
                    span: Span::default(),
                },
            ],
            &ctx.arena,
        );
        assert_parse(
            &ctx,
            "{ test: true, test: false }",
            ObjectValue {
                children: list_children,
                span: Span::default(),
            },
        );
    }

    #[test]
    fn values() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "true", Value::Boolean(true.into()));
        assert_parse(&ctx, "false", Value::Boolean(false.into()));
        assert_parse(&ctx, "$var", Value::Variable("var".into()));
        assert_parse(
            &ctx,
            "Opt",
            Value::Enum(EnumValue {
                value: "Opt",
                span: Span::default(),
            }),
        );
        assert_parse(
            &ctx,
            "-123",
            Value::Int(IntValue {
                value: "-123",
                span: Span::default(),
            }),
        );
        assert_parse(
            &ctx,
            "1.5e10",
            Value::Float(FloatValue {
                value: "1.5e10",
                span: Span::default(),
            }),
        );
        assert_parse(&ctx, "null", Value::Null);
        assert_parse(
            &ctx,
            "\"hello world\"",
            Value::String(StringValue::new(&ctx, "hello world")),
        );

        let value = Value::parse(&ctx, "\"\"\"\n    block\n    string\n\"\"\"").unwrap();
        if let Value::String(string) = value {
            assert_eq!(string.value, "block\nstring");
            assert!(string.block);
        } else {
            panic!("expected a string value");
        }
    }

    #[test]
    fn arguments() {
        let ctx = ASTContext::new();
        assert_parse(&ctx, "", Arguments::default_in(&ctx.arena));
        assert_parse(
            &ctx,
            "(a: 1, b: $b)",
            Arguments {
                children: Vec::from_iter_in(
                    [
                        Argument {
                            name: "a",
                            value: Value::Int(IntValue {
                                value: "1",
                                span: Span::default(),
                            }),
                            span: Span::default(),
                        },
                        Argument {
                            name: "b",
                            value: Value::Variable("b".into()),
                            span: Span::default(),
                        },
                    ],
                    &ctx.arena,
                ),
            },
        );
    }

    #[test]
    fn directives() {
        let ctx = ASTContext::new();

        assert_parse(&ctx, "#", Directives::default_in(&ctx.arena));

        let defer = Directive {
            name: "defer",
            arguments: Arguments::default_in(&ctx.arena),
            span: Span::default(),
        };
        assert_parse(
            &ctx,
            "@defer @defer",
            Directives {
                children: Vec::from_iter_in([defer.clone(), defer], &ctx.arena),
            },
        );

        assert_parse(
            &ctx,
            "@include(if: $hi)",
            Directive {
                name: "include",
                arguments: Arguments {
                    children: Vec::from_iter_in(
                        [Argument {
                            name: "if",
                            value: Value::Variable("hi".into()),
                            span: Span::default(),
                        }],
                        &ctx.arena,
                    ),
                },
                span: Span::default(),
            },
        );
    }

    #[test]
    fn fields() {
        let ctx = ASTContext::new();

        assert_parse(&ctx, "name", leaf(&ctx, "name"));
        assert_parse(
            &ctx,
            "alias: name",
            Field {
                alias: Some("alias"),
                ..leaf(&ctx, "name")
            },
        );
        assert_parse(
            &ctx,
            "parent { child }",
            Field {
                selection_set: SelectionSet {
                    selections: Vec::from_iter_in(
                        [Selection::Field(leaf(&ctx, "child"))],
                        &ctx.arena,
                    ),
                    span: Span::default(),
                },
                ..leaf(&ctx, "parent")
            },
        );

        let field = Field::parse(&ctx, "alias: name(x: null) @skip(if: true) { child }").unwrap();
        assert_eq!(field.alias_or_name(), "alias");
        assert_eq!(field.arguments.children[0].value, Value::Null);
        assert_eq!(field.directives.children[0].name, "skip");
        assert_eq!(field.selection_set.selections.len(), 1);
        assert_eq!(field.span.range(), 0..46);
    }

    #[test]
    fn fragment_spread() {
        let ctx = ASTContext::new();
        assert_parse(
            &ctx,
            "... FragName",
            FragmentSpread {
                name: "FragName".into(),
                directives: Directives::default_in(&ctx.arena),
                span: Span::default(),
            },
        );
        assert!(FragmentSpread::parse(&ctx, "... on").is_err());
    }

    #[test]
    fn inline_fragment() {
        let ctx = ASTContext::new();
        let selection_set = SelectionSet {
            selections: Vec::from_iter_in(
                [Selection::Field(leaf(&ctx, "__typename"))],
                &ctx.arena,
            ),
            span: Span::default(),
        };

        assert_parse(
            &ctx,
            "... { __typename }",
            InlineFragment {
                type_condition: None,
                directives: Directives::default_in(&ctx.arena),
                selection_set: selection_set.clone(),
                span: Span::default(),
            },
        );
        assert_parse(
            &ctx,
            "...on Frag { __typename }",
            InlineFragment {
                type_condition: Some("Frag".into()),
                directives: Directives::default_in(&ctx.arena),
                selection_set,
                span: Span::default(),
            },
        );
    }

    #[test]
    fn selections() {
        let ctx = ASTContext::new();
        let selection_set = SelectionSet::parse(
            &ctx,
            "{ name, ... on Frag { name }, ... OtherFrag, ... { name }, name2: name }",
        )
        .unwrap();
        let selections = &selection_set.selections;
        assert_eq!(selections.len(), 5);
        assert_eq!(selections[0].field().unwrap().name, "name");
        assert_eq!(
            selections[1].inline_fragment().unwrap().type_condition,
            Some(NamedType::from("Frag"))
        );
        assert_eq!(selections[1].span().range(), 8..28);
        assert_eq!(selections[2].fragment_spread().unwrap().name.name, "OtherFrag");
        assert_eq!(selections[2].span().range(), 30..43);
        assert!(selections[3].inline_fragment().unwrap().type_condition.is_none());
        assert_eq!(selections[4].field().unwrap().alias, Some("name2"));
    }

    #[test]
    fn types() {
        let ctx = ASTContext::new();

        assert_parse(&ctx, "Type", Type::NamedType("Type".into()));
        assert_parse(
            &ctx,
            "Type!",
            Type::NonNullType(ctx.alloc(Type::NamedType("Type".into()))),
        );
        assert_parse(
            &ctx,
            "[Type!]!",
            Type::NonNullType(ctx.alloc(Type::ListType(
                ctx.alloc(Type::NonNullType(ctx.alloc(Type::NamedType("Type".into())))),
            ))),
        );
        assert_parse(
            &ctx,
            "[ Type ! ] !",
            Type::NonNullType(ctx.alloc(Type::ListType(
                ctx.alloc(Type::NonNullType(ctx.alloc(Type::NamedType("Type".into())))),
            ))),
        );
    }

    #[test]
    fn variable_definitions() {
        let ctx = ASTContext::new();
        let definitions =
            VariableDefinitions::parse(&ctx, "($a: Int = 1 @deprecated, $b: [String!]!)").unwrap();
        assert_eq!(definitions.children.len(), 2);
        assert_eq!(
            definitions.children[0].default_value,
            Some(Value::Int(IntValue {
                value: "1",
                span: Span::default(),
            }))
        );
        assert_eq!(definitions.children[0].directives.children[0].name, "deprecated");
        assert_eq!(definitions.children[1].default_value, None);
        assert!(VariableDefinition::parse(&ctx, "$a: Int = [$b]").is_err());
        assert!(VariableDefinition::parse(&ctx, "$a: Int @dir(arg: $b)").is_err());
    }

    #[test]
    fn operations() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{ field }").unwrap();
        let operation = document.definitions[0].operation().unwrap();
        assert_eq!(operation.operation, OperationKind::Query);
        assert_eq!(operation.name, None);
        assert!(operation.variable_definitions.is_empty());
        assert!(operation.directives.is_empty());
        assert_eq!(
            operation.selection_set.selections[0].field(),
            Some(&leaf(&ctx, "field"))
        );
        assert_eq!(operation.selection_set.selections[0].span().range(), 2..7);

        let document = Document::parse(
            &ctx,
            "mutation Like($id: ID!) @live { like(id: $id) } subscription { s }",
        )
        .unwrap();
        let like = document.definitions[0].operation().unwrap();
        assert_eq!(like.operation, OperationKind::Mutation);
        assert_eq!(like.name, Some(NamedType::from("Like")));
        assert_eq!(like.variable_definitions.children.len(), 1);
        assert_eq!(
            document.definitions[1].operation().unwrap().operation,
            OperationKind::Subscription
        );
    }

    #[test]
    fn fragment_definitions() {
        let ctx = ASTContext::new();
        let fragment =
            FragmentDefinition::parse(&ctx, "fragment Frag on User @dir { id }").unwrap();
        assert_eq!(fragment.name, NamedType::from("Frag"));
        assert_eq!(fragment.type_condition, NamedType::from("User"));
        assert_eq!(fragment.directives.children.len(), 1);
        assert!(FragmentDefinition::parse(&ctx, "fragment Frag on User").is_err());
        assert!(FragmentDefinition::parse(&ctx, "fragment Frag User { id }").is_err());
    }

    #[test]
    fn schema_definitions() {
        let ctx = ASTContext::new();
        let schema = SchemaDefinition::parse(
            &ctx,
            "\"The schema\" schema @dir { query: Query mutation: Mutation }",
        )
        .unwrap();
        assert_eq!(schema.description.unwrap().value, "The schema");
        assert_eq!(schema.operation_types.children.len(), 2);
        assert_eq!(
            schema.operation_types.children[1].operation,
            OperationKind::Mutation
        );
        assert_error::<SchemaDefinition>(
            &ctx,
            "schema @dir",
            "Expected Schema Definition, found end of input",
            1,
            12,
        );
        assert!(SchemaDefinition::parse(&ctx, "schema { query: Query").is_err());
    }

    #[test]
    fn object_type_definitions() {
        let ctx = ASTContext::new();
        let object = ObjectTypeDefinition::parse(
            &ctx,
            r#"
            "An object"
            type Foo implements & Bar & Baz @key(fields: "id") {
              "The id"
              id: ID!
              field(arg: Int = 1 @dir, other: [String]): String @deprecated
            }
            "#,
        )
        .unwrap();
        assert_eq!(object.description.unwrap().value, "An object");
        assert_eq!(object.name.name, "Foo");
        assert_eq!(
            object.interfaces.children.iter().map(|i| i.name).collect::<std::vec::Vec<_>>(),
            ["Bar", "Baz"]
        );
        assert_eq!(object.fields.children.len(), 2);
        assert_eq!(object.fields.children[0].description.unwrap().value, "The id");
        let field = &object.fields.children[1];
        assert_eq!(field.arguments.children.len(), 2);
        assert!(field.arguments.children[0].default_value.is_some());
        assert_eq!(field.directives.children[0].name, "deprecated");

        assert!(ObjectTypeDefinition::parse(&ctx, "type Foo {}").is_err());
        assert!(ObjectTypeDefinition::parse(&ctx, "type Foo { f(): Int }").is_err());
        assert!(ObjectTypeDefinition::parse(&ctx, "type Foo { f(a: Int = $v): Int }").is_err());
        assert!(ObjectTypeDefinition::parse(&ctx, "type Foo").is_ok());
    }

    #[test]
    fn other_type_definitions() {
        let ctx = ASTContext::new();
        let union = UnionTypeDefinition::parse(&ctx, "union U @dir = | A | B").unwrap();
        assert_eq!(union.types.children.len(), 2);

        let enum_type = EnumTypeDefinition::parse(&ctx, "enum E { A \"desc\" B @dir }").unwrap();
        assert_eq!(enum_type.values.children[1].name, "B");
        assert!(enum_type.values.children[1].description.is_some());
        assert_error::<EnumTypeDefinition>(
            &ctx,
            "enum E { true }",
            "Expected Enum Value Definition, found \"true\"",
            1,
            10,
        );

        let input = InputObjectTypeDefinition::parse(&ctx, "input I { a: Int = 1, b: [I!] }").unwrap();
        assert_eq!(input.fields.children.len(), 2);

        let scalar = ScalarTypeDefinition::parse(&ctx, "scalar Date @specifiedBy(url: \"x\")").unwrap();
        assert_eq!(scalar.directives.children[0].name, "specifiedBy");

        let interface = InterfaceTypeDefinition::parse(&ctx, "interface I implements J { a: Int }").unwrap();
        assert_eq!(interface.interfaces.children[0].name, "J");

        let definition = TypeDefinition::parse(&ctx, "\"d\" scalar S").unwrap();
        assert_eq!(definition.keyword(), "scalar");
        assert_eq!(definition.name().name, "S");
    }

    #[test]
    fn directive_definitions() {
        let ctx = ASTContext::new();
        let directive = DirectiveDefinition::parse(
            &ctx,
            "directive @key(fields: String!) repeatable on | OBJECT | INTERFACE",
        )
        .unwrap();
        assert_eq!(directive.name, "key");
        assert!(directive.repeatable);
        assert_eq!(
            directive.locations.children.as_slice(),
            [DirectiveLocation::Object, DirectiveLocation::Interface]
        );
        assert_error::<DirectiveDefinition>(
            &ctx,
            "directive @a on FIELDS",
            "Expected Directive Location, found \"FIELDS\"",
            1,
            17,
        );
        assert!(DirectiveDefinition::parse(&ctx, "directive @a(x: Int)").is_err());
    }

    #[test]
    fn extensions() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            "extend schema @dir extend type A implements B extend union U = C extend enum E { D } \
             extend input I @dir extend scalar S @dir extend interface J { f: Int }",
        )
        .unwrap();
        assert_eq!(document.definitions.len(), 7);
        assert!(document.definitions.iter().all(|definition| definition.is_extension()));

        assert_error::<Document>(
            &ctx,
            "extend type A",
            "Expected Type System Extension, found end of input",
            1,
            14,
        );
        assert_error::<Document>(
            &ctx,
            "extend \"desc\" type A @dir",
            "Expected Type System Extension, found \"\\\"desc\\\"\"",
            1,
            8,
        );
        assert!(Document::parse(&ctx, "extend directive @a on FIELD").is_err());
    }

    #[test]
    fn descriptions_require_a_definition() {
        let ctx = ASTContext::new();
        assert_error::<Document>(
            &ctx,
            "\"desc\" { a }",
            "Expected Type System Definition, found \"{\"",
            1,
            8,
        );
    }

    #[test]
    fn documents() {
        let ctx = ASTContext::new();
        let document = parse_document(
            &ctx,
            "query Q { a } fragment F on T { b } type T { a: Int } directive @d on FIELD",
        )
        .unwrap();
        assert_eq!(document.definitions.len(), 4);
        assert!(matches!(document.definitions[2], Definition::Type(TypeDefinition::Object(_))));
        assert!(matches!(document.definitions[3], Definition::Directive(_)));
        assert!(parse_document(&ctx, "{ a } }").is_err());
    }
}
