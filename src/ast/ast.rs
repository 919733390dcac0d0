pub use super::ast_conversion::*;
use super::type_system::*;
use std::{
    hash::{Hash, Hasher},
    ops::Range,
};

/// A context for a GraphQL document which holds an arena allocator.
///
/// For the duration of parsing, storing, and printing an AST its performant and convenient to
/// allocate memory in one chunk for the AST's operations. This context represents the lifetime of
/// an AST and its derivatives.
///
/// An AST Context in other words represents the memory a document and the operations you perform
/// on it take up. This is efficient since once you're done with the document this entire
/// allocated memory can be dropped all at once.
pub struct ASTContext {
    /// An arena allocator that holds the memory allocated for the AST Context's lifetime
    pub arena: bumpalo::Bump,
}

impl ASTContext {
    /// Create a new AST context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ASTContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    /// This is typically unnecessary for static slices (`&'static str`) whose lifetimes are as
    /// long as the running program and don't need to be allocated dynamically.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s lifetime
    /// to this AST context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for ASTContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offsets of the source text an AST Node was parsed from.
///
/// Spans are metadata and don't take part in comparisons: any two spans are equal and a span
/// hashes to nothing. Two AST Nodes therefore compare equal when they're structurally equal,
/// regardless of where they were written. Use [`Span::range`] to read the offsets.
#[derive(Debug, Default, Clone, Copy)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Returns the byte range of this span, for slicing the source text.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl PartialEq for Span {
    #[inline]
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for Span {}

impl Hash for Span {
    #[inline]
    fn hash<H: Hasher>(&self, _state: &mut H) {}
}

/// AST Node of a boolean value
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct BooleanValue {
    pub value: bool,
    pub span: Span,
}

/// AST Node of a variable identifier value.
///
/// These are identifiers prefixed with a `$` sign, typically in variable definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Variable<'a> {
    pub name: &'a str,
    pub span: Span,
}

/// AST Node of an enum value.
///
/// These are typically written in all caps and snake case, e.g. "`MOBILE_WEB`".
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct EnumValue<'a> {
    pub value: &'a str,
    pub span: Span,
}

/// AST Node of an integer value.
///
/// The value is kept as it was written in the source text.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Int)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct IntValue<'a> {
    pub value: &'a str,
    pub span: Span,
}

/// AST Node of a floating point value.
///
/// Floats in GraphQL are signed, double precision values as defined by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_754).
/// The value is kept as it was written in the source text.
/// [Reference](https://spec.graphql.org/October2021/#sec-Float)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct FloatValue<'a> {
    pub value: &'a str,
    pub span: Span,
}

/// AST Node of a string value.
///
/// GraphQL has a number of escaped characters that are normalised away when parsing and
/// hence this `value` is expected to not contain escaped characters.
/// The strings in GraphQL can be compared to JSON Unicode strings.
///
/// `block` records whether the string was written as a block string. It only influences how the
/// string is printed and is ignored when comparing or hashing string values.
/// [Reference](https://spec.graphql.org/October2021/#sec-String)
#[derive(Debug, Clone, Copy)]
pub struct StringValue<'a> {
    pub value: &'a str,
    pub block: bool,
    pub span: Span,
}

impl<'a> StringValue<'a> {
    pub fn new<S: AsRef<str>>(ctx: &'a ASTContext, str: S) -> Self {
        StringValue {
            value: ctx.alloc_str(str.as_ref()),
            block: false,
            span: Span::default(),
        }
    }

    /// Determines whether a string should be printed as a block string
    /// rather than a regular quoted string.
    ///
    /// Only strings that were written as block strings are printed as such, and only when their
    /// value survives being printed in block form unchanged.
    #[inline]
    pub fn is_block(&self) -> bool {
        if !self.block || self.value.is_empty() {
            return false;
        }
        let mut has_unindented_line = false;
        for line in self.value.split('\n') {
            if line.chars().any(|c| c < ' ' && c != '\t') {
                return false;
            }
            if line.starts_with(|c: char| c != ' ' && c != '\t') {
                has_unindented_line = true;
            }
        }
        let is_blank = |line: &str| line.chars().all(|c| c == ' ' || c == '\t');
        let first = self.value.split('\n').next().unwrap_or_default();
        let last = self.value.rsplit('\n').next().unwrap_or_default();
        has_unindented_line && !is_blank(first) && !is_blank(last)
    }
}

impl<'a> PartialEq for StringValue<'a> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<'a> Eq for StringValue<'a> {}

impl<'a> Hash for StringValue<'a> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

/// AST Node of possible input values in GraphQL.
///
/// Fields and Directives accept input values as arguments.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    Variable(Variable<'a>),
    String(StringValue<'a>),
    Float(FloatValue<'a>),
    Int(IntValue<'a>),
    Boolean(BooleanValue),
    Enum(EnumValue<'a>),
    List(ListValue<'a>),
    Object(ObjectValue<'a>),
    /// Representing JSON-like `null` values
    Null,
}

/// AST Node for a List of values.
///
/// Lists in GraphQL are ordered sequences and serialize to JSON arrays. Its
/// contents may be any arbitrary value literal or variable.
/// [Reference](https://spec.graphql.org/October2021/#sec-List-Value)
#[derive(Debug, PartialEq, Clone)]
pub struct ListValue<'a> {
    pub children: bumpalo::collections::Vec<'a, Value<'a>>,
    pub span: Span,
}

impl<'a> ListValue<'a> {
    /// Checks whether this List contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a field of an Object value.
///
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
    pub span: Span,
}

/// AST Node for an Object value, which is a list of Object fields.
///
/// Object fields are kept in the order they were written in, including duplicate names.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectValue<'a> {
    pub children: bumpalo::collections::Vec<'a, ObjectField<'a>>,
    pub span: Span,
}

impl<'a> ObjectValue<'a> {
    /// Checks whether this Object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for an Argument, which carries a name and a value.
///
/// [Reference](https://spec.graphql.org/October2021/#Argument)
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
    pub span: Span,
}

/// AST Node for a list of Arguments, which are similar to parameterized inputs to a function.
///
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone)]
pub struct Arguments<'a> {
    pub children: bumpalo::collections::Vec<'a, Argument<'a>>,
}

impl<'a> Arguments<'a> {
    /// Checks whether this list of Arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for GraphQL Directives, which provide a way to describe alternate behavior in GraphQL.
///
/// Typical directives that occur in queries are for example `@skip`, `@include`, and `@defer`.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub arguments: Arguments<'a>,
    pub span: Span,
}

/// AST Node for lists of GraphQL Directives.
///
/// Directives are kept in the order they were written in, and the same directive may appear more
/// than once.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directives<'a> {
    pub children: bumpalo::collections::Vec<'a, Directive<'a>>,
}

impl<'a> Directives<'a> {
    /// Checks whether this list of Directives contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for Selection Sets, which provide a way to select more information on a given parent.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
#[derive(Debug, PartialEq, Clone)]
pub struct SelectionSet<'a> {
    pub selections: bumpalo::collections::Vec<'a, Selection<'a>>,
    pub span: Span,
}

impl<'a> SelectionSet<'a> {
    /// Checks whether this Selection Set contains any selections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// AST Node for Fields, which can be likened to functions or properties on a parent object.
///
/// In JSON this would represent a property in a JSON object.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug, PartialEq, Clone)]
pub struct Field<'a> {
    /// A Field's `alias`, which is used to request information under a different name than the
    /// Field's `name`.
    /// [Reference](https://spec.graphql.org/October2021/#sec-Field-Alias)
    pub alias: Option<&'a str>,
    /// A Field's `name`, which represents a resolver on a GraphQL schema's object type.
    pub name: &'a str,
    /// Arguments that are passed to a Field.
    ///
    /// When no Arguments are passed, this will be an empty
    /// list, as can be checked using `Arguments::is_empty`.
    /// See: [Arguments]
    pub arguments: Arguments<'a>,
    /// Directives that are annotating this Field.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is passed below this field to add selections to this field's
    /// returned GraphQL object type.
    ///
    /// When no selections are present, this will be an empty
    /// list, as can be checked using `SelectionSet::is_empty`.
    /// See: [SelectionSet]
    pub selection_set: SelectionSet<'a>,
    pub span: Span,
}

impl<'a> Field<'a> {
    /// Get the alias of the field, if present, otherwise get the name.
    #[inline]
    pub fn alias_or_name(&self) -> &'a str {
        self.alias.unwrap_or(self.name)
    }
}

/// AST Node for a Fragment Spread, which refers to a [`FragmentDefinition`] with an additional
/// [`SelectionSet`].
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentSpread<'a> {
    /// A given name of the [FragmentDefinition] that must be spread in place of this Fragment
    /// Spread on a GraphQL API.
    pub name: NamedType<'a>,
    /// Directives that are annotating this Fragment Spread.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    pub span: Span,
}

/// AST Node for an inline Fragment definition with an additional [`SelectionSet`].
/// This may only be applied when the type condition matches or when no type condition is present.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragment<'a> {
    /// A given type condition's type name that must match before this fragment is applied on a
    /// GraphQL API. On inline fragments this is optional and no type condition has to be passed.
    pub type_condition: Option<NamedType<'a>>,
    /// Directives that are annotating this Inline Fragment.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Fragment is applied to the parent
    /// Selection Set.
    /// See: [SelectionSet]
    pub selection_set: SelectionSet<'a>,
    pub span: Span,
}

/// AST Node of a selection as contained inside a [`SelectionSet`].
///
/// Any given Selection Set may contain fields, fragment spread, and inline fragments.
/// [Reference](https://spec.graphql.org/October2021/#Selection)
#[derive(Debug, PartialEq, Clone)]
pub enum Selection<'a> {
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
}

impl<'a> Selection<'a> {
    /// Helper method to return the [`Field`] if the Selection is a `Field`.
    #[inline]
    pub fn field(&'a self) -> Option<&'a Field<'a>> {
        match self {
            Selection::Field(field) => Some(field),
            Selection::FragmentSpread(_) => None,
            Selection::InlineFragment(_) => None,
        }
    }

    /// Helper method to return the [`FragmentSpread`] if the Selection is a `FragmentSpread`.
    #[inline]
    pub fn fragment_spread(&'a self) -> Option<&'a FragmentSpread<'a>> {
        match self {
            Selection::FragmentSpread(spread) => Some(spread),
            Selection::Field(_) => None,
            Selection::InlineFragment(_) => None,
        }
    }

    /// Helper method to return the [`InlineFragment`] if the Selection is an `InlineFragment`.
    #[inline]
    pub fn inline_fragment(&'a self) -> Option<&'a InlineFragment<'a>> {
        match self {
            Selection::InlineFragment(fragment) => Some(fragment),
            Selection::FragmentSpread(_) => None,
            Selection::Field(_) => None,
        }
    }

    /// Returns the span of the wrapped selection.
    #[inline]
    pub fn span(&self) -> Span {
        match self {
            Selection::Field(field) => field.span,
            Selection::FragmentSpread(spread) => spread.span,
            Selection::InlineFragment(fragment) => fragment.span,
        }
    }
}

/// AST Node for a type name.
///
/// This AST uses this reference instead of a raw `&str`
/// slice whenever the AST refers to a concrete object type, input type, fragment
/// name, or operation name.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct NamedType<'a> {
    pub name: &'a str,
    pub span: Span,
}

/// AST Node for a type reference.
///
/// [`VariableDefinitions`] and field or argument definitions must describe their type, including
/// whether they expect lists, non-null values, or a type reference, which is a recursive type
/// definition.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Type<'a> {
    /// A reference to a named input type, which is a leaf node of a [Type].
    NamedType(NamedType<'a>),
    /// A list node wrapper for a Type, which indicates that a GraphQL API will always pass a list of the
    /// contained type in place.
    ListType(&'a Type<'a>),
    /// A non-null node wrapper for a Type, which indicates that a GraphQL API may not pass `null` instead
    /// of the contained type. The wrapped type is never itself a non-null type.
    NonNullType(&'a Type<'a>),
}

impl<'a> Type<'a> {
    /// Unwraps a Type recursively and returns the `NamedType` that is contained within its
    /// wrappers.
    #[inline]
    pub fn named_type(&self) -> &NamedType<'a> {
        match self {
            Type::NamedType(named_type) => named_type,
            Type::ListType(of_type) | Type::NonNullType(of_type) => of_type.named_type(),
        }
    }
}

/// AST Node for a variable definition.
///
/// A variable definition defines multiple [Variable]
/// identifiers that can be used in place of any other non-static [Value] throughout the
/// document.
///
/// [Reference](https://spec.graphql.org/October2021/#VariableDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition<'a> {
    /// The variable's name, as in, its identifier, which is prefixed with a `$` sign in the
    /// document.
    pub variable: Variable<'a>,
    /// Annotation of the type of a given variable, which ultimately leads to a type reference of
    /// an input type, as defined on a GraphQL schema.
    pub of_type: Type<'a>,
    /// A GraphQL variable may be replaced by a default value, when it's not passed or `null`
    /// is passed for a non-null variable. Default values are constant and never contain
    /// variables.
    pub default_value: Option<Value<'a>>,
    /// Directives that are annotating this Variable Definition.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinitions<'a> {
    pub children: bumpalo::collections::Vec<'a, VariableDefinition<'a>>,
}

impl<'a> VariableDefinitions<'a> {
    /// Checks whether the list of Variable Definitions is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a Fragment definition with an additional Selection Set.
///
/// This may only be applied when the type condition matches or when no type condition is present
/// and extends a Selection Set by being applied using a [`FragmentSpread`] selection.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDefinition<'a> {
    /// A given name of the Fragment Definition that is used by [FragmentSpread] selections to
    /// refer to this definition. This is never `on`.
    pub name: NamedType<'a>,
    /// A given type condition's type name that must match before this fragment is applied on a
    /// GraphQL API.
    pub type_condition: NamedType<'a>,
    /// Directives that are annotating this Fragment.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Fragment is applied to the parent
    /// Selection Set.
    /// See: [SelectionSet]
    pub selection_set: SelectionSet<'a>,
    pub span: Span,
}

/// AST Node for a kind of operation, as referred to by an [`OperationDefinition`].
///
/// In GraphQL there are three different operations, with each having a unique identifier on
/// Operation Definitions.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Returns the keyword this kind of operation is introduced with.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// AST Node for an Operation Definition, which defines the entrypoint for GraphQL's execution.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Clone)]
pub struct OperationDefinition<'a> {
    /// The kind of operation that this definition specifies
    pub operation: OperationKind,
    // An optional name, as given to the operation definition.
    //
    // A [Document] may contain multiple
    // Operation Definitions from which a single one can be selected during execution. When a
    // Document contains only a single operation, it doesn't have to have a name.
    pub name: Option<NamedType<'a>>,
    /// A list of variables that the operation defines and accepts during execution.
    ///
    /// When an
    /// Operation Definition defines no variables this may be an empty list, as can be checked
    /// using `VariableDefinitions::is_empty`.
    pub variable_definitions: VariableDefinitions<'a>,
    /// Directives that are annotating this Operation Definition.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Operation Definition is executed to the root
    /// type of the specified kind of operation.
    /// See: [SelectionSet]
    pub selection_set: SelectionSet<'a>,
    pub span: Span,
}

/// AST Root Node for a GraphQL document. This contains one or more definitions of operations,
/// fragments, type-system definitions, or type-system extensions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, Clone)]
pub struct Document<'a> {
    pub definitions: bumpalo::collections::Vec<'a, Definition<'a>>,
    /// A hint on how large the source text was from which this Document was parsed.
    ///
    /// This gives an initial indication of the starting capacity of a `String` that will hold the stringified
    /// document.
    pub size_hint: usize,
    pub span: Span,
}

/// Documents are equal when their definitions are equal, regardless of the source they came from.
impl<'a> PartialEq for Document<'a> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.definitions == other.definitions
    }
}

impl<'a> Document<'a> {
    /// Checks whether this document contains any definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// AST Node for a Definition inside a document.
///
/// Extensions reuse the node of the definition they extend; a `TypeExtension` of an object type
/// for instance holds an [`ObjectTypeDefinition`] without a description.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub enum Definition<'a> {
    Operation(OperationDefinition<'a>),
    Fragment(FragmentDefinition<'a>),
    Schema(SchemaDefinition<'a>),
    Type(TypeDefinition<'a>),
    Directive(DirectiveDefinition<'a>),
    SchemaExtension(SchemaDefinition<'a>),
    TypeExtension(TypeDefinition<'a>),
}

impl<'a> Definition<'a> {
    /// Helper method to return the [`OperationDefinition`] if the Definition is an `OperationDefinition`.
    #[inline]
    pub fn operation(&'a self) -> Option<&'a OperationDefinition<'a>> {
        match self {
            Definition::Operation(operation) => Some(operation),
            _ => None,
        }
    }

    /// Helper method to return the [`FragmentDefinition`] if the Definition is a `FragmentDefinition`.
    #[inline]
    pub fn fragment(&'a self) -> Option<&'a FragmentDefinition<'a>> {
        match self {
            Definition::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }

    /// Helper method to return the [`TypeDefinition`] if the Definition is a type definition or
    /// a type extension.
    #[inline]
    pub fn type_definition(&'a self) -> Option<&'a TypeDefinition<'a>> {
        match self {
            Definition::Type(definition) | Definition::TypeExtension(definition) => {
                Some(definition)
            }
            _ => None,
        }
    }

    /// Checks whether this Definition extends an existing schema or type.
    #[inline]
    pub fn is_extension(&self) -> bool {
        matches!(
            self,
            Definition::SchemaExtension(_) | Definition::TypeExtension(_)
        )
    }

    /// Returns the span of the wrapped definition.
    pub fn span(&self) -> Span {
        match self {
            Definition::Operation(operation) => operation.span,
            Definition::Fragment(fragment) => fragment.span,
            Definition::Schema(schema) | Definition::SchemaExtension(schema) => schema.span,
            Definition::Type(definition) | Definition::TypeExtension(definition) => {
                definition.span()
            }
            Definition::Directive(directive) => directive.span,
        }
    }
}

/// Trait implemented by all ast nodes that can have directives attached.
pub trait WithDirectives<'arena> {
    fn directives(&self) -> &Directives<'arena>;
}

macro_rules! with_directives {
    ($($for_type:ident),+) => {
        $(
            impl<'arena> WithDirectives<'arena> for $for_type<'arena> {
                #[inline]
                fn directives(&self) -> &Directives<'arena> {
                    &self.directives
                }
            }
        )+
    };
}

with_directives!(
    Field,
    FragmentSpread,
    InlineFragment,
    OperationDefinition,
    FragmentDefinition,
    VariableDefinition,
    SchemaDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition
);

impl<'arena> WithDirectives<'arena> for Selection<'arena> {
    /// Helper method to get all Directives for a given selection directly.
    ///
    /// Any selection AST node may carry Directives, so when those are checked
    /// it's unnecessary to first match the type of selection.
    fn directives(&self) -> &Directives<'arena> {
        match self {
            Selection::Field(field) => &field.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
            Selection::InlineFragment(fragment) => &fragment.directives,
        }
    }
}

impl<'arena> WithDirectives<'arena> for TypeDefinition<'arena> {
    #[inline]
    fn directives(&self) -> &Directives<'arena> {
        match self {
            TypeDefinition::Scalar(scalar) => &scalar.directives,
            TypeDefinition::Object(object) => &object.directives,
            TypeDefinition::Interface(interface) => &interface.directives,
            TypeDefinition::Union(union) => &union.directives,
            TypeDefinition::Enum(enum_type) => &enum_type.directives,
            TypeDefinition::InputObject(input) => &input.directives,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ParseNode;
    use std::collections::hash_map::DefaultHasher;

    #[test]
    fn spans_are_ignored_by_equality() {
        assert_eq!(Span::new(0, 4), Span::new(10, 20));
        let ctx = ASTContext::new();
        let a = Document::parse(&ctx, "{ a(x: 1) }").unwrap();
        let b = Document::parse(&ctx, "query {\n  a(x: 1)\n}").unwrap();
        assert_eq!(a, b);
        assert_ne!(a.span.range(), b.span.range());
    }

    #[test]
    fn string_block_flag_is_ignored_by_equality() {
        let a = StringValue {
            value: "text",
            block: true,
            span: Span::default(),
        };
        let b = StringValue {
            value: "text",
            block: false,
            span: Span::new(3, 9),
        };
        assert_eq!(a, b);

        let hash = |value: &StringValue| {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn string_is_block() {
        let block = |value| StringValue {
            value,
            block: true,
            span: Span::default(),
        };
        assert!(block("line\n  indented").is_block());
        assert!(!block("").is_block());
        assert!(!block("  only indented\n  lines").is_block());
        assert!(!block("trailing\n  ").is_block());
        assert!(!block("carriage\rreturn").is_block());
        assert!(!StringValue {
            block: false,
            ..block("line\nline")
        }
        .is_block());
    }

    #[test]
    fn named_type_of_wrapped_type() {
        let ctx = ASTContext::new();
        let of_type = Type::parse(&ctx, "[[Int!]]!").unwrap();
        assert_eq!(of_type.named_type().name, "Int");
    }

    #[test]
    fn definition_helpers() {
        let ctx = ASTContext::new();
        let ast = Document::parse(
            &ctx,
            "query Q { a } fragment F on T { b } extend type T @key",
        )
        .unwrap();
        assert!(ast.definitions[0].operation().is_some());
        assert!(ast.definitions[1].fragment().is_some());
        assert!(ast.definitions[2].is_extension());
        assert_eq!(
            ast.definitions[2].type_definition().unwrap().directives().children[0].name,
            "key"
        );
        assert_eq!(ast.definitions[1].span().range(), 14..35);
    }
}
