use super::ast::{Directives, NamedType, OperationKind, Span, StringValue, Type, Value};

/// An optional description that precedes a type-system definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Descriptions)
pub type Description<'a> = Option<StringValue<'a>>;

/// AST Node for a root operation type of a schema, e.g. `query: Query`.
///
/// [Reference](https://spec.graphql.org/October2021/#RootOperationTypeDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct RootOperationTypeDefinition<'a> {
    pub operation: OperationKind,
    pub named_type: NamedType<'a>,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct RootOperationTypeDefinitions<'a> {
    pub children: bumpalo::collections::Vec<'a, RootOperationTypeDefinition<'a>>,
}

impl<'a> RootOperationTypeDefinitions<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a schema definition or a schema extension.
///
/// A schema definition always has at least one root operation type. A schema extension may
/// instead only add directives.
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaDefinition<'a> {
    pub description: Description<'a>,
    pub directives: Directives<'a>,
    pub operation_types: RootOperationTypeDefinitions<'a>,
    pub span: Span,
}

/// AST Node for a scalar type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, PartialEq, Clone)]
pub struct ScalarTypeDefinition<'a> {
    pub description: Description<'a>,
    pub name: NamedType<'a>,
    pub directives: Directives<'a>,
    pub span: Span,
}

/// AST Node for the list of interfaces an object or interface type implements.
///
/// [Reference](https://spec.graphql.org/October2021/#ImplementsInterfaces)
#[derive(Debug, PartialEq, Clone)]
pub struct ImplementsInterfaces<'a> {
    pub children: bumpalo::collections::Vec<'a, NamedType<'a>>,
}

impl<'a> ImplementsInterfaces<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for an input value definition, which is an argument of a field or directive, or a
/// field of an input object type.
///
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinition<'a> {
    pub description: Description<'a>,
    pub name: &'a str,
    pub of_type: Type<'a>,
    /// A constant default value, which never contains variables.
    pub default_value: Option<Value<'a>>,
    pub directives: Directives<'a>,
    pub span: Span,
}

/// AST Node for a parenthesized list of argument definitions.
///
/// When a field or directive accepts no arguments, this will be an empty list, as can be checked
/// using `ArgumentsDefinition::is_empty`.
/// [Reference](https://spec.graphql.org/October2021/#ArgumentsDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct ArgumentsDefinition<'a> {
    pub children: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
}

impl<'a> ArgumentsDefinition<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Checks whether any of these arguments carries a description, which causes them to be
    /// printed on separate lines.
    #[inline]
    pub fn has_descriptions(&self) -> bool {
        self.children
            .iter()
            .any(|argument| argument.description.is_some())
    }
}

/// AST Node for a field definition of an object or interface type.
///
/// [Reference](https://spec.graphql.org/October2021/#FieldDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinition<'a> {
    pub description: Description<'a>,
    pub name: &'a str,
    pub arguments: ArgumentsDefinition<'a>,
    pub of_type: Type<'a>,
    pub directives: Directives<'a>,
    pub span: Span,
}

/// AST Node for the braced list of field definitions of an object or interface type.
///
/// [Reference](https://spec.graphql.org/October2021/#FieldsDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct FieldsDefinition<'a> {
    pub children: bumpalo::collections::Vec<'a, FieldDefinition<'a>>,
}

impl<'a> FieldsDefinition<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for an object type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeDefinition<'a> {
    pub description: Description<'a>,
    pub name: NamedType<'a>,
    pub interfaces: ImplementsInterfaces<'a>,
    pub directives: Directives<'a>,
    pub fields: FieldsDefinition<'a>,
    pub span: Span,
}

/// AST Node for an interface type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, PartialEq, Clone)]
pub struct InterfaceTypeDefinition<'a> {
    pub description: Description<'a>,
    pub name: NamedType<'a>,
    pub interfaces: ImplementsInterfaces<'a>,
    pub directives: Directives<'a>,
    pub fields: FieldsDefinition<'a>,
    pub span: Span,
}

/// AST Node for the member types of a union, e.g. `= A | B`.
///
/// [Reference](https://spec.graphql.org/October2021/#UnionMemberTypes)
#[derive(Debug, PartialEq, Clone)]
pub struct UnionMemberTypes<'a> {
    pub children: bumpalo::collections::Vec<'a, NamedType<'a>>,
}

impl<'a> UnionMemberTypes<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a union type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, PartialEq, Clone)]
pub struct UnionTypeDefinition<'a> {
    pub description: Description<'a>,
    pub name: NamedType<'a>,
    pub directives: Directives<'a>,
    pub types: UnionMemberTypes<'a>,
    pub span: Span,
}

/// AST Node for a single value of an enum type. Its name is never `true`, `false`, or `null`.
///
/// [Reference](https://spec.graphql.org/October2021/#EnumValueDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct EnumValueDefinition<'a> {
    pub description: Description<'a>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub span: Span,
}

#[derive(Debug, PartialEq, Clone)]
pub struct EnumValuesDefinition<'a> {
    pub children: bumpalo::collections::Vec<'a, EnumValueDefinition<'a>>,
}

impl<'a> EnumValuesDefinition<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for an enum type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, PartialEq, Clone)]
pub struct EnumTypeDefinition<'a> {
    pub description: Description<'a>,
    pub name: NamedType<'a>,
    pub directives: Directives<'a>,
    pub values: EnumValuesDefinition<'a>,
    pub span: Span,
}

/// AST Node for the braced list of fields of an input object type.
///
/// [Reference](https://spec.graphql.org/October2021/#InputFieldsDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct InputFieldsDefinition<'a> {
    pub children: bumpalo::collections::Vec<'a, InputValueDefinition<'a>>,
}

impl<'a> InputFieldsDefinition<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for an input object type definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectTypeDefinition<'a> {
    pub description: Description<'a>,
    pub name: NamedType<'a>,
    pub directives: Directives<'a>,
    pub fields: InputFieldsDefinition<'a>,
    pub span: Span,
}

/// AST Node for any named type definition or type extension.
///
/// [Reference](https://spec.graphql.org/October2021/#TypeDefinition)
#[derive(Debug, PartialEq, Clone)]
pub enum TypeDefinition<'a> {
    Scalar(ScalarTypeDefinition<'a>),
    Object(ObjectTypeDefinition<'a>),
    Interface(InterfaceTypeDefinition<'a>),
    Union(UnionTypeDefinition<'a>),
    Enum(EnumTypeDefinition<'a>),
    InputObject(InputObjectTypeDefinition<'a>),
}

impl<'a> TypeDefinition<'a> {
    /// Returns the name of the defined or extended type.
    #[inline]
    pub fn name(&self) -> NamedType<'a> {
        match self {
            TypeDefinition::Scalar(scalar) => scalar.name,
            TypeDefinition::Object(object) => object.name,
            TypeDefinition::Interface(interface) => interface.name,
            TypeDefinition::Union(union) => union.name,
            TypeDefinition::Enum(enum_type) => enum_type.name,
            TypeDefinition::InputObject(input) => input.name,
        }
    }

    /// Returns the keyword this kind of type is introduced with.
    #[inline]
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeDefinition::Scalar(_) => "scalar",
            TypeDefinition::Object(_) => "type",
            TypeDefinition::Interface(_) => "interface",
            TypeDefinition::Union(_) => "union",
            TypeDefinition::Enum(_) => "enum",
            TypeDefinition::InputObject(_) => "input",
        }
    }

    pub fn span(&self) -> Span {
        match self {
            TypeDefinition::Scalar(scalar) => scalar.span,
            TypeDefinition::Object(object) => object.span,
            TypeDefinition::Interface(interface) => interface.span,
            TypeDefinition::Union(union) => union.span,
            TypeDefinition::Enum(enum_type) => enum_type.span,
            TypeDefinition::InputObject(input) => input.span,
        }
    }
}

/// A location a directive may be applied to, as listed by a [`DirectiveDefinition`].
///
/// [Reference](https://spec.graphql.org/October2021/#DirectiveLocation)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// Returns the name of this location as written in a directive definition.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// Looks up a location by its name, e.g. `FIELD_DEFINITION`.
    pub fn from_name(name: &str) -> Option<Self> {
        let location = match name {
            "QUERY" => DirectiveLocation::Query,
            "MUTATION" => DirectiveLocation::Mutation,
            "SUBSCRIPTION" => DirectiveLocation::Subscription,
            "FIELD" => DirectiveLocation::Field,
            "FRAGMENT_DEFINITION" => DirectiveLocation::FragmentDefinition,
            "FRAGMENT_SPREAD" => DirectiveLocation::FragmentSpread,
            "INLINE_FRAGMENT" => DirectiveLocation::InlineFragment,
            "VARIABLE_DEFINITION" => DirectiveLocation::VariableDefinition,
            "SCHEMA" => DirectiveLocation::Schema,
            "SCALAR" => DirectiveLocation::Scalar,
            "OBJECT" => DirectiveLocation::Object,
            "FIELD_DEFINITION" => DirectiveLocation::FieldDefinition,
            "ARGUMENT_DEFINITION" => DirectiveLocation::ArgumentDefinition,
            "INTERFACE" => DirectiveLocation::Interface,
            "UNION" => DirectiveLocation::Union,
            "ENUM" => DirectiveLocation::Enum,
            "ENUM_VALUE" => DirectiveLocation::EnumValue,
            "INPUT_OBJECT" => DirectiveLocation::InputObject,
            "INPUT_FIELD_DEFINITION" => DirectiveLocation::InputFieldDefinition,
            _ => return None,
        };
        Some(location)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct DirectiveLocations<'a> {
    pub children: bumpalo::collections::Vec<'a, DirectiveLocation>,
}

impl<'a> DirectiveLocations<'a> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a directive definition, e.g. `directive @key(fields: String!) repeatable on OBJECT`.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct DirectiveDefinition<'a> {
    pub description: Description<'a>,
    pub name: &'a str,
    pub arguments: ArgumentsDefinition<'a>,
    pub repeatable: bool,
    pub locations: DirectiveLocations<'a>,
    pub span: Span,
}
