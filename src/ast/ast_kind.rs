use std::fmt;

/// An enum of identifiers representing AST nodes.
///
/// This enum can be printed using the [`fmt::Display`] trait.
/// When parsing this enum is used to indicate what AST node encountered a parsing error.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ASTKind {
    /// See: [crate::ast::Definition]
    Definition,
    /// See: [crate::ast::Document]
    Document,
    /// See: [crate::ast::OperationDefinition]
    OperationDefinition,
    /// See: [crate::ast::OperationKind]
    OperationKind,
    /// See: [crate::ast::FragmentDefinition]
    FragmentDefinition,
    /// See: [crate::ast::VariableDefinitions]
    VariableDefinitions,
    /// See: [crate::ast::VariableDefinition]
    VariableDefinition,
    /// See: [crate::ast::Type]
    Type,
    /// See: [crate::ast::NamedType]
    NamedType,
    /// See: `ListType` on [crate::ast::Type]
    ListType,
    /// See: `NonNullType` on [crate::ast::Type]
    NonNullType,
    /// See: [crate::ast::Field]
    Field,
    /// See: [crate::ast::FragmentSpread]
    FragmentSpread,
    /// See: [crate::ast::InlineFragment]
    InlineFragment,
    /// See: [crate::ast::SelectionSet]
    SelectionSet,
    /// See: [crate::ast::Selection]
    Selection,
    /// See: [crate::ast::Directives]
    Directives,
    /// See: [crate::ast::Directive]
    Directive,
    /// See: [crate::ast::Arguments]
    Arguments,
    /// See: [crate::ast::Argument]
    Argument,
    /// See: [crate::ast::ObjectValue]
    Object,
    /// See: [crate::ast::ObjectField]
    ObjectField,
    /// See: [crate::ast::Value]
    Value,
    /// See: [crate::ast::Variable]
    Variable,
    /// See: [crate::ast::StringValue]
    String,
    /// See: [crate::ast::FloatValue]
    Float,
    /// See: [crate::ast::IntValue]
    Int,
    /// See: [crate::ast::BooleanValue]
    Boolean,
    /// See: [crate::ast::EnumValue]
    Enum,
    /// See: [crate::ast::ListValue]
    List,
    /// A constant [crate::ast::Value], which may not contain variables
    ConstValue,
    /// See: [crate::ast::Description]
    Description,
    /// Any of the type-system definitions of [crate::ast::Definition]
    TypeSystemDefinition,
    /// Any of the extensions of [crate::ast::Definition]
    TypeSystemExtension,
    /// See: [crate::ast::SchemaDefinition]
    SchemaDefinition,
    /// See: [crate::ast::RootOperationTypeDefinition]
    RootOperationTypeDefinition,
    /// See: [crate::ast::TypeDefinition]
    TypeDefinition,
    /// See: [crate::ast::ScalarTypeDefinition]
    ScalarTypeDefinition,
    /// See: [crate::ast::ObjectTypeDefinition]
    ObjectTypeDefinition,
    /// See: [crate::ast::InterfaceTypeDefinition]
    InterfaceTypeDefinition,
    /// See: [crate::ast::UnionTypeDefinition]
    UnionTypeDefinition,
    /// See: [crate::ast::EnumTypeDefinition]
    EnumTypeDefinition,
    /// See: [crate::ast::InputObjectTypeDefinition]
    InputObjectTypeDefinition,
    /// See: [crate::ast::ImplementsInterfaces]
    ImplementsInterfaces,
    /// See: [crate::ast::FieldsDefinition]
    FieldsDefinition,
    /// See: [crate::ast::FieldDefinition]
    FieldDefinition,
    /// See: [crate::ast::ArgumentsDefinition]
    ArgumentsDefinition,
    /// See: [crate::ast::InputValueDefinition]
    InputValueDefinition,
    /// See: [crate::ast::InputFieldsDefinition]
    InputFieldsDefinition,
    /// See: [crate::ast::UnionMemberTypes]
    UnionMemberTypes,
    /// See: [crate::ast::EnumValuesDefinition]
    EnumValuesDefinition,
    /// See: [crate::ast::EnumValueDefinition]
    EnumValueDefinition,
    /// See: [crate::ast::DirectiveDefinition]
    DirectiveDefinition,
    /// See: [crate::ast::DirectiveLocation]
    DirectiveLocation,
    /// The end of the source text, after which nothing may follow
    End,
}

impl fmt::Display for ASTKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ASTKind::Definition => f.write_str("Definition"),
            ASTKind::Document => f.write_str("Document"),
            ASTKind::End => f.write_str("end of input"),
            ASTKind::OperationDefinition => f.write_str("Operation Definition"),
            ASTKind::OperationKind => f.write_str("Operation Kind"),
            ASTKind::FragmentDefinition => f.write_str("Fragment Definition"),
            ASTKind::VariableDefinitions => f.write_str("Variable Definitions"),
            ASTKind::VariableDefinition => f.write_str("Variable Definition"),
            ASTKind::Type => f.write_str("Type"),
            ASTKind::NamedType => f.write_str("Type Name"),
            ASTKind::ListType => f.write_str("List Type"),
            ASTKind::NonNullType => f.write_str("Non-null Type"),
            ASTKind::Field => f.write_str("Field"),
            ASTKind::FragmentSpread => f.write_str("Fragment Spread"),
            ASTKind::InlineFragment => f.write_str("Inline Fragment"),
            ASTKind::SelectionSet => f.write_str("Selection Set"),
            ASTKind::Selection => f.write_str("Selection"),
            ASTKind::Directives => f.write_str("Directives"),
            ASTKind::Directive => f.write_str("Directive"),
            ASTKind::Arguments => f.write_str("Arguments"),
            ASTKind::Argument => f.write_str("Argument"),
            ASTKind::Object => f.write_str("Object"),
            ASTKind::ObjectField => f.write_str("Object Field"),
            ASTKind::Value => f.write_str("Value"),
            ASTKind::Variable => f.write_str("Variable"),
            ASTKind::String => f.write_str("String"),
            ASTKind::Float => f.write_str("Float"),
            ASTKind::Int => f.write_str("Integer"),
            ASTKind::Boolean => f.write_str("Boolean"),
            ASTKind::Enum => f.write_str("Enum"),
            ASTKind::List => f.write_str("List"),
            ASTKind::ConstValue => f.write_str("Constant Value"),
            ASTKind::Description => f.write_str("Description"),
            ASTKind::TypeSystemDefinition => f.write_str("Type System Definition"),
            ASTKind::TypeSystemExtension => f.write_str("Type System Extension"),
            ASTKind::SchemaDefinition => f.write_str("Schema Definition"),
            ASTKind::RootOperationTypeDefinition => f.write_str("Root Operation Type"),
            ASTKind::TypeDefinition => f.write_str("Type Definition"),
            ASTKind::ScalarTypeDefinition => f.write_str("Scalar Type Definition"),
            ASTKind::ObjectTypeDefinition => f.write_str("Object Type Definition"),
            ASTKind::InterfaceTypeDefinition => f.write_str("Interface Type Definition"),
            ASTKind::UnionTypeDefinition => f.write_str("Union Type Definition"),
            ASTKind::EnumTypeDefinition => f.write_str("Enum Type Definition"),
            ASTKind::InputObjectTypeDefinition => f.write_str("Input Object Type Definition"),
            ASTKind::ImplementsInterfaces => f.write_str("Implemented Interfaces"),
            ASTKind::FieldsDefinition => f.write_str("Fields Definition"),
            ASTKind::FieldDefinition => f.write_str("Field Definition"),
            ASTKind::ArgumentsDefinition => f.write_str("Arguments Definition"),
            ASTKind::InputValueDefinition => f.write_str("Input Value Definition"),
            ASTKind::InputFieldsDefinition => f.write_str("Input Fields Definition"),
            ASTKind::UnionMemberTypes => f.write_str("Union Member Types"),
            ASTKind::EnumValuesDefinition => f.write_str("Enum Values Definition"),
            ASTKind::EnumValueDefinition => f.write_str("Enum Value Definition"),
            ASTKind::DirectiveDefinition => f.write_str("Directive Definition"),
            ASTKind::DirectiveLocation => f.write_str("Directive Location"),
        }
    }
}
