use super::ast::*;
use super::type_system::*;
use bumpalo::collections::{vec::IntoIter, Vec};

macro_rules! into_iter {
    ($($for_type:ident => $field:ident: $item:ident),+ $(,)?) => {
        $(
            impl<'a> IntoIterator for $for_type<'a> {
                type Item = $item<'a>;
                type IntoIter = IntoIter<'a, $item<'a>>;
                #[inline]
                fn into_iter(self) -> Self::IntoIter {
                    self.$field.into_iter()
                }
            }
        )+
    };
}

into_iter!(
    ListValue => children: Value,
    ObjectValue => children: ObjectField,
    Arguments => children: Argument,
    Directives => children: Directive,
    VariableDefinitions => children: VariableDefinition,
    SelectionSet => selections: Selection,
    RootOperationTypeDefinitions => children: RootOperationTypeDefinition,
    ImplementsInterfaces => children: NamedType,
    ArgumentsDefinition => children: InputValueDefinition,
    FieldsDefinition => children: FieldDefinition,
    UnionMemberTypes => children: NamedType,
    EnumValuesDefinition => children: EnumValueDefinition,
    InputFieldsDefinition => children: InputValueDefinition,
);

impl<'a> IntoIterator for DirectiveLocations<'a> {
    type Item = DirectiveLocation;
    type IntoIter = IntoIter<'a, DirectiveLocation>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

/// Creates an empty AST Node whose lists are allocated in the given arena.
pub trait DefaultIn<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self;
}

impl<'a, T> DefaultIn<'a> for T
where
    T: Default,
{
    fn default_in(_ctx: &'a bumpalo::Bump) -> Self {
        Self::default()
    }
}

macro_rules! default_in {
    ($($for_type:ident),+ $(,)?) => {
        $(
            impl<'a> DefaultIn<'a> for $for_type<'a> {
                fn default_in(arena: &'a bumpalo::Bump) -> Self {
                    $for_type {
                        children: Vec::new_in(arena),
                    }
                }
            }
        )+
    };
}

default_in!(
    Arguments,
    Directives,
    VariableDefinitions,
    RootOperationTypeDefinitions,
    ImplementsInterfaces,
    ArgumentsDefinition,
    FieldsDefinition,
    UnionMemberTypes,
    EnumValuesDefinition,
    InputFieldsDefinition,
    DirectiveLocations,
);

impl<'a> DefaultIn<'a> for Document<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Document {
            definitions: Vec::new_in(arena),
            size_hint: 0,
            span: Span::default(),
        }
    }
}

impl<'a> DefaultIn<'a> for ObjectValue<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        ObjectValue {
            children: Vec::new_in(arena),
            span: Span::default(),
        }
    }
}

impl<'a> DefaultIn<'a> for ListValue<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        ListValue {
            children: Vec::new_in(arena),
            span: Span::default(),
        }
    }
}

impl<'a> DefaultIn<'a> for SelectionSet<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        SelectionSet {
            selections: Vec::new_in(arena),
            span: Span::default(),
        }
    }
}

impl<'a> From<&'a str> for NamedType<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        NamedType {
            name,
            span: Span::default(),
        }
    }
}

impl<'a> From<&'a str> for Variable<'a> {
    #[inline]
    fn from(name: &'a str) -> Variable<'a> {
        Variable {
            name,
            span: Span::default(),
        }
    }
}

impl From<bool> for BooleanValue {
    #[inline]
    fn from(value: bool) -> Self {
        BooleanValue {
            value,
            span: Span::default(),
        }
    }
}

impl<'a> From<&'a str> for StringValue<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        StringValue {
            value,
            block: false,
            span: Span::default(),
        }
    }
}

impl<'a> From<BooleanValue> for Value<'a> {
    #[inline]
    fn from(x: BooleanValue) -> Self {
        Value::Boolean(x)
    }
}

macro_rules! from_variant {
    ($($from:ident => $to:ident::$variant:ident),+ $(,)?) => {
        $(
            impl<'a> From<$from<'a>> for $to<'a> {
                #[inline]
                fn from(x: $from<'a>) -> Self {
                    $to::$variant(x)
                }
            }
        )+
    };
}

from_variant!(
    Variable => Value::Variable,
    StringValue => Value::String,
    FloatValue => Value::Float,
    IntValue => Value::Int,
    EnumValue => Value::Enum,
    ListValue => Value::List,
    ObjectValue => Value::Object,
    NamedType => Type::NamedType,
    Field => Selection::Field,
    FragmentSpread => Selection::FragmentSpread,
    InlineFragment => Selection::InlineFragment,
    OperationDefinition => Definition::Operation,
    FragmentDefinition => Definition::Fragment,
    DirectiveDefinition => Definition::Directive,
    TypeDefinition => Definition::Type,
    ScalarTypeDefinition => TypeDefinition::Scalar,
    ObjectTypeDefinition => TypeDefinition::Object,
    InterfaceTypeDefinition => TypeDefinition::Interface,
    UnionTypeDefinition => TypeDefinition::Union,
    EnumTypeDefinition => TypeDefinition::Enum,
    InputObjectTypeDefinition => TypeDefinition::InputObject,
);
