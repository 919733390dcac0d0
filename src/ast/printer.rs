use super::ast::*;
use super::type_system::*;
use std::{fmt, fmt::Write};

/// Prints AST Nodes back to GraphQL source text in a canonical layout.
///
/// Every node implements this, so a single value or type can be printed as well as a whole
/// [Document]. The printed text is independent of the arena, since it's written to a heap
/// allocated `String` or any other [Write] sink.
pub trait PrintNode {
    /// Writes the node to `buffer`, indenting nested blocks relative to `level`.
    ///
    /// Each level is two spaces deep. Top-level callers pass `0`.
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result;

    /// Prints the node to a new `String`.
    fn print(&self) -> String {
        let mut buf = String::new();
        if self.write_to_buffer(0, &mut buf).is_err() {
            buf.clear();
        }
        buf
    }
}

impl fmt::Display for dyn PrintNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(0, f)
    }
}

macro_rules! print_leaf {
    ($($node:ident => $field:ident),+ $(,)?) => {
        $(
            impl<'a> PrintNode for $node<'a> {
                #[inline]
                fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
                    buffer.write_str(self.$field)
                }
            }
        )+
    };
}

print_leaf!(
    NamedType => name,
    EnumValue => value,
    FloatValue => value,
    IntValue => value,
);

impl<'a> PrintNode for Variable<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_char('$')?;
        buffer.write_str(self.name)
    }
}

impl PrintNode for BooleanValue {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(if self.value { "true" } else { "false" })
    }
}

impl<'a> PrintNode for StringValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        use lexical_core::*;
        const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
        const OPTIONS: WriteIntegerOptions = WriteIntegerOptions::new();

        if self.is_block() {
            buffer.write_str("\"\"\"\n")?;
            for line in self.value.split('\n') {
                if !line.is_empty() {
                    write_indent(level, buffer)?;
                    buffer.write_str(&line.replace(r#"""""#, r#"\""""#))?;
                }
                buffer.write_char('\n')?;
            }
            write_indent(level, buffer)?;
            buffer.write_str("\"\"\"")
        } else {
            let mut buf = [b'0'; u32::FORMATTED_SIZE];
            buffer.write_char('"')?;
            for c in self.value.chars() {
                match c {
                    '\r' => buffer.write_str(r"\r")?,
                    '\n' => buffer.write_str(r"\n")?,
                    '\t' => buffer.write_str(r"\t")?,
                    '\u{0008}' => buffer.write_str(r"\b")?,
                    '\u{000C}' => buffer.write_str(r"\f")?,
                    '"' => buffer.write_str("\\\"")?,
                    '\\' => buffer.write_str(r"\\")?,
                    '\u{0000}'..='\u{001F}' => {
                        let hex = write_with_options::<_, FORMAT>(c as u32, &mut buf, &OPTIONS);
                        let hex = std::str::from_utf8(hex).map_err(|_| fmt::Error)?;
                        write!(buffer, "\\u{:0>4}", hex)?;
                    }
                    _ => buffer.write_char(c)?,
                };
            }
            buffer.write_char('"')
        }
    }
}

impl<'a> PrintNode for Value<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Variable(variable) => variable.write_to_buffer(level, buffer),
            Value::Int(int) => int.write_to_buffer(level, buffer),
            Value::Float(float) => float.write_to_buffer(level, buffer),
            Value::String(string) => string.write_to_buffer(level, buffer),
            Value::Boolean(boolean) => boolean.write_to_buffer(level, buffer),
            Value::Null => buffer.write_str("null"),
            Value::Enum(value) => value.write_to_buffer(level, buffer),
            Value::List(list) => list.write_to_buffer(level, buffer),
            Value::Object(object) => object.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> PrintNode for ObjectField<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.name)?;
        buffer.write_str(": ")?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for ObjectValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_enclosed('{', &self.children, '}', level, buffer)
    }
}

impl<'a> PrintNode for ListValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_enclosed('[', &self.children, ']', level, buffer)
    }
}

impl<'a> PrintNode for Argument<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.name)?;
        buffer.write_str(": ")?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Arguments<'a> {
    /// Arguments are omitted entirely when there are none.
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write_enclosed('(', &self.children, ')', level, buffer)
    }
}

impl<'a> PrintNode for Directive<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_char('@')?;
        buffer.write_str(self.name)?;
        self.arguments.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Directives<'a> {
    /// Each directive is preceded by a space, so directives are appended directly to a node.
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.children.iter().try_for_each(|directive| {
            buffer.write_char(' ')?;
            directive.write_to_buffer(level, buffer)
        })
    }
}

impl<'a> PrintNode for SelectionSet<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_braced(&self.selections, level, buffer)
    }
}

impl<'a> PrintNode for Selection<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Selection::Field(field) => field.write_to_buffer(level, buffer),
            Selection::FragmentSpread(spread) => spread.write_to_buffer(level, buffer),
            Selection::InlineFragment(fragment) => fragment.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> PrintNode for Field<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if let Some(alias) = self.alias {
            buffer.write_str(alias)?;
            buffer.write_str(": ")?;
        }
        buffer.write_str(self.name)?;
        self.arguments.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.selection_set.selections, level, buffer)
    }
}

impl<'a> PrintNode for FragmentSpread<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("...")?;
        self.name.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for InlineFragment<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("...")?;
        if let Some(type_condition) = &self.type_condition {
            buffer.write_str(" on ")?;
            type_condition.write_to_buffer(level, buffer)?;
        }
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.selection_set.selections, level, buffer)
    }
}

impl<'a> PrintNode for Type<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Type::NamedType(named_type) => named_type.write_to_buffer(level, buffer),
            Type::ListType(of_type) => {
                buffer.write_char('[')?;
                of_type.write_to_buffer(level, buffer)?;
                buffer.write_char(']')
            }
            Type::NonNullType(of_type) => {
                of_type.write_to_buffer(level, buffer)?;
                buffer.write_char('!')
            }
        }
    }
}

impl<'a> PrintNode for VariableDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.variable.write_to_buffer(level, buffer)?;
        buffer.write_str(": ")?;
        self.of_type.write_to_buffer(level, buffer)?;
        write_default_value(&self.default_value, level, buffer)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for VariableDefinitions<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write_enclosed('(', &self.children, ')', level, buffer)
    }
}

impl<'a> PrintNode for FragmentDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("fragment ")?;
        self.name.write_to_buffer(level, buffer)?;
        buffer.write_str(" on ")?;
        self.type_condition.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.selection_set.selections, level, buffer)
    }
}

impl PrintNode for OperationKind {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.as_str())
    }
}

impl<'a> PrintNode for OperationDefinition<'a> {
    /// Anonymous queries without variables or directives print in their shorthand form.
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        let shorthand = self.operation == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty();
        if shorthand {
            return self.selection_set.write_to_buffer(level, buffer);
        }
        self.operation.write_to_buffer(level, buffer)?;
        match &self.name {
            Some(name) => {
                buffer.write_char(' ')?;
                name.write_to_buffer(level, buffer)?;
            }
            None if !self.variable_definitions.is_empty() => buffer.write_char(' ')?,
            None => {}
        }
        self.variable_definitions.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.selection_set.selections, level, buffer)
    }
}

impl<'a> PrintNode for Definition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Definition::Operation(operation) => operation.write_to_buffer(level, buffer),
            Definition::Fragment(fragment) => fragment.write_to_buffer(level, buffer),
            Definition::Schema(schema) => schema.write_to_buffer(level, buffer),
            Definition::Type(type_definition) => type_definition.write_to_buffer(level, buffer),
            Definition::Directive(directive) => directive.write_to_buffer(level, buffer),
            Definition::SchemaExtension(schema) => {
                buffer.write_str("extend ")?;
                schema.write_to_buffer(level, buffer)
            }
            Definition::TypeExtension(type_definition) => {
                buffer.write_str("extend ")?;
                type_definition.write_to_buffer(level, buffer)
            }
        }
    }
}

impl<'a> PrintNode for Document<'a> {
    /// Definitions are separated by a blank line.
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_separated(&self.definitions, "\n\n", level, buffer)
    }

    #[inline]
    fn print(&self) -> String {
        let mut buf = String::with_capacity(self.size_hint);
        match self.write_to_buffer(0, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

/// Writes a description on its own line(s) before the node it describes.
#[inline]
fn write_description(
    description: &Description,
    level: usize,
    buffer: &mut dyn Write,
) -> fmt::Result {
    if let Some(description) = description {
        description.write_to_buffer(level, buffer)?;
        buffer.write_char('\n')?;
        write_indent(level, buffer)?;
    }
    Ok(())
}

/// Writes items enclosed in braces, one per line and indented one level deeper than `level`.
#[inline]
fn write_braced<T: PrintNode>(items: &[T], level: usize, buffer: &mut dyn Write) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    buffer.write_char('{')?;
    for item in items.iter() {
        buffer.write_char('\n')?;
        write_indent(level + 1, buffer)?;
        item.write_to_buffer(level + 1, buffer)?;
    }
    buffer.write_char('\n')?;
    write_indent(level, buffer)?;
    buffer.write_char('}')
}

/// Appends a braced block to a node, or nothing if there are no items.
#[inline]
fn write_block<T: PrintNode>(items: &[T], level: usize, buffer: &mut dyn Write) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    buffer.write_char(' ')?;
    write_braced(items, level, buffer)
}

/// Writes items on one line, separated by commas and enclosed by `open` and `close`.
#[inline]
fn write_enclosed<T: PrintNode>(
    open: char,
    items: &[T],
    close: char,
    level: usize,
    buffer: &mut dyn Write,
) -> fmt::Result {
    buffer.write_char(open)?;
    write_separated(items, ", ", level, buffer)?;
    buffer.write_char(close)
}

#[inline]
fn write_default_value(
    default_value: &Option<Value>,
    level: usize,
    buffer: &mut dyn Write,
) -> fmt::Result {
    match default_value {
        Some(value) => {
            buffer.write_str(" = ")?;
            value.write_to_buffer(level, buffer)
        }
        None => Ok(()),
    }
}

#[inline]
fn write_separated<T: PrintNode>(
    items: &[T],
    separator: &str,
    level: usize,
    buffer: &mut dyn Write,
) -> fmt::Result {
    let mut first = true;
    for item in items.iter() {
        if first {
            first = false;
        } else {
            buffer.write_str(separator)?;
        }
        item.write_to_buffer(level, buffer)?;
    }
    Ok(())
}

impl<'a> PrintNode for RootOperationTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.operation.write_to_buffer(level, buffer)?;
        buffer.write_str(": ")?;
        self.named_type.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for SchemaDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str("schema")?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.operation_types.children, level, buffer)
    }
}

impl<'a> PrintNode for ScalarTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str("scalar ")?;
        self.name.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for ImplementsInterfaces<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_str(" implements ")?;
            write_separated(&self.children, " & ", level, buffer)?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for InputValueDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "{}: ", self.name)?;
        self.of_type.write_to_buffer(level, buffer)?;
        write_default_value(&self.default_value, level, buffer)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for ArgumentsDefinition<'a> {
    /// Arguments are printed inline, unless any of them carries a description, in which case
    /// each argument is printed on its own line.
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if self.is_empty() {
            Ok(())
        } else if self.has_descriptions() {
            buffer.write_char('(')?;
            for argument in self.children.iter() {
                buffer.write_char('\n')?;
                write_indent(level + 1, buffer)?;
                argument.write_to_buffer(level + 1, buffer)?;
            }
            buffer.write_char('\n')?;
            write_indent(level, buffer)?;
            buffer.write_char(')')
        } else {
            write_enclosed('(', &self.children, ')', level, buffer)
        }
    }
}

impl<'a> PrintNode for FieldDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str(self.name)?;
        self.arguments.write_to_buffer(level, buffer)?;
        buffer.write_str(": ")?;
        self.of_type.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for ObjectTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str("type ")?;
        self.name.write_to_buffer(level, buffer)?;
        self.interfaces.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.fields.children, level, buffer)
    }
}

impl<'a> PrintNode for InterfaceTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str("interface ")?;
        self.name.write_to_buffer(level, buffer)?;
        self.interfaces.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.fields.children, level, buffer)
    }
}

impl<'a> PrintNode for UnionTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str("union ")?;
        self.name.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        if !self.types.is_empty() {
            buffer.write_str(" = ")?;
            write_separated(&self.types.children, " | ", level, buffer)?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for EnumValueDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str(self.name)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for EnumTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str("enum ")?;
        self.name.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.values.children, level, buffer)
    }
}

impl<'a> PrintNode for InputObjectTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str("input ")?;
        self.name.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.fields.children, level, buffer)
    }
}

impl<'a> PrintNode for TypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            TypeDefinition::Scalar(scalar) => scalar.write_to_buffer(level, buffer),
            TypeDefinition::Object(object) => object.write_to_buffer(level, buffer),
            TypeDefinition::Interface(interface) => interface.write_to_buffer(level, buffer),
            TypeDefinition::Union(union) => union.write_to_buffer(level, buffer),
            TypeDefinition::Enum(enum_type) => enum_type.write_to_buffer(level, buffer),
            TypeDefinition::InputObject(input) => input.write_to_buffer(level, buffer),
        }
    }
}

impl PrintNode for DirectiveLocation {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.as_str())
    }
}

impl<'a> PrintNode for DirectiveDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "directive @{}", self.name)?;
        self.arguments.write_to_buffer(level, buffer)?;
        if self.repeatable {
            buffer.write_str(" repeatable")?;
        }
        buffer.write_str(" on ")?;
        write_separated(&self.locations.children, " | ", level, buffer)
    }
}

macro_rules! display {
    ($($for_type:ident),+ $(,)?) => {
        $(
            impl<'a> fmt::Display for $for_type<'a> {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.write_to_buffer(0, f)
                }
            }
        )+
    };
}

display!(
    NamedType,
    Variable,
    EnumValue,
    FloatValue,
    IntValue,
    StringValue,
    Value,
    ObjectField,
    ObjectValue,
    ListValue,
    Argument,
    Arguments,
    Directive,
    Directives,
    SelectionSet,
    Selection,
    Field,
    FragmentSpread,
    InlineFragment,
    Type,
    VariableDefinition,
    VariableDefinitions,
    FragmentDefinition,
    OperationDefinition,
    Definition,
    Document,
    RootOperationTypeDefinition,
    SchemaDefinition,
    ScalarTypeDefinition,
    ImplementsInterfaces,
    InputValueDefinition,
    ArgumentsDefinition,
    FieldDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    EnumValueDefinition,
    EnumTypeDefinition,
    InputObjectTypeDefinition,
    TypeDefinition,
    DirectiveDefinition,
);

impl fmt::Display for BooleanValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(0, f)
    }
}

impl fmt::Display for OperationKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for DirectiveLocation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[inline(always)]
fn write_indent(level: usize, buffer: &mut dyn Write) -> fmt::Result {
    for _ in 0..level {
        buffer.write_str("  ")?
    }
    Ok(())
}
