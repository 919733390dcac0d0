use graphql_syntax::ast::*;
use proptest::prelude::*;

fn name() -> impl Strategy<Value = String> {
    "[a-z_][a-zA-Z0-9_]{0,6}"
}

fn enum_name() -> impl Strategy<Value = String> {
    "[A-Z][A-Z_]{0,5}"
}

fn quoted_string() -> impl Strategy<Value = String> {
    "[^\\p{Cc}]{0,8}".prop_map(|value| {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    })
}

fn block_string() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z ]{0,8}", 1..4)
        .prop_map(|lines| format!("\"\"\"{}\"\"\"", lines.join("\n")))
}

fn value() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        "-?[1-9][0-9]{0,5}|0",
        "-?[1-9][0-9]{0,3}\\.[0-9]{1,3}([eE][+-]?[0-9]{1,2})?",
        Just("true".to_string()),
        Just("false".to_string()),
        Just("null".to_string()),
        enum_name(),
        name().prop_map(|name| format!("${}", name)),
        quoted_string(),
        block_string(),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|values| format!("[{}]", values.join(", "))),
            prop::collection::vec((name(), inner), 0..4).prop_map(|fields| {
                let fields: Vec<String> = fields
                    .into_iter()
                    .map(|(name, value)| format!("{}: {}", name, value))
                    .collect();
                format!("{{{}}}", fields.join(" "))
            }),
        ]
    })
}

fn arguments() -> impl Strategy<Value = String> {
    prop::collection::vec((name(), value()), 0..3).prop_map(|arguments| {
        if arguments.is_empty() {
            String::new()
        } else {
            let arguments: Vec<String> = arguments
                .into_iter()
                .map(|(name, value)| format!("{}: {}", name, value))
                .collect();
            format!("({})", arguments.join(", "))
        }
    })
}

fn directives() -> impl Strategy<Value = String> {
    prop::collection::vec((name(), arguments()), 0..3).prop_map(|directives| {
        directives
            .into_iter()
            .map(|(name, arguments)| format!(" @{}{}", name, arguments))
            .collect()
    })
}

fn selection_set() -> impl Strategy<Value = String> {
    let field = (prop::option::of(name()), name(), arguments(), directives())
        .prop_map(|(alias, name, arguments, directives)| match alias {
            Some(alias) => format!("{}: {}{}{}", alias, name, arguments, directives),
            None => format!("{}{}{}", name, arguments, directives),
        })
        .boxed();
    let leaf = prop::collection::vec(field.clone(), 1..4)
        .prop_map(|fields| format!("{{ {} }}", fields.join(" ")));
    leaf.prop_recursive(3, 24, 4, move |inner| {
        let nested = (field.clone(), inner.clone())
            .prop_map(|(field, selection_set)| format!("{} {}", field, selection_set));
        let inline = (prop::option::of(enum_name()), directives(), inner)
            .prop_map(|(type_condition, directives, selection_set)| match type_condition {
                Some(type_condition) => {
                    format!("... on {}{} {}", type_condition, directives, selection_set)
                }
                None => format!("...{} {}", directives, selection_set),
            });
        let spread = (enum_name(), directives())
            .prop_map(|(name, directives)| format!("...{}{}", name, directives));
        prop::collection::vec(prop_oneof![field.clone(), nested, inline, spread], 1..4)
            .prop_map(|selections| format!("{{ {} }}", selections.join(", ")))
    })
}

fn operation() -> impl Strategy<Value = String> {
    let variables = prop::collection::vec((name(), "Int|String!|\\[ID!\\]!"), 0..3);
    prop_oneof![
        selection_set(),
        (
            prop_oneof![Just("query"), Just("mutation"), Just("subscription")],
            prop::option::of(name()),
            variables,
            directives(),
            selection_set(),
        )
            .prop_map(|(kind, name, variables, directives, selection_set)| {
                let variables = if variables.is_empty() {
                    String::new()
                } else {
                    let variables: Vec<String> = variables
                        .into_iter()
                        .map(|(name, of_type)| format!("${}: {}", name, of_type))
                        .collect();
                    format!("({})", variables.join(", "))
                };
                format!(
                    "{} {}{}{} {}",
                    kind,
                    name.unwrap_or_default(),
                    variables,
                    directives,
                    selection_set
                )
            }),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(operation(), 1..4).prop_map(|operations| operations.join("\n"))
}

proptest! {
    #[test]
    fn printing_round_trips(source in document()) {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, &source).unwrap();
        let printed = document.print();
        let reparsed = Document::parse(&ctx, &printed).unwrap();
        prop_assert_eq!(document, reparsed);
        prop_assert_eq!(reparsed.print(), printed);
    }

    #[test]
    fn printing_is_deterministic(source in document()) {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, &source).unwrap();
        prop_assert_eq!(document.print(), document.print());
        let again = Document::parse(&ctx, &source).unwrap();
        prop_assert_eq!(document.print(), again.print());
    }

    #[test]
    fn sibling_order_is_preserved(names in prop::collection::vec(name(), 1..8)) {
        let ctx = ASTContext::new();
        let arguments: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(index, name)| format!("{}: {}", name, index))
            .collect();
        let directives: Vec<String> = names.iter().map(|name| format!("@{}", name)).collect();
        let source = format!(
            "{{ field({}) {} {{ {} }} }}",
            arguments.join(", "),
            directives.join(" "),
            names.join(" ")
        );
        let document = Document::parse(&ctx, &source).unwrap();
        let field = document.definitions[0].operation().unwrap().selection_set.selections[0]
            .field()
            .unwrap();

        let argument_names: Vec<&str> =
            field.arguments.children.iter().map(|argument| argument.name).collect();
        let directive_names: Vec<&str> =
            field.directives.children.iter().map(|directive| directive.name).collect();
        let selection_names: Vec<&str> = field
            .selection_set
            .selections
            .iter()
            .filter_map(|selection| selection.field())
            .map(|field| field.name)
            .collect();
        prop_assert_eq!(&argument_names, &names);
        prop_assert_eq!(&directive_names, &names);
        prop_assert_eq!(&selection_names, &names);
    }
}
