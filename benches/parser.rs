#[macro_use]
extern crate bencher;

use bencher::Bencher;

fn graphql_ast_parse_graphql_syntax(bench: &mut Bencher) {
    use graphql_syntax::ast::*;
    bench.iter(|| {
        let ctx = ASTContext::new();
        Document::parse(&ctx, QUERY).ok();
    });
}

fn graphql_ast_parse_async_graphql_parser(bench: &mut Bencher) {
    use async_graphql_parser::parse_query;
    bench.iter(|| {
        parse_query::<&str>(QUERY).ok();
    });
}

fn graphql_ast_parse_graphql_parser(bench: &mut Bencher) {
    use graphql_parser::query::parse_query;
    bench.iter(|| {
        parse_query::<&str>(QUERY).ok();
    });
}

fn graphql_ast_parse_apollo_parser(bench: &mut Bencher) {
    use apollo_parser::Parser;
    bench.iter(|| {
        let parser = Parser::new(QUERY);
        let cst = parser.parse();
        cst.document();
    });
}

fn graphql_schema_parse_graphql_syntax(bench: &mut Bencher) {
    use graphql_syntax::ast::*;
    bench.iter(|| {
        let ctx = ASTContext::new();
        Document::parse(&ctx, SCHEMA).ok();
    });
}

fn graphql_schema_parse_async_graphql_parser(bench: &mut Bencher) {
    use async_graphql_parser::parse_schema;
    bench.iter(|| {
        parse_schema(SCHEMA).ok();
    });
}

fn graphql_schema_parse_graphql_parser(bench: &mut Bencher) {
    use graphql_parser::schema::parse_schema;
    bench.iter(|| {
        parse_schema::<&str>(SCHEMA).ok();
    });
}

fn graphql_ast_print_graphql_syntax(bench: &mut Bencher) {
    use graphql_syntax::ast::*;
    let ctx = ASTContext::new();
    let ast = Document::parse(&ctx, QUERY).unwrap();
    bench.iter(|| ast.print());
}

fn graphql_ast_print_gql_parser(bench: &mut Bencher) {
    use graphql_parser::query::parse_query;
    let ast = parse_query::<&str>(QUERY).ok().unwrap();
    bench.iter(|| ast.to_string());
}

fn graphql_ast_print_apollo_parser(bench: &mut Bencher) {
    use apollo_parser::cst::CstNode;
    use apollo_parser::Parser;
    let parser = Parser::new(QUERY);
    let cst = parser.parse();
    let doc = cst.document();
    bench.iter(|| doc.source_string());
}

fn graphql_schema_print_graphql_syntax(bench: &mut Bencher) {
    use graphql_syntax::ast::*;
    let ctx = ASTContext::new();
    let ast = Document::parse(&ctx, SCHEMA).unwrap();
    bench.iter(|| ast.print());
}

benchmark_group!(
    parse,
    graphql_ast_parse_graphql_syntax,
    graphql_ast_parse_async_graphql_parser,
    graphql_ast_parse_graphql_parser,
    graphql_ast_parse_apollo_parser,
    graphql_schema_parse_graphql_syntax,
    graphql_schema_parse_async_graphql_parser,
    graphql_schema_parse_graphql_parser
);

benchmark_group!(
    print,
    graphql_ast_print_graphql_syntax,
    graphql_ast_print_gql_parser,
    graphql_ast_print_apollo_parser,
    graphql_schema_print_graphql_syntax
);

benchmark_main!(parse, print);

static QUERY: &str = include_str!("../tests/fixtures/kitchen_sink.graphql");
static SCHEMA: &str = include_str!("../tests/fixtures/schema_kitchen_sink.graphql");
