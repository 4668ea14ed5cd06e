mod argument_value_tests;

pub(crate) const STAR_WARS_AST_JSON: &str = include_str!("fixtures/star_wars_ast.json");
