//! Shared fixtures: two release presets and green-tree builders.
//!
//! `modern_registry` describes a release with every shape and member
//! present; `legacy_registry` a release predating patterns, designations,
//! the new expressions, and asynchronous iteration. The legacy release
//! also reassigns the canonical `UnderscoreToken` value to a different
//! symbol, to exercise sentinel allocation in the enum shims.

#![allow(dead_code)]

use lightup::registry::SyntaxRegistry;
use lightup::shim::ShimContext;
use lightup::tree::{RawKind, SyntaxNode, SyntaxToken};
use once_cell::sync::Lazy;
use rowan::GreenNodeBuilder;

// ---------------------------------------------------------------------------
// Kind numbering (canonical, as assigned by the latest release)
// ---------------------------------------------------------------------------

// Tokens every release declares
pub const IDENTIFIER_TOKEN: RawKind = RawKind(1);
pub const COMMA_TOKEN: RawKind = RawKind(2);
pub const OPEN_PAREN_TOKEN: RawKind = RawKind(3);
pub const CLOSE_PAREN_TOKEN: RawKind = RawKind(4);
pub const OPEN_BRACE_TOKEN: RawKind = RawKind(5);
pub const CLOSE_BRACE_TOKEN: RawKind = RawKind(6);
pub const COLON_TOKEN: RawKind = RawKind(7);
pub const EQUALS_GREATER_THAN_TOKEN: RawKind = RawKind(8);
pub const IN_KEYWORD: RawKind = RawKind(9);
pub const FOREACH_KEYWORD: RawKind = RawKind(10);
pub const VAR_KEYWORD: RawKind = RawKind(11);
pub const IS_KEYWORD: RawKind = RawKind(12);
pub const SWITCH_KEYWORD: RawKind = RawKind(13);
pub const WHITESPACE: RawKind = RawKind(14);
pub const NUMERIC_LITERAL_TOKEN: RawKind = RawKind(15);

// Tokens recent releases added
pub const UNDERSCORE_TOKEN: RawKind = RawKind(81);
pub const DOT_DOT_TOKEN: RawKind = RawKind(82);
pub const AWAIT_KEYWORD: RawKind = RawKind(83);

// Nodes every release declares
pub const IDENTIFIER_NAME: RawKind = RawKind(200);
pub const LITERAL_EXPRESSION: RawKind = RawKind(201);
pub const ARGUMENT: RawKind = RawKind(208);
pub const FOR_EACH_STATEMENT: RawKind = RawKind(230);
pub const BLOCK: RawKind = RawKind(233);

// Nodes recent releases added
pub const TUPLE_EXPRESSION: RawKind = RawKind(202);
pub const RANGE_EXPRESSION: RawKind = RawKind(203);
pub const IS_PATTERN_EXPRESSION: RawKind = RawKind(204);
pub const DECLARATION_EXPRESSION: RawKind = RawKind(205);
pub const SWITCH_EXPRESSION: RawKind = RawKind(206);
pub const SWITCH_EXPRESSION_ARM: RawKind = RawKind(207);
pub const CONSTANT_PATTERN: RawKind = RawKind(210);
pub const DECLARATION_PATTERN: RawKind = RawKind(211);
pub const VAR_PATTERN: RawKind = RawKind(212);
pub const RECURSIVE_PATTERN: RawKind = RawKind(213);
pub const DISCARD_PATTERN: RawKind = RawKind(214);
pub const PROPERTY_PATTERN_CLAUSE: RawKind = RawKind(215);
pub const SUBPATTERN: RawKind = RawKind(216);
pub const SINGLE_VARIABLE_DESIGNATION: RawKind = RawKind(220);
pub const DISCARD_DESIGNATION: RawKind = RawKind(221);
pub const PARENTHESIZED_VARIABLE_DESIGNATION: RawKind = RawKind(222);
pub const FOR_EACH_VARIABLE_STATEMENT: RawKind = RawKind(231);
pub const LOCAL_FUNCTION_STATEMENT: RawKind = RawKind(232);

const PATTERN_KINDS: &[RawKind] = &[
    CONSTANT_PATTERN,
    DECLARATION_PATTERN,
    VAR_PATTERN,
    RECURSIVE_PATTERN,
    DISCARD_PATTERN,
];
const DESIGNATION_KINDS: &[RawKind] = &[
    SINGLE_VARIABLE_DESIGNATION,
    DISCARD_DESIGNATION,
    PARENTHESIZED_VARIABLE_DESIGNATION,
];
const EXPRESSION_KINDS: &[RawKind] = &[IDENTIFIER_NAME, LITERAL_EXPRESSION];

// ---------------------------------------------------------------------------
// Release presets
// ---------------------------------------------------------------------------

const BASE_SYNTAX_KINDS: &[(&str, u16)] = &[
    ("IdentifierToken", 1),
    ("CommaToken", 2),
    ("OpenParenToken", 3),
    ("CloseParenToken", 4),
    ("OpenBraceToken", 5),
    ("CloseBraceToken", 6),
    ("ColonToken", 7),
    ("EqualsGreaterThanToken", 8),
    ("InKeyword", 9),
    ("ForEachKeyword", 10),
    ("VarKeyword", 11),
    ("IsKeyword", 12),
    ("SwitchKeyword", 13),
    ("WhitespaceTrivia", 14),
    ("NumericLiteralToken", 15),
    ("IdentifierName", 200),
    ("LiteralExpression", 201),
    ("Argument", 208),
    ("ForEachStatement", 230),
    ("Block", 233),
];

const MODERN_ONLY_SYNTAX_KINDS: &[(&str, u16)] = &[
    ("UnderscoreToken", 81),
    ("DotDotToken", 82),
    ("AwaitKeyword", 83),
    ("WhenKeyword", 84),
    ("TupleExpression", 202),
    ("RangeExpression", 203),
    ("IsPatternExpression", 204),
    ("DeclarationExpression", 205),
    ("SwitchExpression", 206),
    ("SwitchExpressionArm", 207),
    ("ConstantPattern", 210),
    ("DeclarationPattern", 211),
    ("VarPattern", 212),
    ("RecursivePattern", 213),
    ("DiscardPattern", 214),
    ("PropertyPatternClause", 215),
    ("Subpattern", 216),
    ("SingleVariableDesignation", 220),
    ("DiscardDesignation", 221),
    ("ParenthesizedVariableDesignation", 222),
    ("ForEachVariableStatement", 231),
    ("LocalFunctionStatement", 232),
];

/// The latest supported release: every shape and member present.
pub fn modern_registry() -> SyntaxRegistry {
    let modern_syntax_kinds: Vec<(&str, u16)> = BASE_SYNTAX_KINDS
        .iter()
        .chain(MODERN_ONLY_SYNTAX_KINDS)
        .copied()
        .collect();

    SyntaxRegistry::builder()
        .node_type("IdentifierName", &[IDENTIFIER_NAME])
        .finish_type()
        .node_type("LiteralExpression", &[LITERAL_EXPRESSION])
        .finish_type()
        .node_type("Argument", &[ARGUMENT])
        .node_member("Expression", EXPRESSION_KINDS, 0)
        .finish_type()
        .node_type("Block", &[BLOCK])
        .finish_type()
        .node_type("ForEachStatement", &[FOR_EACH_STATEMENT])
        .token_member("AwaitKeyword", AWAIT_KEYWORD, 0)
        .token_member("Identifier", IDENTIFIER_TOKEN, 3)
        .node_member("Expression", EXPRESSION_KINDS, 6)
        .node_member("Statement", &[BLOCK], 7)
        .finish_type()
        .node_type("ForEachVariableStatement", &[FOR_EACH_VARIABLE_STATEMENT])
        .token_member("AwaitKeyword", AWAIT_KEYWORD, 0)
        .node_member("Variable", &[DECLARATION_EXPRESSION, TUPLE_EXPRESSION], 3)
        .node_member("Expression", EXPRESSION_KINDS, 6)
        .node_member("Statement", &[BLOCK], 7)
        .finish_type()
        .node_type(
            "CommonForEachStatement",
            &[FOR_EACH_STATEMENT, FOR_EACH_VARIABLE_STATEMENT],
        )
        .token_member("AwaitKeyword", AWAIT_KEYWORD, 0)
        .node_member("Expression", EXPRESSION_KINDS, 6)
        .node_member("Statement", &[BLOCK], 7)
        .finish_type()
        .node_type("LocalFunctionStatement", &[LOCAL_FUNCTION_STATEMENT])
        .token_member("Identifier", IDENTIFIER_TOKEN, 0)
        .node_member("Body", &[BLOCK], 3)
        .finish_type()
        .node_type("Pattern", PATTERN_KINDS)
        .finish_type()
        .node_type("ConstantPattern", &[CONSTANT_PATTERN])
        .node_member("Expression", EXPRESSION_KINDS, 0)
        .finish_type()
        .node_type("DeclarationPattern", &[DECLARATION_PATTERN])
        .node_member("Designation", DESIGNATION_KINDS, 1)
        .finish_type()
        .node_type("VarPattern", &[VAR_PATTERN])
        .token_member("VarKeyword", VAR_KEYWORD, 0)
        .node_member("Designation", DESIGNATION_KINDS, 1)
        .finish_type()
        .node_type("RecursivePattern", &[RECURSIVE_PATTERN])
        .node_member("PropertyPatternClause", &[PROPERTY_PATTERN_CLAUSE], 0)
        .node_member("Designation", DESIGNATION_KINDS, 1)
        .finish_type()
        .node_type("DiscardPattern", &[DISCARD_PATTERN])
        .token_member("UnderscoreToken", UNDERSCORE_TOKEN, 0)
        .finish_type()
        .node_type("PropertyPatternClause", &[PROPERTY_PATTERN_CLAUSE])
        .list_member("Subpatterns", &[SUBPATTERN], COMMA_TOKEN, ",", 1)
        .finish_type()
        .node_type("Subpattern", &[SUBPATTERN])
        .node_member("Pattern", PATTERN_KINDS, 2)
        .finish_type()
        .node_type("VariableDesignation", DESIGNATION_KINDS)
        .finish_type()
        .node_type("SingleVariableDesignation", &[SINGLE_VARIABLE_DESIGNATION])
        .token_member("Identifier", IDENTIFIER_TOKEN, 0)
        .finish_type()
        .node_type("DiscardDesignation", &[DISCARD_DESIGNATION])
        .token_member("UnderscoreToken", UNDERSCORE_TOKEN, 0)
        .finish_type()
        .node_type(
            "ParenthesizedVariableDesignation",
            &[PARENTHESIZED_VARIABLE_DESIGNATION],
        )
        .list_member("Variables", DESIGNATION_KINDS, COMMA_TOKEN, ",", 1)
        .finish_type()
        .node_type("TupleExpression", &[TUPLE_EXPRESSION])
        .list_member("Arguments", &[ARGUMENT], COMMA_TOKEN, ",", 1)
        .finish_type()
        .node_type("RangeExpression", &[RANGE_EXPRESSION])
        .node_member("LeftOperand", &[LITERAL_EXPRESSION], 0)
        .token_member("OperatorToken", DOT_DOT_TOKEN, 1)
        .node_member("RightOperand", &[IDENTIFIER_NAME], 2)
        .finish_type()
        .node_type("IsPatternExpression", &[IS_PATTERN_EXPRESSION])
        .node_member("Expression", EXPRESSION_KINDS, 0)
        .token_member("IsKeyword", IS_KEYWORD, 1)
        .node_member("Pattern", PATTERN_KINDS, 2)
        .finish_type()
        .node_type("DeclarationExpression", &[DECLARATION_EXPRESSION])
        .node_member("Designation", DESIGNATION_KINDS, 2)
        .finish_type()
        .node_type("SwitchExpression", &[SWITCH_EXPRESSION])
        .node_member("GoverningExpression", EXPRESSION_KINDS, 0)
        .list_member("Arms", &[SWITCH_EXPRESSION_ARM], COMMA_TOKEN, ",", 3)
        .finish_type()
        .node_type("SwitchExpressionArm", &[SWITCH_EXPRESSION_ARM])
        .node_member("Pattern", PATTERN_KINDS, 0)
        .node_member("Expression", EXPRESSION_KINDS, 2)
        .finish_type()
        .enumeration("SyntaxKind", &modern_syntax_kinds)
        .enumeration(
            "MemberKind",
            &[
                ("None", 0),
                ("Field", 1),
                ("Method", 2),
                ("Property", 3),
                ("Constructor", 4),
                ("LocalFunction", 10),
                ("InitAccessor", 11),
            ],
        )
        .enumeration(
            "LanguageVersion",
            &[
                ("Default", 0),
                ("V1", 100),
                ("V2", 200),
                ("V3", 300),
                ("V4", 400),
                ("Latest", 9999),
            ],
        )
        .build()
}

/// A release predating patterns, designations, the new expressions, and
/// asynchronous iteration. Note the `SyntaxKind` enumeration assigns the
/// canonical `UnderscoreToken` value to a different symbol.
pub fn legacy_registry() -> SyntaxRegistry {
    let legacy_syntax_kinds: Vec<(&str, u16)> = BASE_SYNTAX_KINDS
        .iter()
        .copied()
        .chain([("QuestionQuestionToken", 81u16)])
        .collect();

    SyntaxRegistry::builder()
        .node_type("IdentifierName", &[IDENTIFIER_NAME])
        .finish_type()
        .node_type("LiteralExpression", &[LITERAL_EXPRESSION])
        .finish_type()
        .node_type("Argument", &[ARGUMENT])
        .node_member("Expression", EXPRESSION_KINDS, 0)
        .finish_type()
        .node_type("Block", &[BLOCK])
        .finish_type()
        .node_type("ForEachStatement", &[FOR_EACH_STATEMENT])
        .token_member("Identifier", IDENTIFIER_TOKEN, 1)
        .node_member("Expression", EXPRESSION_KINDS, 4)
        .node_member("Statement", &[BLOCK], 5)
        .finish_type()
        .enumeration("SyntaxKind", &legacy_syntax_kinds)
        .enumeration(
            "MemberKind",
            &[
                ("None", 0),
                ("Field", 1),
                ("Method", 2),
                ("Property", 3),
                ("Constructor", 4),
            ],
        )
        .enumeration(
            "LanguageVersion",
            &[("Default", 0), ("V1", 100), ("V2", 200), ("V3", 300)],
        )
        .build()
}

/// Shared context over the modern release.
pub static MODERN: Lazy<ShimContext> = Lazy::new(|| ShimContext::new(modern_registry()));

/// Shared context over the legacy release.
pub static LEGACY: Lazy<ShimContext> = Lazy::new(|| ShimContext::new(legacy_registry()));

// ---------------------------------------------------------------------------
// Tree builders
// ---------------------------------------------------------------------------

/// A token detached from any meaningful tree, for feeding write accessors.
pub fn detached_token(kind: RawKind, text: &str) -> SyntaxToken {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(BLOCK.into());
    builder.token(kind.into(), text);
    builder.finish_node();
    SyntaxNode::new_root(builder.finish())
        .first_token()
        .expect("detached token tree has one token")
}

pub fn await_token() -> SyntaxToken {
    detached_token(AWAIT_KEYWORD, "await")
}

fn identifier_name_into(builder: &mut GreenNodeBuilder<'static>, text: &str) {
    builder.start_node(IDENTIFIER_NAME.into());
    builder.token(IDENTIFIER_TOKEN.into(), text);
    builder.finish_node();
}

fn literal_into(builder: &mut GreenNodeBuilder<'static>, text: &str) {
    builder.start_node(LITERAL_EXPRESSION.into());
    builder.token(NUMERIC_LITERAL_TOKEN.into(), text);
    builder.finish_node();
}

fn block_into(builder: &mut GreenNodeBuilder<'static>) {
    builder.start_node(BLOCK.into());
    builder.token(OPEN_BRACE_TOKEN.into(), "{");
    builder.token(CLOSE_BRACE_TOKEN.into(), "}");
    builder.finish_node();
}

fn finish(builder: GreenNodeBuilder<'static>) -> SyntaxNode {
    SyntaxNode::new_root(builder.finish())
}

pub fn identifier_name(text: &str) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    identifier_name_into(&mut builder, text);
    finish(builder)
}

pub fn literal_expression(text: &str) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    literal_into(&mut builder, text);
    finish(builder)
}

/// `foreach item in items { }`, optionally `await`-ed.
pub fn foreach_statement(awaited: bool) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(FOR_EACH_STATEMENT.into());
    if awaited {
        builder.token(AWAIT_KEYWORD.into(), "await");
        builder.token(WHITESPACE.into(), " ");
    }
    builder.token(FOREACH_KEYWORD.into(), "foreach");
    builder.token(WHITESPACE.into(), " ");
    builder.token(IDENTIFIER_TOKEN.into(), "item");
    builder.token(WHITESPACE.into(), " ");
    builder.token(IN_KEYWORD.into(), "in");
    builder.token(WHITESPACE.into(), " ");
    identifier_name_into(&mut builder, "items");
    builder.token(WHITESPACE.into(), " ");
    block_into(&mut builder);
    builder.finish_node();
    finish(builder)
}

/// `foreach var (x) in items { }`, the deconstructing form.
pub fn foreach_variable_statement(awaited: bool) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(FOR_EACH_VARIABLE_STATEMENT.into());
    if awaited {
        builder.token(AWAIT_KEYWORD.into(), "await");
        builder.token(WHITESPACE.into(), " ");
    }
    builder.token(FOREACH_KEYWORD.into(), "foreach");
    builder.token(WHITESPACE.into(), " ");
    declaration_expression_into(&mut builder, "x");
    builder.token(WHITESPACE.into(), " ");
    builder.token(IN_KEYWORD.into(), "in");
    builder.token(WHITESPACE.into(), " ");
    identifier_name_into(&mut builder, "items");
    builder.token(WHITESPACE.into(), " ");
    block_into(&mut builder);
    builder.finish_node();
    finish(builder)
}

/// `helper() { }` declared in statement position.
pub fn local_function_statement(name: &str) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(LOCAL_FUNCTION_STATEMENT.into());
    builder.token(IDENTIFIER_TOKEN.into(), name);
    builder.token(OPEN_PAREN_TOKEN.into(), "(");
    builder.token(CLOSE_PAREN_TOKEN.into(), ")");
    builder.token(WHITESPACE.into(), " ");
    block_into(&mut builder);
    builder.finish_node();
    finish(builder)
}

fn single_variable_designation_into(builder: &mut GreenNodeBuilder<'static>, name: &str) {
    builder.start_node(SINGLE_VARIABLE_DESIGNATION.into());
    builder.token(IDENTIFIER_TOKEN.into(), name);
    builder.finish_node();
}

pub fn single_variable_designation(name: &str) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    single_variable_designation_into(&mut builder, name);
    finish(builder)
}

pub fn discard_designation() -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(DISCARD_DESIGNATION.into());
    builder.token(UNDERSCORE_TOKEN.into(), "_");
    builder.finish_node();
    finish(builder)
}

/// `(a, b, ...)` designation group.
pub fn parenthesized_designation(names: &[&str]) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(PARENTHESIZED_VARIABLE_DESIGNATION.into());
    builder.token(OPEN_PAREN_TOKEN.into(), "(");
    for (index, name) in names.iter().enumerate() {
        if index > 0 {
            builder.token(COMMA_TOKEN.into(), ",");
        }
        single_variable_designation_into(&mut builder, name);
    }
    builder.token(CLOSE_PAREN_TOKEN.into(), ")");
    builder.finish_node();
    finish(builder)
}

pub fn discard_pattern() -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(DISCARD_PATTERN.into());
    builder.token(UNDERSCORE_TOKEN.into(), "_");
    builder.finish_node();
    finish(builder)
}

pub fn constant_pattern(text: &str) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(CONSTANT_PATTERN.into());
    literal_into(&mut builder, text);
    builder.finish_node();
    finish(builder)
}

/// `T name` pattern.
pub fn declaration_pattern(name: &str) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(DECLARATION_PATTERN.into());
    identifier_name_into(&mut builder, "T");
    builder.token(WHITESPACE.into(), " ");
    single_variable_designation_into(&mut builder, name);
    builder.finish_node();
    finish(builder)
}

/// `var name` pattern.
pub fn var_pattern(name: &str) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(VAR_PATTERN.into());
    builder.token(VAR_KEYWORD.into(), "var");
    builder.token(WHITESPACE.into(), " ");
    single_variable_designation_into(&mut builder, name);
    builder.finish_node();
    finish(builder)
}

fn subpattern_into(builder: &mut GreenNodeBuilder<'static>, name: &str) {
    builder.start_node(SUBPATTERN.into());
    builder.token(IDENTIFIER_TOKEN.into(), name);
    builder.token(COLON_TOKEN.into(), ":");
    builder.token(WHITESPACE.into(), " ");
    builder.start_node(DISCARD_PATTERN.into());
    builder.token(UNDERSCORE_TOKEN.into(), "_");
    builder.finish_node();
    builder.finish_node();
}

/// `{ Name: _, ... }` clause.
pub fn property_pattern_clause(names: &[&str]) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(PROPERTY_PATTERN_CLAUSE.into());
    builder.token(OPEN_BRACE_TOKEN.into(), "{");
    for (index, name) in names.iter().enumerate() {
        if index > 0 {
            builder.token(COMMA_TOKEN.into(), ",");
        }
        subpattern_into(&mut builder, name);
    }
    builder.token(CLOSE_BRACE_TOKEN.into(), "}");
    builder.finish_node();
    finish(builder)
}

/// `{ First: _ } rest` recursive pattern.
pub fn recursive_pattern() -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(RECURSIVE_PATTERN.into());
    builder.start_node(PROPERTY_PATTERN_CLAUSE.into());
    builder.token(OPEN_BRACE_TOKEN.into(), "{");
    subpattern_into(&mut builder, "First");
    builder.token(CLOSE_BRACE_TOKEN.into(), "}");
    builder.finish_node();
    builder.token(WHITESPACE.into(), " ");
    single_variable_designation_into(&mut builder, "rest");
    builder.finish_node();
    finish(builder)
}

fn argument_into(builder: &mut GreenNodeBuilder<'static>, text: &str) {
    builder.start_node(ARGUMENT.into());
    identifier_name_into(builder, text);
    builder.finish_node();
}

pub fn argument(text: &str) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    argument_into(&mut builder, text);
    finish(builder)
}

/// `(a,b,...)` tuple, optionally with a trailing separator.
pub fn tuple_expression(args: &[&str], trailing_separator: bool) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(TUPLE_EXPRESSION.into());
    builder.token(OPEN_PAREN_TOKEN.into(), "(");
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            builder.token(COMMA_TOKEN.into(), ",");
        }
        argument_into(&mut builder, arg);
    }
    if trailing_separator && !args.is_empty() {
        builder.token(COMMA_TOKEN.into(), ",");
    }
    builder.token(CLOSE_PAREN_TOKEN.into(), ")");
    builder.finish_node();
    finish(builder)
}

/// `1..end` range.
pub fn range_expression() -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(RANGE_EXPRESSION.into());
    literal_into(&mut builder, "1");
    builder.token(DOT_DOT_TOKEN.into(), "..");
    identifier_name_into(&mut builder, "end");
    builder.finish_node();
    finish(builder)
}

/// `value is _` test.
pub fn is_pattern_expression() -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(IS_PATTERN_EXPRESSION.into());
    identifier_name_into(&mut builder, "value");
    builder.token(WHITESPACE.into(), " ");
    builder.token(IS_KEYWORD.into(), "is");
    builder.token(WHITESPACE.into(), " ");
    builder.start_node(DISCARD_PATTERN.into());
    builder.token(UNDERSCORE_TOKEN.into(), "_");
    builder.finish_node();
    builder.finish_node();
    finish(builder)
}

fn declaration_expression_into(builder: &mut GreenNodeBuilder<'static>, name: &str) {
    builder.start_node(DECLARATION_EXPRESSION.into());
    builder.token(VAR_KEYWORD.into(), "var");
    builder.token(WHITESPACE.into(), " ");
    single_variable_designation_into(builder, name);
    builder.finish_node();
}

/// `var name` in expression position.
pub fn declaration_expression(name: &str) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    declaration_expression_into(&mut builder, name);
    finish(builder)
}

fn switch_arm_into(builder: &mut GreenNodeBuilder<'static>, result: &str) {
    builder.start_node(SWITCH_EXPRESSION_ARM.into());
    builder.start_node(DISCARD_PATTERN.into());
    builder.token(UNDERSCORE_TOKEN.into(), "_");
    builder.finish_node();
    builder.token(EQUALS_GREATER_THAN_TOKEN.into(), "=>");
    literal_into(builder, result);
    builder.finish_node();
}

pub fn switch_expression_arm(result: &str) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    switch_arm_into(&mut builder, result);
    finish(builder)
}

/// `value switch { _ => r, ... }`.
pub fn switch_expression(results: &[&str]) -> SyntaxNode {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(SWITCH_EXPRESSION.into());
    identifier_name_into(&mut builder, "value");
    builder.token(SWITCH_KEYWORD.into(), "switch");
    builder.token(OPEN_BRACE_TOKEN.into(), "{");
    for (index, result) in results.iter().enumerate() {
        if index > 0 {
            builder.token(COMMA_TOKEN.into(), ",");
        }
        switch_arm_into(&mut builder, result);
    }
    builder.token(CLOSE_BRACE_TOKEN.into(), "}");
    builder.finish_node();
    finish(builder)
}
