//! Built-in schema for ESTree-shaped JavaScript trees.
//!
//! Covers ES2022 plus the JSX extension. Fields are listed in the order they
//! appear in source, which is the order the traversal engine visits them.
//! `TemplateLiteral` is the one exception: ESTree keeps quasis and
//! expressions in separate arrays, so they are visited as two runs.

use crate::{FieldSpec, StaticSchema, many, optional, required};

static ENTRIES: &[(&str, &[FieldSpec])] = &[
    ("ArrayExpression", &[many("elements")]),
    ("ArrayPattern", &[many("elements")]),
    (
        "ArrowFunctionExpression",
        &[many("params"), required("body")],
    ),
    (
        "AssignmentExpression",
        &[required("left"), required("right")],
    ),
    ("AssignmentPattern", &[required("left"), required("right")]),
    ("AwaitExpression", &[required("argument")]),
    ("BinaryExpression", &[required("left"), required("right")]),
    ("BlockStatement", &[many("body")]),
    ("BreakStatement", &[optional("label")]),
    ("CallExpression", &[required("callee"), many("arguments")]),
    ("CatchClause", &[optional("param"), required("body")]),
    ("ChainExpression", &[required("expression")]),
    ("ClassBody", &[many("body")]),
    (
        "ClassDeclaration",
        &[optional("id"), optional("superClass"), required("body")],
    ),
    (
        "ClassExpression",
        &[optional("id"), optional("superClass"), required("body")],
    ),
    (
        "ConditionalExpression",
        &[required("test"), required("consequent"), required("alternate")],
    ),
    ("ContinueStatement", &[optional("label")]),
    ("DebuggerStatement", &[]),
    ("DoWhileStatement", &[required("body"), required("test")]),
    ("EmptyStatement", &[]),
    (
        "ExportAllDeclaration",
        &[optional("exported"), required("source"), many("attributes")],
    ),
    ("ExportDefaultDeclaration", &[required("declaration")]),
    (
        "ExportNamedDeclaration",
        &[
            optional("declaration"),
            many("specifiers"),
            optional("source"),
            many("attributes"),
        ],
    ),
    ("ExportSpecifier", &[required("local"), required("exported")]),
    ("ExpressionStatement", &[required("expression")]),
    (
        "ForInStatement",
        &[required("left"), required("right"), required("body")],
    ),
    (
        "ForOfStatement",
        &[required("left"), required("right"), required("body")],
    ),
    (
        "ForStatement",
        &[
            optional("init"),
            optional("test"),
            optional("update"),
            required("body"),
        ],
    ),
    (
        "FunctionDeclaration",
        &[optional("id"), many("params"), required("body")],
    ),
    (
        "FunctionExpression",
        &[optional("id"), many("params"), required("body")],
    ),
    ("Identifier", &[]),
    (
        "IfStatement",
        &[required("test"), required("consequent"), optional("alternate")],
    ),
    ("ImportAttribute", &[required("key"), required("value")]),
    (
        "ImportDeclaration",
        &[many("specifiers"), required("source"), many("attributes")],
    ),
    ("ImportDefaultSpecifier", &[required("local")]),
    ("ImportExpression", &[required("source"), optional("options")]),
    ("ImportNamespaceSpecifier", &[required("local")]),
    ("ImportSpecifier", &[required("imported"), required("local")]),
    ("JSXAttribute", &[required("name"), optional("value")]),
    ("JSXClosingElement", &[required("name")]),
    ("JSXClosingFragment", &[]),
    (
        "JSXElement",
        &[
            required("openingElement"),
            many("children"),
            optional("closingElement"),
        ],
    ),
    ("JSXEmptyExpression", &[]),
    ("JSXExpressionContainer", &[required("expression")]),
    (
        "JSXFragment",
        &[
            required("openingFragment"),
            many("children"),
            required("closingFragment"),
        ],
    ),
    ("JSXIdentifier", &[]),
    ("JSXMemberExpression", &[required("object"), required("property")]),
    ("JSXNamespacedName", &[required("namespace"), required("name")]),
    ("JSXOpeningElement", &[required("name"), many("attributes")]),
    ("JSXOpeningFragment", &[]),
    ("JSXSpreadAttribute", &[required("argument")]),
    ("JSXSpreadChild", &[required("expression")]),
    ("JSXText", &[]),
    ("LabeledStatement", &[required("label"), required("body")]),
    ("Literal", &[]),
    ("LogicalExpression", &[required("left"), required("right")]),
    ("MemberExpression", &[required("object"), required("property")]),
    ("MetaProperty", &[required("meta"), required("property")]),
    ("MethodDefinition", &[required("key"), required("value")]),
    ("NewExpression", &[required("callee"), many("arguments")]),
    ("ObjectExpression", &[many("properties")]),
    ("ObjectPattern", &[many("properties")]),
    ("ParenthesizedExpression", &[required("expression")]),
    ("PrivateIdentifier", &[]),
    ("Program", &[many("body")]),
    ("Property", &[required("key"), required("value")]),
    ("PropertyDefinition", &[required("key"), optional("value")]),
    ("RestElement", &[required("argument")]),
    ("ReturnStatement", &[optional("argument")]),
    ("SequenceExpression", &[many("expressions")]),
    ("SpreadElement", &[required("argument")]),
    ("StaticBlock", &[many("body")]),
    ("Super", &[]),
    ("SwitchCase", &[optional("test"), many("consequent")]),
    ("SwitchStatement", &[required("discriminant"), many("cases")]),
    ("TaggedTemplateExpression", &[required("tag"), required("quasi")]),
    ("TemplateElement", &[]),
    ("TemplateLiteral", &[many("quasis"), many("expressions")]),
    ("ThisExpression", &[]),
    ("ThrowStatement", &[required("argument")]),
    (
        "TryStatement",
        &[required("block"), optional("handler"), optional("finalizer")],
    ),
    ("UnaryExpression", &[required("argument")]),
    ("UpdateExpression", &[required("argument")]),
    ("VariableDeclaration", &[many("declarations")]),
    ("VariableDeclarator", &[required("id"), optional("init")]),
    ("WhileStatement", &[required("test"), required("body")]),
    ("WithStatement", &[required("object"), required("body")]),
    ("YieldExpression", &[optional("argument")]),
];

/// ESTree node schema.
pub static SCHEMA: StaticSchema = StaticSchema::new(ENTRIES);
