use std::io::Write;
use std::path::PathBuf;

use indoc::indoc;
use sylva_core::NodeSchema;
use tempfile::NamedTempFile;

use super::input::{InputArgs, InputError, Schema, load};

const TREE: &str = indoc! {r#"
    { "type": "Program", "start": 0, "end": 6, "body": [
      { "type": "ExpressionStatement", "start": 0, "end": 6,
        "expression": { "type": "Pipe", "start": 0, "end": 5,
          "source": { "type": "Identifier", "start": 0, "end": 1, "name": "a" },
          "sink": { "type": "Identifier", "start": 4, "end": 5, "name": "b" } } }
    ] }
"#};

const PIPE_SCHEMA: &str = indoc! {r#"
    [ { "type": "Pipe", "fields": [
        { "name": "source", "required": true },
        { "name": "sink", "required": true }
    ] } ]
"#};

fn write_temp(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn args(input: &NamedTempFile, schema: Option<&NamedTempFile>) -> InputArgs {
    InputArgs {
        input: input.path().to_path_buf(),
        schema: schema.map(|f| f.path().to_path_buf()),
    }
}

#[test]
fn builtin_schema_treats_unknown_kinds_as_leaves() {
    let tree = write_temp(TREE);
    let input = load(&args(&tree, None)).unwrap();

    assert!(matches!(input.schema, Schema::Estree));
    assert!(input.schema.is_leaf("Pipe"));
    let view = input.doc.ast.view(&input.schema);
    assert_eq!(view.count_nodes(input.doc.ast.root()), 3);
}

#[test]
fn schema_file_extends_builtin_table() {
    let tree = write_temp(TREE);
    let schema = write_temp(PIPE_SCHEMA);
    let input = load(&args(&tree, Some(&schema))).unwrap();

    assert!(matches!(input.schema, Schema::Custom(_)));
    assert!(input.schema.contains("Pipe"));
    assert!(input.schema.contains("Program"));
    let view = input.doc.ast.view(&input.schema);
    assert_eq!(view.count_nodes(input.doc.ast.root()), 5);
}

#[test]
fn missing_input_file() {
    let err = load(&InputArgs {
        input: PathBuf::from("/nonexistent/sylva/ast.json"),
        schema: None,
    })
    .unwrap_err();

    assert!(matches!(err, InputError::Read { .. }));
    assert!(
        err.to_string()
            .starts_with("cannot read /nonexistent/sylva/ast.json: ")
    );
}

#[test]
fn invalid_schema_file() {
    let tree = write_temp(TREE);
    let schema = write_temp(r#"[ { "type": "Pipe", "fields": [ { "name": "a" }, { "name": "a" } ] } ]"#);
    let err = load(&args(&tree, Some(&schema))).unwrap_err();

    assert!(matches!(err, InputError::Schema { .. }));
}

#[test]
fn invalid_tree_names_the_file() {
    let tree = write_temp(r#"{ "start": 0, "end": 1 }"#);
    let err = load(&args(&tree, None)).unwrap_err();

    assert!(matches!(err, InputError::Tree { .. }));
    let message = err.to_string();
    assert!(message.starts_with(&tree.path().display().to_string()));
    assert!(message.ends_with("expected a node object with a `type` string at `$`"));
}
