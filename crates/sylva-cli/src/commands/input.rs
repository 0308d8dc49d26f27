//! Loading the tree document and node schema named on the command line.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use sylva_core::{DynamicSchema, FieldSpec, NodeSchema, SchemaError, estree};
use sylva_lib::ast::Document;

pub struct InputArgs {
    pub input: PathBuf,
    pub schema: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    #[error("{}: {source}", path.display())]
    Tree {
        path: PathBuf,
        #[source]
        source: sylva_lib::Error,
    },
}

/// Built-in ESTree table, or the table overlaid with a schema file.
#[derive(Debug)]
pub enum Schema {
    Estree,
    Custom(DynamicSchema),
}

impl NodeSchema for Schema {
    fn fields(&self, kind: &str) -> Option<&[FieldSpec]> {
        match self {
            Schema::Estree => estree::SCHEMA.get(kind),
            Schema::Custom(schema) => schema.get(kind),
        }
    }
}

#[derive(Debug)]
pub struct Input {
    pub doc: Document,
    pub schema: Schema,
}

/// Load the schema, then the document; entries of a schema file override or
/// extend the built-in ESTree table.
pub fn load(args: &InputArgs) -> Result<Input, InputError> {
    let schema = match &args.schema {
        None => Schema::Estree,
        Some(path) => {
            let overlay =
                DynamicSchema::from_json(&read_text(path)?).map_err(|source| InputError::Schema {
                    path: path.clone(),
                    source,
                })?;
            let mut schema = DynamicSchema::from_static(&estree::SCHEMA);
            schema.extend(overlay);
            Schema::Custom(schema)
        }
    };

    let text = read_text(&args.input)?;
    let doc = Document::from_json(&text, &schema).map_err(|source| InputError::Tree {
        path: args.input.clone(),
        source,
    })?;
    Ok(Input { doc, schema })
}

/// [`load`], printing the error and exiting with status 1 on failure.
pub fn load_or_exit(args: &InputArgs) -> Input {
    load(args).unwrap_or_else(|err| fail(err))
}

pub fn fail(message: impl fmt::Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

fn read_text(path: &Path) -> Result<String, InputError> {
    let read_err = |source| InputError::Read {
        path: path.to_path_buf(),
        source,
    };
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(read_err)
}
