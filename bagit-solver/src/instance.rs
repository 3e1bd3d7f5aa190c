//! Reading problem instances.
//!
//! An instance is a text file in which the first line holds the number of bags and the second
//! line the capacity shared by all bags. Every following line declares one item:
//!
//! ```text
//! <name> <size> [<+|-> <name> <name> ...]
//! ```
//!
//! where `+` introduces the allow-list of the item and `-` its conflicts. Blank lines are
//! skipped, and a marker without names declares nothing.
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use bagit_core::model::ItemDeclaration;
use bagit_core::model::Model;
use bagit_core::model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstanceError {
    #[error("IO error, more details: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected the {expected}, but the instance ended")]
    MissingHeader { line: usize, expected: &'static str },
    #[error("line {line}: '{token}' is not a valid {expected}")]
    InvalidInteger {
        line: usize,
        token: String,
        expected: &'static str,
    },
    #[error("line {line}: item '{name}' has no size")]
    MissingSize { line: usize, name: String },
    #[error("line {line}: unknown constraint marker '{marker}', expected '+' or '-'")]
    UnknownMarker { line: usize, marker: String },
    #[error("line {line}: {source}")]
    Model {
        line: usize,
        #[source]
        source: ModelError,
    },
}

/// Reads the instance stored at `path`.
pub fn read_instance(path: impl AsRef<Path>) -> Result<Model, InstanceError> {
    let file = File::open(path)?;
    parse_instance(BufReader::new(file))
}

/// Reads an instance from `reader`; see the [module documentation](self) for the format.
pub fn parse_instance(reader: impl BufRead) -> Result<Model, InstanceError> {
    let mut builder = Model::builder();
    let mut num_bags: Option<usize> = None;
    let mut capacity: Option<u32> = None;
    let mut num_lines = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        num_lines = line_number;

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match (num_bags, capacity) {
            (None, _) => num_bags = Some(parse_integer(line, line_number, "bag count")?),
            (Some(_), None) => capacity = Some(parse_integer(line, line_number, "bag capacity")?),
            (Some(_), Some(_)) => {
                let declaration = parse_item(line, line_number)?;
                let _ = builder
                    .add_item(declaration)
                    .map_err(|source| InstanceError::Model {
                        line: line_number,
                        source,
                    })?;
            }
        }
    }

    let (Some(num_bags), Some(capacity)) = (num_bags, capacity) else {
        return Err(InstanceError::MissingHeader {
            line: num_lines + 1,
            expected: if num_bags.is_none() {
                "bag count"
            } else {
                "bag capacity"
            },
        });
    };
    builder.add_bags(num_bags, capacity);

    Ok(builder.build())
}

fn parse_integer<Integer: FromStr>(
    token: &str,
    line: usize,
    expected: &'static str,
) -> Result<Integer, InstanceError> {
    token
        .parse::<Integer>()
        .map_err(|_| InstanceError::InvalidInteger {
            line,
            token: token.to_owned(),
            expected,
        })
}

/// Parses a non-blank item line.
fn parse_item(line: &str, line_number: usize) -> Result<ItemDeclaration, InstanceError> {
    let mut tokens = line.split_whitespace();

    let name = tokens.next().unwrap_or_default();
    let Some(size) = tokens.next() else {
        return Err(InstanceError::MissingSize {
            line: line_number,
            name: name.to_owned(),
        });
    };
    let declaration = ItemDeclaration::new(name, parse_integer(size, line_number, "item size")?);

    match tokens.next() {
        None => Ok(declaration),
        Some("+") => Ok(declaration.allowed_with(tokens)),
        Some("-") => Ok(declaration.conflicting_with(tokens)),
        Some(marker) => Err(InstanceError::UnknownMarker {
            line: line_number,
            marker: marker.to_owned(),
        }),
    }
}
