//! Writing the outcome of a solve.
//!
//! A packing is written as a line `success` followed by one line per bag which holds at least one
//! item, listing the names of its items separated by tabs. Without a packing, the single line
//! `failure` is written.
use std::io::Write;

use bagit_core::model::Model;
use bagit_core::results::Packing;
use bagit_core::results::SatisfactionResult;

pub fn write_result(
    writer: &mut impl Write,
    model: &Model,
    result: &SatisfactionResult,
) -> std::io::Result<()> {
    match result {
        SatisfactionResult::Satisfiable(packing) => write_packing(writer, model, packing),
        SatisfactionResult::Unsatisfiable(_) | SatisfactionResult::Unknown => {
            writeln!(writer, "failure")
        }
    }
}

pub fn write_packing(
    writer: &mut impl Write,
    model: &Model,
    packing: &Packing,
) -> std::io::Result<()> {
    writeln!(writer, "success")?;
    for (bag, _) in packing.non_empty_bags() {
        let names = packing.item_names(model, bag).collect::<Vec<_>>();
        writeln!(writer, "{}", names.join("\t"))?;
    }

    Ok(())
}
