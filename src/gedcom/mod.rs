//! GEDCOM ingestion: line model, tag sets and the record parser.

mod line;
mod parser;
mod tag;

pub use line::{extract_pointer, GedLine};
pub use parser::RecordParser;
pub use tag::{EventDetailTag, FamilyTag, PersonTag, RecordTag};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;
use crate::model::Genealogy;

/// Parse any buffered line source
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Genealogy> {
    RecordParser::new(reader).parse()
}

/// Parse an in-memory document
pub fn parse_str(input: &str) -> Result<Genealogy> {
    parse_reader(input.as_bytes())
}

/// Open and parse a GEDCOM file
pub fn parse_file(path: impl AsRef<Path>) -> Result<Genealogy> {
    let path = path.as_ref();
    log::info!("Reading GEDCOM file {}", path.display());
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}
