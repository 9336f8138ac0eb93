//! Edge list reader.
//!
//! The edge list is a text file with one undirected edge per line:
//!
//! ```text
//! <location> <location> <integer-distance>
//! ```
//!
//! Fields are separated by whitespace and any trailing field is ignored. The distance must be a
//! whole positive integer: values such as `12.5` or `12km` make the line malformed, they are not
//! truncated to their leading digits.
//!
//! Malformed lines don't abort the load, and neither do lines that are not valid UTF-8: they are
//! skipped and reported alongside the loaded network. Only I/O errors are fatal.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::{Distance, EdgeError, Network, ParseError, ReadError};

/// Edge list line that could not be added to the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line_number: usize,
    pub line: String,
    pub error: ParseError,
}

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub network: Network,
    pub skipped: Vec<SkippedLine>,
}

/// Parses a single edge list record.
pub fn parse_edge(line: &str) -> Result<(&str, &str, Distance), ParseError> {
    let mut fields = line.split_whitespace();

    let from = fields.next().ok_or(ParseError::MissingField("first location"))?;
    let to = fields.next().ok_or(ParseError::MissingField("second location"))?;
    let weight = fields.next().ok_or(ParseError::MissingField("distance"))?;

    let weight: i64 = weight
        .parse()
        .map_err(|_| ParseError::InvalidWeight(weight.to_owned()))?;

    if weight <= 0 {
        return Err(EdgeError::NonPositiveWeight {
            from: from.to_owned(),
            to: to.to_owned(),
        }
        .into());
    }

    let weight =
        u32::try_from(weight).map_err(|_| ParseError::InvalidWeight(weight.to_string()))?;

    Ok((from, to, Distance::new(weight)))
}

/// Reads a network from an edge list. Only I/O errors are fatal.
pub fn read_network(reader: impl BufRead) -> Result<LoadReport, ReadError> {
    let mut report = LoadReport::default();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let mut bytes = bytes?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }

        let (line, added) = match String::from_utf8(bytes) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let added = add_record(&mut report.network, &line);
                (line, added)
            }
            Err(error) => {
                let line = String::from_utf8_lossy(error.as_bytes()).into_owned();
                (line, Err(ParseError::InvalidEncoding))
            }
        };

        if let Err(error) = added {
            warn!("Skipping edge list line {}: {error} ({line:?})", index + 1);
            report.skipped.push(SkippedLine {
                line_number: index + 1,
                line,
                error,
            });
        }
    }

    debug!(
        "Loaded {} locations and {} edges, skipped {} lines",
        report.network.location_count(),
        report.network.edge_count(),
        report.skipped.len()
    );

    Ok(report)
}

fn add_record(network: &mut Network, line: &str) -> Result<(), ParseError> {
    let (from, to, distance) = parse_edge(line)?;
    Ok(network.add_edge(from, to, distance)?)
}

/// Reads a network from an edge list file.
pub fn load_network(path: impl AsRef<Path>) -> Result<LoadReport, ReadError> {
    let path = path.as_ref();
    debug!("Loading edge list from {}", path.display());

    let file = File::open(path)?;
    read_network(BufReader::new(file))
}
