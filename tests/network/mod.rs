use std::io::Cursor;
use std::sync::LazyLock;

use wayfarer::{LoadReport, read_network};

/// Edge list of Indian cities, with a few malformed lines, a parallel edge (Mumbai - Pune) and a
/// disconnected component (PortBlair - Havelock).
pub const EDGE_LIST: &str = include_str!("edges.txt");

pub static CITIES_REPORT: LazyLock<LoadReport> = LazyLock::new(|| {
    read_network(Cursor::new(EDGE_LIST)).expect("in-memory edge list cannot fail to read")
});
