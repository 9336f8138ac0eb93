#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod reader;
mod routing;

pub use error::{EdgeError, ParseError, ReadError, RouteError};
pub use graph::Network;
pub use model::{Distance, Fare, TransportMode, fare, fare_for_selector};
pub use reader::{LoadReport, SkippedLine, load_network, parse_edge, read_network};
pub use routing::{
    Alternate, AlternatesConfig, EnumerationConfig, Route, all_routes, plan_route,
    ranked_alternates, ranked_routes, shortest_path,
};
