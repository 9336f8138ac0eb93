use tracing::debug;

use crate::graph::{LocationId, Network};
use crate::{Distance, Fare, Route, TransportMode};

/// Bounds for the exhaustive route enumeration, whose output grows exponentially with the
/// density of the network. Both bounds are disabled by default.
#[derive(Debug, Clone, Copy)]
pub struct EnumerationConfig {
    /// Stop the search once this many routes have been found.
    pub max_routes: usize,
    /// Never extend a route beyond this number of locations (origin and destination included).
    pub max_locations: usize,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            max_routes: usize::MAX,
            max_locations: usize::MAX,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AlternatesConfig {
    /// Maximum number of alternate routes returned.
    pub limit: usize,
    /// Mode used to quote the fare of each alternate route.
    pub mode: TransportMode,
    pub enumeration: EnumerationConfig,
}

impl Default for AlternatesConfig {
    fn default() -> Self {
        Self {
            limit: 10,
            mode: TransportMode::default(),
            enumeration: EnumerationConfig::default(),
        }
    }
}

/// Alternate route with its quoted fare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate<'a> {
    pub route: Route<'a>,
    pub fare: Fare,
}

/// Returns every simple route (visiting each location at most once) from origin to destination,
/// in depth-first discovery order following the neighbors insertion order.
///
/// Parallel edges are followed once. The distance of each route is computed by taking, for every
/// leg, the first stored link between its two locations.
pub fn all_routes<'a>(
    network: &'a Network,
    origin: &'a str,
    destination: &'a str,
    config: &EnumerationConfig,
) -> Vec<Route<'a>> {
    debug!("Enumerating routes {origin} -> {destination} with {config:?}");

    if config.max_routes == 0 || config.max_locations == 0 {
        return vec![];
    }

    if origin == destination {
        return vec![Route::stationary(origin)];
    }

    let (Some(origin), Some(destination)) = (network.id(origin), network.id(destination)) else {
        return vec![];
    };

    let mut routes = vec![];
    let mut visited = vec![false; network.location_count()];
    // in-progress route, and for each of its locations the index of the next link to follow
    let mut path = vec![origin];
    let mut cursors = vec![0];
    visited[origin.index()] = true;

    while let Some(cursor) = cursors.last_mut() {
        let Some(&location) = path.last() else {
            break;
        };

        let links = network.links(location);
        let index = *cursor;

        let Some(link) = links.get(index) else {
            // backtrack: all the links of this location have been followed
            visited[location.index()] = false;
            path.pop();
            cursors.pop();
            continue;
        };

        *cursor += 1;
        let next = link.target;

        if visited[next.index()] || links[..index].iter().any(|l| l.target == next) {
            continue;
        }

        if path.len() >= config.max_locations {
            continue;
        }

        if next == destination {
            path.push(next);
            routes.push(route_along(network, &path));
            path.pop();

            if routes.len() >= config.max_routes {
                break;
            }
            continue;
        }

        visited[next.index()] = true;
        path.push(next);
        cursors.push(0);
    }

    debug!("Found {} routes", routes.len());

    routes
}

/// Returns every simple route from origin to destination sorted by number of locations. Routes
/// with the same number of locations keep their discovery order.
pub fn ranked_routes<'a>(
    network: &'a Network,
    origin: &'a str,
    destination: &'a str,
    config: &EnumerationConfig,
) -> Vec<Route<'a>> {
    let mut routes = all_routes(network, origin, destination, config);
    routes.sort_by_key(|route| route.locations.len());
    routes
}

/// Returns the ranked routes from origin to destination, skipping the top ranked one (that is
/// expected to be reported as the best route already), up to the configured limit.
pub fn ranked_alternates<'a>(
    network: &'a Network,
    origin: &'a str,
    destination: &'a str,
    config: &AlternatesConfig,
) -> Vec<Alternate<'a>> {
    ranked_routes(network, origin, destination, &config.enumeration)
        .into_iter()
        .skip(1)
        .take(config.limit)
        .map(|route| Alternate {
            fare: config.mode.fare(route.distance),
            route,
        })
        .collect()
}

fn route_along<'a>(network: &'a Network, path: &[LocationId]) -> Route<'a> {
    let distance = path
        .windows(2)
        .filter_map(|leg| network.link_distance_between(leg[0], leg[1]))
        .sum::<Distance>();

    Route::from_path(network, path, distance)
}
