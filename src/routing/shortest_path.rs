use std::cmp::Reverse;

use radix_heap::RadixHeapMap;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::graph::{LocationId, Network};
use crate::{Distance, Route, RouteError};

/// Returns the route with the minimum total distance from origin to destination, or None if the
/// destination cannot be reached.
///
/// A location that doesn't belong to the network behaves as an isolated location: a route is
/// only found if origin and destination are the same location.
pub fn shortest_path<'a>(
    network: &'a Network,
    origin: &'a str,
    destination: &'a str,
) -> Option<Route<'a>> {
    debug!("Computing shortest path {origin} -> {destination}");

    if origin == destination {
        return Some(Route::stationary(origin));
    }

    let origin = network.id(origin)?;
    let destination = network.id(destination)?;

    // (current) shortest distance from origin to this location
    let mut shortest_distances = FxHashMap::from_iter([(origin, Distance::ZERO)]);

    // previous location (value) on the current best known route from origin to this location (key)
    let mut previous_map: FxHashMap<LocationId, LocationId> = FxHashMap::default();

    // priority queue of discovered locations that may need to be visited
    let mut frontier = RadixHeapMap::from_iter([(Reverse(Distance::ZERO), origin)]);

    while let Some((Reverse(distance), location)) = frontier.pop() {
        // check if we already know a cheaper way to get to this location from the origin
        let shortest_distance = *shortest_distances
            .get(&location)
            .unwrap_or(&Distance::MAX);
        if distance > shortest_distance {
            continue;
        }

        if location == destination {
            let path = unpack_path(&previous_map, destination);
            return Some(Route::from_path(network, &path, distance));
        }

        for link in network.links(location) {
            let distance = distance + link.distance;

            let shortest_distance = *shortest_distances
                .get(&link.target)
                .unwrap_or(&Distance::MAX);

            // check if we can follow the current route to reach the neighbor in a cheaper way
            if distance < shortest_distance {
                // Relax: we have now found a better way that we are going to explore
                shortest_distances.insert(link.target, distance);
                previous_map.insert(link.target, location);
                frontier.push(Reverse(distance), link.target);
            }
        }
    }

    debug!(
        "No path found from {} to {}",
        network.name(origin),
        network.name(destination)
    );

    None
}

/// Same as [`shortest_path`], but reports an unreachable destination as an error.
pub fn plan_route<'a>(
    network: &'a Network,
    origin: &'a str,
    destination: &'a str,
) -> Result<Route<'a>, RouteError> {
    shortest_path(network, origin, destination).ok_or_else(|| RouteError::RouteNotFound {
        origin: origin.to_owned(),
        destination: destination.to_owned(),
    })
}

/// Unpacks the shortest path from destination back to origin.
fn unpack_path(
    previous_map: &FxHashMap<LocationId, LocationId>,
    destination: LocationId,
) -> Vec<LocationId> {
    let mut locations = vec![destination];
    let mut next = destination;

    while let Some(&previous) = previous_map.get(&next) {
        next = previous;
        locations.push(previous);
    }

    locations.reverse();
    locations
}
