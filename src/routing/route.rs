use crate::Distance;
use crate::graph::{LocationId, Network};

/// Sequence of adjacent locations from an origin to a destination, with its total distance.
/// Location names are borrowed from the network the route was computed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<'a> {
    pub distance: Distance,
    pub locations: Vec<&'a str>,
}

impl<'a> Route<'a> {
    /// Route that starts and ends at the same location.
    pub fn stationary(location: &'a str) -> Self {
        Self {
            distance: Distance::ZERO,
            locations: vec![location],
        }
    }

    pub(crate) fn from_path(network: &'a Network, path: &[LocationId], distance: Distance) -> Self {
        Self {
            distance,
            locations: path.iter().map(|&id| network.name(id)).collect(),
        }
    }

    pub fn origin(&self) -> Option<&'a str> {
        self.locations.first().copied()
    }

    pub fn destination(&self) -> Option<&'a str> {
        self.locations.last().copied()
    }

    /// Number of legs, one less than the number of locations.
    pub fn hops(&self) -> usize {
        self.locations.len().saturating_sub(1)
    }

    /// Gets an iterator over each pair of consecutive locations.
    pub fn legs(&self) -> impl ExactSizeIterator<Item = (&'a str, &'a str)> + '_ {
        self.locations.windows(2).map(|leg| (leg[0], leg[1]))
    }

    pub fn contains(&self, location: &str) -> bool {
        self.locations.iter().any(|&name| name == location)
    }
}
