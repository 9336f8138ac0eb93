use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{Distance, EdgeError};

/// Dense index of a location inside a [`Network`], assigned in order of first appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct LocationId(u32);

impl LocationId {
    /// Id of the location stored at the given index, if the index fits in an id.
    fn from_index(index: usize) -> Result<Self, EdgeError> {
        u32::try_from(index)
            .map(Self)
            .map_err(|_| EdgeError::TooManyLocations)
    }

    pub(crate) const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// One direction of a stored undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link {
    pub target: LocationId,
    pub distance: Distance,
}

/// Undirected weighted network of named locations.
///
/// Every edge is stored as two links, one in the list of each endpoint, and links are kept in
/// insertion order. Parallel edges between the same pair of locations are all retained.
#[derive(Debug, Clone, Default)]
pub struct Network {
    names: Vec<String>,
    ids: FxHashMap<String, LocationId>,
    links: Vec<Vec<Link>>,
    edge_count: usize,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a network from a list of `(location, location, distance)` edges, failing on the
    /// first invalid edge.
    pub fn from_edges<I, S>(edges: I) -> Result<Self, EdgeError>
    where
        I: IntoIterator<Item = (S, S, Distance)>,
        S: AsRef<str>,
    {
        let mut network = Self::new();
        for (from, to, distance) in edges {
            network.add_edge(from.as_ref(), to.as_ref(), distance)?;
        }
        Ok(network)
    }

    /// Adds an undirected edge: `to` is appended to the links of `from` and vice versa, with the
    /// same distance. Adding the same edge twice stores a parallel edge.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: Distance) -> Result<(), EdgeError> {
        if from.is_empty() || to.is_empty() {
            return Err(EdgeError::EmptyLocation);
        }

        if distance.is_zero() {
            return Err(EdgeError::NonPositiveWeight {
                from: from.to_owned(),
                to: to.to_owned(),
            });
        }

        let from = self.intern(from)?;
        let to = self.intern(to)?;

        self.links[from.index()].push(Link {
            target: to,
            distance,
        });
        self.links[to.index()].push(Link {
            target: from,
            distance,
        });
        self.edge_count += 1;

        Ok(())
    }

    fn intern(&mut self, name: &str) -> Result<LocationId, EdgeError> {
        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }

        let id = LocationId::from_index(self.names.len())?;
        debug!("New location {name} ({id:?})");

        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        self.links.push(vec![]);
        Ok(id)
    }

    pub fn contains(&self, location: &str) -> bool {
        self.ids.contains_key(location)
    }

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected edges added, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Gets an iterator over all the locations in order of first appearance.
    pub fn locations(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Gets an iterator over the neighbors of the location and the distance to each of them, in
    /// insertion order. Returns an empty iterator if the location doesn't belong to the network.
    pub fn neighbors<'a>(
        &'a self,
        location: &str,
    ) -> impl Iterator<Item = (&'a str, Distance)> + use<'a> {
        self.id(location)
            .into_iter()
            .flat_map(move |id| self.links(id))
            .map(move |link| (self.name(link.target), link.distance))
    }

    /// Gets the distance of the first stored link from `from` to `to`, if the two locations are
    /// adjacent. With parallel edges this is the one added first, not the shortest.
    pub fn link_distance(&self, from: &str, to: &str) -> Option<Distance> {
        let from = self.id(from)?;
        let to = self.id(to)?;
        self.link_distance_between(from, to)
    }

    /// Gets all the locations whose name starts with the given character, sorted by name.
    pub fn locations_starting_with(&self, initial: char) -> Vec<&str> {
        let mut locations: Vec<&str> = self
            .locations()
            .filter(|name| name.starts_with(initial))
            .collect();
        locations.sort_unstable();
        locations
    }

    pub(crate) fn id(&self, location: &str) -> Option<LocationId> {
        self.ids.get(location).copied()
    }

    pub(crate) fn name(&self, id: LocationId) -> &str {
        &self.names[id.index()]
    }

    pub(crate) fn links(&self, id: LocationId) -> &[Link] {
        self.links.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn link_distance_between(
        &self,
        from: LocationId,
        to: LocationId,
    ) -> Option<Distance> {
        self.links(from)
            .iter()
            .find(|link| link.target == to)
            .map(|link| link.distance)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn triangle() -> Network {
        Network::from_edges([
            ("A", "B", Distance::new(5)),
            ("B", "C", Distance::new(3)),
            ("A", "C", Distance::new(10)),
        ])
        .unwrap()
    }

    #[test]
    fn add_edge_is_undirected() {
        let network = triangle();

        assert_eq!(network.location_count(), 3);
        assert_eq!(network.edge_count(), 3);

        assert_eq!(
            network.neighbors("A").collect::<Vec<_>>(),
            vec![("B", Distance::new(5)), ("C", Distance::new(10))]
        );
        assert_eq!(
            network.neighbors("B").collect::<Vec<_>>(),
            vec![("A", Distance::new(5)), ("C", Distance::new(3))]
        );
        assert_eq!(
            network.neighbors("C").collect::<Vec<_>>(),
            vec![("B", Distance::new(3)), ("A", Distance::new(10))]
        );
    }

    #[test]
    fn neighbors_of_unknown_location() {
        let network = triangle();
        assert_eq!(network.neighbors("Z").count(), 0);
        assert!(!network.contains("Z"));
    }

    #[test]
    fn add_edge_keeps_parallel_edges() {
        let mut network = triangle();
        network.add_edge("B", "A", Distance::new(2)).unwrap();
        network.add_edge("A", "B", Distance::new(5)).unwrap();

        assert_eq!(network.edge_count(), 5);
        assert_eq!(
            network.neighbors("A").collect::<Vec<_>>(),
            vec![
                ("B", Distance::new(5)),
                ("C", Distance::new(10)),
                ("B", Distance::new(2)),
                ("B", Distance::new(5)),
            ]
        );

        // the first link wins, even if a parallel edge is shorter
        assert_eq!(network.link_distance("A", "B"), Some(Distance::new(5)));
        assert_eq!(network.link_distance("B", "A"), Some(Distance::new(5)));
    }

    #[test]
    fn add_edge_self_loop() {
        let mut network = Network::new();
        network.add_edge("A", "A", Distance::new(4)).unwrap();

        assert_eq!(network.location_count(), 1);
        assert_eq!(
            network.neighbors("A").collect::<Vec<_>>(),
            vec![("A", Distance::new(4)), ("A", Distance::new(4))]
        );
    }

    #[test]
    fn add_edge_rejects_invalid_edges() {
        let mut network = Network::new();

        assert_eq!(
            network.add_edge("A", "B", Distance::ZERO),
            Err(EdgeError::NonPositiveWeight {
                from: "A".into(),
                to: "B".into()
            })
        );
        assert_eq!(
            network.add_edge("", "B", Distance::new(1)),
            Err(EdgeError::EmptyLocation)
        );
        assert!(network.is_empty());
        assert_eq!(network.edge_count(), 0);
    }

    #[test]
    fn location_id_from_index() {
        assert_eq!(LocationId::from_index(0), Ok(LocationId(0)));
        assert_eq!(
            LocationId::from_index(u32::MAX as usize),
            Ok(LocationId(u32::MAX))
        );
        assert_eq!(
            LocationId::from_index(u32::MAX as usize + 1),
            Err(EdgeError::TooManyLocations)
        );
    }

    #[test]
    fn link_distance_between_non_adjacent_locations() {
        let mut network = triangle();
        network.add_edge("D", "E", Distance::new(1)).unwrap();

        assert_eq!(network.link_distance("A", "D"), None);
        assert_eq!(network.link_distance("A", "Z"), None);
        assert_eq!(network.link_distance("C", "A"), Some(Distance::new(10)));
    }

    #[test]
    fn locations_starting_with_is_sorted() {
        let network = Network::from_edges([
            ("Mumbai", "Pune", Distance::new(150)),
            ("Madurai", "Chennai", Distance::new(460)),
            ("Mysore", "Mangalore", Distance::new(250)),
        ])
        .unwrap();

        assert_eq!(
            network.locations_starting_with('M'),
            vec!["Madurai", "Mangalore", "Mumbai", "Mysore"]
        );
        assert_eq!(network.locations_starting_with('P'), vec!["Pune"]);
        assert!(network.locations_starting_with('m').is_empty());
        assert!(network.locations_starting_with('X').is_empty());
    }

    #[test]
    fn locations_in_order_of_appearance() {
        let network = triangle();
        assert_eq!(network.locations().collect::<Vec<_>>(), ["A", "B", "C"]);
    }
}
