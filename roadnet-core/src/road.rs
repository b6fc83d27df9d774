//! The [`Road`] value type shared by every engine.
//!
//! A road joins two named endpoints with a non-negative length and an
//! identifier that is unique within one input. Roads order by length and then
//! by id, which gives both Kruskal and Dijkstra a deterministic tie-break.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

/// An undirected, weighted connection between two named endpoints.
///
/// The stored endpoint order doubles as the direction of travel when a road
/// is seen from inside the adjacency graph. The orientation flag records
/// whether that order is the reverse of how the road was first described, so
/// [`fmt::Display`] can always print it the way the input did. The flag is a
/// presentation attribute: it takes no part in equality, hashing, or ordering.
///
/// # Examples
/// ```
/// use roadnet_core::Road;
///
/// let road = Road::new("Ankara", "Konya", 260, 7);
/// let back = road.reversed();
/// assert_eq!(back.endpoint1(), "Konya");
/// assert_eq!(road, back);
/// assert_eq!(back.to_string(), "Ankara\tKonya\t260\t7");
/// ```
#[derive(Clone, Debug)]
pub struct Road {
    endpoint1: Arc<str>,
    endpoint2: Arc<str>,
    length: u64,
    id: i64,
    reversed: bool,
}

impl Road {
    /// Creates a road in its natural (not reversed) orientation.
    #[must_use]
    pub fn new(
        endpoint1: impl Into<Arc<str>>,
        endpoint2: impl Into<Arc<str>>,
        length: u64,
        id: i64,
    ) -> Self {
        Self {
            endpoint1: endpoint1.into(),
            endpoint2: endpoint2.into(),
            length,
            id,
            reversed: false,
        }
    }

    /// Returns the same road seen from its other end.
    ///
    /// The endpoints are swapped and the orientation flag is toggled; length
    /// and id are unchanged.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            endpoint1: Arc::clone(&self.endpoint2),
            endpoint2: Arc::clone(&self.endpoint1),
            length: self.length,
            id: self.id,
            reversed: !self.reversed,
        }
    }

    /// Returns the first endpoint (the origin when travelling the road).
    #[must_use]
    pub fn endpoint1(&self) -> &str {
        &self.endpoint1
    }

    /// Returns the second endpoint (the destination when travelling the road).
    #[must_use]
    pub fn endpoint2(&self) -> &str {
        &self.endpoint2
    }

    /// Returns both endpoints in stored order.
    #[must_use]
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.endpoint1, &self.endpoint2)
    }

    /// Returns the road length.
    #[must_use]
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Returns the road identifier.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns `true` when the stored endpoint order is the reverse of the
    /// original description.
    #[must_use]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Returns `true` when both ends name the same endpoint.
    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.endpoint1 == self.endpoint2
    }

    pub(crate) fn shared_endpoint1(&self) -> &Arc<str> {
        &self.endpoint1
    }

    pub(crate) fn shared_endpoint2(&self) -> &Arc<str> {
        &self.endpoint2
    }

    /// Endpoints in display order, independent of the orientation flag.
    fn display_endpoints(&self) -> (&str, &str) {
        if self.reversed {
            (&self.endpoint2, &self.endpoint1)
        } else {
            (&self.endpoint1, &self.endpoint2)
        }
    }
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self.id == other.id
            && self.display_endpoints() == other.display_endpoints()
    }
}

impl Eq for Road {}

impl Hash for Road {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        self.id.hash(state);
        self.display_endpoints().hash(state);
    }
}

impl Ord for Road {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length
            .cmp(&other.length)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.display_endpoints().cmp(&other.display_endpoints()))
    }
}

impl PartialOrd for Road {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Road {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, second) = self.display_endpoints();
        write!(f, "{first}\t{second}\t{}\t{}", self.length, self.id)
    }
}
