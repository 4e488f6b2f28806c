//! Tours and the solver's result set.

use kspt_core::{NodeId, Tick};
use kspt_ripple::NodeShortfall;

use crate::{TourError, TourResult};

/// One complete walk through every waypoint group, in group order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    pub path:   Vec<NodeId>,
    /// Sum of the edge weights along `path`.
    pub length: f64,
}

impl Tour {
    /// First node of the tour (a node of the origin group).
    pub fn origin(&self) -> Option<NodeId> {
        self.path.first().copied()
    }

    /// Last node of the tour (a node of the final group).
    pub fn destination(&self) -> Option<NodeId> {
        self.path.last().copied()
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A stage whose wavefront died out before every node of its destination
/// group collected `k` arrivals.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortfall {
    /// Index of the destination group in the waypoint list (≥ 1).
    pub group: usize,
    /// Tick at which the stage ran dry.
    pub tick:  Tick,
    pub unmet: Vec<NodeShortfall>,
}

/// Result of a solve: the tours found plus any stage shortfalls.
///
/// Tours are grouped by final node (final-group order) and, within a node,
/// listed in the order the simulation produced them.  Use
/// [`sorted_by_length`][Self::sorted_by_length] for an ascending view.
#[derive(Debug, Clone, PartialEq)]
pub struct TourSet {
    pub tours:       Vec<Tour>,
    pub requested_k: usize,
    /// Empty when every stage completed.
    pub shortfalls:  Vec<Shortfall>,
}

impl TourSet {
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// `true` if no stage ran out of paths.
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tour> {
        self.tours.iter()
    }

    /// Copy of the tours ordered by ascending length.  Equal lengths keep
    /// their original relative order.
    pub fn sorted_by_length(&self) -> Vec<Tour> {
        let mut tours = self.tours.clone();
        tours.sort_by(|a, b| a.length.total_cmp(&b.length));
        tours
    }

    /// The tours if every stage completed, otherwise
    /// [`TourError::InsufficientPaths`] carrying the partial tours and the
    /// first group that came up short.
    pub fn into_complete(self) -> TourResult<Vec<Tour>> {
        match self.shortfalls.first() {
            None => Ok(self.tours),
            Some(first) => Err(TourError::InsufficientPaths {
                requested: self.requested_k,
                found:     self.tours.len(),
                group:     first.group,
                tours:     self.tours,
            }),
        }
    }
}

impl IntoIterator for TourSet {
    type Item = Tour;
    type IntoIter = std::vec::IntoIter<Tour>;

    fn into_iter(self) -> Self::IntoIter {
        self.tours.into_iter()
    }
}

impl<'a> IntoIterator for &'a TourSet {
    type Item = &'a Tour;
    type IntoIter = std::slice::Iter<'a, Tour>;

    fn into_iter(self) -> Self::IntoIter {
        self.tours.iter()
    }
}
