//! Ripple storage for one stage.
//!
//! Ripples live in Structure-of-Arrays form indexed by `RippleId`.  A ripple
//! is never removed from the store: deactivation only drops its id from the
//! simulator's active list, so its path and radius stay available to
//! observers until the stage ends.

use kspt_core::{NodeId, RippleId, Tick};

/// All ripples created during one stage.
#[derive(Debug, Default)]
pub struct RippleStore {
    /// Node the ripple spreads from.
    pub epicenter: Vec<NodeId>,

    /// Distance travelled since the ripple was created at its epicenter.
    /// Starts at the overshoot of the crossing that created it.
    pub radius: Vec<f64>,

    /// Nodes from the stage origin (or earlier stages) to the epicenter.
    pub path: Vec<Vec<NodeId>>,

    /// Tick at which the ripple was created.
    pub born: Vec<Tick>,
}

impl RippleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ripple and return its id (sequential from 0).
    pub fn spawn(&mut self, epicenter: NodeId, radius: f64, path: Vec<NodeId>, born: Tick) -> RippleId {
        let id = RippleId(self.epicenter.len() as u32);
        self.epicenter.push(epicenter);
        self.radius.push(radius);
        self.path.push(path);
        self.born.push(born);
        id
    }

    pub fn len(&self) -> usize {
        self.epicenter.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epicenter.is_empty()
    }

    /// Borrowed view of one ripple.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this store.
    #[inline]
    pub fn get(&self, id: RippleId) -> RippleRef<'_> {
        let i = id.index();
        RippleRef {
            id,
            epicenter: self.epicenter[i],
            radius:    self.radius[i],
            path:      &self.path[i],
            born:      self.born[i],
        }
    }
}

/// Read-only view of a single ripple, handed to observers.
#[derive(Debug, Clone, Copy)]
pub struct RippleRef<'a> {
    pub id:        RippleId,
    pub epicenter: NodeId,
    pub radius:    f64,
    pub path:      &'a [NodeId],
    pub born:      Tick,
}
