//! The ring topology itself.
//!
//! Vertices are connected in insertion order into a single closed cycle. Adjacency is never
//! stored: it is a pure function of the vertex count, which keeps growth O(1) and makes the
//! `(num_vertices, weight)` pair the complete persisted state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RingConfig;
use crate::error::{Error, Result};

pub const NAME: &str = "Ring";

pub(crate) const DEFAULT_WEIGHT: f64 = 1.0;

/// Largest vertex count a ring may hold; the same bound `Vec` places on its capacity.
pub const MAX_VERTICES: usize = isize::MAX as usize;

/// An undirected edge, reported with the smaller endpoint first.
pub type EdgePair = (usize, usize);

/// Edge changes applied by a single [`RingTopology::push_back`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushBackDelta {
    pub vertex: usize,
    pub removed: Option<EdgePair>,
    pub added: Vec<EdgePair>,
}

/// Persisted form of a ring. Anything beyond these two fields is derived.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RingState {
    num_vertices: usize,
    weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RingState", into = "RingState")]
pub struct RingTopology {
    num_vertices: usize,
    weight: f64,
}

impl Default for RingTopology {
    fn default() -> Self {
        Self::new()
    }
}

fn check_weight(weight: f64) -> Result<f64> {
    if weight.is_finite() && (0.0..=1.0).contains(&weight) {
        Ok(weight)
    } else {
        Err(Error::InvalidArgument { weight })
    }
}

impl RingTopology {
    /// An empty ring with unit weight.
    pub fn new() -> Self {
        Self {
            num_vertices: 0,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// An empty ring whose edges all carry `weight`.
    pub fn with_weight(weight: f64) -> Result<Self> {
        Ok(Self {
            num_vertices: 0,
            weight: check_weight(weight)?,
        })
    }

    /// A ring that already holds `num_vertices` vertices, as if grown with
    /// [`push_back`](Self::push_back) that many times.
    ///
    /// Fails with [`Error::TooManyVertices`] above [`MAX_VERTICES`].
    pub fn with_vertices(num_vertices: usize, weight: f64) -> Result<Self> {
        let weight = check_weight(weight)?;
        if num_vertices > MAX_VERTICES {
            return Err(Error::TooManyVertices {
                num_vertices,
                max: MAX_VERTICES,
            });
        }
        Ok(Self {
            num_vertices,
            weight,
        })
    }

    pub fn from_config(config: &RingConfig) -> Result<Self> {
        let ring = Self::with_vertices(config.vertices, config.weight)?;
        tracing::debug!(
            num_vertices = ring.num_vertices,
            weight = ring.weight,
            "ring topology built from config"
        );
        Ok(ring)
    }

    pub fn name(&self) -> &'static str {
        NAME
    }

    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn edge_count(&self) -> usize {
        match self.num_vertices {
            0 | 1 => 0,
            2 => 1,
            n => n,
        }
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.num_vertices {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                vertex,
                num_vertices: self.num_vertices,
            })
        }
    }

    /// Neighbors of `vertex` in ascending order, index-aligned with their edge weights.
    pub fn connections(&self, vertex: usize) -> Result<(Vec<usize>, Vec<f64>)> {
        self.check_vertex(vertex)?;

        let n = self.num_vertices;
        let neighbors = match n {
            1 => Vec::new(),
            2 => vec![1 - vertex],
            _ => {
                let next = if vertex == n - 1 { 0 } else { vertex + 1 };
                let prev = if vertex == 0 { n - 1 } else { vertex - 1 };
                vec![next.min(prev), next.max(prev)]
            }
        };
        let weights = vec![self.weight; neighbors.len()];
        Ok((neighbors, weights))
    }

    pub fn are_adjacent(&self, i: usize, j: usize) -> Result<bool> {
        self.check_vertex(i)?;
        self.check_vertex(j)?;

        let n = self.num_vertices;
        Ok(i != j && (n == 2 || i.abs_diff(j) == 1 || i.abs_diff(j) == n - 1))
    }

    /// All undirected edges, each reported once as `(lo, hi)`.
    pub fn edges(&self) -> impl Iterator<Item = EdgePair> + '_ {
        let n = self.num_vertices;
        (0..self.edge_count()).map(move |i| if i + 1 < n { (i, i + 1) } else { (0, n - 1) })
    }

    /// Appends vertex `num_vertices()` and rewires the cycle around it.
    ///
    /// # Panics
    ///
    /// Panics if the ring already holds [`MAX_VERTICES`] vertices, like `Vec::push` does on
    /// capacity overflow.
    pub fn push_back(&mut self) -> PushBackDelta {
        let vertex = self.num_vertices;
        assert!(vertex < MAX_VERTICES, "ring vertex capacity exceeded");
        let delta = match vertex {
            0 => PushBackDelta {
                vertex,
                removed: None,
                added: Vec::new(),
            },
            1 => PushBackDelta {
                vertex,
                removed: None,
                added: vec![(0, 1)],
            },
            2 => PushBackDelta {
                vertex,
                removed: None,
                added: vec![(1, 2), (0, 2)],
            },
            // The old wrap-around edge closes over the new vertex.
            n => PushBackDelta {
                vertex,
                removed: Some((0, n - 1)),
                added: vec![(n - 1, n), (0, n)],
            },
        };
        self.num_vertices += 1;

        tracing::trace!(
            vertex,
            removed = ?delta.removed,
            added = ?delta.added,
            "ring vertex inserted"
        );
        delta
    }

    pub fn extra_info(&self) -> String {
        format!(
            "Number of vertices: {}\nWeight: {}\n",
            self.num_vertices, self.weight
        )
    }

    /// Encodes the checkpoint form `{"num_vertices", "weight"}` as JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Restores a ring written by [`to_bytes`](Self::to_bytes), re-validating both fields.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let state: RingState = serde_json::from_slice(bytes)?;
        let ring = Self::try_from(state)?;
        tracing::debug!(
            num_vertices = ring.num_vertices,
            weight = ring.weight,
            "ring topology restored"
        );
        Ok(ring)
    }
}

impl TryFrom<RingState> for RingTopology {
    type Error = Error;

    fn try_from(state: RingState) -> Result<Self> {
        Self::with_vertices(state.num_vertices, state.weight)
    }
}

impl From<RingTopology> for RingState {
    fn from(ring: RingTopology) -> Self {
        Self {
            num_vertices: ring.num_vertices,
            weight: ring.weight,
        }
    }
}

impl fmt::Display for RingTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", NAME)?;
        f.write_str(&self.extra_info())
    }
}
