//! Resource-allocation graph.
//!
//! Bipartite view of a `ResourceState`: process nodes `P0..Pn`, resource
//! nodes `R0..Rm`. An allocation edge `Rj -> Pi` carries the units `Pi`
//! holds; a request edge `Pi -> Rj` carries the units `Pi` may still ask
//! for. Zero-weight edges are omitted.

use serde::{Deserialize, Serialize};

use crate::models::ResourceState;

/// Edge direction and meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeKind {
    /// Resource held by a process (`R -> P`).
    Allocation,
    /// Outstanding need of a process (`P -> R`).
    Request,
}

/// A weighted edge between a process and a resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Process index.
    pub process: usize,
    /// Resource type index.
    pub resource: usize,
    /// Allocation or request.
    pub kind: EdgeKind,
    /// Units on the edge.
    pub units: u64,
}

impl GraphEdge {
    /// Source node label (`"R1"` or `"P0"`).
    pub fn from_label(&self) -> String {
        match self.kind {
            EdgeKind::Allocation => format!("R{}", self.resource),
            EdgeKind::Request => format!("P{}", self.process),
        }
    }

    /// Target node label.
    pub fn to_label(&self) -> String {
        match self.kind {
            EdgeKind::Allocation => format!("P{}", self.process),
            EdgeKind::Request => format!("R{}", self.resource),
        }
    }
}

/// Resource-allocation graph of a state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllocationGraph {
    /// Number of process nodes.
    pub process_count: usize,
    /// Number of resource nodes.
    pub resource_count: usize,
    /// Edges, allocation before request for each process/resource pair.
    pub edges: Vec<GraphEdge>,
}

impl AllocationGraph {
    /// Builds the graph of `state`.
    pub fn from_state(state: &ResourceState) -> Self {
        let mut edges = Vec::new();
        for (p, claim) in state.processes.iter().enumerate() {
            for (r, (&held, need)) in claim.allocation.iter().zip(claim.need()).enumerate() {
                if held > 0 {
                    edges.push(GraphEdge {
                        process: p,
                        resource: r,
                        kind: EdgeKind::Allocation,
                        units: held,
                    });
                }
                if need > 0 {
                    edges.push(GraphEdge {
                        process: p,
                        resource: r,
                        kind: EdgeKind::Request,
                        units: need,
                    });
                }
            }
        }

        Self {
            process_count: state.process_count(),
            resource_count: state.resource_count(),
            edges,
        }
    }

    /// Edges touching one process.
    pub fn edges_for_process(&self, process: usize) -> Vec<&GraphEdge> {
        self.edges.iter().filter(|e| e.process == process).collect()
    }

    /// All allocation edges.
    pub fn allocation_edges(&self) -> Vec<&GraphEdge> {
        self.edges_of(EdgeKind::Allocation)
    }

    /// All request edges.
    pub fn request_edges(&self) -> Vec<&GraphEdge> {
        self.edges_of(EdgeKind::Request)
    }

    fn edges_of(&self, kind: EdgeKind) -> Vec<&GraphEdge> {
        self.edges.iter().filter(|e| e.kind == kind).collect()
    }
}
