use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::DiGraph;
use petgraph::graph::EdgeIndex;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use serde::Deserialize;
use serde::Serialize;

use crate::constants::COINBASE_ADDRESS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressNode {
    pub address:     String,
    pub is_coinbase: bool,
}

/// Aggregate of every (transaction, input, output) contribution between two addresses.
/// `count` always equals `hashes.len()`; hashes keep arrival order and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub count:  usize,
    pub hashes: Vec<String>,
}

/// Directed address graph with at most one edge per (source, destination) pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletGraph {
    graph:        DiGraph<AddressNode, FlowEdge>,
    #[serde(skip)]
    node_indices: HashMap<String, NodeIndex>,
    #[serde(skip)]
    edge_indices: HashMap<(NodeIndex, NodeIndex), EdgeIndex>,
}

impl WalletGraph {
    pub fn new() -> Self {
        Self {
            graph:        DiGraph::new(),
            node_indices: HashMap::new(),
            edge_indices: HashMap::new(),
        }
    }

    // Rebuild the lookup maps from the graph (useful after deserialization)
    pub fn rebuild_indices(&mut self) {
        self.node_indices.clear();
        self.edge_indices.clear();
        for node_index in self.graph.node_indices() {
            self.node_indices.insert(self.graph[node_index].address.clone(), node_index);
        }
        for edge in self.graph.edge_references() {
            self.edge_indices.insert((edge.source(), edge.target()), edge.id());
        }
    }

    fn ensure_indices(&mut self) {
        if self.node_indices.is_empty() && self.graph.node_count() > 0 {
            self.rebuild_indices();
        }
    }

    fn node_index(
        &self,
        address: &str,
    ) -> Option<NodeIndex> {
        if self.node_indices.is_empty() {
            return self.graph.node_indices().find(|&idx| self.graph[idx].address == address);
        }
        self.node_indices.get(address).copied()
    }

    pub fn add_node(
        &mut self,
        address: &str,
    ) -> NodeIndex {
        self.ensure_indices();

        if let Some(&idx) = self.node_indices.get(address) {
            return idx;
        }

        let node = AddressNode {
            address:     address.to_string(),
            is_coinbase: address == COINBASE_ADDRESS,
        };

        let idx = self.graph.add_node(node);
        self.node_indices.insert(address.to_string(), idx);

        idx
    }

    /// Records one contribution from `from` to `to`, creating the edge on first sight.
    pub fn record_flow(
        &mut self,
        from: &str,
        to: &str,
        hash: &str,
    ) {
        let from_idx = self.add_node(from);
        let to_idx = self.add_node(to);

        match self.edge_indices.get(&(from_idx, to_idx)) {
            Some(&edge_idx) => {
                let edge = &mut self.graph[edge_idx];
                edge.count += 1;
                edge.hashes.push(hash.to_string());
            },
            None => {
                let edge = FlowEdge { count: 1, hashes: vec![hash.to_string()] };
                let edge_idx = self.graph.add_edge(from_idx, to_idx, edge);
                self.edge_indices.insert((from_idx, to_idx), edge_idx);
            },
        }
    }

    pub fn node_count(&self) -> usize { self.graph.node_count() }

    pub fn edge_count(&self) -> usize { self.graph.edge_count() }

    pub fn is_empty(&self) -> bool { self.graph.node_count() == 0 }

    pub fn edge(
        &self,
        from: &str,
        to: &str,
    ) -> Option<&FlowEdge> {
        let from_idx = self.node_index(from)?;
        let to_idx = self.node_index(to)?;
        let edge_idx = match self.edge_indices.get(&(from_idx, to_idx)) {
            Some(&idx) => idx,
            None => self.graph.find_edge(from_idx, to_idx)?,
        };
        self.graph.edge_weight(edge_idx)
    }

    // Nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &AddressNode> { self.graph.node_weights() }

    // Edges as (source, destination, aggregate) in first-seen order
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &FlowEdge)> {
        self.graph.edge_references().map(|edge| {
            (
                self.graph[edge.source()].address.as_str(),
                self.graph[edge.target()].address.as_str(),
                edge.weight(),
            )
        })
    }

    /// In-degree plus out-degree over distinct edges; a self-loop counts twice.
    pub fn degree(
        &self,
        address: &str,
    ) -> usize {
        self.node_index(address).map_or(0, |idx| self.degree_of(idx))
    }

    fn degree_of(
        &self,
        idx: NodeIndex,
    ) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
            + self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    /// The `n` best connected addresses, ties broken by first-seen order.
    pub fn top_nodes_by_degree(
        &self,
        n: usize,
    ) -> Vec<&str> {
        let mut ranked: Vec<(NodeIndex, usize)> =
            self.graph.node_indices().map(|idx| (idx, self.degree_of(idx))).collect();
        // stable sort keeps insertion order among equal degrees
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.into_iter().take(n).map(|(idx, _)| self.graph[idx].address.as_str()).collect()
    }

    pub fn inner(&self) -> &DiGraph<AddressNode, FlowEdge> { &self.graph }
}
