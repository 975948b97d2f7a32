use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use petgraph::dot::Config;
use petgraph::dot::Dot;
use petgraph::graph::DiGraph;
use petgraph::graph::EdgeReference;
use petgraph::graph::NodeIndex;
use tracing::info;

use super::write_output;
use crate::model::AddressNode;
use crate::model::FlowEdge;
use crate::model::WalletGraph;

impl fmt::Display for AddressNode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

impl fmt::Display for FlowEdge {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.count)
    }
}

/// Graphviz document of the graph. Only the `top_labels` best connected addresses are labelled,
/// the rest are drawn as points. Edge labels and widths follow the aggregated count.
pub fn render_dot(
    graph: &WalletGraph,
    top_labels: usize,
) -> String {
    let labelled: HashSet<&str> = graph.top_nodes_by_degree(top_labels).into_iter().collect();

    let node_attrs = |_: &DiGraph<AddressNode, FlowEdge>, (_, node): (NodeIndex, &AddressNode)| -> String {
        let color = if node.is_coinbase { " color = \"goldenrod\"" } else { "" };
        if labelled.contains(node.address.as_str()) {
            format!("label = {:?} shape = \"box\" fontsize = 8{}", node.address, color)
        } else {
            format!("label = \"\" shape = \"point\"{}", color)
        }
    };
    let edge_attrs = |_: &DiGraph<AddressNode, FlowEdge>, edge: EdgeReference<'_, FlowEdge>| -> String {
        let weight = edge.weight();
        format!("label = \"{}\" penwidth = {:.1}", weight.count, 1.0 + (weight.count as f64).ln())
    };

    let dot = Dot::with_attr_getters(
        graph.inner(),
        &[Config::NodeNoLabel, Config::EdgeNoLabel],
        &edge_attrs,
        &node_attrs,
    );
    format!("{}", dot)
}

pub fn write_graph_dot(
    graph: &WalletGraph,
    path: impl AsRef<Path>,
    top_labels: usize,
) -> crate::Result<()> {
    let path = path.as_ref();
    write_output(path, &render_dot(graph, top_labels))?;
    info!("report::graph_saved::{}", path.display());
    println!("[+] Saved graph to {}", path.display());
    Ok(())
}

pub fn print_graph_summary(graph: &WalletGraph) {
    println!("=== Graph Summary ===");
    println!("Nodes: {} Edges: {}", graph.node_count(), graph.edge_count());
}
