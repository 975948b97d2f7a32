use tracing::debug;

use crate::constants::COINBASE_ADDRESS;
use crate::model::RawTransaction;
use crate::model::WalletGraph;

/// One (input, output) pair of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionFlow<'a> {
    pub source:      &'a str,
    pub destination: &'a str,
    pub hash:        &'a str,
}

/// Cross product of a transaction's input and output addresses, input-major.
/// Transactions without spendable inputs are sourced from the coinbase sentinel.
pub fn edges_from_transaction(tx: &RawTransaction) -> Vec<TransactionFlow<'_>> {
    let mut inputs = tx.input_addresses();
    if inputs.is_empty() {
        inputs.push(COINBASE_ADDRESS);
    }
    let outputs = tx.output_addresses();
    let hash = tx.hash();

    inputs
        .iter()
        .flat_map(|&source| {
            outputs.iter().map(move |&destination| TransactionFlow { source, destination, hash })
        })
        .collect()
}

pub fn build_graph<'a>(transactions: impl IntoIterator<Item = &'a RawTransaction>) -> WalletGraph {
    let mut graph = WalletGraph::new();
    let mut tx_count = 0usize;

    for tx in transactions {
        tx_count += 1;
        for flow in edges_from_transaction(tx) {
            graph.record_flow(flow.source, flow.destination, flow.hash);
        }
    }

    debug!(
        "wallet_graph::built::transactions::{}::nodes::{}::edges::{}",
        tx_count,
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TxOutput;

    #[test]
    fn cross_product_is_input_major() {
        let tx = RawTransaction::new("h", &["a", "b"], &["x", "y"]);
        let pairs: Vec<(&str, &str)> =
            edges_from_transaction(&tx).iter().map(|flow| (flow.source, flow.destination)).collect();
        assert_eq!(pairs, vec![("a", "x"), ("a", "y"), ("b", "x"), ("b", "y")]);
    }

    #[test]
    fn no_inputs_means_coinbase() {
        let tx = RawTransaction::new("h", &[], &["x", "y", "z"]);
        let flows = edges_from_transaction(&tx);
        assert_eq!(flows.len(), 3);
        assert!(flows.iter().all(|flow| flow.source == COINBASE_ADDRESS && flow.hash == "h"));
    }

    #[test]
    fn no_outputs_means_no_edges() {
        let tx = RawTransaction::new("h", &["a"], &[]);
        assert!(edges_from_transaction(&tx).is_empty());

        let graph = build_graph(&[tx]);
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn missing_hash_is_empty_string() {
        let tx = RawTransaction { hash: None, inputs: vec![], out: vec![TxOutput { addr: Some("x".to_string()) }] };
        let flows = edges_from_transaction(&tx);
        assert_eq!(flows[0].hash, "");
    }

    #[test]
    fn empty_input_builds_empty_graph() {
        let transactions: Vec<RawTransaction> = Vec::new();
        let graph = build_graph(&transactions);
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn duplicate_pairs_in_one_transaction_repeat_the_hash() {
        let tx = RawTransaction::new("h", &["a", "a"], &["b"]);
        let graph = build_graph(&[tx]);
        let edge = graph.edge("a", "b").unwrap();
        assert_eq!(edge.count, 2);
        assert_eq!(edge.hashes, vec!["h", "h"]);
    }
}
