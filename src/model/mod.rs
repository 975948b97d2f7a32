pub mod anomaly;
pub mod graph;
pub mod market;
pub mod transaction;

pub use anomaly::AnomalyRow;
pub use anomaly::SpikeFlags;
pub use graph::AddressNode;
pub use graph::FlowEdge;
pub use graph::WalletGraph;
pub use market::MarketChart;
pub use market::MarketSample;
pub use transaction::RawAddressResponse;
pub use transaction::PrevOut;
pub use transaction::RawTransaction;
pub use transaction::TxInput;
pub use transaction::TxOutput;
