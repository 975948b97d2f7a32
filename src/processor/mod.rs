pub mod anomaly;
pub mod rolling;
pub mod wallet_graph;

pub use anomaly::detect_anomalies;
pub use anomaly::flagged_rows;
pub use rolling::compute_returns;
pub use rolling::default_min_periods;
pub use rolling::rolling_stat;
pub use rolling::rolling_z;
pub use rolling::z_score;
pub use rolling::RollingStats;
pub use wallet_graph::build_graph;
pub use wallet_graph::edges_from_transaction;
pub use wallet_graph::TransactionFlow;
