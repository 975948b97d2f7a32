/// ======================= Wallet graph =======================
/// Source address used when a transaction spends no previous outputs.
pub const COINBASE_ADDRESS: &str = "COINBASE";

pub const BLOCKCHAIN_INFO_BASE_URL: &str = "https://blockchain.info";
/// The endpoint returns nothing useful for small limits, so at least this many are requested.
pub const BLOCKCHAIN_INFO_MIN_FETCH_LIMIT: usize = 50;

pub const DEFAULT_TRANSACTION_LIMIT: usize = 20;
pub const DEFAULT_TOP_LABELS: usize = 10;
pub const DEFAULT_GRAPH_OUTPUT: &str = "out/wallet_graph.dot";

/// ======================= Token anomalies =======================
pub const COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

pub const DEFAULT_Z_THRESHOLD: f64 = 3.0;
pub const DEFAULT_WINDOW: usize = 24;
pub const DEFAULT_DAYS: u32 = 30;
pub const DEFAULT_VS_CURRENCY: &str = "usd";
pub const DEFAULT_FLAGGED_TAIL: usize = 15;
pub const DEFAULT_ANOMALY_OUTPUT: &str = "out/token_anomalies.json";

/// Lower bound of the rolling min-periods policy `max(MIN_PERIODS_FLOOR, window / 3)`.
pub const MIN_PERIODS_FLOOR: usize = 3;

/// ======================= Fetch =======================
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: usize = 3;
pub const DEFAULT_BASE_RETRY_DELAY_MS: u64 = 500;
pub const DEFAULT_MAX_RETRY_DELAY_MS: u64 = 10_000;
pub const USER_AGENT: &str = concat!("muraqib/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_CONFIG_PATH: &str = "Config.toml";
pub const DEFAULT_LOG_DIRECTORY: &str = ".logs";
// Target prefix of every event emitted by this crate
pub const LOG_TARGET: &str = "muraqib";
