/// Ampere system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Ordered names of the model input features. The model is invoked with
/// exactly this vector, in exactly this order.
pub const FEATURE_NAMES: [&str; 4] = [
    "connectionTime_decimal",
    "chargingDuration",
    "avg_power",
    "connection_end_time",
];

/// Number of model input features.
pub const FEATURE_COUNT: usize = 4;

/// Total write attempts for the raw sink (initial write + one retry with
/// the same already-assigned document).
pub const MAX_RAW_WRITE_ATTEMPTS: usize = 2;
