/// Rejection reasons for a service configuration record.
///
/// Only produced by [`LocalizeService::try_init`](crate::service::LocalizeService::try_init);
/// plain `init` accepts any record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Invalid timeout: must be greater than 0 ms")]
    InvalidTimeout,
}
