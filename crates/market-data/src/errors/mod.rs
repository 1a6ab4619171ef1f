//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider responded but had no usable quotes for the request.
    /// The symbol may be unknown or simply untraded over the window.
    #[error("No market data for {symbol} over {range}")]
    NoData {
        /// The symbol that was requested
        symbol: String,
        /// The range or window the request covered
        range: String,
    },

    /// The provider itself failed.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// Which provider produced the failure
        provider: String,
        /// The provider's own description of it
        message: String,
    },

    /// Data from the provider failed conversion or a sanity check.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// What failed and why
        message: String,
    },
}
