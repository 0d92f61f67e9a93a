use thiserror::Error;

/// Unified error type for the entire freelance-ledger-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Degenerate chart input (empty series, one point, zero date range,
/// zero maximum) is never reported here. Those cases are drawn.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Caller contract ─────────────────────────────────────────────
    #[error("Non-finite value for {field}: {value}")]
    NonFiniteValue { field: String, value: f64 },

    #[error("Invalid canvas geometry: {0}")]
    InvalidGeometry(String),

    #[error("Malformed series: {0}")]
    MalformedSeries(String),

    // ── Export / Import ─────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    pub(crate) fn non_finite(field: impl Into<String>, value: f64) -> Self {
        CoreError::NonFiniteValue {
            field: field.into(),
            value,
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
