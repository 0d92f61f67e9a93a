use serde::{Deserialize, Serialize};

/// Financial summary of one project, recomputed on every request.
///
/// Sign convention: a negative `balance` is money the client still owes,
/// a positive one is an overpayment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// base cost + billable modifications
    pub total_cost: f64,

    /// Sum of completed payments only
    pub total_paid: f64,

    /// total_paid - total_cost
    pub balance: f64,

    /// Sum of paid modification costs
    pub mods_cost: f64,

    /// The project's base cost, untouched by modifications
    pub original_cost: f64,
}
