use tracing::trace;

use crate::models::balance::BalanceSnapshot;
use crate::models::project::Project;

/// Computes a project's financial snapshot from its records.
///
/// Pure: reads the project, never mutates it, and returns a fresh
/// snapshot on every call.
pub struct BalanceService;

impl BalanceService {
    pub fn new() -> Self {
        Self
    }

    /// Compute the balance snapshot.
    ///
    /// - `total_paid`: completed payments only; pending and cancelled ones
    ///   are left out entirely
    /// - `mods_cost`: modifications with `is_paid` only
    /// - `total_cost`: base cost + `mods_cost`
    /// - `balance`: `total_paid - total_cost` (negative = client owes)
    pub fn calculate_balance(&self, project: &Project) -> BalanceSnapshot {
        let total_paid: f64 = project
            .payments
            .iter()
            .filter(|p| p.is_completed())
            .map(|p| p.amount)
            .sum();

        let mods_cost: f64 = project
            .modifications
            .iter()
            .filter(|m| m.is_paid)
            .map(|m| m.cost)
            .sum();

        let total_cost = project.base_cost + mods_cost;
        let balance = total_paid - total_cost;

        trace!(
            project = %project.id,
            total_paid,
            mods_cost,
            balance,
            "balance computed"
        );

        BalanceSnapshot {
            total_cost,
            total_paid,
            balance,
            mods_cost,
            original_cost: project.base_cost,
        }
    }
}

impl Default for BalanceService {
    fn default() -> Self {
        Self::new()
    }
}
