//! Reconciliation of the local taxonomy against live hiscores data.

mod reconcile_errors;
mod reconcile_model;
mod reconcile_service;
mod reconcile_traits;

pub use reconcile_errors::ReconcileError;
pub use reconcile_model::CategoryComparison;
pub use reconcile_service::{diff_categories, ReconciliationService};
pub use reconcile_traits::ReconciliationServiceTrait;
