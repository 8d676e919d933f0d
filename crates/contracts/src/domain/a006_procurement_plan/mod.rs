pub mod aggregate;

pub use aggregate::{PlanTotals, ProcurementPlan, ProcurementPlanPatch};
