pub mod aggregate;

pub use aggregate::{Payslip, PayslipPatch};
