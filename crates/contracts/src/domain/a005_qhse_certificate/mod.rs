pub mod aggregate;

pub use aggregate::{AlertLevel, QhseCertificate, QhseCertificatePatch};
