pub mod entities;

pub use entities::{Certificate, CertificateInput, CertificatePatch};
