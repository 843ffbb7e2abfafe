use crate::domain::{models::certificate::Certificate, ports::CertificateRepository};
use crate::error::AppError;
use async_trait::async_trait;

pub struct MemoryCertificateRepo {
    certificates: Vec<Certificate>,
    recent: usize,
}

impl MemoryCertificateRepo {
    /// `recent` is how many leading ledger entries count as recent.
    pub fn new(certificates: Vec<Certificate>, recent: usize) -> Self {
        Self { certificates, recent }
    }
}

#[async_trait]
impl CertificateRepository for MemoryCertificateRepo {
    async fn list(&self) -> Result<Vec<Certificate>, AppError> {
        Ok(self.certificates.clone())
    }

    async fn list_recent(&self) -> Result<Vec<Certificate>, AppError> {
        Ok(self.certificates.iter().take(self.recent).cloned().collect())
    }
}
