//! Loan management service

use crate::{
    error::AppResult,
    models::{Loan, LoanInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        self.repository.loans.list().await
    }

    /// Record a new loan
    pub async fn create(&self, data: &LoanInput) -> AppResult<i32> {
        let id = self.repository.loans.create(data).await?;
        tracing::info!(
            loan_id = id,
            student_id = data.student_id,
            book_id = data.book_id,
            "Loan created"
        );
        Ok(id)
    }

    pub async fn update(&self, id: i32, data: &LoanInput) -> AppResult<()> {
        self.repository.loans.update(id, data).await?;
        tracing::info!(loan_id = id, status = %data.status, "Loan updated");
        Ok(())
    }
}
