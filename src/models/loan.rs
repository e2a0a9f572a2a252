//! Loan (emprestimo) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Loan record as stored in the `emprestimo` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    #[serde(rename = "idEmprestimo")]
    #[sqlx(rename = "id_emprestimo")]
    pub id: i32,
    #[serde(rename = "idAluno")]
    #[sqlx(rename = "id_aluno")]
    pub student_id: i32,
    #[serde(rename = "idLivro")]
    #[sqlx(rename = "id_livro")]
    pub book_id: i32,
    #[serde(rename = "dataEmprestimo")]
    #[sqlx(rename = "data_emprestimo")]
    pub loan_date: NaiveDate,
    /// Date the book is due back
    #[serde(rename = "dataDevolucao")]
    #[sqlx(rename = "data_devolucao")]
    pub due_date: NaiveDate,
    #[serde(rename = "statusEmprestimo")]
    #[sqlx(rename = "status_emprestimo")]
    pub status: String,
}

/// Request body for creating or replacing a loan (LoanDTO)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoanInput {
    #[serde(rename = "idAluno")]
    #[validate(range(min = 1, message = "idAluno must be positive"))]
    pub student_id: i32,
    #[serde(rename = "idLivro")]
    #[validate(range(min = 1, message = "idLivro must be positive"))]
    pub book_id: i32,
    /// Loan date (YYYY-MM-DD)
    #[serde(rename = "dataEmprestimo")]
    pub loan_date: NaiveDate,
    /// Due date (YYYY-MM-DD)
    #[serde(rename = "dataDevolucao")]
    pub due_date: NaiveDate,
    #[serde(rename = "statusEmprestimo")]
    #[validate(length(min = 1, message = "statusEmprestimo is required"))]
    pub status: String,
}
