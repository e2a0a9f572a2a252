//! Loans repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Loan, LoanInput},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all loans
    pub async fn list(&self) -> AppResult<Vec<Loan>> {
        let rows = sqlx::query_as::<_, Loan>(
            r#"
            SELECT id_emprestimo, id_aluno, id_livro, data_emprestimo, data_devolucao, status_emprestimo
            FROM emprestimo
            ORDER BY id_emprestimo
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a loan, returning the new id.
    ///
    /// Copy counts on the book are left untouched.
    pub async fn create(&self, data: &LoanInput) -> AppResult<i32> {
        let id: Option<i32> = sqlx::query_scalar(
            r#"
            INSERT INTO emprestimo (id_aluno, id_livro, data_emprestimo, data_devolucao, status_emprestimo)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id_emprestimo
            "#,
        )
        .bind(data.student_id)
        .bind(data.book_id)
        .bind(data.loan_date)
        .bind(data.due_date)
        .bind(&data.status)
        .fetch_optional(&self.pool)
        .await?;

        id.ok_or_else(|| AppError::NotFound("Loan insert returned no id".to_string()))
    }

    /// Replace every editable field of a loan
    pub async fn update(&self, id: i32, data: &LoanInput) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE emprestimo SET
                id_aluno = $1,
                id_livro = $2,
                data_emprestimo = $3,
                data_devolucao = $4,
                status_emprestimo = $5
            WHERE id_emprestimo = $6
            "#,
        )
        .bind(data.student_id)
        .bind(data.book_id)
        .bind(data.loan_date)
        .bind(data.due_date)
        .bind(&data.status)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Loan {} not found", id)));
        }
        Ok(())
    }
}
