//! Books repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookInput},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            r#"
            SELECT id_livro, titulo, autor, editora, ano_publicacao, isbn,
                   quant_total, quant_disponivel, valor_aquisicao, status_livro_emprestado
            FROM livro
            ORDER BY id_livro
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a book, returning the new id
    pub async fn create(&self, data: &BookInput) -> AppResult<i32> {
        let id: Option<i32> = sqlx::query_scalar(
            r#"
            INSERT INTO livro (titulo, autor, editora, ano_publicacao, isbn,
                               quant_total, quant_disponivel, valor_aquisicao, status_livro_emprestado)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id_livro
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.publisher)
        .bind(&data.publication_year)
        .bind(&data.isbn)
        .bind(data.total_copies)
        .bind(data.available_copies)
        .bind(data.acquisition_value)
        .bind(&data.loan_status)
        .fetch_optional(&self.pool)
        .await?;

        id.ok_or_else(|| AppError::NotFound("Book insert returned no id".to_string()))
    }

    /// Replace every editable field of a book
    pub async fn update(&self, id: i32, data: &BookInput) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE livro SET
                titulo = $1,
                autor = $2,
                editora = $3,
                ano_publicacao = $4,
                isbn = $5,
                quant_total = $6,
                quant_disponivel = $7,
                valor_aquisicao = $8,
                status_livro_emprestado = $9
            WHERE id_livro = $10
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(&data.publisher)
        .bind(&data.publication_year)
        .bind(&data.isbn)
        .bind(data.total_copies)
        .bind(data.available_copies)
        .bind(data.acquisition_value)
        .bind(&data.loan_status)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }

    /// Delete a book
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM livro WHERE id_livro = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
