//! Students repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{Student, StudentInput},
};

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Postgres>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all students
    pub async fn list(&self) -> AppResult<Vec<Student>> {
        let rows = sqlx::query_as::<_, Student>(
            r#"
            SELECT id_aluno, ra, nome, sobrenome, data_nascimento, endereco, email, celular
            FROM aluno
            ORDER BY id_aluno
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a student, returning the new id
    pub async fn create(&self, data: &StudentInput) -> AppResult<i32> {
        let id: Option<i32> = sqlx::query_scalar(
            r#"
            INSERT INTO aluno (nome, sobrenome, data_nascimento, endereco, email, celular)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id_aluno
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.birth_date)
        .bind(&data.address)
        .bind(&data.email)
        .bind(&data.phone)
        .fetch_optional(&self.pool)
        .await?;

        id.ok_or_else(|| AppError::NotFound("Student insert returned no id".to_string()))
    }

    /// Replace every editable field of a student
    pub async fn update(&self, id: i32, data: &StudentInput) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE aluno SET
                nome = $1,
                sobrenome = $2,
                data_nascimento = $3,
                endereco = $4,
                email = $5,
                celular = $6
            WHERE id_aluno = $7
            "#,
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.birth_date)
        .bind(&data.address)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Student {} not found", id)));
        }
        Ok(())
    }

    /// Delete a student
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM aluno WHERE id_aluno = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Student {} not found", id)));
        }
        Ok(())
    }
}
