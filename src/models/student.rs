//! Student (aluno) model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Student record as stored in the `aluno` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    #[serde(rename = "idAluno")]
    #[sqlx(rename = "id_aluno")]
    pub id: i32,
    /// Registration code, assigned by the database
    #[serde(rename = "ra")]
    #[sqlx(rename = "ra")]
    pub registration: Option<String>,
    #[serde(rename = "nome")]
    #[sqlx(rename = "nome")]
    pub first_name: String,
    #[serde(rename = "sobrenome")]
    #[sqlx(rename = "sobrenome")]
    pub last_name: String,
    #[serde(rename = "dataNascimento")]
    #[sqlx(rename = "data_nascimento")]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "endereco")]
    #[sqlx(rename = "endereco")]
    pub address: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "celular")]
    #[sqlx(rename = "celular")]
    pub phone: Option<String>,
}

/// Request body for creating or replacing a student (StudentDTO)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct StudentInput {
    #[serde(rename = "nome")]
    #[validate(length(min = 1, message = "nome is required"))]
    pub first_name: String,
    #[serde(rename = "sobrenome")]
    #[validate(length(min = 1, message = "sobrenome is required"))]
    pub last_name: String,
    /// Birth date (YYYY-MM-DD)
    #[serde(rename = "dataNascimento", default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(rename = "endereco", default)]
    pub address: Option<String>,
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[serde(rename = "celular", default)]
    pub phone: Option<String>,
}
