//! Book (livro) model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Book record as stored in the `livro` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    #[serde(rename = "idLivro")]
    #[sqlx(rename = "id_livro")]
    pub id: i32,
    #[serde(rename = "titulo")]
    #[sqlx(rename = "titulo")]
    pub title: String,
    #[serde(rename = "autor")]
    #[sqlx(rename = "autor")]
    pub author: String,
    #[serde(rename = "editora")]
    #[sqlx(rename = "editora")]
    pub publisher: Option<String>,
    #[serde(rename = "anoPublicacao")]
    #[sqlx(rename = "ano_publicacao")]
    pub publication_year: Option<String>,
    pub isbn: Option<String>,
    /// Copies owned by the library
    #[serde(rename = "quantTotal")]
    #[sqlx(rename = "quant_total")]
    pub total_copies: i32,
    /// Copies on the shelf
    #[serde(rename = "quantDisponivel")]
    #[sqlx(rename = "quant_disponivel")]
    pub available_copies: i32,
    #[serde(rename = "valorAquisicao", with = "rust_decimal::serde::float_option")]
    #[sqlx(rename = "valor_aquisicao")]
    #[schema(value_type = Option<f64>)]
    pub acquisition_value: Option<Decimal>,
    #[serde(rename = "statusLivroEmprestado")]
    #[sqlx(rename = "status_livro_emprestado")]
    pub loan_status: Option<String>,
}

/// Request body for creating or replacing a book (BookDTO)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_acquisition_value"))]
pub struct BookInput {
    #[serde(rename = "titulo")]
    #[validate(length(min = 1, message = "titulo is required"))]
    pub title: String,
    #[serde(rename = "autor")]
    #[validate(length(min = 1, message = "autor is required"))]
    pub author: String,
    #[serde(rename = "editora", default)]
    pub publisher: Option<String>,
    #[serde(rename = "anoPublicacao", default)]
    pub publication_year: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(rename = "quantTotal")]
    #[validate(range(min = 0, message = "quantTotal must not be negative"))]
    pub total_copies: i32,
    #[serde(rename = "quantDisponivel")]
    #[validate(range(min = 0, message = "quantDisponivel must not be negative"))]
    pub available_copies: i32,
    #[serde(
        rename = "valorAquisicao",
        with = "rust_decimal::serde::float_option",
        default
    )]
    #[schema(value_type = Option<f64>)]
    pub acquisition_value: Option<Decimal>,
    #[serde(rename = "statusLivroEmprestado", default)]
    pub loan_status: Option<String>,
}

fn validate_acquisition_value(input: &BookInput) -> Result<(), ValidationError> {
    match input.acquisition_value {
        Some(value) if value.is_sign_negative() => {
            Err(ValidationError::new("valorAquisicao must not be negative"))
        }
        _ => Ok(()),
    }
}
