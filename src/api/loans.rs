//! Loan management endpoints

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::{
    error::{ApiError, ApiResult, AppError, FailureMessages},
    models::{Loan, LoanInput},
    AppState,
};

use super::{parse_id, MessageResponse, ValidatedJson};

const LIST_FAILED: FailureMessages =
    FailureMessages::same("Não foi possível acessar a listagem de empréstimos");

const CREATED: &str = "Empréstimo cadastrado com sucesso!";
const CREATE_FAILED: FailureMessages = FailureMessages {
    rejected: "Erro ao cadastrar o empréstimo. Entre em contato com o administrador do sistema.",
    failed: "Não foi possível cadastrar o empréstimo. Entre em contato com o administrador do sistema.",
};

const UPDATED: &str = "Empréstimo atualizado com sucesso!";
const UPDATE_FAILED: FailureMessages = FailureMessages::same(
    "Não foi possível atualizar o empréstimo. Entre em contato com o administrador.",
);
const INVALID_ID: &str = "ID do empréstimo inválido. Por favor, forneça um ID válido.";

/// List all loans
#[utoipa::path(
    get,
    path = "/lista/emprestimo",
    tag = "emprestimos",
    responses(
        (status = 200, description = "Loan list", body = Vec<Loan>),
        (status = 400, description = "Listing failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_loans(State(state): State<AppState>) -> ApiResult<Json<Vec<Loan>>> {
    let loans = state
        .services
        .loans
        .list()
        .await
        .map_err(|e| e.respond_with(LIST_FAILED))?;
    Ok(Json(loans))
}

/// Lend a book to a student.
///
/// The book's available-copy count is not changed.
#[utoipa::path(
    post,
    path = "/novo/emprestimo",
    tag = "emprestimos",
    request_body = LoanInput,
    responses(
        (status = 200, description = "Loan created", body = MessageResponse),
        (status = 400, description = "Invalid body, unknown student/book or database failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_loan(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<LoanInput>, AppError>,
) -> ApiResult<Json<MessageResponse>> {
    let ValidatedJson(data) = payload.map_err(|e| e.respond_with(CREATE_FAILED))?;

    state
        .services
        .loans
        .create(&data)
        .await
        .map_err(|e| e.respond_with(CREATE_FAILED))?;

    Ok(MessageResponse::json(CREATED))
}

/// Replace a loan's fields
#[utoipa::path(
    put,
    path = "/atualizar/emprestimo/{idEmprestimo}",
    tag = "emprestimos",
    params(("idEmprestimo" = i32, Path, description = "Loan ID")),
    request_body = LoanInput,
    responses(
        (status = 200, description = "Loan updated", body = MessageResponse),
        (status = 400, description = "Invalid id or body, unknown loan or database failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_loan(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<ValidatedJson<LoanInput>, AppError>,
) -> ApiResult<Json<MessageResponse>> {
    // A bad loan id gets its own message, checked before the body
    let id = parse_id(id).map_err(|e| ApiError::new(INVALID_ID, e))?;
    let ValidatedJson(data) = payload.map_err(|e| e.respond_with(UPDATE_FAILED))?;

    state
        .services
        .loans
        .update(id, &data)
        .await
        .map_err(|e| e.respond_with(UPDATE_FAILED))?;

    Ok(MessageResponse::json(UPDATED))
}
