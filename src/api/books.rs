//! Book catalog endpoints

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::{
    error::{ApiResult, AppError, FailureMessages},
    models::{Book, BookInput},
    AppState,
};

use super::{parse_id, MessageResponse, ValidatedJson};

const LIST_FAILED: FailureMessages =
    FailureMessages::same("Não foi possível acessar a listagem de livros");

const CREATED: &str = "Livro cadastrado com sucesso!";
const CREATE_FAILED: FailureMessages = FailureMessages {
    rejected: "Erro ao cadastrar o livro. Entre em contato com o administrador do sistema.",
    failed: "Não foi possível cadastrar o livro. Entre em contato com o administrador do sistema.",
};

const DELETED: &str = "O livro foi removido com sucesso!";
const DELETE_FAILED: FailureMessages = FailureMessages {
    rejected: "Erro ao remover o livro. Entre em contato com o administrador do sistema.",
    failed: "Não foi possível remover o livro. Entre em contato com o administrador do sistema.",
};

const UPDATED: &str = "Livro atualizado com sucesso!";
const UPDATE_FAILED: FailureMessages = FailureMessages::same(
    "Não foi possível atualizar o livro. Entre em contato com o administrador.",
);

/// List all books
#[utoipa::path(
    get,
    path = "/lista/livro",
    tag = "livros",
    responses(
        (status = 200, description = "Book list", body = Vec<Book>),
        (status = 400, description = "Listing failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> ApiResult<Json<Vec<Book>>> {
    let books = state
        .services
        .books
        .list()
        .await
        .map_err(|e| e.respond_with(LIST_FAILED))?;
    Ok(Json(books))
}

/// Register a book
#[utoipa::path(
    post,
    path = "/novo/livro",
    tag = "livros",
    request_body = BookInput,
    responses(
        (status = 200, description = "Book created", body = MessageResponse),
        (status = 400, description = "Invalid body or database failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<BookInput>, AppError>,
) -> ApiResult<Json<MessageResponse>> {
    let ValidatedJson(data) = payload.map_err(|e| e.respond_with(CREATE_FAILED))?;

    state
        .services
        .books
        .create(&data)
        .await
        .map_err(|e| e.respond_with(CREATE_FAILED))?;

    Ok(MessageResponse::json(CREATED))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/delete/livro/{idLivro}",
    tag = "livros",
    params(("idLivro" = i32, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 400, description = "Unknown book or database failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(id).map_err(|e| e.respond_with(DELETE_FAILED))?;

    state
        .services
        .books
        .delete(id)
        .await
        .map_err(|e| e.respond_with(DELETE_FAILED))?;

    Ok(MessageResponse::json(DELETED))
}

/// Replace a book's fields
#[utoipa::path(
    put,
    path = "/atualizar/livro/{idLivro}",
    tag = "livros",
    params(("idLivro" = i32, Path, description = "Book ID")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid body, unknown book or database failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<ValidatedJson<BookInput>, AppError>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(id).map_err(|e| e.respond_with(UPDATE_FAILED))?;
    let ValidatedJson(data) = payload.map_err(|e| e.respond_with(UPDATE_FAILED))?;

    state
        .services
        .books
        .update(id, &data)
        .await
        .map_err(|e| e.respond_with(UPDATE_FAILED))?;

    Ok(MessageResponse::json(UPDATED))
}
