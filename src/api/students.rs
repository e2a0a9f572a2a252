//! Student registry endpoints

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use crate::{
    error::{ApiResult, AppError, FailureMessages},
    models::{Student, StudentInput},
    AppState,
};

use super::{parse_id, MessageResponse, ValidatedJson};

const LIST_FAILED: FailureMessages =
    FailureMessages::same("Não foi possível acessar a listagem de alunos");

const CREATED: &str = "Aluno cadastrado com sucesso!";
const CREATE_FAILED: FailureMessages = FailureMessages {
    rejected: "Erro ao cadastrar o aluno. Entre em contato com o administrador do sistema.",
    failed: "Não foi possível cadastrar o aluno. Entre em contato com o administrador do sistema.",
};

const DELETED: &str = "O aluno foi removido com sucesso!";
const DELETE_FAILED: FailureMessages = FailureMessages {
    rejected: "Erro ao remover o aluno. Entre em contato com o administrador do sistema.",
    failed: "Não foi possível remover o aluno. Entre em contato com o administrador do sistema.",
};

const UPDATED: &str = "Aluno atualizado com sucesso!";
const UPDATE_FAILED: FailureMessages = FailureMessages::same(
    "Não foi possível atualizar o aluno. Entre em contato com o administrador.",
);

/// List all students
#[utoipa::path(
    get,
    path = "/lista/aluno",
    tag = "alunos",
    responses(
        (status = 200, description = "Student list", body = Vec<Student>),
        (status = 400, description = "Listing failed", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_students(State(state): State<AppState>) -> ApiResult<Json<Vec<Student>>> {
    let students = state
        .services
        .students
        .list()
        .await
        .map_err(|e| e.respond_with(LIST_FAILED))?;
    Ok(Json(students))
}

/// Register a student
#[utoipa::path(
    post,
    path = "/novo/aluno",
    tag = "alunos",
    request_body = StudentInput,
    responses(
        (status = 200, description = "Student created", body = MessageResponse),
        (status = 400, description = "Invalid body or database failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<ValidatedJson<StudentInput>, AppError>,
) -> ApiResult<Json<MessageResponse>> {
    let ValidatedJson(data) = payload.map_err(|e| e.respond_with(CREATE_FAILED))?;

    state
        .services
        .students
        .create(&data)
        .await
        .map_err(|e| e.respond_with(CREATE_FAILED))?;

    Ok(MessageResponse::json(CREATED))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/delete/aluno/{idAluno}",
    tag = "alunos",
    params(("idAluno" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 400, description = "Unknown student, student with loans, or database failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(id).map_err(|e| e.respond_with(DELETE_FAILED))?;

    state
        .services
        .students
        .delete(id)
        .await
        .map_err(|e| e.respond_with(DELETE_FAILED))?;

    Ok(MessageResponse::json(DELETED))
}

/// Replace a student's fields
#[utoipa::path(
    put,
    path = "/atualizar/aluno/{idAluno}",
    tag = "alunos",
    params(("idAluno" = i32, Path, description = "Student ID")),
    request_body = StudentInput,
    responses(
        (status = 200, description = "Student updated", body = MessageResponse),
        (status = 400, description = "Invalid body, unknown student or database failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<ValidatedJson<StudentInput>, AppError>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(id).map_err(|e| e.respond_with(UPDATE_FAILED))?;
    let ValidatedJson(data) = payload.map_err(|e| e.respond_with(UPDATE_FAILED))?;

    state
        .services
        .students
        .update(id, &data)
        .await
        .map_err(|e| e.respond_with(UPDATE_FAILED))?;

    Ok(MessageResponse::json(UPDATED))
}
