//! API handlers for BibliOn REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod students;

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequest, Path, Request},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{de::DeserializeOwned, Serialize};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

/// Message returned by every mutating endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub mensagem: String,
}

impl MessageResponse {
    pub fn json(message: &str) -> Json<Self> {
        Json(Self {
            mensagem: message.to_string(),
        })
    }
}

/// JSON body extractor that also runs the DTO's `validator` rules.
///
/// Handlers take it as `Result<ValidatedJson<T>, AppError>` so a malformed
/// body is answered with the endpoint's own message.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Extract a record id from the path; only positive integers are ids
pub fn parse_id(path: Result<Path<i32>, PathRejection>) -> AppResult<i32> {
    let Path(id) = path.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    if id <= 0 {
        return Err(AppError::Validation(format!("Invalid id {}", id)));
    }
    Ok(id)
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/lista/livro", get(books::list_books))
        .route("/novo/livro", post(books::create_book))
        .route("/delete/livro/:idLivro", delete(books::delete_book))
        .route("/atualizar/livro/:idLivro", put(books::update_book))
        // Students
        .route("/lista/aluno", get(students::list_students))
        .route("/novo/aluno", post(students::create_student))
        .route("/delete/aluno/:idAluno", delete(students::delete_student))
        .route("/atualizar/aluno/:idAluno", put(students::update_student))
        // Loans
        .route("/lista/emprestimo", get(loans::list_loans))
        .route("/novo/emprestimo", post(loans::create_loan))
        .route("/atualizar/emprestimo/:idEmprestimo", put(loans::update_loan))
        .with_state(state);

    routes
        .merge(openapi::create_openapi_router())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
