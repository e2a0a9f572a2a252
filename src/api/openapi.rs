//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "BibliOn API",
        version = "1.0.0",
        description = "Library Management REST API: students, books and loans",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::root,
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::create_book,
        books::delete_book,
        books::update_book,
        // Students
        students::list_students,
        students::create_student,
        students::delete_student,
        students::update_student,
        // Loans
        loans::list_loans,
        loans::create_loan,
        loans::update_loan,
    ),
    components(
        schemas(
            crate::models::Book,
            crate::models::BookInput,
            crate::models::Student,
            crate::models::StudentInput,
            crate::models::Loan,
            crate::models::LoanInput,
            crate::api::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "livros", description = "Book catalog"),
        (name = "alunos", description = "Student registry"),
        (name = "emprestimos", description = "Loans")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
