//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, members};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "1.0.0",
        description = "School library JSON API: books, members and loans",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        // Members
        members::list_members,
        members::create_member,
        // Loans
        loans::list_loans,
        loans::create_loan,
        loans::get_loan,
        loans::return_loan,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookListing,
            crate::models::book::CreateBook,
            crate::models::member::Member,
            crate::models::member::CreateMember,
            crate::models::loan::Loan,
            crate::models::loan::CreateLoan,
            crate::models::loan::BorrowedBook,
            loans::ReturnResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog"),
        (name = "members", description = "Member registry"),
        (name = "loans", description = "Borrowing and returns")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
