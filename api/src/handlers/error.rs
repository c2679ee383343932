//! Domain-error to HTTP response mapping.
//!
//! Every route funnels failures through [`handle_domain_error`], so the
//! status and body for a given domain error are decided in exactly one
//! place. Self-access violations deliberately render as a plain not-found;
//! a caller probing someone else's resources learns nothing from the shape
//! of the refusal.

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use std::collections::HashMap;
use validator::ValidationErrors;

use bl_core::errors::{AuthError, DomainError, TokenError};

use crate::dto::ErrorResponse;

/// Convert a domain error into the HTTP response it maps to
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    log::debug!("Domain error: {}", error);

    match error {
        DomainError::Auth(auth_error) => match auth_error {
            AuthError::InvalidCredentials => HttpResponse::Unauthorized().json(
                ErrorResponse::new("INVALID_CREDENTIALS", "Invalid user id or password"),
            ),
            AuthError::DuplicateUserId { user_id } => HttpResponse::Conflict().json(
                ErrorResponse::new(
                    "DUPLICATE_USER_ID",
                    format!("User id already taken: {}", user_id),
                ),
            ),
            AuthError::PasswordMismatch => HttpResponse::BadRequest().json(
                ErrorResponse::new("PASSWORD_MISMATCH", "Passwords do not match"),
            ),
            AuthError::MemberNotFound => HttpResponse::NotFound().json(ErrorResponse::new(
                "MEMBER_NOT_FOUND",
                "Member not found",
            )),
            // Indistinguishable from a missing resource on purpose
            AuthError::SelfAccessOnly => HttpResponse::NotFound().json(ErrorResponse::new(
                "NOT_FOUND",
                "Resource not found",
            )),
            AuthError::InsufficientPermissions => HttpResponse::Forbidden().json(
                ErrorResponse::new("INSUFFICIENT_PERMISSIONS", "Insufficient permissions"),
            ),
        },
        DomainError::Token(token_error) => match token_error {
            TokenError::InvalidToken => HttpResponse::BadRequest().json(ErrorResponse::new(
                "INVALID_TOKEN",
                "Invalid token",
            )),
            TokenError::RefreshTokenMismatch => HttpResponse::Unauthorized().json(
                ErrorResponse::new("REFRESH_TOKEN_MISMATCH", "Refresh token mismatch"),
            ),
            TokenError::MissingClaim { claim } => HttpResponse::BadRequest().json(
                ErrorResponse::new("MISSING_CLAIM", format!("Missing claim: {}", claim)),
            ),
            TokenError::MalformedClaims => HttpResponse::BadRequest().json(ErrorResponse::new(
                "MALFORMED_CLAIMS",
                "Malformed claims",
            )),
            TokenError::TokenGenerationFailed => {
                log::error!("Token generation failed");
                HttpResponse::InternalServerError().json(ErrorResponse::new(
                    "TOKEN_GENERATION_FAILED",
                    "Token generation failed",
                ))
            }
        },
        DomainError::Validation { message } => HttpResponse::BadRequest().json(
            ErrorResponse::new("VALIDATION_ERROR", message),
        ),
        DomainError::NotFound { resource } => HttpResponse::NotFound().json(ErrorResponse::new(
            "NOT_FOUND",
            format!("Resource not found: {}", resource),
        )),
        DomainError::Unauthorized => HttpResponse::Unauthorized().json(ErrorResponse::new(
            "UNAUTHORIZED",
            "Authentication required",
        )),
        DomainError::Internal { message } => {
            log::error!("Internal error: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "INTERNAL_ERROR",
                "An internal error occurred",
            ))
        }
    }
}

/// Convert DTO validation failures into a 400 with per-field details
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let details: HashMap<String, serde_json::Value> = errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let codes: Vec<String> = field_errors
                .iter()
                .map(|error| error.code.to_string())
                .collect();
            (field.to_string(), serde_json::json!(codes))
        })
        .collect();

    ErrorResponse::new("VALIDATION_ERROR", "Request validation failed")
        .with_details(details)
        .to_response(StatusCode::BAD_REQUEST)
}
