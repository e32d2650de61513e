use crate::auth::{validator, TokenIssuer};
use crate::credentials::CredentialVerifier;
use crate::error::AuthError;
use crate::models::{Claims, LoginRequest, LoginResponse};
use actix_web::{get, http::Method, web, HttpResponse, Responder};
use actix_web_httpauth::middleware::HttpAuthentication;
use tracing::{error, info, warn};

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(|err, _req| {
                warn!(error = %err, "Login rejected: undecodable payload");
                AuthError::InvalidPayload.into()
            }),
    )
    .service(
        web::resource("/login")
            .route(web::post().to(login))
            .route(web::method(Method::OPTIONS).to(preflight)),
    )
    .service(hello);
}

pub async fn login(
    payload: web::Json<LoginRequest>,
    verifier: web::Data<dyn CredentialVerifier>,
    issuer: web::Data<TokenIssuer>,
) -> Result<HttpResponse, AuthError> {
    info!(username = %payload.username, "Login attempt");

    if !verifier.verify(&payload.username, &payload.password) {
        warn!(username = %payload.username, "Login failed: invalid credentials");
        return Err(AuthError::InvalidCredentials);
    }

    let token = issuer.issue(&payload.username).map_err(|e| {
        error!(error = ?e, username = %payload.username, "Failed to generate JWT");
        AuthError::TokenGeneration(e)
    })?;

    info!(username = %payload.username, "User logged in successfully");
    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

// Reached only when no CORS layer answers the preflight first.
async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[get("/hello", wrap = "HttpAuthentication::bearer(validator)")]
pub async fn hello(claims: web::ReqData<Claims>) -> impl Responder {
    HttpResponse::Ok().body(format!(
        "Hello, {}! You are authenticated.",
        claims.username
    ))
}
