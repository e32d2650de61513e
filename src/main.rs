mod auth;
mod config;
mod cors;
mod credentials;
mod error;
mod models;
mod user_handlers;

use actix_web::{web, App, HttpServer};
use auth::TokenIssuer;
use config::{ALLOWED_ORIGIN, BIND_ADDRESS, SIGNING_KEY};
use cors::StaticCors;
use credentials::{CredentialVerifier, StaticCredentials};
use std::env;
use std::process;
use std::sync::Arc;
use tracing::{error, info};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(true)
        .init();

    let issuer = web::Data::new(TokenIssuer::new(SIGNING_KEY));
    let verifier: Arc<dyn CredentialVerifier> = Arc::new(StaticCredentials::demo());
    let verifier = web::Data::from(verifier);

    info!(bind_address = BIND_ADDRESS, allowed_origin = ALLOWED_ORIGIN, "Starting server");
    info!("   POST /login  - Exchange credentials for a token");
    info!("   GET  /hello  - Bearer-protected greeting");

    let server = HttpServer::new(move || {
        App::new()
            .app_data(issuer.clone())
            .app_data(verifier.clone())
            .wrap(StaticCors::new(ALLOWED_ORIGIN))
            .wrap(TracingLogger::default())
            .configure(user_handlers::routes)
    })
    .bind(BIND_ADDRESS);

    match server {
        Ok(server) => server.run().await,
        Err(e) => {
            error!(error = %e, bind_address = BIND_ADDRESS, "Server failed to start");
            process::exit(1);
        }
    }
}
