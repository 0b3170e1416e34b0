//! # Blog API Server
//!
//! Actix-web service exposing CRUD endpoints for blog posts.
//! The binary in `main.rs` wires configuration and telemetry; this library
//! exposes the pieces so integration tests can start the same server.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod state;
pub mod telemetry;

use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use observability::RequestIdMiddleware;
use state::AppState;

/// Build the HTTP server on an already-bound listener.
///
/// The returned `Server` must be awaited (or spawned) to start serving;
/// `Server::handle()` stops it.
pub fn run(listener: TcpListener, state: AppState) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
