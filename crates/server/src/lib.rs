//! HTTP and WebSocket transport for the match coordinator.
//!
//! Exposes a single actix-web app: `/health` for liveness and `/play` for
//! the WebSocket upgrade. Each accepted socket is bridged onto a channel
//! pair and driven by the [`bridge`] loop; all protocol decisions live in
//! [`ttr_gameroom::Lobby`], which this crate only transports for.

mod bridge;
pub mod handlers;

pub use bridge::*;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use ttr_gameroom::Lobby;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Spawns the idle-match sweeper for a lobby.
fn sweeper(lobby: web::Data<Lobby>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(lobby.expiry().period);
        loop {
            interval.tick().await;
            let swept = lobby.sweep().await;
            if swept > 0 {
                log::info!("[sweeper] removed {} idle matches", swept);
            }
        }
    });
}

pub async fn run() -> Result<(), std::io::Error> {
    let lobby = web::Data::new(Lobby::new());
    sweeper(lobby.clone());
    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());
    log::info!("starting relay server on {}", bind);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(lobby.clone())
            .route("/health", web::get().to(health))
            .route("/play", web::get().to(handlers::play))
    })
    .bind(bind)?
    .run()
    .await
}
