//! Relay server binary.
//!
//! Hosts the match coordinator behind an HTTP server with a WebSocket
//! endpoint for real-time play.

#[tokio::main]
async fn main() {
    ttr_core::log();
    ttr_server::run().await.unwrap();
}
