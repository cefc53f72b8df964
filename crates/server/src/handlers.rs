use super::bridge;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::web;
use ttr_gameroom::Lobby;

/// WebSocket upgrade for the relay protocol. Joining, seating, and move
/// relay all happen over the socket after the upgrade.
pub async fn play(
    lobby: web::Data<Lobby>,
    body: web::Payload,
    req: HttpRequest,
) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            bridge(lobby.into_inner(), session, stream);
            response.map_into_left_body()
        }
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
