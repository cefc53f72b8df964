use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use ttr_gameroom::Lobby;
use ttr_protocol::ClientMessage;
use ttr_protocol::ServerMessage;

/// Spawns the relay loop for one accepted WebSocket.
///
/// The connection is handed a fresh channel pair: the sender side is what
/// the lobby registers as this participant's seat, the receiver drains
/// coordinator messages out to the socket. Inbound frames are decoded into
/// [`ClientMessage`] and dispatched; the session ends on a close frame,
/// a dead channel, or a failed write.
pub fn bridge(
    lobby: Arc<Lobby>,
    mut session: actix_ws::Session,
    mut stream: actix_ws::MessageStream,
) {
    use futures::StreamExt;
    let (tx, mut rx) = unbounded_channel::<ServerMessage>();
    actix_web::rt::spawn(async move {
        log::debug!("[bridge] connected");
        'sesh: loop {
            tokio::select! {
                biased;
                msg = rx.recv() => match msg {
                    Some(msg) => if session.text(msg.to_json()).await.is_err() { break 'sesh },
                    None => break 'sesh,
                },
                msg = stream.next() => match msg {
                    Some(Ok(actix_ws::Message::Text(text))) => dispatch(&lobby, &tx, &text).await,
                    Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                    Some(Err(_)) => break 'sesh,
                    None => break 'sesh,
                    _ => continue 'sesh,
                },
            }
        }
        log::debug!("[bridge] disconnected");
    });
}

/// Routes one decoded frame into the lobby. Rejections stay silent on the
/// wire: the rejected or failing party receives nothing, and the reason is
/// only logged.
async fn dispatch(lobby: &Lobby, tx: &UnboundedSender<ServerMessage>, text: &str) {
    match ClientMessage::from_json(text) {
        Err(e) => log::warn!("[bridge] dropped frame: {}", e),
        Ok(ClientMessage::JoinGame { game }) => match lobby.join(&game, tx.clone()).await {
            Ok(mark) => log::debug!("[bridge] seated {} in {}", mark, game),
            Err(e) => log::warn!("[bridge] join rejected: {}", e),
        },
        Ok(ClientMessage::MakeMove { game, play }) => match lobby.relay(&game, play).await {
            Ok(()) => log::trace!("[bridge] relayed {} in {}", play, game),
            Err(e) => log::warn!("[bridge] relay failed: {}", e),
        },
    }
}
