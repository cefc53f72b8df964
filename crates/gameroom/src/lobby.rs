use super::Expiry;
use super::Match;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use ttr_gameplay::Mark;
use ttr_gameplay::Move;
use ttr_protocol::ServerMessage;

/// Errors surfaced by lobby operations. All are policy rejections, not
/// faults: the caller decides whether to report or stay silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LobbyError {
    EmptyId,
    MatchFull(String),
    UnknownMatch(String),
    NoOpponent(String),
}

impl std::fmt::Display for LobbyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "empty match id"),
            Self::MatchFull(id) => write!(f, "match full: {}", id),
            Self::UnknownMatch(id) => write!(f, "unknown match: {}", id),
            Self::NoOpponent(id) => write!(f, "no opponent seated: {}", id),
        }
    }
}

impl std::error::Error for LobbyError {}

/// Registry of active matches keyed by caller-supplied id.
///
/// The registry is the only shared state in the system. Both `join` and
/// `relay` take the write lock for their whole check-and-mutate section, so
/// the waiting→active transition is observed by at most one second joiner
/// and seat registration is immutable once made.
pub struct Lobby {
    expiry: Expiry,
    matches: RwLock<HashMap<String, Match>>,
}

impl Lobby {
    pub fn new() -> Self {
        Self::with_expiry(Expiry::default())
    }
    pub fn with_expiry(expiry: Expiry) -> Self {
        Self {
            expiry,
            matches: RwLock::new(HashMap::new()),
        }
    }
    pub fn expiry(&self) -> Expiry {
        self.expiry
    }
    /// Number of registered matches, waiting or active.
    pub async fn len(&self) -> usize {
        self.matches.read().await.len()
    }
    pub async fn is_empty(&self) -> bool {
        self.matches.read().await.is_empty()
    }
}

impl Lobby {
    /// Admits a participant to the match with this id, creating the match
    /// on first arrival and activating it on second.
    ///
    /// The first joiner is seated as X and acknowledged with `joined`; the
    /// second is seated as O and both sides receive their per-recipient
    /// `start_game` (turn flag true only for X). A third joiner is rejected
    /// with no emission and no change to the seated pair.
    pub async fn join(
        &self,
        id: &str,
        tx: UnboundedSender<ServerMessage>,
    ) -> Result<Mark, LobbyError> {
        let id = id.trim();
        if id.is_empty() {
            return Err(LobbyError::EmptyId);
        }
        let mut matches = self.matches.write().await;
        let game = matches.entry(id.to_string()).or_default();
        match game.admit(tx) {
            None => {
                log::warn!("[lobby] rejected third joiner for {}", id);
                Err(LobbyError::MatchFull(id.to_string()))
            }
            Some(Mark::X) => {
                log::info!("[lobby] {} waiting for opponent", id);
                game.seats()
                    .iter()
                    .for_each(|seat| seat.send(ServerMessage::Joined));
                Ok(Mark::X)
            }
            Some(Mark::O) => {
                log::info!("[lobby] {} active", id);
                game.seats()
                    .iter()
                    .for_each(|seat| {
                        seat.send(ServerMessage::start_game(seat.mark(), seat.mark().opens()))
                    });
                Ok(Mark::O)
            }
        }
    }
    /// Relays a reported move to the acting participant's opponent with the
    /// turn flag flipped to them. The move is forwarded verbatim: the lobby
    /// never validates occupancy or turn order.
    pub async fn relay(&self, id: &str, play: Move) -> Result<(), LobbyError> {
        let id = id.trim();
        let mut matches = self.matches.write().await;
        let game = matches
            .get_mut(id)
            .ok_or_else(|| LobbyError::UnknownMatch(id.to_string()))?;
        game.touch();
        let seat = game
            .opponent(play.mark)
            .ok_or_else(|| LobbyError::NoOpponent(id.to_string()))?;
        log::debug!("[lobby] {} relaying {}", id, play);
        seat.send(ServerMessage::move_made(play, true));
        Ok(())
    }
    /// Removes a match outright.
    pub async fn close(&self, id: &str) -> Result<(), LobbyError> {
        self.matches
            .write()
            .await
            .remove(id)
            .map(|_| log::info!("[lobby] closed {}", id))
            .ok_or_else(|| LobbyError::UnknownMatch(id.to_string()))
    }
    /// Drops matches idle past the expiry threshold. Returns the number
    /// removed.
    pub async fn sweep(&self) -> usize {
        let mut matches = self.matches.write().await;
        let before = matches.len();
        matches.retain(|id, game| {
            let keep = game.idle() < self.expiry.idle;
            if !keep {
                log::info!("[lobby] expired {}", id);
            }
            keep
        });
        before - matches.len()
    }
}

impl Default for Lobby {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::UnboundedReceiver;
    use tokio::sync::mpsc::unbounded_channel;

    fn endpoint() -> (
        UnboundedSender<ServerMessage>,
        UnboundedReceiver<ServerMessage>,
    ) {
        unbounded_channel()
    }

    #[tokio::test]
    async fn empty_id_rejected_before_lookup() {
        let lobby = Lobby::new();
        let (tx, mut rx) = endpoint();
        assert_eq!(lobby.join("", tx.clone()).await, Err(LobbyError::EmptyId));
        assert_eq!(lobby.join("   ", tx).await, Err(LobbyError::EmptyId));
        assert!(lobby.is_empty().await);
        assert!(rx.try_recv().is_err());
    }
    #[tokio::test]
    async fn first_joiner_acknowledged() {
        let lobby = Lobby::new();
        let (tx, mut rx) = endpoint();
        assert_eq!(lobby.join("g1", tx).await, Ok(Mark::X));
        assert_eq!(rx.try_recv().unwrap(), ServerMessage::Joined);
        assert!(rx.try_recv().is_err());
    }
    #[tokio::test]
    async fn second_joiner_starts_game_for_both() {
        let lobby = Lobby::new();
        let (tx1, mut rx1) = endpoint();
        let (tx2, mut rx2) = endpoint();
        lobby.join("g1", tx1).await.unwrap();
        assert_eq!(rx1.try_recv().unwrap(), ServerMessage::Joined);
        assert_eq!(lobby.join("g1", tx2).await, Ok(Mark::O));
        assert_eq!(
            rx1.try_recv().unwrap(),
            ServerMessage::start_game(Mark::X, true)
        );
        assert_eq!(
            rx2.try_recv().unwrap(),
            ServerMessage::start_game(Mark::O, false)
        );
    }
    #[tokio::test]
    async fn id_is_trimmed_to_same_match() {
        let lobby = Lobby::new();
        let (tx1, _rx1) = endpoint();
        let (tx2, _rx2) = endpoint();
        lobby.join(" g1 ", tx1).await.unwrap();
        assert_eq!(lobby.join("g1", tx2).await, Ok(Mark::O));
        assert_eq!(lobby.len().await, 1);
    }
    #[tokio::test]
    async fn third_joiner_rejected_silently() {
        let lobby = Lobby::new();
        let (tx1, _rx1) = endpoint();
        let (tx2, _rx2) = endpoint();
        let (tx3, mut rx3) = endpoint();
        lobby.join("g1", tx1).await.unwrap();
        lobby.join("g1", tx2).await.unwrap();
        assert_eq!(
            lobby.join("g1", tx3).await,
            Err(LobbyError::MatchFull("g1".to_string()))
        );
        assert!(rx3.try_recv().is_err());
        assert_eq!(lobby.len().await, 1);
    }
    #[tokio::test]
    async fn relay_targets_opposite_mark() {
        let lobby = Lobby::new();
        let (tx1, mut rx1) = endpoint();
        let (tx2, mut rx2) = endpoint();
        lobby.join("g1", tx1).await.unwrap();
        lobby.join("g1", tx2).await.unwrap();
        while rx1.try_recv().is_ok() {}
        while rx2.try_recv().is_ok() {}
        let play = Move::new(4, Mark::X);
        lobby.relay("g1", play).await.unwrap();
        assert_eq!(rx2.try_recv().unwrap(), ServerMessage::move_made(play, true));
        assert!(rx1.try_recv().is_err());
        let reply = Move::new(0, Mark::O);
        lobby.relay("g1", reply).await.unwrap();
        assert_eq!(
            rx1.try_recv().unwrap(),
            ServerMessage::move_made(reply, true)
        );
        assert!(rx2.try_recv().is_err());
    }
    #[tokio::test]
    async fn relay_unknown_match() {
        let lobby = Lobby::new();
        assert_eq!(
            lobby.relay("nope", Move::new(0, Mark::X)).await,
            Err(LobbyError::UnknownMatch("nope".to_string()))
        );
    }
    #[tokio::test]
    async fn relay_without_opponent() {
        let lobby = Lobby::new();
        let (tx, mut rx) = endpoint();
        lobby.join("g1", tx).await.unwrap();
        while rx.try_recv().is_ok() {}
        assert_eq!(
            lobby.relay("g1", Move::new(0, Mark::X)).await,
            Err(LobbyError::NoOpponent("g1".to_string()))
        );
        assert!(rx.try_recv().is_err());
    }
    #[tokio::test]
    async fn close_removes_match() {
        let lobby = Lobby::new();
        let (tx, _rx) = endpoint();
        lobby.join("g1", tx).await.unwrap();
        assert!(lobby.close("g1").await.is_ok());
        assert!(lobby.is_empty().await);
        assert!(lobby.close("g1").await.is_err());
    }
    #[tokio::test(start_paused = true)]
    async fn sweep_expires_idle_matches() {
        let expiry = Expiry {
            idle: std::time::Duration::from_secs(60),
            period: std::time::Duration::from_secs(10),
        };
        let lobby = Lobby::with_expiry(expiry);
        let (tx, _rx) = endpoint();
        lobby.join("stale", tx.clone()).await.unwrap();
        tokio::time::advance(std::time::Duration::from_secs(59)).await;
        assert_eq!(lobby.sweep().await, 0);
        lobby.join("fresh", tx).await.unwrap();
        tokio::time::advance(std::time::Duration::from_secs(2)).await;
        assert_eq!(lobby.sweep().await, 1);
        assert_eq!(lobby.len().await, 1);
    }
    #[tokio::test(start_paused = true)]
    async fn relayed_move_refreshes_idle_clock() {
        let expiry = Expiry {
            idle: std::time::Duration::from_secs(60),
            period: std::time::Duration::from_secs(10),
        };
        let lobby = Lobby::with_expiry(expiry);
        let (tx1, _rx1) = endpoint();
        let (tx2, _rx2) = endpoint();
        lobby.join("g1", tx1).await.unwrap();
        lobby.join("g1", tx2).await.unwrap();
        tokio::time::advance(std::time::Duration::from_secs(45)).await;
        lobby.relay("g1", Move::new(0, Mark::X)).await.unwrap();
        tokio::time::advance(std::time::Duration::from_secs(45)).await;
        assert_eq!(lobby.sweep().await, 0);
    }
}
