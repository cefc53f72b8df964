use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;
use ttr_core::SEATS;
use ttr_gameplay::Mark;
use ttr_protocol::ServerMessage;

/// A registered participant in a match: the mark assigned at join time and
/// the outbound channel to that participant's connection. Registration is
/// immutable after admission.
#[derive(Debug, Clone)]
pub struct Seat {
    mark: Mark,
    tx: UnboundedSender<ServerMessage>,
}

impl Seat {
    pub fn mark(&self) -> Mark {
        self.mark
    }
    /// Sends a message to this participant. Delivery is fire-and-forget;
    /// a closed channel is logged, not surfaced.
    pub fn send(&self, message: ServerMessage) {
        match self.tx.send(message) {
            Ok(()) => {}
            Err(e) => log::warn!("[seat {}] send failed: {:?}", self.mark, e),
        }
    }
}

/// One match: up to two seats and a last-activity timestamp. The first
/// admitted participant receives X, the second O; admitting the second
/// flips the match from waiting to active. Holds no board state.
#[derive(Debug)]
pub struct Match {
    seats: Vec<Seat>,
    touched: Instant,
}

impl Match {
    pub fn new() -> Self {
        Self {
            seats: Vec::with_capacity(SEATS),
            touched: Instant::now(),
        }
    }
    /// Admits a participant, assigning X to the first and O to the second.
    /// Returns None without mutating if both seats are taken.
    pub fn admit(&mut self, tx: UnboundedSender<ServerMessage>) -> Option<Mark> {
        let mark = match self.seats.len() {
            0 => Mark::X,
            1 => Mark::O,
            _ => return None,
        };
        self.seats.push(Seat { mark, tx });
        self.touch();
        Some(mark)
    }
    /// True once both seats are taken.
    pub fn is_active(&self) -> bool {
        self.seats.len() == SEATS
    }
    /// The seat holding the opposing mark, if present.
    pub fn opponent(&self, mark: Mark) -> Option<&Seat> {
        self.seats.iter().find(|s| s.mark() == mark.other())
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    /// Records activity for idle-expiry accounting.
    pub fn touch(&mut self) {
        self.touched = Instant::now();
    }
    /// Time since the last join or relayed move.
    pub fn idle(&self) -> std::time::Duration {
        self.touched.elapsed()
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}
