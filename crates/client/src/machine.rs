use super::Ending;
use super::Phase;
use tokio::sync::mpsc::UnboundedSender;
use ttr_gameplay::Board;
use ttr_gameplay::Mark;
use ttr_gameplay::Move;
use ttr_gameplay::Outcome;
use ttr_protocol::ClientMessage;
use ttr_protocol::ServerMessage;

/// One participant's state machine.
///
/// Local moves are gated on phase and cell occupancy before anything is
/// emitted; remote moves are applied as received, mirroring the
/// coordinator's trust boundary. Illegal local input is a silent no-op:
/// no message, no state change.
pub struct GameClient {
    game: String,
    mark: Option<Mark>,
    board: Board,
    phase: Phase,
    tx: UnboundedSender<ClientMessage>,
}

impl GameClient {
    pub fn new(tx: UnboundedSender<ClientMessage>) -> Self {
        Self {
            game: String::new(),
            mark: None,
            board: Board::new(),
            phase: Phase::Unjoined,
            tx,
        }
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }
    pub fn your_turn(&self) -> bool {
        self.phase.is_your_turn()
    }
    fn send(&self, message: ClientMessage) {
        match self.tx.send(message) {
            Ok(()) => {}
            Err(e) => log::warn!("[client] send failed: {:?}", e),
        }
    }
}

impl GameClient {
    /// Emits a join intent for the given match id. Phase is untouched until
    /// the coordinator acknowledges; an empty id emits nothing.
    pub fn request_join(&mut self, game: &str) {
        let game = game.trim();
        if game.is_empty() {
            return;
        }
        self.game = game.to_string();
        self.send(ClientMessage::join_game(game));
    }
    /// Dispatches an inbound coordinator message.
    pub fn handle(&mut self, message: ServerMessage) {
        match message {
            ServerMessage::Joined => self.on_joined(),
            ServerMessage::StartGame { symbol, your_turn } => {
                self.on_start_game(symbol, your_turn)
            }
            ServerMessage::MoveMade { play, your_turn } => self.on_remote_move(play, your_turn),
        }
    }
    /// Attempts a move at the given cell. No-op unless it is this
    /// participant's turn and the cell is empty; otherwise places the own
    /// mark, evaluates the outcome, and reports the move outward.
    pub fn apply_local_move(&mut self, index: usize) {
        let Some(mark) = self.mark else { return };
        if !self.phase.is_your_turn() {
            return;
        }
        if !self.board.place(index, mark) {
            return;
        }
        self.phase = match self.board.outcome() {
            Outcome::Won(_) => Phase::Finished(Ending::Won),
            Outcome::Draw => Phase::Finished(Ending::Draw),
            Outcome::Ongoing => Phase::OpponentTurn,
        };
        self.send(ClientMessage::make_move(&self.game, Move::new(index, mark)));
    }
    /// Clears the board and outcome locally, handing the first move to X by
    /// convention. Purely local: the opponent must reset independently, and
    /// boards desynchronize if only one side does.
    pub fn reset(&mut self) {
        let Some(mark) = self.mark else { return };
        self.board.clear();
        self.phase = match mark.opens() {
            true => Phase::YourTurn,
            false => Phase::OpponentTurn,
        };
    }
}

impl GameClient {
    fn on_joined(&mut self) {
        if self.phase == Phase::Unjoined {
            self.phase = Phase::WaitingForOpponent;
        }
    }
    fn on_start_game(&mut self, symbol: Mark, your_turn: bool) {
        log::debug!("[client] assigned {} (your_turn={})", symbol, your_turn);
        self.mark = Some(symbol);
        self.phase = match your_turn {
            true => Phase::YourTurn,
            false => Phase::OpponentTurn,
        };
    }
    /// Applies a relayed opponent move as received. No re-validation of
    /// turn or occupancy against remote input: the relay is trusted.
    fn on_remote_move(&mut self, play: Move, your_turn: bool) {
        self.board.place(play.index, play.mark);
        self.phase = match self.board.outcome() {
            Outcome::Won(winner) => match Some(winner) == self.mark {
                true => Phase::Finished(Ending::Won),
                false => Phase::Finished(Ending::Lost),
            },
            Outcome::Draw => Phase::Finished(Ending::Draw),
            Outcome::Ongoing => match your_turn {
                true => Phase::YourTurn,
                false => Phase::OpponentTurn,
            },
        };
    }
}
