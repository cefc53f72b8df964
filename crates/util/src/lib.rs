//! Core constants shared across tictacrelay crates.

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Number of cells per side of the square board.
pub const SIDE: usize = 3;

/// Number of participants in a match.
pub const SEATS: usize = 2;

/// Initializes terminal logging for server binaries.
/// Filter level comes from RUST_LOG, defaulting to info.
#[cfg(feature = "server")]
pub fn log() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<simplelog::LevelFilter>().ok())
        .unwrap_or(simplelog::LevelFilter::Info);
    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
    log::info!("logging initialized at {}", filter);
}
