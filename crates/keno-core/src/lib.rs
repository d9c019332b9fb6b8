//! # keno-core: Keno round engine
//!
//! Pure game logic for an 80-ball Keno game: player selections, the 20-number
//! system draw, prize evaluation and multi-round game sequencing.
//! No rendering, audio or windowing lives here; a front end drives the engine
//! and schedules the reveal sequence it produces.
//!
//! ## Features
//!
//! - **Prize Table**: Fixed (spots, hits) → multiplier lookup plus odds per mode
//! - **Selection**: Bounded, validated player picks with quick-pick
//! - **Draw**: Uniform sampling without replacement, optional cheat seeding
//! - **Round Orchestration**: Idle → Ready → Drawing → RoundComplete → GameComplete
//! - **Stage Generation**: Timestamped reveal events for a front end to play back
//! - **History**: Per-game records and a text table
//!
//! ## Architecture
//!
//! ```text
//! KenoEngine
//!     │
//!     ├── PrizeTable (injected, immutable)
//!     ├── GameSession (mode, drawings, selection, counters, phase)
//!     ├── GameHistory (completed games)
//!     └── TimingConfig (reveal pacing)
//!           │
//!           v
//!     RoundOutcome → Vec<StageEvent>
//! ```

pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod history;
pub mod mode;
pub mod paytable;
pub mod round;
pub mod selection;
pub mod session;
pub mod stage;
pub mod timing;

pub use config::*;
pub use draw::*;
pub use engine::*;
pub use error::*;
pub use history::*;
pub use mode::*;
pub use paytable::*;
pub use round::*;
pub use selection::*;
pub use session::*;
pub use stage::*;
pub use timing::*;

/// Highest number on the Keno board (numbers run 1..=80)
pub const BOARD_SIZE: u8 = 80;

/// Numbers the system draws each round
pub const DRAW_COUNT: usize = 20;
