// Use cases layer: session state, scene lifecycle and the fixed-step loop.

pub mod runner;
pub mod scene;
pub mod session;
pub mod types;

pub use runner::{SessionHandle, SessionSettings, start_session, start_session_with};
pub use scene::{Scene, ShooterScene};
pub use session::SessionState;
pub use types::{EngineRequest, GameEvent, SessionSnapshot};
