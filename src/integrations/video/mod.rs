pub mod backend;
pub mod session;
pub mod simulated;

pub use backend::{VideoBackend, VideoHandle};
pub use session::VideoSession;
pub use simulated::SimulatedVideoBackend;
