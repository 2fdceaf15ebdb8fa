pub mod backend;
pub mod simulated;

pub use backend::{AudioBackend, AudioHandle, CompletionListener};
pub use simulated::{SimulatedAudioBackend, SimulatedAudioHandle};

#[cfg(test)]
pub use backend::{MockAudioBackend, MockAudioHandle};
