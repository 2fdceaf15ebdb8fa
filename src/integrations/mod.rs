// src/integrations/mod.rs
//
// External collaborators treated as black boxes:
// - audio: decodes a bundled resource, exposes transport + completion
// - video: plays a remote URI, exposes transport + repeat mode

pub mod audio;
pub mod video;

pub use audio::{AudioBackend, AudioHandle, CompletionListener, SimulatedAudioBackend};
pub use video::{SimulatedVideoBackend, VideoBackend, VideoHandle, VideoSession};
