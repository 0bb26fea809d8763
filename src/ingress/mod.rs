pub mod error;
pub mod payloads;
pub mod upload;

pub use error::{IngressError, IngressErrorKind};
pub use payloads::{EmergencyPayload, VoicePayload, text_request, voice_request};
pub use upload::UploadBatch;
