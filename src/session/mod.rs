pub mod memory;
pub mod noop;
pub mod ports;
pub mod types;

pub use memory::InMemorySessionLog;
pub use noop::NoopSessionRecorder;
pub use ports::SessionRecorder;
pub use types::SessionLogEntry;
