pub mod errors;
pub mod handler;
pub mod operations;
pub mod source;
pub mod types;

pub use errors::StatusError;
pub use handler::StatusPoller;
pub use types::{NOT_RECORDING, PollOutcome, StatusFile};
