//! Domain entities owned by the flow controllers.

pub mod code_buffer;
pub mod flow_status;
pub mod resend_state;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use code_buffer::{CodeBuffer, CODE_LENGTH};
pub use flow_status::FlowStatus;
pub use resend_state::{ResendPhase, ResendState};
