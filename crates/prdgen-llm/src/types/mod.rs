//! Wire types for the chat completions endpoint

pub mod message;
pub mod request;
pub mod response;

pub use message::{Message, Role};
pub use request::CompletionRequest;
pub use response::{Choice, ChoiceMessage, CompletionResponse};
