pub mod types;
pub mod traits;
pub mod openai;

pub use traits::{
    CompletionClient,
    CompletionRequest, CompletionOptions,
    Completion, TokenUsage,
};

pub use openai::OpenAIClient;
pub use types::Message;
