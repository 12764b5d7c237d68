//! **LLM client** — chat completions over the OpenAI-compatible protocol
//!
//! [`OpenAiClientFactory`] validates per-run settings and hands out an
//! [`OpenAiCompatibleGateway`]; each session posts one `[system, user]`
//! exchange to `{base_url}/chat/completions`.

mod gateway;
mod session;
mod types;

pub use gateway::{OpenAiClientFactory, OpenAiCompatibleGateway};
pub use session::OpenAiSession;
