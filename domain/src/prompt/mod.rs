//! Prompt domain
//!
//! Templates for the two generation tasks: gap analysis and outline
//! generation.

mod template;

pub use template::PromptTemplate;
