//! These models represent the objects passed through the extraction pipeline
//!
//! There are two families of formats we need to interact with:
//! - openai-style chat messages and completions, sent to and received from the LLM
//! - knowledge analysis and dialogue payloads, exchanged with the application
//!
//! The chat types match the openai wire format exactly, so they serialize straight into
//! the request body without an intermediate conversion step.
pub mod completion;
pub mod content;
pub mod knowledge;
pub mod message;
pub mod role;
