pub mod conversation;
pub mod errors;
pub mod extract;
pub mod knowledge;
pub mod models;
pub mod prompt;
pub mod providers;
pub mod topics;
