pub mod analyze;
pub mod chat;
pub mod dialogue;
pub mod health;

use crate::state::AppState;
use axum::Router;

pub fn configure(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(analyze::routes(state.clone()))
        .merge(dialogue::routes(state.clone()))
        .merge(chat::routes(state))
}
