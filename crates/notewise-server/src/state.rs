use notewise::knowledge::KnowledgeService;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<KnowledgeService>,
}

impl AppState {
    pub fn new(service: KnowledgeService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
