use crate::config::Config;
use crate::pricing::RateCatalog;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<RateCatalog>,
}
