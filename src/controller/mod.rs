//! Controller module - session orchestration and event handling
//!
//! - `session`: Startup token acquisition and the artist search chain
//! - `input`: Key event handling

mod input;
mod session;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, CatalogApi};

pub use session::SessionState;

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: AppModel,
    pub(crate) catalog: Arc<dyn CatalogApi>,
    state: Arc<Mutex<SessionState>>,
}

impl AppController {
    pub fn new(model: AppModel, catalog: Arc<dyn CatalogApi>) -> Self {
        Self {
            model,
            catalog,
            state: Arc::new(Mutex::new(SessionState::Idle)),
        }
    }

    pub async fn session_state(&self) -> SessionState {
        *self.state.lock().await
    }

    pub(crate) async fn set_session_state(&self, next: SessionState) {
        let mut state = self.state.lock().await;
        tracing::debug!(from = ?*state, to = ?next, "Session state change");
        *state = next;
    }
}
