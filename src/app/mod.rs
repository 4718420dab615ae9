//! Application core - owns all session state and coordination
//!
//! The `App` is the single writer for every piece of mutable state: the
//! request phase, the draft collection, and the editor session. All of it
//! is mutated from the one task driving the interactive session.

mod actions;
mod repl;
pub mod state;

use anyhow::Result;

use crate::api::GenerateClient;
use crate::clipboard::ClipboardExporter;
use crate::config::Config;
use crate::controller::RequestController;
use state::AppState;

pub struct App {
    pub(crate) config: Config,
    pub(crate) controller: RequestController,
    pub(crate) exporter: ClipboardExporter,
    pub(crate) state: AppState,
}

impl App {
    pub fn new(config: Config) -> Self {
        let client = GenerateClient::new(config.backend.base_url.clone());
        Self {
            config,
            controller: RequestController::new(client),
            exporter: ClipboardExporter::new(),
            state: AppState::default(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.repl().await
    }
}
