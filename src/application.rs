use crate::config::Settings;
use crate::view::ViewEngine;
use crate::web;
use crate::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, instrument};

/// Main application struct that coordinates all components
pub struct Application {
    settings: Settings,
    router: axum::Router,
}

impl Application {
    #[instrument]
    pub fn new() -> Result<Self> {
        let settings = Settings::new()?;
        let views = Arc::new(ViewEngine::new()?);
        let router = web::router(views);
        Ok(Self { settings, router })
    }

    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let addr = self.settings.listen_addr();
        let listener = TcpListener::bind(&addr).await?;
        info!("Starting formcheck server on {}", addr);
        axum::serve(listener, self.router).await?;
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
