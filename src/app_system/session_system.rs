use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::app_system::SessionService;
use crate::clients::SessionClient;
use crate::config::AppConfig;
use crate::session::Session;

/// Starts the session actor and manages its lifecycle.
pub struct SessionSystem {
    pub client: SessionClient,
    handle: JoinHandle<()>,
}

impl SessionSystem {
    /// Builds a session from `config` and starts serving it.
    #[instrument(name = "session_system", skip(config))]
    pub fn start(config: &AppConfig) -> Self {
        info!(
            data_dir = ?config.data_dir,
            low_calorie_threshold = config.low_calorie_threshold,
            "Starting session system"
        );
        Self::with_session(Session::from_config(config), config.channel_buffer)
    }

    pub fn with_session(session: Session, buffer_size: usize) -> Self {
        let (service, client) = SessionService::new(buffer_size, session);
        let handle = tokio::spawn(service.run());
        Self { client, handle }
    }

    /// Stops the actor and waits for it to finish.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down session system");

        // Already stopped if every other client was dropped.
        let _ = self.client.shutdown().await;

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Session service task failed");
            return Err(format!("Session service task failed: {}", e));
        }

        info!("Session system shutdown complete");
        Ok(())
    }
}
