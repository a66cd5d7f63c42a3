use tokio::signal;
use tracing::warn;

pub async fn listen_for_shutdown() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal as unix_signal};

        // 同时等待 Ctrl+C 与 SIGTERM（容器环境下的停止信号）
        match unix_signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    res = signal::ctrl_c() => {
                        if let Err(e) = res {
                            warn!("Failed to listen for Ctrl+C: {}", e);
                        }
                    }
                    _ = sigterm.recv() => {}
                }
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}, only Ctrl+C is handled", e);
                if let Err(e) = signal::ctrl_c().await {
                    warn!("Failed to listen for Ctrl+C: {}", e);
                }
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
        }
    }

    warn!("Shutdown signal received, initiating graceful shutdown...");
}
