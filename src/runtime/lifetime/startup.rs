use crate::storage::Storage;
use std::sync::Arc;
use tracing::{info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 输出当前数据概况
async fn log_dataset_summary(storage: &Arc<dyn Storage>) {
    match (storage.count_courses().await, storage.count_students().await) {
        (Ok(courses), Ok(students)) => {
            info!(
                "Database contains {} course(s) and {} student(s)",
                courses, students
            );
        }
        (Err(e), _) | (_, Err(e)) => {
            warn!("Failed to count records: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储初始化与数据库迁移
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    log_dataset_summary(&storage).await;

    StartupContext { storage }
}
