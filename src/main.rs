//! # User Registry Demo
//!
//! Starts a [`RegistrySystem`], loads users from the CSV file named on the
//! command line (or a built-in sample), records a few logins and logs the
//! resulting statistics.
//!
//! ```bash
//! RUST_LOG=info cargo run -- users.csv
//! ```

use tracing::{info, warn, Instrument};
use user_registry::lifecycle::{setup_tracing, RegistrySystem};

const SAMPLE_CSV: &str = "\
u1,Alice,alice@example.com
u2,Bob,bob@example.com
u3,Carol,carol@corp.example
u4,Dave
u5,Eve,eve-at-example.com";

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let csv = match std::env::args().nth(1) {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| format!("Failed to read {path}: {e}"))?,
        None => SAMPLE_CSV.to_string(),
    };

    info!("Starting user registry");
    let system = RegistrySystem::new();
    let users = system.users.clone();

    let span = tracing::info_span!("import");
    let created = async {
        info!("Importing users");
        users.import_csv(csv).await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(created, "Import complete");

    let span = tracing::info_span!("activity");
    async {
        let all = users.all().await.map_err(|e| e.to_string())?;
        for (i, user) in all.iter().enumerate() {
            let logins = if i == 0 { 12 } else { 3 };
            for _ in 0..logins {
                users.record_login(user.id()).await.map_err(|e| e.to_string())?;
            }
        }
        if let Some(last) = all.last() {
            let id = last.id();
            users.deactivate(id.as_str()).await.map_err(|e| e.to_string())?;
            info!(%id, "Deactivated one user");
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let stats = users.statistics().await.map_err(|e| e.to_string())?;
    info!(%stats, "Registry statistics");

    for user in users.frequent().await.map_err(|e| e.to_string())? {
        info!(%user, "Frequent user");
    }
    if let Err(e) = users.create("u1", "Mallory", "mallory@example.com").await {
        warn!(error = %e, "Duplicate create rejected");
    }

    drop(users);
    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Application completed successfully");
    Ok(())
}
