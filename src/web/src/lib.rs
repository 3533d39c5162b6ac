mod common;
mod error;
mod formats;
mod plans;
mod routes;
mod squad;
pub mod stores;

pub use error::{ApiError, ApiResult};

use crate::routes::ServerRoutes;
use crate::stores::{PlanStore, SnapshotStore};
use axum::response::IntoResponse;
use axum::Router;
use lineup_core::PlannerData;
use log::{error, info};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct PlannerServer {
    data: AppData,
    port: u16,
}

impl PlannerServer {
    pub fn new(data: AppData, port: u16) -> Self {
        PlannerServer { data, port }
    }

    pub fn app(&self) -> Router {
        ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    // Catch panics in handlers and convert them to 500 errors
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError("Internal server error - handler panicked".to_string())
                            .into_response()
                    })),
            )
            .with_state(self.data.clone())
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("listen at: http://localhost:{}", self.port);

        axum::serve(listener, self.app()).await.inspect_err(|e| {
            error!("Server error: {}", e);
        })
    }
}

pub struct AppData {
    pub planner: Arc<PlannerData>,
    pub plans: Arc<RwLock<PlanStore>>,
    pub snapshots: Arc<SnapshotStore>,
}

impl AppData {
    pub fn new(planner: PlannerData, plans_dir: impl Into<PathBuf>) -> Self {
        AppData {
            planner: Arc::new(planner),
            plans: Arc::new(RwLock::new(PlanStore::new())),
            snapshots: Arc::new(SnapshotStore::new(plans_dir)),
        }
    }
}

impl Clone for AppData {
    fn clone(&self) -> Self {
        AppData {
            planner: Arc::clone(&self.planner),
            plans: Arc::clone(&self.plans),
            snapshots: Arc::clone(&self.snapshots),
        }
    }
}
