use lineup_core::lineup::{LineupObserver, Period};
use lineup_core::shared::PlanId;
use log::{debug, error, warn};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

struct SnapshotJob {
    plan_id: PlanId,
    periods: Vec<Period>,
}

/// Writes period snapshots to `{directory}/{plan_id}.json`.
///
/// Every snapshot goes through one writer task, so snapshots of a plan land
/// on disk in commit order. Each write goes to `{plan_id}.json.tmp` first
/// and is renamed over the target.
pub struct SnapshotStore {
    directory: PathBuf,
    writer: OnceLock<UnboundedSender<SnapshotJob>>,
}

impl SnapshotStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        SnapshotStore {
            directory: directory.into(),
            writer: OnceLock::new(),
        }
    }

    /// Queues a snapshot for the writer. Failures are logged and never retried.
    pub fn enqueue(&self, plan_id: PlanId, periods: Vec<Period>) {
        let Some(writer) = self.writer() else {
            warn!("no runtime available, snapshot of plan {} dropped", plan_id);
            return;
        };

        if writer.send(SnapshotJob { plan_id, periods }).is_err() {
            error!("snapshot writer stopped, snapshot dropped");
        }
    }

    pub fn observer(self: &Arc<Self>, plan_id: PlanId) -> impl LineupObserver + 'static {
        let store = Arc::clone(self);

        move |periods: &[Period]| store.enqueue(plan_id.clone(), periods.to_vec())
    }

    /// The writer starts on the first snapshot queued inside a runtime.
    fn writer(&self) -> Option<&UnboundedSender<SnapshotJob>> {
        if let Some(writer) = self.writer.get() {
            return Some(writer);
        }

        let handle = Handle::try_current().ok()?;

        Some(self.writer.get_or_init(|| {
            let (sender, receiver) = mpsc::unbounded_channel();
            handle.spawn(write_snapshots(self.directory.clone(), receiver));
            sender
        }))
    }
}

async fn write_snapshots(directory: PathBuf, mut receiver: UnboundedReceiver<SnapshotJob>) {
    while let Some(job) = receiver.recv().await {
        if let Err(e) = write_snapshot(&directory, &job.plan_id, &job.periods).await {
            error!("failed to store plan {}: {}", job.plan_id, e);
        }
    }

    debug!("snapshot writer for {} stopped", directory.display());
}

async fn write_snapshot(directory: &Path, plan_id: &PlanId, periods: &[Period]) -> io::Result<()> {
    tokio::fs::create_dir_all(directory).await?;

    let json = serde_json::to_vec_pretty(periods).map_err(io::Error::other)?;

    let path = snapshot_path(directory, plan_id);
    let temp_path = path.with_extension("json.tmp");

    tokio::fs::write(&temp_path, json).await?;
    tokio::fs::rename(&temp_path, &path).await?;

    debug!("plan {} stored: {} periods", plan_id, periods.len());

    Ok(())
}

fn snapshot_path(directory: &Path, plan_id: &PlanId) -> PathBuf {
    directory.join(format!("{}.json", plan_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineup_core::formation::PositionGroup;
    use lineup_core::lineup::PositionSlot;
    use lineup_core::shared::PlayerId;
    use std::time::Duration;

    fn temp_store() -> Arc<SnapshotStore> {
        let directory = std::env::temp_dir().join(format!("plans-{}", PlanId::generate()));
        Arc::new(SnapshotStore::new(directory))
    }

    fn periods(count: u32) -> Vec<Period> {
        (1..=count)
            .map(|number| {
                let mut slot = PositionSlot::new("Goalkeeper", "GK", PositionGroup::Goalkeeper, 50.0, 92.0);
                slot.player_id = Some(PlayerId::from("p1"));

                Period::new(number, "1-2-3-1", 10, vec![slot])
            })
            .collect()
    }

    async fn read_snapshot(store: &SnapshotStore, plan_id: &PlanId) -> Option<Vec<Period>> {
        let json = tokio::fs::read(snapshot_path(&store.directory, plan_id)).await.ok()?;
        serde_json::from_slice(&json).ok()
    }

    async fn wait_for_periods(store: &SnapshotStore, plan_id: &PlanId, count: usize) -> Option<Vec<Period>> {
        for _ in 0..100 {
            if let Some(periods) = read_snapshot(store, plan_id).await {
                if periods.len() == count {
                    return Some(periods);
                }
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        None
    }

    #[tokio::test]
    async fn test_observer_writes_in_background() {
        let store = temp_store();
        let plan_id = PlanId::generate();
        let observer = store.observer(plan_id.clone());

        observer.periods_changed(&periods(1));

        let stored = wait_for_periods(&store, &plan_id, 1).await.unwrap();
        assert_eq!(stored[0].positions[0].player_id, Some(PlayerId::from("p1")));
    }

    #[tokio::test]
    async fn test_snapshots_land_in_commit_order() {
        let store = temp_store();
        let plan_id = PlanId::generate();
        let observer = store.observer(plan_id.clone());

        for count in 1..=12 {
            observer.periods_changed(&periods(count));
        }

        assert!(wait_for_periods(&store, &plan_id, 12).await.is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(read_snapshot(&store, &plan_id).await.map(|p| p.len()), Some(12));
        let temp_path = snapshot_path(&store.directory, &plan_id).with_extension("json.tmp");
        assert!(!temp_path.exists());
    }

    #[tokio::test]
    async fn test_plans_share_one_writer() {
        let store = temp_store();
        let first = PlanId::generate();
        let second = PlanId::generate();

        store.enqueue(first.clone(), periods(2));
        store.enqueue(second.clone(), periods(3));

        assert!(wait_for_periods(&store, &first, 2).await.is_some());
        assert!(wait_for_periods(&store, &second, 3).await.is_some());
    }

    #[test]
    fn test_observer_without_runtime_does_not_panic() {
        let store = temp_store();
        let observer = store.observer(PlanId::generate());

        observer.periods_changed(&periods(1));
    }
}
