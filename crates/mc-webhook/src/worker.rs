//! Background provisioning.
//!
//! The webhook acknowledges an order before anything is provisioned. Orders
//! are handed to a worker over a channel; each one runs in its own task and
//! any failure is sent to a separate failure channel.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mc_provision::{OrderEvent, OrderProvisioner, ProvisioningConfig};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{error, info};
use uuid::Uuid;

/// A provisioning run that failed after its order was acknowledged.
#[derive(Debug)]
pub struct ProvisionFailure {
    pub job_id: Uuid,
    pub order_id: u64,
    pub error: mc_provision::Error,
}

struct ProvisionJob {
    id: Uuid,
    order: OrderEvent,
    received_at: DateTime<Utc>,
}

/// Handle for submitting orders to the provisioning worker.
#[derive(Clone)]
pub struct ProvisionQueue {
    tx: mpsc::UnboundedSender<ProvisionJob>,
}

impl ProvisionQueue {
    /// Queue an order. Returns `None` if the worker has stopped.
    pub fn enqueue(&self, order: OrderEvent) -> Option<Uuid> {
        let id = Uuid::new_v4();
        let job = ProvisionJob {
            id,
            order,
            received_at: Utc::now(),
        };
        self.tx.send(job).ok().map(|_| id)
    }
}

/// Spawn the provisioning worker task.
pub fn spawn_worker(
    provisioner: Arc<dyn OrderProvisioner>,
    failures: mpsc::UnboundedSender<ProvisionFailure>,
) -> ProvisionQueue {
    let (tx, mut rx) = mpsc::unbounded_channel::<ProvisionJob>();

    tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            tokio::spawn(run_job(provisioner.clone(), job, failures.clone()));
        }
        info!("provisioning worker stopped");
    });

    ProvisionQueue { tx }
}

async fn run_job(
    provisioner: Arc<dyn OrderProvisioner>,
    job: ProvisionJob,
    failures: mpsc::UnboundedSender<ProvisionFailure>,
) {
    let config = ProvisioningConfig::from_order(&job.order);
    let result = provisioner.provision(&config).await;
    let elapsed_ms = (Utc::now() - job.received_at).num_milliseconds();

    match result {
        Ok(done) => {
            info!(
                job_id = %job.id,
                order_id = done.order_id,
                user_id = done.user_id,
                server_id = ?done.server_id,
                fqdn = %done.fqdn,
                elapsed_ms,
                "order provisioned"
            );
        }
        Err(error) => {
            let failure = ProvisionFailure {
                job_id: job.id,
                order_id: config.order_id,
                error,
            };
            if let Err(mpsc::error::SendError(failure)) = failures.send(failure) {
                log_failure(&failure);
            }
        }
    }
}

/// Drain the failure channel into the log.
pub fn spawn_failure_logger(mut rx: mpsc::UnboundedReceiver<ProvisionFailure>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(failure) = rx.recv().await {
            log_failure(&failure);
        }
    })
}

fn log_failure(failure: &ProvisionFailure) {
    error!(
        job_id = %failure.job_id,
        order_id = failure.order_id,
        status = ?failure.error.status(),
        error = %failure.error,
        "provisioning error"
    );
}
