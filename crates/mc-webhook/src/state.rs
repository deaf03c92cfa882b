use std::sync::Arc;

use mc_provision::OrderProvisioner;

use crate::worker::ProvisionQueue;

#[derive(Clone)]
pub struct AppState {
    pub provisioner: Arc<dyn OrderProvisioner>,
    pub queue: ProvisionQueue,
}
