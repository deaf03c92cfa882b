//! In-process provisioners for router and worker tests.

use std::sync::Arc;

use async_trait::async_trait;
use cloudflare_api::DnsRecordResponse;
use mc_provision::{OrderEvent, OrderProvisioner, Provisioned, ProvisioningConfig};
use serde_json::json;
use tokio::sync::mpsc;

pub const REJECTION_BODY: &str = r#"{"success":false,"errors":[{"code":1004,"message":"DNS Validation Error"}]}"#;

#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Succeed,
    Fail,
    /// Never finish provisioning this order id.
    StallOrder(u64),
    /// Never finish any order.
    Stall,
}

/// Reports every config it is asked to provision, then acts per `Behaviour`.
pub struct FakeProvisioner {
    behaviour: Behaviour,
    seen: mpsc::UnboundedSender<ProvisioningConfig>,
}

impl FakeProvisioner {
    pub fn new(
        behaviour: Behaviour,
    ) -> (Arc<dyn OrderProvisioner>, mpsc::UnboundedReceiver<ProvisioningConfig>) {
        let (seen, rx) = mpsc::unbounded_channel();
        (Arc::new(Self { behaviour, seen }), rx)
    }
}

fn rejection() -> mc_provision::Error {
    mc_provision::Error::Dns(cloudflare_api::Error::Api {
        status: 400,
        body: REJECTION_BODY.into(),
    })
}

#[async_trait]
impl OrderProvisioner for FakeProvisioner {
    async fn provision(&self, config: &ProvisioningConfig) -> mc_provision::Result<Provisioned> {
        let _ = self.seen.send(config.clone());

        match self.behaviour {
            Behaviour::Fail => Err(rejection()),
            Behaviour::Stall => std::future::pending().await,
            Behaviour::StallOrder(id) if id == config.order_id => std::future::pending().await,
            Behaviour::Succeed | Behaviour::StallOrder(_) => Ok(Provisioned {
                order_id: config.order_id,
                user_id: 1,
                server_id: Some(100),
                fqdn: config.fqdn("cumpara.host"),
            }),
        }
    }

    async fn create_test_record(&self) -> mc_provision::Result<DnsRecordResponse> {
        match self.behaviour {
            Behaviour::Fail => Err(rejection()),
            _ => Ok(DnsRecordResponse(test_record())),
        }
    }
}

/// A Cloudflare create-record body, including fields no client type models.
pub fn test_record() -> serde_json::Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": {
            "id": "rec-test",
            "zone_id": "zone-1",
            "zone_name": "cumpara.host",
            "name": "test.cumpara.host",
            "type": "A",
            "content": "203.0.113.10",
            "proxiable": true,
            "proxied": true,
            "ttl": 1,
            "comment": null,
            "tags": [],
            "meta": { "auto_added": false }
        }
    })
}

pub fn order(id: u64) -> OrderEvent {
    serde_json::from_value(json!({
        "id": id,
        "billing": { "email": "client@example.com", "first_name": "Client" }
    }))
    .unwrap()
}
