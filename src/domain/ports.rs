use super::gateway::GatewayRequest;
use crate::error::Result;
use async_trait::async_trait;

/// Delivers a request to the gateway and returns the raw response body.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    async fn send(&self, request: &GatewayRequest) -> Result<String>;
}

pub type GatewayTransportBox = Box<dyn GatewayTransport>;
