use async_trait::async_trait;
use tracing::info;

use cloudrider_schema::enumeration::EnumerationRequest;

use crate::session::SessionHandle;

/// Interface implemented by the service-enumeration engine: walk the selected
/// services with the given session, pacing calls by the requested speed tier.
#[async_trait]
pub trait EnumerateServices {
    async fn enumerate(
        &self,
        session: &SessionHandle,
        request: &EnumerationRequest,
    ) -> anyhow::Result<()>;
}

/// Stand-in engine used until a real one is wired in; reports what it was
/// asked to walk and returns.
#[derive(Debug, Default)]
pub struct LoggingEnumeration;

#[async_trait]
impl EnumerateServices for LoggingEnumeration {
    async fn enumerate(
        &self,
        session: &SessionHandle,
        request: &EnumerationRequest,
    ) -> anyhow::Result<()> {
        info!(
            services = %request.services,
            speed = request.speed.level(),
            region = session.region().unwrap_or("unset"),
            "starting enumeration"
        );
        Ok(())
    }
}
