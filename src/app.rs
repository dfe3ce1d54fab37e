use crate::config::Config;
use crate::http::ReqwestTransport;
use crate::service::ApiService;

pub fn build_service(config: &Config) -> anyhow::Result<ApiService<ReqwestTransport>> {
    let transport = ReqwestTransport::new()?;

    tracing::info!(base_url = %config.base_url(), "API service configured");

    Ok(ApiService::new(config.base_url(), transport))
}
