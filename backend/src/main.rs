//! Backend entry-point: wires adapters, REST endpoints, and OpenAPI docs.

use std::env;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::memory::MemoryContentStore;
use backend::outbound::strapi::StrapiHttpSource;
use backend::server::{ServerConfig, SiteSettings, build_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = SiteSettings::load_from_iter(env::args_os()).map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let strapi_url = settings.strapi_url().map_err(std::io::Error::other)?;

    let remote = StrapiHttpSource::new(strapi_url, settings.strapi_timeout())
        .map_err(std::io::Error::other)?;
    let store = Arc::new(MemoryContentStore::new());

    let health_state = web::Data::new(HealthState::new());
    let server = build_server(
        ServerConfig::new(bind_addr, store, Arc::new(remote)),
        health_state.clone(),
    )?;

    info!(%bind_addr, "site backend listening");
    health_state.mark_ready();
    server.await
}
