//! Server construction and middleware wiring.

mod config;

pub use config::SiteSettings;

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{ContentStore, RemoteContentSource};
use crate::inbound::http;
use crate::inbound::http::health::{self, HealthState};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    bind_addr: SocketAddr,
    store: Arc<dyn ContentStore>,
    remote: Arc<dyn RemoteContentSource>,
}

impl ServerConfig {
    /// Construct a server configuration from the wired adapters.
    #[must_use]
    pub fn new(
        bind_addr: SocketAddr,
        store: Arc<dyn ContentStore>,
        remote: Arc<dyn RemoteContentSource>,
    ) -> Self {
        Self {
            bind_addr,
            store,
            remote,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Build the HTTP server without starting it.
///
/// The caller keeps the [`HealthState`] handle so it can mark the service
/// ready once the server is running and unhealthy when draining.
///
/// # Errors
///
/// Returns an error when the listener cannot bind to the configured
/// address.
pub fn build_server(
    config: ServerConfig,
    health_state: web::Data<HealthState>,
) -> std::io::Result<Server> {
    let state = HttpState::new(config.store, config.remote);
    let server = HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(health_state.clone())
            .wrap(Trace)
            .configure(http::configure)
            .service(health::ready)
            .service(health::live);

        #[cfg(debug_assertions)]
        {
            app = app
                .service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));
        }

        app
    })
    .bind(config.bind_addr)?;
    Ok(server.run())
}
