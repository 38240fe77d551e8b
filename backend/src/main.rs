//! Backend entry-point: wires the people REST endpoints, health probes, and
//! OpenAPI docs.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use mockable::DefaultClock;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::inbound::http::health::{live, ready, HealthState};
use backend::inbound::http::people::{create_person, get_person, list_people};
use backend::inbound::http::state::HttpState;
use backend::outbound::persistence::InMemoryPeopleStore;
#[cfg(debug_assertions)]
use backend::ApiDoc;

/// Command-line options for the people backend.
#[derive(Debug, Parser)]
#[command(name = "backend", about = "People REST backend")]
struct Args {
    /// Socket address for the HTTP listener.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

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

    let args = Args::parse();

    let state = HttpState::new(Arc::new(InMemoryPeopleStore::new()), Arc::new(DefaultClock));
    let health_state = web::Data::new(HealthState::new());
    // Clone for the server factory so the readiness probe remains accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(server_health_state.clone())
            .service(list_people)
            .service(get_person)
            .service(create_person)
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

        app
    })
    .bind(args.bind)?;

    health_state.mark_ready();
    server.run().await
}
