use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};

use crate::api::{config_app, GraphQLEndpoint};
use crate::graphql_schemas::{create_schema, ContextProvider};
use crate::settings::{ApiSettings, CorsSettings};

/// Any origin unless `allowed_origins` is set.
pub fn cors(settings: &CorsSettings) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"])
        .allow_any_header()
        .max_age(settings.max_age);
    if settings.allowed_origins.is_empty() {
        cors.allow_any_origin().send_wildcard()
    } else {
        settings
            .allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

pub async fn httpserver(
    api: ApiSettings,
    cors_settings: CorsSettings,
    contexts: Arc<dyn ContextProvider>,
) -> std::io::Result<()> {
    let endpoint = GraphQLEndpoint {
        path: api.path.clone(),
        playground: api.playground,
    };
    let app = move || {
        App::new()
            .app_data(web::Data::new(create_schema()))
            .app_data(web::Data::from(contexts.clone()))
            .configure(|cfg| config_app(cfg, &endpoint))
            .wrap(Logger::default())
            .wrap(cors(&cors_settings))
    };
    let server = HttpServer::new(app).bind((api.host.as_str(), api.port.0))?;
    info!("GraphQL server on {}", api.endpoint_url());
    server.run().await
}
