use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use juniper::http::playground::playground_source;
use juniper::http::{GraphQLRequest, GraphQLResponse};
use juniper::InputValue;
use serde::Deserialize;
use thiserror::Error;

use crate::graphql_schemas::{ContextProvider, Schema};

/// Where the GraphQL endpoint is mounted and what it serves besides queries.
#[derive(Debug, Clone)]
pub struct GraphQLEndpoint {
    pub path: String,
    pub playground: bool,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("GET query missing")]
    MissingQuery,
    #[error("variables are not valid JSON: {0}")]
    InvalidVariables(#[from] serde_json::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode { StatusCode::BAD_REQUEST }
}

/// GraphQL request carried in a query string, `variables` is JSON encoded.
#[derive(Debug, Deserialize)]
pub struct GraphQLQueryParams {
    query: Option<String>,
    #[serde(rename = "operationName")]
    operation_name: Option<String>,
    variables: Option<String>,
}

async fn execute(req: &HttpRequest, request: &GraphQLRequest, schema: &Schema, contexts: &dyn ContextProvider) -> HttpResponse {
    let context = contexts.context(req);
    let response: GraphQLResponse = request.execute(schema, &context).await;
    if response.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        debug!("rejected graphql request on {}", req.path());
        HttpResponse::BadRequest().json(response)
    }
}

pub async fn graphql_post(
    req: HttpRequest,
    payload: web::Json<GraphQLRequest>,
    schema: web::Data<Schema>,
    contexts: web::Data<dyn ContextProvider>,
) -> HttpResponse {
    let request = payload.into_inner();
    execute(&req, &request, schema.get_ref(), contexts.get_ref()).await
}

pub async fn graphql_get(
    req: HttpRequest,
    params: web::Query<GraphQLQueryParams>,
    endpoint: web::Data<GraphQLEndpoint>,
    schema: web::Data<Schema>,
    contexts: web::Data<dyn ContextProvider>,
) -> Result<HttpResponse, ApiError> {
    let params = params.into_inner();
    let query = match params.query {
        Some(query) => query,
        None if endpoint.playground => return Ok(playground(&endpoint)),
        None => return Err(ApiError::MissingQuery),
    };
    let variables = params
        .variables
        .as_deref()
        .map(serde_json::from_str::<InputValue>)
        .transpose()?;
    let request = GraphQLRequest::new(query, params.operation_name, variables);
    Ok(execute(&req, &request, schema.get_ref(), contexts.get_ref()).await)
}

fn playground(endpoint: &GraphQLEndpoint) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(&endpoint.path, None))
}

/// Mounts the GraphQL endpoint and the liveness route.
///
/// The app must provide `web::Data<Schema>` and `web::Data<dyn ContextProvider>`.
pub fn config_app(cfg: &mut web::ServiceConfig, endpoint: &GraphQLEndpoint) {
    cfg.app_data(web::Data::new(endpoint.clone()));
    cfg.service(
        web::resource(endpoint.path.as_str())
            .route(web::post().to(graphql_post))
            .route(web::get().to(graphql_get)),
    );
    cfg.service(web::resource("/").route(web::get().to(|| async { HttpResponse::Ok().finish() })));
}
