use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use tokio::net::TcpListener;

use crate::config::ServerSettings;

use super::schema::BookshelfSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

async fn graphql_handler(
    State(schema): State<BookshelfSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    tracing::debug!(operation = ?request.operation_name, "GraphQL request");
    schema.execute(request).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Routes for the API. `GET /graphql` serves the explorer only when `graphiql` is set.
pub fn router(schema: BookshelfSchema, graphiql_enabled: bool) -> Router {
    let route = if graphiql_enabled {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new().route(GRAPHQL_PATH, route).with_state(schema)
}

/// Bind the configured address and serve until the process is stopped.
pub async fn run_server(schema: BookshelfSchema, settings: &ServerSettings) -> std::io::Result<()> {
    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    serve(listener, schema, settings.graphiql).await
}

pub async fn serve(
    listener: TcpListener,
    schema: BookshelfSchema,
    graphiql_enabled: bool,
) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, graphiql = graphiql_enabled, "GraphQL server listening");

    axum::serve(listener, router(schema, graphiql_enabled)).await
}
