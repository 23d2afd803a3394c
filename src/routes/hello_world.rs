use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::domain::HelloWorldHandler;

//kept as raw pairs so odd query strings (repeated keys and friends) never turn into a 400
type QueryPairs = Vec<(String, String)>;

#[tracing::instrument(name = "Hello world function", skip(query, handler))]
pub async fn hello_world(
    query: web::Query<QueryPairs>,
    handler: web::Data<HelloWorldHandler>,
) -> HttpResponse {
    tracing::info!("HTTP trigger function processed a request.");
    let message = handler.handle(name_param(&query)).await;
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(message)
}

/// First `name` in the query, if there is one.
fn name_param(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str())
}
