use utoipa::OpenApi;

use crate::errors::{ErrorKind, RestError};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "REST Errors",
        version = "0.1.0",
        description = "Shared error body returned by services: a message, an HTTP status, a machine-readable error category and the underlying causes."
    ),
    components(schemas(RestError, ErrorKind)),
    tags(
        (name = "errors", description = "Error response schemas"),
    )
)]
pub struct ErrorApiDoc;
