use serde::Serialize;

/// Envelope returned by the ingest and report handlers.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerResponse<T> {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: T,
}

impl<T> HandlerResponse<T> {
    pub fn ok(body: T) -> Self {
        Self {
            status_code: 200,
            body,
        }
    }
}
