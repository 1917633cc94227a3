use {
    serde::Serialize,
    tracing::{debug, error},
    rocket::{
        Request,
        http::Status,
        serde::json::Json,
        response::{self, Responder}
    },
    crate::models::db::InsertError
};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("malformed request: {0}")]
    Malformed(&'static str),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unprocessable request: {0}")]
    Unprocessable(String),
    #[error("database error: {0}")]
    Query(#[from] diesel::result::Error),
    #[error("internal error: {0}")]
    Internal(&'static str)
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Malformed(_) => Status::BadRequest,
            ApiError::NotFound(_) => Status::NotFound,
            ApiError::Unprocessable(_) => Status::UnprocessableEntity,
            ApiError::Query(_) | ApiError::Internal(_) => Status::InternalServerError
        }
    }
}

impl From<InsertError> for ApiError {
    fn from(e: InsertError) -> Self {
        match e {
            InsertError::UnknownCategory(_) => ApiError::Unprocessable(e.to_string()),
            InsertError::Query(e) => ApiError::Query(e)
        }
    }
}

impl <'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status.class().is_server_error() {
            error!(uri = %req.uri(), error = %self, "request failed");
        } else {
            debug!(uri = %req.uri(), error = %self, "request rejected");
        }

        (status, Json(ErrorBody::new(status))).respond_to(req)
    }
}

/// The failure envelope shared by handlers and catchers.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str
}

impl ErrorBody {
    pub fn new(status: Status) -> ErrorBody {
        ErrorBody {
            success: false,
            error: status.code,
            message: message(status)
        }
    }
}

fn message(status: Status) -> &'static str {
    match status.code {
        400 => "Bad Request",
        404 => "Resource Not Found",
        405 => "Method Not Allowed",
        422 => "Unprocessable Request",
        500 => "Internal Server Error",
        _ => status.reason().unwrap_or("Unknown Error")
    }
}
