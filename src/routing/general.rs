use rocket::{options, http::Status};

/// Answers CORS preflight requests; the headers come from the `Cors` fairing.
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}
