mod misc;
mod error;
mod envelope;
mod cors;

pub use {
    misc::OrFail,
    error::{ApiError, ErrorBody},
    envelope::{Success, success},
    cors::Cors
};
