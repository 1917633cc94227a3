use {
    rocket::{
        catch,
        Request,
        http::Status,
        serde::json::Json
    },
    crate::models::web::ErrorBody
};

type Failure = (Status, Json<ErrorBody>);

fn failure(status: Status) -> Failure {
    (status, Json(ErrorBody::new(status)))
}

#[catch(400)]
pub fn bad_request() -> Failure {
    failure(Status::BadRequest)
}

#[catch(404)]
pub fn not_found() -> Failure {
    failure(Status::NotFound)
}

#[catch(422)]
pub fn unprocessable() -> Failure {
    failure(Status::UnprocessableEntity)
}

#[catch(default)]
pub fn default(status: Status, _req: &Request) -> Failure {
    failure(status)
}
