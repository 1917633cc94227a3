use super::ApiError;

pub trait OrFail<T> {
    fn or_fail(self, err: ApiError) -> Result<T, ApiError>;

    fn or_500(self) -> Result<T, ApiError> where Self: Sized {
        self.or_fail(ApiError::Internal("unexpected failure"))
    }
}

impl <T, E> OrFail<T> for Result<T, E> {
    fn or_fail(self, err: ApiError) -> Result<T, ApiError> {
        self.map_err(|_| err)
    }
}

impl <T> OrFail<T> for Option<T> {
    fn or_fail(self, err: ApiError) -> Result<T, ApiError> {
        self.ok_or(err)
    }
}
