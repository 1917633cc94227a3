use {
    serde::Serialize,
    rocket::serde::json::Json
};

/// Wraps a response body as `{"success": true, ...body}`.
#[derive(Serialize, Debug)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    body: T
}

pub fn success<T: Serialize>(body: T) -> Json<Success<T>> {
    Json(Success {
        success: true,
        body
    })
}

#[cfg(test)]
mod test {
    use {
        super::*,
        serde_json::json
    };

    #[derive(Serialize)]
    struct Deleted {
        deleted: i32
    }

    #[test]
    fn flattens_body() {
        let Json(body) = success(Deleted { deleted: 3 });

        assert_eq!(serde_json::to_value(body).unwrap(), json!({
            "success": true,
            "deleted": 3
        }));
    }
}
