use {
    serde::Serialize,
    tracing::debug,
    rocket::{get, serde::json::Json},
    super::{QuestionPage, page_number},
    crate::models::{
        web::{ApiError, OrFail, Success, success},
        db::{
            DbConn,
            CategoryId,
            models::{Category, Question}
        }
    }
};

#[derive(Serialize, Debug)]
pub struct Categories {
    categories: Vec<Category>
}

#[get("/categories")]
pub async fn list_categories(conn: DbConn) -> Result<Json<Success<Categories>>, ApiError> {
    let categories = conn.run(|c| Category::load_all(c)).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound("no categories".into()))
    }

    Ok(success(Categories { categories }))
}

#[get("/categories/<id>/questions?<page>")]
pub async fn category_questions(id: CategoryId, page: Option<&str>, conn: DbConn) -> Result<Json<Success<QuestionPage>>, ApiError> {
    let page = page_number(page)?;
    let questions = conn.run(move |c| -> Result<_, ApiError> {
        let cat = Category::find(id, c)?
            .or_fail(ApiError::NotFound(format!("category {} does not exist", id)))?;

        Ok(Question::load_by_category(&cat, c)?)
    }).await?;

    debug!(category = %id, page = page.get(), found = questions.len(), "serving category page");
    QuestionPage::new(page, &questions, Some(id))
        .map(success)
}

#[cfg(test)]
mod test {
    use {
        crate::test,
        rocket::http::Status,
        serde_json::{json, Value}
    };

    #[test]
    fn lists_categories() {
        let server = test::server(true);

        let res = server.get("/categories").dispatch();
        assert_eq!(res.status(), Status::Ok);

        let body: Value = res.into_json().unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["categories"].as_array().unwrap().len(), 6);
        assert_eq!(body["categories"][4], json!({ "id": 5, "type": "Entertainment" }));
    }

    #[test]
    fn no_categories_is_not_found() {
        let server = test::server(false);

        let res = server.get("/categories").dispatch();
        assert_eq!(res.status(), Status::NotFound);

        let body: Value = res.into_json().unwrap();
        assert_eq!(body, json!({
            "success": false,
            "error": 404,
            "message": "Resource Not Found"
        }));
    }

    #[test]
    fn questions_of_category() {
        let server = test::server(true);

        let res = server.get("/categories/5/questions").dispatch();
        assert_eq!(res.status(), Status::Ok);

        let body: Value = res.into_json().unwrap();
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["current_category"], 5);
        assert_eq!(body["total_questions"], test::ENTERTAINMENT_QUESTIONS);
        assert_eq!(questions.len(), test::ENTERTAINMENT_QUESTIONS);
        assert!(questions.iter().all(|q| q["category"] == 5));
        assert!(body.get("categories").is_none());
    }

    #[test]
    fn unknown_category_is_not_found() {
        let server = test::server(true);

        let res = server.get("/categories/1000/questions").dispatch();
        assert_eq!(res.status(), Status::NotFound);

        let body: Value = res.into_json().unwrap();
        assert_eq!(body["success"], false);
    }

    #[test]
    fn category_page_past_the_end() {
        let server = test::server(true);

        let res = server.get("/categories/5/questions?page=2").dispatch();
        assert_eq!(res.status(), Status::NotFound);
    }

    #[test]
    fn negative_category_page_is_malformed() {
        let server = test::server(true);

        let res = server.get("/categories/5/questions?page=-1").dispatch();
        assert_eq!(res.status(), Status::BadRequest);
    }

    #[test]
    fn non_numeric_category_is_rejected() {
        let server = test::server(true);

        let res = server.get("/categories/science/questions").dispatch();
        assert!(res.status().class().is_client_error());

        let body: Value = res.into_json().unwrap();
        assert_eq!(body["success"], false);
    }
}
