use {
    serde::{Serialize, Deserialize},
    tracing::{debug, info},
    diesel::QueryResult,
    rocket::{get, post, delete, serde::json::Json},
    super::{QuestionPage, page_number},
    crate::models::{
        web::{ApiError, OrFail, Success, success},
        db::{
            DbConn,
            QuestionId,
            CategoryId,
            models::{Category, Question, NewQuestion}
        }
    }
};

#[get("/questions?<page>")]
pub async fn list_questions(page: Option<&str>, conn: DbConn) -> Result<Json<Success<QuestionPage>>, ApiError> {
    let page = page_number(page)?;
    let (questions, categories) = conn.run(|c| -> QueryResult<_> {
        Ok((Question::load_all(c)?, Category::load_all(c)?))
    }).await?;

    debug!(page = page.get(), total = questions.len(), "serving question page");
    QuestionPage::new(page, &questions, None)
        .map(|page| page.with_categories(categories))
        .map(success)
}

#[derive(Serialize, Debug)]
pub struct Deleted {
    deleted: QuestionId,
    total_questions: i64
}

#[delete("/questions/<id>")]
pub async fn delete_question(id: QuestionId, conn: DbConn) -> Result<Json<Success<Deleted>>, ApiError> {
    let total_questions = conn.run(move |c| -> Result<_, ApiError> {
        if !Question::delete(id, c)? {
            return Err(ApiError::Unprocessable(format!("question {} does not exist", id)))
        }

        Ok(Question::count(c)?)
    }).await?;

    info!(question = %id, "question deleted");
    Ok(success(Deleted { deleted: id, total_questions }))
}

#[derive(Deserialize, Debug)]
pub struct QuestionForm {
    question: Option<String>,
    answer: Option<String>,
    category: Option<CategoryId>,
    difficulty: Option<i32>
}

/// A question that passed validation and only needs a category check
/// against the store.
#[derive(Debug)]
struct ValidQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: i32
}

impl ValidQuestion {
    fn insertable(&self) -> NewQuestion<'_> {
        NewQuestion {
            question: &self.question,
            answer: &self.answer,
            category: *self.category,
            difficulty: self.difficulty
        }
    }
}

impl TryFrom<QuestionForm> for ValidQuestion {
    type Error = ApiError;

    fn try_from(form: QuestionForm) -> Result<Self, Self::Error> {
        let (question, answer, category, difficulty) = match form {
            QuestionForm {
                question: Some(question),
                answer: Some(answer),
                category: Some(category),
                difficulty: Some(difficulty)
            } => (question, answer, category, difficulty),
            _ => return Err(ApiError::Malformed("question, answer, category and difficulty are required"))
        };

        if question.trim().is_empty() || answer.trim().is_empty() {
            return Err(ApiError::Unprocessable("question and answer must not be blank".into()))
        }
        if difficulty < 1 {
            return Err(ApiError::Unprocessable(format!("difficulty {} is not positive", difficulty)))
        }

        Ok(ValidQuestion { question, answer, category, difficulty })
    }
}

#[derive(Serialize, Debug)]
pub struct Created {
    created: QuestionId,
    total_questions: i64
}

#[post("/questions", data = "<form>")]
pub async fn create_question(form: Json<QuestionForm>, conn: DbConn) -> Result<Json<Success<Created>>, ApiError> {
    let valid = ValidQuestion::try_from(form.into_inner())?;
    let category = valid.category;

    let (created, total_questions) = conn.run(move |c| -> Result<_, ApiError> {
        let id = Question::insert(&valid.insertable(), c)?;
        Ok((id, Question::count(c)?))
    }).await?;

    info!(question = %created, %category, "question created");
    Ok(success(Created { created, total_questions }))
}

#[derive(Deserialize, Debug)]
pub struct Search {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>
}

#[post("/questions/search?<page>", data = "<search>")]
pub async fn search_questions(page: Option<&str>, search: Json<Search>, conn: DbConn) -> Result<Json<Success<QuestionPage>>, ApiError> {
    let page = page_number(page)?;
    let term = search
        .into_inner()
        .search_term
        .or_fail(ApiError::Malformed("searchTerm is required"))?;

    let found = conn.run(move |c| Question::search(&term, c)).await?;

    debug!(page = page.get(), found = found.len(), "serving search results");
    QuestionPage::new(page, &found, None)
        .map(success)
}
