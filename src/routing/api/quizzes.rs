use {
    serde::{Serialize, Deserialize},
    tracing::debug,
    diesel::QueryResult,
    rocket::{post, State, serde::json::Json},
    crate::models::{
        web::{ApiError, OrFail, Success, success},
        quiz::{Dice, Pick, Round},
        db::{
            DbConn,
            QuestionId,
            CategoryId,
            models::{Category, Question}
        }
    }
};

#[derive(Deserialize, Debug)]
pub struct QuizCategory {
    id: Option<CategoryId>
}

#[derive(Deserialize, Debug)]
pub struct QuizRequest {
    quiz_category: Option<QuizCategory>,
    previous_questions: Option<Vec<QuestionId>>
}

impl TryFrom<QuizRequest> for Round {
    type Error = ApiError;

    fn try_from(req: QuizRequest) -> Result<Self, Self::Error> {
        let category = req.quiz_category
            .and_then(|cat| cat.id)
            .or_fail(ApiError::Malformed("quiz_category.id is required"))?;
        let previous = req.previous_questions
            .or_fail(ApiError::Malformed("previous_questions is required"))?;

        Ok(Round::new(category, previous))
    }
}

#[derive(Serialize, Debug)]
pub struct NextQuestion {
    question: Option<Question>
}

/// An exhausted category is still a success, with a null question.
#[post("/quizzes", data = "<req>")]
pub async fn next_question(req: Json<QuizRequest>, dice: &State<Dice>, conn: DbConn) -> Result<Json<Success<NextQuestion>>, ApiError> {
    let round = Round::try_from(req.into_inner())?;
    let category = round.category;

    let pool = conn.run(move |c| -> QueryResult<Vec<Question>> {
        match Category::find(category, c)? {
            Some(cat) => Question::load_by_category(&cat, c),
            None => Ok(Vec::new())
        }
    }).await?;

    let question = {
        let mut rng = dice.lock().or_500()?;
        match round.select(&pool, &mut *rng) {
            Pick::Next(q) => Some(q.clone()),
            Pick::Exhausted => None
        }
    };

    if question.is_none() {
        debug!(%category, previous = round.previous.len(), "quiz category exhausted");
    }
    Ok(success(NextQuestion { question }))
}
