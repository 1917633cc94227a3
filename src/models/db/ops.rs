use {
    diesel::{
        insert_into,
        delete,
        prelude::*,
        result::QueryResult,
        Connection as _
    },
    crate::models::db::{
        schema,
        Connection,
        ids::{QuestionId, CategoryId},
        models::{
            Question, NewQuestion,
            Category
        }
    }
};

#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    #[error("category {0} does not exist")]
    UnknownCategory(CategoryId),
    #[error(transparent)]
    Query(#[from] diesel::result::Error)
}

impl Category {
    pub fn load_all(conn: &mut Connection) -> QueryResult<Vec<Category>> {
        use schema::categories::dsl::*;

        categories
            .order(id)
            .load(conn)
    }

    pub fn find(cat: CategoryId, conn: &mut Connection) -> QueryResult<Option<Category>> {
        use schema::categories::dsl::*;

        categories
            .find(*cat)
            .first(conn)
            .optional()
    }

    #[cfg(test)]
    pub fn insert(new: &super::models::NewCategory, conn: &mut Connection) -> QueryResult<Category> {
        use schema::categories::dsl::*;

        insert_into(categories)
            .values(new)
            .get_result(conn)
    }
}

impl Question {
    pub fn load_all(conn: &mut Connection) -> QueryResult<Vec<Question>> {
        use schema::questions::dsl::*;

        questions
            .order(id)
            .load(conn)
    }

    pub fn count(conn: &mut Connection) -> QueryResult<i64> {
        use schema::questions::dsl::*;

        questions
            .count()
            .get_result(conn)
    }

    pub fn load_by_category(cat: &Category, conn: &mut Connection) -> QueryResult<Vec<Question>> {
        use schema::questions::dsl::*;

        Question::belonging_to(cat)
            .order(id)
            .load(conn)
    }

    /// Questions whose text contains `term`, ignoring case.
    /// Folding happens here rather than in `LIKE`, which only folds ASCII.
    pub fn search(term: &str, conn: &mut Connection) -> QueryResult<Vec<Question>> {
        let term = term.to_lowercase();

        Question::load_all(conn).map(|all| all
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&term))
            .collect()
        )
    }

    pub fn insert(new: &NewQuestion, conn: &mut Connection) -> Result<QuestionId, InsertError> {
        use schema::questions::dsl::*;

        conn.transaction(|conn| {
            let cat = CategoryId::from(new.category);
            Category::find(cat, conn)?
                .ok_or(InsertError::UnknownCategory(cat))?;

            insert_into(questions)
                .values(new)
                .returning(id)
                .get_result::<i32>(conn)
                .map(QuestionId::from)
                .map_err(InsertError::from)
        })
    }

    /// Returns whether a question with this id existed.
    pub fn delete(question_id: QuestionId, conn: &mut Connection) -> QueryResult<bool> {
        use schema::questions::dsl::*;

        delete(questions.find(*question_id))
            .execute(conn)
            .map(|deleted| deleted > 0)
    }
}

#[cfg(test)]
mod test {
    use {
        super::*,
        crate::test
    };

    #[test]
    fn categories_in_id_order() {
        let mut conn = test::memory_db();

        let names = Category::load_all(&mut conn)
            .unwrap()
            .into_iter()
            .map(|cat| cat.kind)
            .collect::<Vec<_>>();

        assert_eq!(names, ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]);
    }

    #[test]
    fn find_missing_category() {
        let mut conn = test::memory_db();

        assert!(Category::find(CategoryId::from(1000), &mut conn).unwrap().is_none());
        assert_eq!(Category::find(CategoryId::from(5), &mut conn).unwrap().unwrap().kind, "Entertainment");
    }

    #[test]
    fn questions_by_category() {
        let mut conn = test::memory_db();
        let cat = Category::find(CategoryId::from(5), &mut conn).unwrap().unwrap();

        let found = Question::load_by_category(&cat, &mut conn).unwrap();

        assert_eq!(found.len(), test::ENTERTAINMENT_QUESTIONS);
        assert!(found.iter().all(|q| q.category_id() == cat.id()));
        assert!(found.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn search_ignores_case() {
        let mut conn = test::memory_db();

        let found = Question::search("TITLE", &mut conn).unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|q| q.question.to_lowercase().contains("title")));
    }

    #[test]
    fn search_wildcards_are_literal() {
        let mut conn = test::memory_db();

        assert!(Question::search("%", &mut conn).unwrap().is_empty());
        assert!(Question::search("_", &mut conn).unwrap().is_empty());
    }

    #[test]
    fn search_folds_non_ascii_case() {
        let mut conn = test::memory_db();
        let id = Question::insert(&NewQuestion {
            question: "Quelle école a formé Marie Curie?",
            answer: "La Sorbonne",
            category: 1,
            difficulty: 3
        }, &mut conn).unwrap();

        let found = Question::search("ÉCOLE", &mut conn).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), id);
    }

    #[test]
    fn insert_then_delete() {
        let mut conn = test::memory_db();
        let before = Question::count(&mut conn).unwrap();

        let id = Question::insert(&NewQuestion {
            question: "What is the largest planet?",
            answer: "Jupiter",
            category: 1,
            difficulty: 2
        }, &mut conn).unwrap();

        assert_eq!(Question::count(&mut conn).unwrap(), before + 1);
        assert!(Question::delete(id, &mut conn).unwrap());
        assert!(!Question::delete(id, &mut conn).unwrap());
        assert_eq!(Question::count(&mut conn).unwrap(), before);
    }

    #[test]
    fn insert_into_unknown_category() {
        let mut conn = test::memory_db();

        let res = Question::insert(&NewQuestion {
            question: "Orphan?",
            answer: "Yes",
            category: 1000,
            difficulty: 1
        }, &mut conn);

        assert!(matches!(res, Err(InsertError::UnknownCategory(cat)) if *cat == 1000));
    }
}
