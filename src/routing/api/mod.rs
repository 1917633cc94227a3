pub mod categories;
pub mod questions;
pub mod quizzes;

pub use {
    categories::*,
    questions::*,
    quizzes::*
};

use {
    serde::Serialize,
    crate::models::{
        web::{ApiError, OrFail},
        paging::{self, PageNumber},
        db::{
            CategoryId,
            models::{Question, Category}
        }
    }
};

/// One page of questions plus the size of the whole result set.
#[derive(Serialize, Debug)]
pub struct QuestionPage {
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<Category>>
}

impl QuestionPage {
    /// An empty page is reported as not found.
    pub fn new(page: PageNumber, all: &[Question], current_category: Option<CategoryId>) -> Result<QuestionPage, ApiError> {
        let window = paging::paginate(page, all);
        if window.is_empty() {
            return Err(ApiError::NotFound(format!(
                "page {} of {} questions is empty", page.get(), all.len()
            )))
        }

        Ok(QuestionPage {
            questions: window.to_vec(),
            total_questions: all.len(),
            current_category,
            categories: None
        })
    }

    pub fn with_categories(self, categories: Vec<Category>) -> QuestionPage {
        QuestionPage {
            categories: Some(categories),
            ..self
        }
    }
}

/// Absent means the first page. Anything other than a positive integer
/// is rejected instead of falling back to the first page.
pub fn page_number(page: Option<&str>) -> Result<PageNumber, ApiError> {
    page.map_or(Some(PageNumber::FIRST), |raw| raw.parse().ok().and_then(PageNumber::new))
        .or_fail(ApiError::Malformed("page must be a positive integer"))
}

#[cfg(test)]
mod test {
    use {
        super::*,
        crate::test,
        rocket::http::Status
    };

    #[test]
    fn page_numbers() {
        assert_eq!(page_number(None).unwrap(), PageNumber::FIRST);
        assert_eq!(page_number(Some("3")).unwrap().get(), 3);

        for raw in ["0", "-1", "abc", "", "1.5"] {
            assert_eq!(page_number(Some(raw)).unwrap_err().status(), Status::BadRequest, "page {:?}", raw);
        }
    }

    #[test]
    fn empty_page_is_not_found() {
        let all = test::questions();
        let page = PageNumber::new(100).unwrap();

        assert_eq!(QuestionPage::new(page, &all, None).unwrap_err().status(), Status::NotFound);
        assert_eq!(QuestionPage::new(PageNumber::FIRST, &[], None).unwrap_err().status(), Status::NotFound);
    }

    #[test]
    fn counts_whole_result_set() {
        let all = test::questions();
        let page = QuestionPage::new(PageNumber::new(2).unwrap(), &all, None).unwrap();

        assert_eq!(page.total_questions, test::TOTAL_QUESTIONS);
        assert_eq!(page.questions.len(), test::TOTAL_QUESTIONS - paging::PAGE_SIZE);
        assert_eq!(page.questions[0], all[paging::PAGE_SIZE]);
    }
}
