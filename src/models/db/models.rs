use {
    serde::Serialize,
    diesel::{Identifiable, Queryable, Associations, Insertable},
    super::{
        ids::{QuestionId, CategoryId},
        schema::{questions, categories}
    }
};

#[derive(Identifiable, Queryable, Associations, Serialize, PartialEq, Clone, Debug)]
#[diesel(belongs_to(Category, foreign_key = category))]
#[diesel(table_name = questions)]
pub struct Question {
    pub(super) id: i32,
    pub question: String,
    pub answer: String,
    pub(super) category: i32,
    pub difficulty: i32
}

impl Question {
    pub fn id(&self) -> QuestionId {
        self.id.into()
    }

    pub fn category_id(&self) -> CategoryId {
        self.category.into()
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = questions)]
pub struct NewQuestion<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub category: i32,
    pub difficulty: i32
}

#[derive(Identifiable, Queryable, Serialize, PartialEq, Clone, Debug)]
#[diesel(table_name = categories)]
pub struct Category {
    pub(super) id: i32,
    #[serde(rename = "type")]
    pub kind: String
}

impl Category {
    pub fn id(&self) -> CategoryId {
        self.id.into()
    }
}

#[cfg(test)]
#[derive(Insertable, Debug)]
#[diesel(table_name = categories)]
pub struct NewCategory<'a> {
    pub kind: &'a str
}
