pub mod models;
pub mod schema;
pub mod ops;
pub mod ids;
mod conn;

pub use {
    conn::{DbConn, Connection, migrate, run_migrations},
    ids::{QuestionId, CategoryId},
    ops::*
};
