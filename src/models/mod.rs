pub mod db;
pub mod web;
pub mod paging;
pub mod quiz;
