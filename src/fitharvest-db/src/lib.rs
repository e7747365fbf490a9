#[macro_use]
extern crate log;

mod db;
pub use db::DatabaseHandler;

mod type_impl;
