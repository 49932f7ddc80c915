pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod service;
pub mod views;

pub use db::QnaStorage;
pub use error::QnaError;
pub use router::{QnaState, qna_router};
