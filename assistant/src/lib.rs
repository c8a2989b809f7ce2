pub mod models;
pub mod config;
pub mod ask_service;
pub mod segment;
pub mod query_view;
pub mod render;

pub use models::*;
pub use config::AssistantConfig;
pub use ask_service::{AnswerBackend, AskService};
pub use segment::{segment, AnswerLayout};
pub use query_view::{QueryView, ViewState, FETCH_ERROR_MESSAGE};
pub use render::render_page;
