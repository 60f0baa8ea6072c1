//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{health_check, list_words, word_of_the_day};
pub use routes::{create_router, run_server};
pub use state::AppState;
