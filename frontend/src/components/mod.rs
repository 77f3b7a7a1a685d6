pub mod handlers;
pub mod header;
pub mod questionnaire;
pub mod results;
pub mod utils;
