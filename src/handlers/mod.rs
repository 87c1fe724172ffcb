pub mod health_handler;
pub mod question_handler;

pub use health_handler::{health_check, health_check_ready};
pub use question_handler::{configure, generate_questions, generate_varied_questions};
