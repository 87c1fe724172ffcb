pub mod catalogue;
pub mod generated_question;
pub use catalogue::{PracticeItem, Subsection, TopicSection, TopicStatus};
pub use generated_question::{GeneratedQuestion, QuestionSet, QuestionType};
