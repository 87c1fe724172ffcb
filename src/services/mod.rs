pub mod catalogue_service;
pub mod gateway_client;
pub mod http_helpers;
pub mod prompt_builder;
pub mod question_service;
pub mod reply_extraction;
