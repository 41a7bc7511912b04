pub mod engine;
pub mod index;
pub mod query;
pub mod tokenizer;
pub mod types;
