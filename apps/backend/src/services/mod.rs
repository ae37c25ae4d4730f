pub mod deck_writer;
pub mod generation;
pub mod llm;
