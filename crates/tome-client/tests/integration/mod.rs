pub mod common;
mod pipeline_tests;
