//! Everything built on top of the evaluator: sampling, scenes, views,
//! configuration parsing, random curves and export.

pub mod export;
pub mod parse;
pub mod random;
pub mod sample;
pub mod scene;
pub mod view;
