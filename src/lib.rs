pub mod cli;
pub mod document;
pub mod error;
pub mod loader;
pub mod missing;
pub mod model;
pub mod normalize;
pub mod parsers;
pub mod pipeline;
pub mod rates;
pub mod report;
