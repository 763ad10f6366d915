// Grapevine: cross-platform social topic research.
//
// This is the library root. Each module corresponds to a stage of the
// research pipeline: ingestion (search), engagement filtering, dedup,
// trend and sentiment analysis, content suggestion, and output.

pub mod analysis;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod post;
pub mod search;
pub mod suggest;
