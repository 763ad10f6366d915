// Analysis stages — the algorithmic core of the pipeline.
//
// Each submodule is a pure transformation over in-memory post lists:
// engagement scoring/filtering, near-duplicate removal, trend extraction,
// and lexicon-based sentiment.

pub mod dedup;
pub mod engagement;
pub mod sentiment;
pub mod trends;

/// Round to one decimal place (report percentages).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places (sentiment confidence).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
