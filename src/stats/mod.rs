pub mod controller;
pub mod dtos;
pub mod errors;
pub mod models;
pub mod service;

/// Histogram buckets, in response order. A `None` upper bound marks the
/// open-ended last bucket.
pub const PRICE_RANGES: [(&str, Option<f64>); 10] = [
    ("0-100", Some(100.0)),
    ("101-200", Some(200.0)),
    ("201-300", Some(300.0)),
    ("301-400", Some(400.0)),
    ("401-500", Some(500.0)),
    ("501-600", Some(600.0)),
    ("601-700", Some(700.0)),
    ("701-800", Some(800.0)),
    ("801-900", Some(900.0)),
    ("901-above", None),
];
