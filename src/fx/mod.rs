//! Foreign-exchange endpoints: realtime rates and FX candle series.

mod api;
mod model;

pub use model::ExchangeRate;
