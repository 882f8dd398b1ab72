//! Market price lookup boundary.
//!
//! The live quote service is a collaborator, not part of this engine; the
//! aggregator only sees this trait. Lookups are synchronous and independent
//! per ticker, and unavailability is a normal outcome the aggregator absorbs
//! via the cost-basis fallback, so implementors return `None` instead of
//! erroring for unknown or failed tickers.

use std::collections::HashMap;

use rust_decimal::Decimal;

/// A source of current market prices.
pub trait PriceLookup {
    /// The current price for `ticker`, or `None` when unavailable.
    ///
    /// A caller wrapping a remote service is responsible for bounding its
    /// latency and mapping timeouts to `None`.
    fn get_price(&self, ticker: &str) -> Option<Decimal>;

    /// Whether `ticker` is known to this source. Used by edit surfaces to
    /// reject typos before they land in a portfolio.
    fn is_valid(&self, ticker: &str) -> bool {
        self.get_price(ticker).is_some()
    }
}

/// A fixed in-memory price book.
///
/// Useful for tests and demos, and as the snapshot an embedding server
/// collects before aggregation when it issues its lookups concurrently.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceBook {
    prices: HashMap<String, Decimal>,
}

impl StaticPriceBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, ticker: impl Into<String>, price: Decimal) {
        self.prices.insert(ticker.into(), price);
    }
}

impl PriceLookup for StaticPriceBook {
    fn get_price(&self, ticker: &str) -> Option<Decimal> {
        self.prices.get(ticker).copied()
    }
}
