//! The catalog of stocks.

use crate::config::SchemaConfig;
use crate::keys;
use crate::range::UNBOUNDED;
use crate::stock::Stock;
use crate::values::{self, BarValue};
use crate::{SchemaError, SchemaResult};
use rootstocks_store::{Item, Root};
use rootstocks_types::{PackedBar, StockDetails};
use std::marker::PhantomData;
use tracing::debug;

/// Top-level access to every stock, keyed by ticker.
///
/// `B` fixes the bar format for every stock handed out by this catalog.
#[derive(Debug, Clone)]
pub struct RootStocks<I, B = PackedBar> {
    item: I,
    bars: PhantomData<fn() -> B>,
}

impl<I: Item, B: BarValue> RootStocks<I, B> {
    /// Opens the catalog under the configured root item, creating the root
    /// item on first use.
    pub fn open<R>(root: &R, config: &SchemaConfig) -> SchemaResult<Self>
    where
        R: Root<Item = I>,
    {
        let item = root.root_item(&config.namespace, &config.label)?;
        debug!("Opened stock catalog under {}", config.namespace);
        Ok(Self {
            item,
            bars: PhantomData,
        })
    }

    /// Creates a stock. Fails if the ticker is already taken.
    pub fn create_stock(
        &self,
        ticker: &str,
        details: &StockDetails,
    ) -> SchemaResult<Stock<I, B>> {
        let key = ticker_key(ticker)?;
        let value = values::encode_profile(details)?;
        let item = self.item.create_child(&key, &value, None)?;
        debug!("Created stock {}", ticker);
        Ok(Stock::from_item(item))
    }

    /// Reads a stock. Fails with the store's not-found error if absent.
    pub fn read_stock(&self, ticker: &str) -> SchemaResult<Stock<I, B>> {
        let item = self.item.read_child(&ticker_key(ticker)?)?;
        Ok(Stock::from_item(item))
    }

    /// Visits stocks in ticker order starting at `start_ticker`. An empty
    /// start ticker begins at the first stock, or the last with `reverse`.
    pub fn range_stocks<F>(
        &self,
        start_ticker: &str,
        reverse: bool,
        mut visit: F,
    ) -> SchemaResult<()>
    where
        F: FnMut(Stock<I, B>) -> bool,
    {
        self.item.range_children(
            &keys::encode_ticker(start_ticker),
            UNBOUNDED,
            reverse,
            |item| visit(Stock::from_item(item)),
        )?;
        Ok(())
    }

    /// Visits tickers without decoding any profile.
    pub fn range_stock_tickers<F>(
        &self,
        start_ticker: &str,
        reverse: bool,
        mut visit: F,
    ) -> SchemaResult<()>
    where
        F: FnMut(String) -> bool,
    {
        self.item.range_child_keys(
            &keys::encode_ticker(start_ticker),
            UNBOUNDED,
            reverse,
            |key| visit(keys::decode_ticker(key)),
        )?;
        Ok(())
    }
}

fn ticker_key(ticker: &str) -> SchemaResult<Vec<u8>> {
    if ticker.is_empty() {
        return Err(SchemaError::InvalidArgument("ticker must not be empty".into()));
    }
    Ok(keys::encode_ticker(ticker))
}
