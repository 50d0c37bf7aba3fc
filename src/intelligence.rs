//! Alpha Intelligence endpoints: news sentiment, market movers, insider
//! transactions and advanced analytics. All payloads are returned raw.

use serde_json::Value;

use crate::core::{ApiParams, AvClient, AvError, NewsSort, NewsTopic};

impl AvClient {
    /// Market news with sentiment scores.
    ///
    /// `tickers` is a comma-separated symbol list as the vendor expects it
    /// (`"IBM"` or `"COIN,CRYPTO:BTC"`); `time_from`/`time_to` use the
    /// vendor's `YYYYMMDDTHHMM` format.
    pub async fn news_sentiment(
        &self,
        tickers: Option<&str>,
        topics: Option<&[NewsTopic]>,
        time_from: Option<&str>,
        time_to: Option<&str>,
        sort: Option<NewsSort>,
        limit: Option<u32>,
    ) -> Result<Option<Value>, AvError> {
        let topics = topics.map(|ts| {
            ts.iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(",")
        });
        self.send_request(
            "NEWS_SENTIMENT",
            ApiParams::new()
                .push_opt("tickers", tickers)
                .push_opt("topics", topics)
                .push_opt("time_from", time_from)
                .push_opt("time_to", time_to)
                .push_opt("sort", sort)
                .push_opt("limit", limit),
        )
        .await
    }

    /// Top 20 gainers, losers and most actively traded US tickers.
    pub async fn top_gainers_losers(&self) -> Result<Option<Value>, AvError> {
        self.send_request("TOP_GAINERS_LOSERS", ApiParams::new()).await
    }

    /// Insider transactions for a symbol.
    pub async fn insider_transactions(&self, symbol: &str) -> Result<Option<Value>, AvError> {
        self.send_request(
            "INSIDER_TRANSACTIONS",
            ApiParams::new().push("symbol", symbol),
        )
        .await
    }

    /// Advanced analytics over a sliding window. The vendor spells these
    /// parameters uppercase; `symbols` and `calculations` are
    /// comma-separated lists.
    pub async fn analytics_sliding_window(
        &self,
        symbols: &str,
        range: &str,
        interval: &str,
        window_size: u32,
        calculations: &str,
        ohlc: Option<&str>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "ANALYTICS_SLIDING_WINDOW",
            ApiParams::new()
                .push("SYMBOLS", symbols)
                .push("RANGE", range)
                .push("INTERVAL", interval)
                .push("WINDOW_SIZE", window_size)
                .push("CALCULATIONS", calculations)
                .push_opt("OHLC", ohlc),
        )
        .await
    }
}
