//! Technical indicator endpoints, all returned raw.
//!
//! Every indicator payload sits under a `Technical Analysis: <NAME>` key
//! with indicator-specific columns, so no tabular shaping is attempted
//! here. The endpoints fall into a few signature families (the moving
//! averages, the plain time-period oscillators, the price-only
//! indicators, the Hilbert-transform family) plus a dozen with their own
//! tuning parameters.
//!
//! `interval` accepts the minute variants and `daily`/`weekly`/`monthly`;
//! `month` (`YYYY-MM`) slices intraday history as on the series endpoints.

use serde_json::Value;

use crate::core::{ApiParams, AvClient, AvError, Interval, SeriesType};

/// symbol, interval, time_period, series_type.
macro_rules! ma_endpoint {
    ($(#[$doc:meta])* $name:ident, $function:literal) => {
        $(#[$doc])*
        pub async fn $name(
            &self,
            symbol: &str,
            interval: Interval,
            time_period: u32,
            series_type: SeriesType,
            month: Option<&str>,
        ) -> Result<Option<Value>, AvError> {
            self.send_request(
                $function,
                ApiParams::new()
                    .push("symbol", symbol)
                    .push("interval", interval)
                    .push("time_period", time_period)
                    .push("series_type", series_type)
                    .push_opt("month", month),
            )
            .await
        }
    };
}

/// symbol, interval, time_period; works on OHLC directly.
macro_rules! range_endpoint {
    ($(#[$doc:meta])* $name:ident, $function:literal) => {
        $(#[$doc])*
        pub async fn $name(
            &self,
            symbol: &str,
            interval: Interval,
            time_period: u32,
            month: Option<&str>,
        ) -> Result<Option<Value>, AvError> {
            self.send_request(
                $function,
                ApiParams::new()
                    .push("symbol", symbol)
                    .push("interval", interval)
                    .push("time_period", time_period)
                    .push_opt("month", month),
            )
            .await
        }
    };
}

/// symbol, interval; no tuning parameters.
macro_rules! price_endpoint {
    ($(#[$doc:meta])* $name:ident, $function:literal) => {
        $(#[$doc])*
        pub async fn $name(
            &self,
            symbol: &str,
            interval: Interval,
            month: Option<&str>,
        ) -> Result<Option<Value>, AvError> {
            self.send_request(
                $function,
                ApiParams::new()
                    .push("symbol", symbol)
                    .push("interval", interval)
                    .push_opt("month", month),
            )
            .await
        }
    };
}

/// symbol, interval, series_type: the Hilbert-transform family.
macro_rules! ht_endpoint {
    ($(#[$doc:meta])* $name:ident, $function:literal) => {
        $(#[$doc])*
        pub async fn $name(
            &self,
            symbol: &str,
            interval: Interval,
            series_type: SeriesType,
            month: Option<&str>,
        ) -> Result<Option<Value>, AvError> {
            self.send_request(
                $function,
                ApiParams::new()
                    .push("symbol", symbol)
                    .push("interval", interval)
                    .push("series_type", series_type)
                    .push_opt("month", month),
            )
            .await
        }
    };
}

impl AvClient {
    ma_endpoint!(
        /// Simple moving average.
        sma, "SMA"
    );
    ma_endpoint!(
        /// Exponential moving average.
        ema, "EMA"
    );
    ma_endpoint!(wma, "WMA");
    ma_endpoint!(dema, "DEMA");
    ma_endpoint!(tema, "TEMA");
    ma_endpoint!(trima, "TRIMA");
    ma_endpoint!(kama, "KAMA");
    ma_endpoint!(t3, "T3");
    ma_endpoint!(
        /// Relative strength index.
        rsi, "RSI"
    );
    ma_endpoint!(mom, "MOM");
    ma_endpoint!(cmo, "CMO");
    ma_endpoint!(roc, "ROC");
    ma_endpoint!(rocr, "ROCR");
    ma_endpoint!(trix, "TRIX");
    ma_endpoint!(midpoint, "MIDPOINT");

    range_endpoint!(
        /// Williams %R.
        willr, "WILLR"
    );
    range_endpoint!(
        /// Average directional movement index.
        adx, "ADX"
    );
    range_endpoint!(adxr, "ADXR");
    range_endpoint!(cci, "CCI");
    range_endpoint!(aroon, "AROON");
    range_endpoint!(aroonosc, "AROONOSC");
    range_endpoint!(mfi, "MFI");
    range_endpoint!(dx, "DX");
    range_endpoint!(minus_di, "MINUS_DI");
    range_endpoint!(plus_di, "PLUS_DI");
    range_endpoint!(minus_dm, "MINUS_DM");
    range_endpoint!(plus_dm, "PLUS_DM");
    range_endpoint!(midprice, "MIDPRICE");
    range_endpoint!(
        /// Average true range.
        atr, "ATR"
    );
    range_endpoint!(natr, "NATR");

    price_endpoint!(
        /// Volume-weighted average price; intraday intervals only.
        vwap, "VWAP"
    );
    price_endpoint!(bop, "BOP");
    price_endpoint!(trange, "TRANGE");
    price_endpoint!(
        /// Chaikin accumulation/distribution line.
        ad, "AD"
    );
    price_endpoint!(
        /// On-balance volume.
        obv, "OBV"
    );

    ht_endpoint!(ht_trendline, "HT_TRENDLINE");
    ht_endpoint!(ht_sine, "HT_SINE");
    ht_endpoint!(ht_trendmode, "HT_TRENDMODE");
    ht_endpoint!(ht_dcperiod, "HT_DCPERIOD");
    ht_endpoint!(ht_dcphase, "HT_DCPHASE");
    ht_endpoint!(ht_phasor, "HT_PHASOR");

    /// MESA adaptive moving average.
    pub async fn mama(
        &self,
        symbol: &str,
        interval: Interval,
        series_type: SeriesType,
        month: Option<&str>,
        fastlimit: Option<f64>,
        slowlimit: Option<f64>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "MAMA",
            ApiParams::new()
                .push("symbol", symbol)
                .push("interval", interval)
                .push("series_type", series_type)
                .push_opt("month", month)
                .push_opt("fastlimit", fastlimit)
                .push_opt("slowlimit", slowlimit),
        )
        .await
    }

    /// Moving average convergence/divergence.
    #[allow(clippy::too_many_arguments)]
    pub async fn macd(
        &self,
        symbol: &str,
        interval: Interval,
        series_type: SeriesType,
        month: Option<&str>,
        fastperiod: Option<u32>,
        slowperiod: Option<u32>,
        signalperiod: Option<u32>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "MACD",
            ApiParams::new()
                .push("symbol", symbol)
                .push("interval", interval)
                .push("series_type", series_type)
                .push_opt("month", month)
                .push_opt("fastperiod", fastperiod)
                .push_opt("slowperiod", slowperiod)
                .push_opt("signalperiod", signalperiod),
        )
        .await
    }

    /// MACD with controllable moving-average types (`matype` 0 through 8).
    #[allow(clippy::too_many_arguments)]
    pub async fn macdext(
        &self,
        symbol: &str,
        interval: Interval,
        series_type: SeriesType,
        month: Option<&str>,
        fastperiod: Option<u32>,
        slowperiod: Option<u32>,
        signalperiod: Option<u32>,
        fastmatype: Option<u32>,
        slowmatype: Option<u32>,
        signalmatype: Option<u32>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "MACDEXT",
            ApiParams::new()
                .push("symbol", symbol)
                .push("interval", interval)
                .push("series_type", series_type)
                .push_opt("month", month)
                .push_opt("fastperiod", fastperiod)
                .push_opt("slowperiod", slowperiod)
                .push_opt("signalperiod", signalperiod)
                .push_opt("fastmatype", fastmatype)
                .push_opt("slowmatype", slowmatype)
                .push_opt("signalmatype", signalmatype),
        )
        .await
    }

    /// Slow stochastic oscillator.
    #[allow(clippy::too_many_arguments)]
    pub async fn stoch(
        &self,
        symbol: &str,
        interval: Interval,
        month: Option<&str>,
        fastkperiod: Option<u32>,
        slowkperiod: Option<u32>,
        slowdperiod: Option<u32>,
        slowkmatype: Option<u32>,
        slowdmatype: Option<u32>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "STOCH",
            ApiParams::new()
                .push("symbol", symbol)
                .push("interval", interval)
                .push_opt("month", month)
                .push_opt("fastkperiod", fastkperiod)
                .push_opt("slowkperiod", slowkperiod)
                .push_opt("slowdperiod", slowdperiod)
                .push_opt("slowkmatype", slowkmatype)
                .push_opt("slowdmatype", slowdmatype),
        )
        .await
    }

    /// Fast stochastic oscillator.
    pub async fn stochf(
        &self,
        symbol: &str,
        interval: Interval,
        month: Option<&str>,
        fastkperiod: Option<u32>,
        fastdperiod: Option<u32>,
        fastdmatype: Option<u32>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "STOCHF",
            ApiParams::new()
                .push("symbol", symbol)
                .push("interval", interval)
                .push_opt("month", month)
                .push_opt("fastkperiod", fastkperiod)
                .push_opt("fastdperiod", fastdperiod)
                .push_opt("fastdmatype", fastdmatype),
        )
        .await
    }

    /// Stochastic RSI.
    #[allow(clippy::too_many_arguments)]
    pub async fn stochrsi(
        &self,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        series_type: SeriesType,
        month: Option<&str>,
        fastkperiod: Option<u32>,
        fastdperiod: Option<u32>,
        fastdmatype: Option<u32>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "STOCHRSI",
            ApiParams::new()
                .push("symbol", symbol)
                .push("interval", interval)
                .push("time_period", time_period)
                .push("series_type", series_type)
                .push_opt("month", month)
                .push_opt("fastkperiod", fastkperiod)
                .push_opt("fastdperiod", fastdperiod)
                .push_opt("fastdmatype", fastdmatype),
        )
        .await
    }

    /// Absolute price oscillator.
    #[allow(clippy::too_many_arguments)]
    pub async fn apo(
        &self,
        symbol: &str,
        interval: Interval,
        series_type: SeriesType,
        month: Option<&str>,
        fastperiod: Option<u32>,
        slowperiod: Option<u32>,
        matype: Option<u32>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "APO",
            ApiParams::new()
                .push("symbol", symbol)
                .push("interval", interval)
                .push("series_type", series_type)
                .push_opt("month", month)
                .push_opt("fastperiod", fastperiod)
                .push_opt("slowperiod", slowperiod)
                .push_opt("matype", matype),
        )
        .await
    }

    /// Percentage price oscillator.
    #[allow(clippy::too_many_arguments)]
    pub async fn ppo(
        &self,
        symbol: &str,
        interval: Interval,
        series_type: SeriesType,
        month: Option<&str>,
        fastperiod: Option<u32>,
        slowperiod: Option<u32>,
        matype: Option<u32>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "PPO",
            ApiParams::new()
                .push("symbol", symbol)
                .push("interval", interval)
                .push("series_type", series_type)
                .push_opt("month", month)
                .push_opt("fastperiod", fastperiod)
                .push_opt("slowperiod", slowperiod)
                .push_opt("matype", matype),
        )
        .await
    }

    /// Ultimate oscillator over three time periods.
    pub async fn ultosc(
        &self,
        symbol: &str,
        interval: Interval,
        month: Option<&str>,
        timeperiod1: Option<u32>,
        timeperiod2: Option<u32>,
        timeperiod3: Option<u32>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "ULTOSC",
            ApiParams::new()
                .push("symbol", symbol)
                .push("interval", interval)
                .push_opt("month", month)
                .push_opt("timeperiod1", timeperiod1)
                .push_opt("timeperiod2", timeperiod2)
                .push_opt("timeperiod3", timeperiod3),
        )
        .await
    }

    /// Bollinger bands.
    #[allow(clippy::too_many_arguments)]
    pub async fn bbands(
        &self,
        symbol: &str,
        interval: Interval,
        time_period: u32,
        series_type: SeriesType,
        month: Option<&str>,
        nbdevup: Option<u32>,
        nbdevdn: Option<u32>,
        matype: Option<u32>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "BBANDS",
            ApiParams::new()
                .push("symbol", symbol)
                .push("interval", interval)
                .push("time_period", time_period)
                .push("series_type", series_type)
                .push_opt("month", month)
                .push_opt("nbdevup", nbdevup)
                .push_opt("nbdevdn", nbdevdn)
                .push_opt("matype", matype),
        )
        .await
    }

    /// Parabolic SAR.
    pub async fn sar(
        &self,
        symbol: &str,
        interval: Interval,
        month: Option<&str>,
        acceleration: Option<f64>,
        maximum: Option<f64>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "SAR",
            ApiParams::new()
                .push("symbol", symbol)
                .push("interval", interval)
                .push_opt("month", month)
                .push_opt("acceleration", acceleration)
                .push_opt("maximum", maximum),
        )
        .await
    }

    /// Chaikin accumulation/distribution oscillator.
    pub async fn adosc(
        &self,
        symbol: &str,
        interval: Interval,
        month: Option<&str>,
        fastperiod: Option<u32>,
        slowperiod: Option<u32>,
    ) -> Result<Option<Value>, AvError> {
        self.send_request(
            "ADOSC",
            ApiParams::new()
                .push("symbol", symbol)
                .push("interval", interval)
                .push_opt("month", month)
                .push_opt("fastperiod", fastperiod)
                .push_opt("slowperiod", slowperiod),
        )
        .await
    }
}
