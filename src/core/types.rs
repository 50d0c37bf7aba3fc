//! Typed request parameters shared across endpoint families.

use std::fmt;

/// Candle interval accepted by the intraday and indicator endpoints.
///
/// The intraday series endpoints only accept the minute-based variants;
/// the technical indicators additionally accept `Daily`, `Weekly` and
/// `Monthly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interval {
    Min1,
    Min5,
    Min15,
    Min30,
    Min60,
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min1 => "1min",
            Self::Min5 => "5min",
            Self::Min15 => "15min",
            Self::Min30 => "30min",
            Self::Min60 => "60min",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How much history a series endpoint returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputSize {
    /// The latest 100 data points.
    Compact,
    /// The full history.
    Full,
}

impl OutputSize {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for OutputSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price series a technical indicator is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesType {
    Close,
    Open,
    High,
    Low,
}

impl SeriesType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Open => "open",
            Self::High => "high",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort order for news-sentiment queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsSort {
    Latest,
    Earliest,
    Relevance,
}

impl NewsSort {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "LATEST",
            Self::Earliest => "EARLIEST",
            Self::Relevance => "RELEVANCE",
        }
    }
}

impl fmt::Display for NewsSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// News-sentiment topic filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsTopic {
    Blockchain,
    Earnings,
    Ipo,
    MergersAndAcquisitions,
    FinancialMarkets,
    EconomyFiscal,
    EconomyMonetary,
    EconomyMacro,
    EnergyTransportation,
    Finance,
    LifeSciences,
    Manufacturing,
    RealEstate,
    RetailWholesale,
    Technology,
}

impl NewsTopic {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blockchain => "blockchain",
            Self::Earnings => "earnings",
            Self::Ipo => "ipo",
            Self::MergersAndAcquisitions => "mergers_and_acquisitions",
            Self::FinancialMarkets => "financial_markets",
            Self::EconomyFiscal => "economy_fiscal",
            Self::EconomyMonetary => "economy_monetary",
            Self::EconomyMacro => "economy_macro",
            Self::EnergyTransportation => "energy_transportation",
            Self::Finance => "finance",
            Self::LifeSciences => "life_sciences",
            Self::Manufacturing => "manufacturing",
            Self::RealEstate => "real_estate",
            Self::RetailWholesale => "retail_wholesale",
            Self::Technology => "technology",
        }
    }
}

impl fmt::Display for NewsTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
