//! Hard-coded trending catalog backing the trending view. Not a live feed.

#[derive(Debug, Clone, Copy)]
pub struct TrendingStock {
    pub symbol: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: &'static str,
    pub category: &'static str,
}

pub const TRENDING: [TrendingStock; 8] = [
    TrendingStock {
        symbol: "AAPL",
        name: "Apple Inc.",
        price: 193.75,
        change: 2.34,
        change_percent: 1.22,
        volume: 45_230_000,
        market_cap: "3.01T",
        category: "technology",
    },
    TrendingStock {
        symbol: "MSFT",
        name: "Microsoft Corporation",
        price: 378.85,
        change: -1.12,
        change_percent: -0.29,
        volume: 23_450_000,
        market_cap: "2.81T",
        category: "technology",
    },
    TrendingStock {
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        price: 140.23,
        change: 3.45,
        change_percent: 2.52,
        volume: 34_120_000,
        market_cap: "1.78T",
        category: "technology",
    },
    TrendingStock {
        symbol: "TSLA",
        name: "Tesla, Inc.",
        price: 248.50,
        change: 12.75,
        change_percent: 5.41,
        volume: 89_340_000,
        market_cap: "792B",
        category: "automotive",
    },
    TrendingStock {
        symbol: "NVDA",
        name: "NVIDIA Corporation",
        price: 875.30,
        change: 18.90,
        change_percent: 2.21,
        volume: 67_890_000,
        market_cap: "2.16T",
        category: "technology",
    },
    TrendingStock {
        symbol: "JPM",
        name: "JPMorgan Chase & Co.",
        price: 168.45,
        change: -0.85,
        change_percent: -0.50,
        volume: 12_340_000,
        market_cap: "495B",
        category: "finance",
    },
    TrendingStock {
        symbol: "JNJ",
        name: "Johnson & Johnson",
        price: 162.30,
        change: 1.20,
        change_percent: 0.74,
        volume: 8_760_000,
        market_cap: "428B",
        category: "healthcare",
    },
    TrendingStock {
        symbol: "V",
        name: "Visa Inc.",
        price: 267.89,
        change: 3.21,
        change_percent: 1.21,
        volume: 7_890_000,
        market_cap: "570B",
        category: "finance",
    },
];

/// Catalog entries for a category, or the whole catalog for "all".
pub fn by_category(category: &str) -> Vec<TrendingStock> {
    TRENDING
        .iter()
        .filter(|s| category == "all" || s.category == category)
        .copied()
        .collect()
}

pub fn find(symbol: &str) -> Option<TrendingStock> {
    TRENDING
        .iter()
        .find(|s| s.symbol.eq_ignore_ascii_case(symbol))
        .copied()
}
