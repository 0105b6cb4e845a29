mod models;

pub use models::{
    ChartData, CompanyInfo, CompanyList, ComparisonResult, ConfidenceInterval, CorrelationMatrix,
    CorrelationPair, PeriodWindow, Prediction, PredictionSummary, SeriesPoint, SeriesResponse,
    StockSummary, SymbolPerformance, TopMovers, Trend,
};
