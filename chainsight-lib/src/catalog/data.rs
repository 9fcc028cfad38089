use super::{
    ConfusionMatrix, Correlation, DelayAverage, DelayBin, DisruptionCount, FeatureImportance, Finding, Highlight, Impact, Kpis,
    ModelBenchmark, MonthlyVolume,
};

pub const KPIS: Kpis = Kpis {
    total_shipments: 10_000,
    origin_cities: 6,
    delayed_shipments: 1_247,
    delayed_rate_pct: 12.5,
    avg_delay_days: 0.95,
    max_delay_days: 20,
    best_roc_auc: 0.941,
};

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight::new("Dataset size", "10,000", "Shipment records"),
    Highlight::new("Features used", "16", "Non-leaky predictors"),
    Highlight::new("Delay rate", "12.5%", "Class imbalance ~1:7"),
    Highlight::new("Max delay", "20 days", "Days observed"),
    Highlight::new("Cost correlation", "~0.01", "No effect on delay"),
    Highlight::new("Routes covered", "5", "Pacific, Suez, Atlantic and more"),
];

pub const ROUTE_DELAYS: &[DelayAverage] = &[
    DelayAverage::new("Suez", 1.41),
    DelayAverage::new("Commodity", 1.22),
    DelayAverage::new("Pacific", 1.05),
    DelayAverage::new("Atlantic", 0.92),
    DelayAverage::new("Intra-Asia", 0.72),
];

pub const PRODUCT_DELAYS: &[DelayAverage] = &[
    DelayAverage::new("Perishables", 1.28),
    DelayAverage::new("Semiconductors", 1.14),
    DelayAverage::new("Consumer Electronics", 1.07),
    DelayAverage::new("Pharmaceuticals", 0.98),
    DelayAverage::new("Machinery", 0.91),
    DelayAverage::new("Textiles", 0.85),
    DelayAverage::new("Raw Materials", 0.78),
];

pub const ORIGIN_DELAYS: &[DelayAverage] = &[
    DelayAverage::new("Santos, BR", 1.30),
    DelayAverage::new("Mumbai, IN", 1.22),
    DelayAverage::new("Shenzhen, CN", 1.05),
    DelayAverage::new("Shanghai, CN", 0.98),
    DelayAverage::new("Tokyo, JP", 0.88),
    DelayAverage::new("Hamburg, DE", 0.72),
];

pub const MODE_DELAYS: &[DelayAverage] = &[DelayAverage::new("Sea", 1.12), DelayAverage::new("Air", 0.62)];

pub const DESTINATIONS: &[&str] = &[
    "Los Angeles, US",
    "Rotterdam, NL",
    "Singapore, SG",
    "New York, US",
    "Felixstowe, UK",
    "Shanghai, CN",
];

pub const MONTHLY_VOLUME: &[MonthlyVolume] = &[
    MonthlyVolume::new("Jan", 780, 11),
    MonthlyVolume::new("Feb", 720, 8),
    MonthlyVolume::new("Mar", 850, 13),
    MonthlyVolume::new("Apr", 810, 10),
    MonthlyVolume::new("May", 760, 9),
    MonthlyVolume::new("Jun", 900, 14),
    MonthlyVolume::new("Jul", 870, 12),
    MonthlyVolume::new("Aug", 830, 11),
    MonthlyVolume::new("Sep", 780, 9),
    MonthlyVolume::new("Oct", 910, 15),
    MonthlyVolume::new("Nov", 840, 11),
    MonthlyVolume::new("Dec", 760, 9),
];

pub const MODEL_BENCHMARKS: &[ModelBenchmark] = &[
    ModelBenchmark::new("XGBoost", 92.4, 0.941),
    ModelBenchmark::new("Random Forest", 89.8, 0.912),
    ModelBenchmark::new("SVM", 87.6, 0.889),
    ModelBenchmark::new("Logistic Regression", 84.3, 0.861),
    ModelBenchmark::new("KNN", 82.1, 0.838),
];

/// Test-set outcomes of the best model; on-time is the positive class.
pub const CONFUSION_MATRIX: ConfusionMatrix = ConfusionMatrix::new("XGBoost", 1_720, 78, 124, 78);

pub const FEATURE_IMPORTANCE: &[FeatureImportance] = &[
    FeatureImportance::new("Sched_Lead_Time", 0.31),
    FeatureImportance::new("Base_Lead_Time", 0.22),
    FeatureImportance::new("Route_Type", 0.14),
    FeatureImportance::new("Origin_City", 0.09),
    FeatureImportance::new("Weather_Index", 0.07),
    FeatureImportance::new("Geopolitical_Idx", 0.06),
    FeatureImportance::new("Transport_Mode", 0.05),
    FeatureImportance::new("Product_Cat", 0.04),
    FeatureImportance::new("Shipping_Cost", 0.01),
];

pub const DELAY_HISTOGRAM: &[DelayBin] = &[
    DelayBin::new(0, 8_753),
    DelayBin::new(1, 362),
    DelayBin::new(2, 185),
    DelayBin::new(3, 148),
    DelayBin::new(4, 112),
    DelayBin::new(5, 89),
    DelayBin::new(6, 72),
    DelayBin::new(7, 58),
    DelayBin::new(8, 45),
    DelayBin::new(9, 38),
    DelayBin::new(10, 30),
    DelayBin::new(11, 24),
    DelayBin::new(12, 19),
    DelayBin::new(13, 14),
    DelayBin::new(14, 11),
    DelayBin::new(15, 40),
];

pub const CORRELATIONS: &[Correlation] = &[
    Correlation::new("Actual_Lead_Time", 0.82),
    Correlation::new("Sched_Lead_Time", 0.43),
    Correlation::new("Base_Lead_Time", 0.38),
    Correlation::new("Weather_Severity", 0.12),
    Correlation::new("Geo_Risk_Index", 0.08),
    Correlation::new("Inflation_Rate", 0.03),
    Correlation::new("Shipping_Cost", 0.01),
];

pub const DISRUPTIONS: &[DisruptionCount] = &[
    DisruptionCount::new("Port Congestion", 820),
    DisruptionCount::new("Geopolitical Conflict", 312),
    DisruptionCount::new("Extreme Weather", 115),
    DisruptionCount::new("No Event", 8_753),
];

pub const FINDINGS: &[Finding] = &[
    Finding::new("Route Suez has highest avg delay", "Route_Type", Impact::High),
    Finding::new("Sea transport ~1.8x more delay than Air", "Transportation_Mode", Impact::High),
    Finding::new("Perishables face highest category risk", "Product_Category", Impact::High),
    Finding::new("Santos, BR origin is highest risk city", "Origin_City", Impact::Medium),
    Finding::new("Shipping cost has near-zero correlation", "Shipping_Cost_USD", Impact::Low),
    Finding::new("Weather severity weakly correlates", "Weather_Severity", Impact::Low),
    Finding::new("Port Congestion is most common event", "Disruption_Event", Impact::High),
    Finding::new("Class imbalance: 87.5% vs 12.5%", "Delivery_Status", Impact::Note),
];
