mod date_range;
pub use date_range::{DATE_FORMAT, DateRange, Days, today};

mod metric;
pub use metric::{DetailLevel, MetricKind, ParseMetricError};

mod records;
pub use records::{IntradaySample, RestingHeartRate, SleepRecord};

mod table;
pub use table::Table;
