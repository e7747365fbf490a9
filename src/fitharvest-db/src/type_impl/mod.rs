pub(crate) mod resting_heart_rate;
pub(crate) mod series;
pub(crate) mod sleep;
