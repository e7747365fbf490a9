#[macro_use]
extern crate log;

pub mod api;
pub use api::{FitbitApi, FitbitClient};

mod error;
pub use error::FitbitError;

pub mod retry;
pub use retry::{NoWait, RetryPolicy, RetryingFetcher, TokioWait, WaitStrategy};

pub mod assemble;
pub use assemble::{RestingHeartRateQuery, SeriesAssembler, SleepAssembler};

mod harvester;
pub use harvester::{HarvestReport, Harvester, Target};

#[cfg(test)]
pub(crate) mod testing;
