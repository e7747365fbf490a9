//! Turns per-day API responses into tables.
//!
//! Every assembler walks its dates in order, one retried call per date, and
//! folds the rows of each day onto the table built so far. Nothing is sorted
//! or de-duplicated on the way.

use indicatif::{ProgressBar, ProgressStyle};

mod resting_hr;
pub use resting_hr::RestingHeartRateQuery;

mod series;
pub use series::SeriesAssembler;

mod sleep;
pub use sleep::SleepAssembler;

fn day_progress(enabled: bool, label: &str, days: usize) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(days as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{prefix:>18} [{wide_bar:.cyan/dim}] {pos}/{len} days ({elapsed}, {eta} remaining)",
    ) {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb.set_prefix(label.to_string());
    pb
}
