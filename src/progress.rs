pub use indicatif::ProgressBar;
use indicatif::ProgressStyle;

const TEMPLATE: &str = "{wide_bar} {pos}/{len} digests [{elapsed} elapsed; {eta} left]";

/// Progress bar ticked once per (sequence, enzyme) pair.
pub fn default(size: usize) -> ProgressBar {
    let progress = ProgressBar::new(size as u64);
    progress.set_draw_delta(size as u64 / 1000);
    progress.set_style(ProgressStyle::default_bar().template(TEMPLATE));

    progress
}

pub fn hidden() -> ProgressBar {
    ProgressBar::hidden()
}
