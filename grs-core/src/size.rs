//! Human-readable repository sizes.
//!
//! GitHub reports repository sizes in kilobytes. The unit tier is chosen with
//! decimal thresholds (1000 and 1,000,000) while the value is scaled with
//! binary divisors (1024 and 1024²). Output depends on this exact mix.

/// Upper bound (exclusive) of the KB tier.
const KB_TIER_LIMIT: u64 = 1_000;

/// Upper bound (exclusive) of the MB tier.
const MB_TIER_LIMIT: u64 = 1_000_000;

const KB_PER_MB: f64 = 1024.0;
const KB_PER_GB: f64 = 1024.0 * 1024.0;

/// Format a size given in kilobytes as `"<n> KB"`, `"<x.xx> MB"` or `"<x.xx> GB"`.
pub fn format_size(size_kb: u64) -> String {
  if size_kb < KB_TIER_LIMIT {
    format!("{size_kb} KB")
  } else if size_kb < MB_TIER_LIMIT {
    format!("{:.2} MB", size_kb as f64 / KB_PER_MB)
  } else {
    format!("{:.2} GB", size_kb as f64 / KB_PER_GB)
  }
}
