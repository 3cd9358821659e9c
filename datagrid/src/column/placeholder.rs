//! Loading placeholder sizing.

use crate::config::{PlaceholderConfig, percent};
use crate::model::Value;

use super::CellContent;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Map a raw cell value to the integer the placeholder width is derived from.
///
/// Synthetic loading rows hold integers, which map to themselves. Other
/// values are hashed so a real row shown while loading still gets a stable width.
pub fn placeholder_seed(value: Option<&Value>) -> u64 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(b)) => u64::from(*b),
        Some(Value::Int(i)) => i.unsigned_abs(),
        Some(Value::Float(f)) if f.is_finite() => f.abs().trunc() as u64,
        Some(Value::Float(f)) => fnv1a(&f.to_bits().to_le_bytes()),
        Some(Value::Text(s)) => fnv1a(s.as_bytes()),
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET, |hash, b| {
        (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME)
    })
}

/// Width percentage of the placeholder bar for `value`.
///
/// Always within `[config.min_percent(), config.max_percent()]`. Never
/// panics, even for a config that fails [`PlaceholderConfig::validate`].
pub fn placeholder_width(value: Option<&Value>, config: &PlaceholderConfig) -> f64 {
    let seed = placeholder_seed(value);
    let step = seed
        .wrapping_mul(config.multiplier)
        .checked_rem(config.modulus)
        .unwrap_or(0);
    percent(step.saturating_add(config.floor), config.span())
}

/// Placeholder content for one cell.
pub fn placeholder_cell(value: Option<&Value>, config: &PlaceholderConfig) -> CellContent {
    CellContent::Placeholder {
        width_percent: placeholder_width(value, config),
        height: config.height,
    }
}
