//! Total size of a set of parts.
//!
//! Every part is converted to megabytes and summed.  The sum is shown
//! in megabytes below [`MB_PER_GB`] and in gigabytes from there on,
//! always with two decimals.

use crate::types::Part;

/// Megabytes per gigabyte.
pub const MB_PER_GB: f64 = 1024.0;

/// Sum of all part sizes, in megabytes.
#[must_use]
pub fn total_megabytes(parts: &[Part]) -> f64 {
    parts.iter().map(Part::megabytes).sum()
}

/// Format a megabyte total for display, e.g. `"512.00 MB"` or `"1.99 GB"`.
///
/// The unit switches to GB once `megabytes` reaches 1024.
#[must_use]
pub fn format_total_size(megabytes: f64) -> String {
    if megabytes >= MB_PER_GB {
        format!("{} GB", to_fixed_2(megabytes / MB_PER_GB))
    } else {
        format!("{} MB", to_fixed_2(megabytes))
    }
}

/// Total size of `parts`, formatted for display.
#[must_use]
pub fn calculate_total_size(parts: &[Part]) -> String {
    format_total_size(total_megabytes(parts))
}

/// Format with exactly two decimals, resolving exact ties away from zero.
///
/// `format!("{:.2}")` rounds exact ties to even, which disagrees with
/// the fixed-point formatting browsers use (`0.125` must read `0.13`).
/// A binary float sits exactly halfway between two hundredths only when
/// it is an odd multiple of 1/8, so those values are rounded by hand.
#[allow(clippy::float_cmp)] // both comparisons are exact by construction
fn to_fixed_2(value: f64) -> String {
    let eighths = value * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0;
    let value = if is_tie {
        (value * 100.0).round() / 100.0
    } else {
        value
    };
    // Avoid printing "-0.00".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PartId, SizeUnit};

    fn part(size: f64, unit: SizeUnit) -> Part {
        Part {
            id: PartId::random(),
            name: String::from("p"),
            size,
            unit,
            download_url: String::new(),
        }
    }

    #[test]
    fn empty_is_zero_megabytes() {
        assert_eq!(calculate_total_size(&[]), "0.00 MB");
    }

    #[test]
    fn mixed_units_switch_to_gigabytes() {
        // 1.5 * 1024 + 500 = 2036 MB = 1.98828... GB
        let parts = [part(1.5, SizeUnit::Gb), part(500.0, SizeUnit::Mb)];
        assert!((total_megabytes(&parts) - 2036.0).abs() < 1e-9);
        assert_eq!(calculate_total_size(&parts), "1.99 GB");
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(format_total_size(1024.0), "1.00 GB");
        assert_eq!(format_total_size(1023.0), "1023.00 MB");
        // Just below the threshold the MB figure itself rounds up.
        assert_eq!(format_total_size(1023.999), "1024.00 MB");
    }

    #[test]
    fn exact_ties_round_up() {
        assert_eq!(format_total_size(0.125), "0.13 MB");
        assert_eq!(format_total_size(0.375), "0.38 MB");
        assert_eq!(format_total_size(2.625), "2.63 MB");
        // 1.005 is stored slightly below the tie and rounds down.
        assert_eq!(format_total_size(1.005), "1.00 MB");
        // 1024 * 1.125 MB is exactly 1.125 GB.
        assert_eq!(format_total_size(1152.0), "1.13 GB");
    }

    #[test]
    fn non_ties_are_unaffected() {
        assert_eq!(format_total_size(0.25), "0.25 MB");
        assert_eq!(format_total_size(10.0), "10.00 MB");
        assert_eq!(format_total_size(3.0 * 1024.0), "3.00 GB");
    }

    #[test]
    fn total_is_invariant_under_reordering() {
        let parts = vec![
            part(1.5, SizeUnit::Gb),
            part(500.0, SizeUnit::Mb),
            part(0.25, SizeUnit::Gb),
            part(12.5, SizeUnit::Mb),
        ];
        let expected = calculate_total_size(&parts);

        let mut reversed = parts.clone();
        reversed.reverse();
        assert_eq!(calculate_total_size(&reversed), expected);

        let mut rotated = parts;
        rotated.rotate_left(1);
        assert_eq!(calculate_total_size(&rotated), expected);
    }

    #[test]
    fn total_is_invariant_under_splitting_a_part() {
        let whole = [part(3.0, SizeUnit::Gb), part(100.0, SizeUnit::Mb)];
        let split = [
            part(2.0, SizeUnit::Gb),
            part(1024.0, SizeUnit::Mb),
            part(100.0, SizeUnit::Mb),
        ];
        assert_eq!(calculate_total_size(&whole), calculate_total_size(&split));

        let small = [part(750.0, SizeUnit::Mb)];
        let small_split = [part(250.0, SizeUnit::Mb), part(500.0, SizeUnit::Mb)];
        assert_eq!(
            calculate_total_size(&small),
            calculate_total_size(&small_split)
        );
    }
}
