/// End-to-end property tests for the scaler/formatter.
///
/// The unit tests in `model/size.rs` pin individual outputs. These tests
/// sweep ranges of inputs and check the relationships that must hold for
/// *every* byte count: plain output below one unit, monotonic rendering
/// within a unit, precision clamping, and bounded-buffer agreement.
use fmb_core::model::{format_size, format_size_into, FormatOptions, FormattedSize, MIN_BUFFER_LEN, UNITS};
use fmb_core::Base;
use std::thread;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Every precision/base combination, including out-of-range precisions.
fn all_options() -> Vec<FormatOptions> {
    let mut opts = Vec::new();
    for precision in [-3, 0, 1, 2, 3, 4, 99] {
        for base in [1024, 1000] {
            opts.push(FormatOptions::new(precision, base, ""));
        }
    }
    opts
}

/// The rendered value in thousandths of a unit, for ordering comparisons.
fn thousandths(size: &FormattedSize) -> u128 {
    let scale = 10u128.pow(3 - u32::from(size.digits()));
    u128::from(size.whole()) * 1_000 + u128::from(size.fraction()) * scale
}

/// Byte counts that straddle every unit boundary of both bases.
fn boundary_samples() -> Vec<u64> {
    let mut samples = vec![0, 1, 2, 999, 1000, 1001, 1023, 1024, 1025, u64::MAX - 1, u64::MAX];
    for base in [1000u64, 1024] {
        let mut step = base;
        while let Some(next) = step.checked_mul(base) {
            samples.extend([step - 1, step, step + 1, step + step / 2]);
            step = next;
        }
        samples.extend([step - 1, step, step + 1]);
    }
    samples
}

// ── Properties ───────────────────────────────────────────────────────────────

/// Anything smaller than the base is printed as a bare integer.
#[test]
fn below_base_is_plain_integer() {
    for opts in all_options() {
        let base = opts.base().divisor();
        for bytes in (0..base).step_by(7).chain([base - 1]) {
            assert_eq!(format_size(bytes, &opts), bytes.to_string(), "{opts:?}");
        }
    }
}

#[test]
fn zero_is_always_zero() {
    for opts in all_options() {
        assert_eq!(format_size(0, &opts.with_separator(" ")), "0");
    }
}

/// Within a single unit, a larger byte count never renders smaller.
#[test]
fn rendering_is_monotonic_within_a_unit() {
    for opts in all_options() {
        let mut previous: Option<FormattedSize> = None;
        for bytes in (0..4_000_000u64).step_by(997) {
            let size = FormattedSize::new(bytes, &opts);
            if let Some(prev) = previous {
                if prev.unit_index() == size.unit_index() {
                    assert!(
                        thousandths(&prev) <= thousandths(&size),
                        "{bytes} rendered below its predecessor with {opts:?}"
                    );
                }
            }
            previous = Some(size);
        }
    }
}

#[test]
fn precision_above_maximum_matches_maximum() {
    let clamped = FormatOptions::new(3, 1024, "");
    let huge = FormatOptions::new(99, 1024, "");
    for bytes in boundary_samples() {
        assert_eq!(format_size(bytes, &huge), format_size(bytes, &clamped));
    }
}

#[test]
fn negative_precision_matches_zero() {
    let zero = FormatOptions::new(0, 1000, "");
    let negative = FormatOptions::new(i64::MIN, 1000, "");
    for bytes in boundary_samples() {
        assert_eq!(format_size(bytes, &negative), format_size(bytes, &zero));
    }
}

/// The rendered fraction never ends in a zero digit.
#[test]
fn fractions_are_trimmed() {
    for opts in all_options() {
        for bytes in boundary_samples() {
            let size = FormattedSize::new(bytes, &opts);
            if size.digits() > 0 {
                assert_ne!(size.fraction() % 10, 0, "{bytes} with {opts:?}");
            }
            assert!(size.digits() <= opts.precision());
        }
    }
}

#[test]
fn unit_never_exceeds_exabytes() {
    for opts in all_options() {
        for bytes in boundary_samples() {
            let rendered = format_size(bytes, &opts);
            let unit = FormattedSize::new(bytes, &opts).unit();
            assert!(UNITS.contains(&unit));
            assert!(rendered.ends_with(unit));
        }
    }
}

#[test]
fn decimal_and_binary_differ_only_by_base() {
    let decimal = FormatOptions::default().with_precision(0).with_base(Base::Decimal);
    let bogus_base = FormatOptions::new(0, 4096, "");
    assert_eq!(format_size(1000, &decimal), "1KB");
    assert_eq!(format_size(1000, &bogus_base), "1000");
    assert_eq!(format_size(1024, &bogus_base), "1KB");
}

/// A `MIN_BUFFER_LEN` buffer agrees with the allocating formatter.
#[test]
fn bounded_buffer_matches_owned_string() {
    for opts in all_options() {
        let opts = opts.with_separator(" ");
        for bytes in boundary_samples() {
            let mut buf = [0u8; MIN_BUFFER_LEN];
            assert_eq!(format_size_into(bytes, &opts, &mut buf), format_size(bytes, &opts));
        }
    }
}

#[test]
fn bounded_buffer_is_always_a_prefix() {
    let opts = FormatOptions::new(3, 1024, " ");
    let full = format_size(123_456_789, &opts);
    for len in 0..=full.len() {
        let mut buf = vec![0u8; len];
        let written = format_size_into(123_456_789, &opts, &mut buf);
        assert_eq!(written, &full[..len]);
    }
}

/// The formatter shares no mutable state, so concurrent calls agree with
/// sequential ones.
#[test]
fn concurrent_calls_are_independent() {
    let opts = FormatOptions::new(2, 1024, " ");
    let expected: Vec<String> = boundary_samples()
        .iter()
        .map(|&b| format_size(b, &opts))
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let opts = opts.clone();
            thread::spawn(move || {
                boundary_samples()
                    .iter()
                    .map(|&b| format_size(b, &opts))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
