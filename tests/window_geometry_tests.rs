//! Integration tests for window geometry.

use rand::{rngs::StdRng, Rng, SeedableRng};
use windowdims::{
    broadcast_size, output_size_2d, output_size_2d_verbose, output_size_3d, output_size_nd,
    windowed_output_size, windowed_output_size_verbose, AxisPadding, AxisSpec, Padding,
    WindowError,
};

const CASES: usize = 500;

fn random_axis(rng: &mut StdRng) -> AxisSpec {
    let window = rng.gen_range(1..=9);
    let stride = rng.gen_range(1..=5);
    let input = rng.gen_range(0..=64);
    AxisSpec::new(input, window, stride)
}

fn ceil_div(a: i64, b: i64) -> i64 {
    (a + b - 1) / b
}

// Exact ceiling for any sign of `a`, with `b > 0`.
fn signed_ceil_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b > 0 {
        q + 1
    } else {
        q
    }
}

#[test]
fn test_unit_window_keeps_size() {
    for input in 0..100 {
        let result =
            windowed_output_size_verbose(AxisSpec::new(input, 1, 1), Padding::Same, None).unwrap();
        assert_eq!(result.output, input);
        assert_eq!((result.pad_before, result.pad_after), (0, 0));
    }
}

#[test]
fn test_same_stride_one_preserves_size() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..CASES {
        let mut axis = random_axis(&mut rng);
        axis.stride = 1;
        axis.input = axis.input.max(1);
        let result = windowed_output_size_verbose(axis, Padding::Same, None).unwrap();

        assert_eq!(result.output, axis.input);
        assert_eq!(result.total_padding(), axis.window - 1);
        let skew = result.pad_after - result.pad_before;
        assert!(skew == 0 || skew == 1);
    }
}

#[test]
fn test_same_output_is_ceil_of_input_over_stride() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..CASES {
        let axis = random_axis(&mut rng);
        let result = windowed_output_size_verbose(axis, Padding::Same, None).unwrap();
        assert_eq!(result.output, ceil_div(axis.input, axis.stride));

        let expected = ((result.output - 1) * axis.stride + axis.window - axis.input).max(0);
        assert_eq!(result.total_padding(), expected);
        assert_eq!(result.pad_before, expected / 2);
    }
}

#[test]
fn test_valid_padding_shrinks_output() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..CASES {
        let mut axis = random_axis(&mut rng);
        axis.input = axis.input.max(axis.window - 1);
        let result = windowed_output_size_verbose(axis, Padding::Valid, None).unwrap();

        assert_eq!(result.output, ceil_div(axis.input - axis.window + 1, axis.stride));
        assert_eq!(result.total_padding(), 0);
    }
}

#[test]
fn test_valid_padding_rejects_negative_output() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let window = rng.gen_range(1..=12);
        let stride = rng.gen_range(1..=5);
        let input = rng.gen_range(0..=12);
        let axis = AxisSpec::new(input, window, stride);
        let expected = signed_ceil_div(input - window + 1, stride);

        match windowed_output_size_verbose(axis, Padding::Valid, None) {
            Ok(result) => {
                assert!(expected >= 0, "{} accepted with output {}", axis, expected);
                assert_eq!(result.output, expected);
            }
            Err(WindowError::InvalidArgument(_)) => {
                assert!(expected < 0, "{} rejected with output {}", axis, expected);
            }
        }
    }

    for (input, window, stride) in [(1, 4, 2), (2, 7, 3)] {
        let axis = AxisSpec::new(input, window, stride);
        assert!(windowed_output_size_verbose(axis, Padding::Valid, None).is_err());
        assert!(output_size_2d(axis, axis, Padding::Valid).is_err());
        assert!(output_size_3d([input; 3], [window; 3], [stride; 3], Padding::Valid).is_err());
    }
}

#[test]
fn test_explicit_padding_passes_amounts_through() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..CASES {
        let window = rng.gen_range(1..=12);
        let stride = rng.gen_range(1..=5);
        let input = rng.gen_range(0..=12);
        let pads = AxisPadding::new(rng.gen_range(0..=4), rng.gen_range(0..=4));
        let axis = AxisSpec::new(input, window, stride);
        let expected = signed_ceil_div(input + pads.total() - window + 1, stride);

        match windowed_output_size_verbose(axis, Padding::Explicit, Some(pads)) {
            Ok(result) => {
                assert!(expected >= 0);
                assert_eq!(result.output, expected);
                assert_eq!((result.pad_before, result.pad_after), (pads.before, pads.after));
            }
            Err(_) => assert!(expected < 0, "{} with {:?} rejected", axis, pads),
        }
    }
}

#[test]
fn test_verbose_matches_compact() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..CASES {
        let rows = random_axis(&mut rng);
        let cols = random_axis(&mut rng);
        let verbose = output_size_2d_verbose(rows, cols, Padding::Same, None).unwrap();
        let compact = output_size_2d(rows, cols, Padding::Same).unwrap();
        assert_eq!(verbose.compact(), compact);

        let row = windowed_output_size_verbose(rows, Padding::Same, None).unwrap();
        let col = windowed_output_size_verbose(cols, Padding::Same, None).unwrap();
        assert_eq!(verbose.pad_top + verbose.pad_bottom, row.total_padding());
        assert_eq!(verbose.pad_left + verbose.pad_right, col.total_padding());
        assert!(verbose.pad_bottom >= verbose.pad_top);
        assert!(verbose.pad_right >= verbose.pad_left);
    }
}

#[test]
fn test_3d_matches_independent_axes() {
    let mut rng = StdRng::seed_from_u64(5);
    for padding in [Padding::Same, Padding::Valid] {
        for _ in 0..CASES {
            let axes: Vec<AxisSpec> = (0..3)
                .map(|_| {
                    let mut axis = random_axis(&mut rng);
                    axis.input = axis.input.max(axis.window);
                    axis
                })
                .collect();
            let input = [axes[0].input, axes[1].input, axes[2].input];
            let window = [axes[0].window, axes[1].window, axes[2].window];
            let strides = [axes[0].stride, axes[1].stride, axes[2].stride];

            let (output, pads) = output_size_3d(input, window, strides, padding).unwrap();
            for (i, axis) in axes.iter().enumerate() {
                let (expected_output, expected_pad) =
                    windowed_output_size(*axis, padding, None).unwrap();
                assert_eq!(output[i], expected_output);
                assert_eq!(pads[i], expected_pad);
            }
        }
    }
}

#[test]
fn test_broadcast_stays_inside_input() {
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..CASES {
        let axis = random_axis(&mut rng);
        let result = windowed_output_size_verbose(axis, Padding::Same, None).unwrap();

        for index in 0..result.output {
            let window =
                broadcast_size(index, axis.input, axis.window, axis.stride, result.pad_before);
            assert!(window.size >= 0);
            if !window.is_empty() {
                assert!(window.start >= 0);
                assert!(window.start + window.size <= axis.input);
            }

            // The forward pass reads these positions from the unpadded input.
            let first = index * axis.stride - result.pad_before;
            let inside = (first..first + axis.window)
                .filter(|&p| p >= 0 && p < axis.input)
                .count() as i64;
            assert_eq!(window.size, inside);
        }
    }
}

#[test]
fn test_broadcast_tiles_input_when_stride_equals_window() {
    for window in 1..6 {
        for blocks in 0..8 {
            let input = window * blocks;
            let result = windowed_output_size_verbose(
                AxisSpec::new(input, window, window),
                Padding::Valid,
                None,
            )
            .unwrap();
            assert_eq!(result.output, blocks);

            let mut next = 0;
            for index in 0..result.output {
                let b = broadcast_size(index, input, window, window, 0);
                assert_eq!(b.start, next);
                assert_eq!(b.size, window);
                next = b.start + b.size;
            }
            assert_eq!(next, input);
        }
    }
}

#[test]
fn test_concrete_scenarios() {
    let axis = AxisSpec::new(7, 3, 2);

    let same = windowed_output_size_verbose(axis, Padding::Same, None).unwrap();
    assert_eq!((same.output, same.pad_before, same.pad_after), (4, 1, 1));

    let valid = windowed_output_size_verbose(axis, Padding::Valid, None).unwrap();
    assert_eq!((valid.output, valid.pad_before, valid.pad_after), (3, 0, 0));
}

#[test]
fn test_zero_window_is_invalid_under_every_policy() {
    let axis = AxisSpec::new(7, 0, 1);
    for padding in [Padding::Valid, Padding::Same, Padding::Explicit] {
        let err = windowed_output_size_verbose(axis, padding, None).unwrap_err();
        assert!(matches!(err, WindowError::InvalidArgument(_)));
    }
    assert!(output_size_nd(&[7, 7], &[3, 0], &[1, 1], Padding::Same).is_err());
}

#[test]
fn test_padding_attr_round_trip() {
    let padding: Padding = "SAME".parse().unwrap();
    let (output, pad) = windowed_output_size(AxisSpec::new(5, 3, 1), padding, None).unwrap();
    assert_eq!((output, pad), (5, 1));
}
