//! Batch reducers
//!
//! Each reducer maps a non-empty [`ColorBatch`] to one [`Rgba`]. Calling a
//! reducer on an empty batch returns [`ColorMixError::EmptyBatch`].

use crate::{
    config::BlendMode,
    error::{ColorMixError, Result},
    types::{ColorBatch, Rgba},
    utils::NumericValidator,
};

/// Reduce `batch` with the given mode
///
/// # Errors
/// - Empty batch
/// - Non-finite intermediate value in `mix-saturate`
pub fn reduce(batch: &ColorBatch, mode: BlendMode) -> Result<Rgba> {
    match mode {
        BlendMode::Mix => mix(batch),
        BlendMode::Lowest => lowest(batch),
        BlendMode::Highest => highest(batch),
        BlendMode::MixSaturate => {
            let target = average_saturation(batch)?;
            mix_saturate(batch, target)
        },
    }
}

/// Per-channel mean, rounded half to even
///
/// # Errors
/// - Empty batch
pub fn mix(batch: &ColorBatch) -> Result<Rgba> {
    let mean = |values: &[u8]| {
        NumericValidator::mean_round_half_even(values).ok_or(ColorMixError::EmptyBatch)
    };

    Ok(Rgba::new(
        mean(batch.reds())?,
        mean(batch.greens())?,
        mean(batch.blues())?,
        mean(batch.alphas())?,
    ))
}

/// Per-channel minimum
///
/// # Errors
/// - Empty batch
pub fn lowest(batch: &ColorBatch) -> Result<Rgba> {
    let min = |values: &[u8]| values.iter().copied().min().ok_or(ColorMixError::EmptyBatch);

    Ok(Rgba::new(
        min(batch.reds())?,
        min(batch.greens())?,
        min(batch.blues())?,
        min(batch.alphas())?,
    ))
}

/// Per-channel maximum
///
/// # Errors
/// - Empty batch
pub fn highest(batch: &ColorBatch) -> Result<Rgba> {
    let max = |values: &[u8]| values.iter().copied().max().ok_or(ColorMixError::EmptyBatch);

    Ok(Rgba::new(
        max(batch.reds())?,
        max(batch.greens())?,
        max(batch.blues())?,
        max(batch.alphas())?,
    ))
}

/// Mean of the HSL saturation of every sample
///
/// # Errors
/// - Empty batch
pub fn average_saturation(batch: &ColorBatch) -> Result<f64> {
    if batch.is_empty() {
        return Err(ColorMixError::EmptyBatch);
    }

    let total: f64 = batch.iter().map(|color| color.saturation()).sum();
    Ok(total / batch.len() as f64)
}

/// Last sample with one channel moved so its saturation approaches `target`
///
/// When `target` is above the sample's saturation the maximum channel is
/// solved for; when below, the minimum channel. Achromatic samples and
/// samples already at `target` come back unchanged. Alpha is never touched.
///
/// # Errors
/// - Empty batch
/// - The selected root is not a finite number
pub fn mix_saturate(batch: &ColorBatch, target: f64) -> Result<Rgba> {
    let base = batch.last().ok_or(ColorMixError::EmptyBatch)?;
    let mut channels = base.rgb();

    let (index_max, index_min) = extreme_indices(channels);
    let cmax = channel_at(channels, index_max) / 255.0;
    let cmin = channel_at(channels, index_min) / 255.0;
    let current = base.saturation();
    let s = target;

    if cmax == cmin {
        tracing::debug!(color = %base, "achromatic base color left unchanged");
        return Ok(base);
    }

    let (index, root) = if s > current {
        let first = (2.0 * s - s * cmin + cmin) / (s + 1.0);
        let second = (-s * cmin - cmin) / (s - 1.0);
        (index_max, select_root(first, second))
    } else if s < current {
        let first = (2.0 * s - s * cmax - cmax) / (s - 1.0);
        let second = (cmax - s * cmax) / (s + 1.0);
        (index_min, select_root(first, second))
    } else {
        return Ok(base);
    };

    let channel = NumericValidator::unit_to_channel(root).map_err(|_| {
        ColorMixError::processing(format!(
            "saturation target {s} has no finite solution for base color {base}"
        ))
    })?;

    if let Some(slot) = channels.get_mut(index) {
        *slot = channel;
    }
    tracing::debug!(
        base = %base,
        target = s,
        current,
        channel_index = index,
        new_value = channel,
        "adjusted channel toward average saturation"
    );

    let [r, g, b] = channels;
    Ok(Rgba::new(r, g, b, base.a))
}

/// First root if it lies in `[0, 1]`, otherwise the second
fn select_root(first: f64, second: f64) -> f64 {
    if NumericValidator::in_unit_interval(first) {
        first
    } else {
        second
    }
}

/// Indices of the maximum and minimum channel, first occurrence on ties
fn extreme_indices(channels: [u8; 3]) -> (usize, usize) {
    let [first, ..] = channels;
    let (mut index_max, mut max) = (0, first);
    let (mut index_min, mut min) = (0, first);
    for (i, value) in channels.into_iter().enumerate().skip(1) {
        if value > max {
            (index_max, max) = (i, value);
        }
        if value < min {
            (index_min, min) = (i, value);
        }
    }
    (index_max, index_min)
}

fn channel_at(channels: [u8; 3], index: usize) -> f64 {
    channels.get(index).copied().map_or(0.0, f64::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(colors: &[Rgba]) -> ColorBatch {
        colors.iter().copied().collect()
    }

    #[test]
    fn test_single_sample_is_identity() {
        let color = Rgba::new(12, 34, 56, 78);
        let single = batch(&[color]);
        assert_eq!(mix(&single).unwrap(), color);
        assert_eq!(lowest(&single).unwrap(), color);
        assert_eq!(highest(&single).unwrap(), color);
    }

    #[test]
    fn test_mix_primaries() {
        let primaries = batch(&[
            Rgba::opaque(255, 0, 0),
            Rgba::opaque(0, 255, 0),
            Rgba::opaque(0, 0, 255),
        ]);
        assert_eq!(mix(&primaries).unwrap(), Rgba::opaque(85, 85, 85));
    }

    #[test]
    fn test_mix_rounds_ties_to_even() {
        let pair = batch(&[Rgba::new(0, 1, 2, 255), Rgba::new(1, 2, 3, 254)]);
        // 0.5 -> 0, 1.5 -> 2, 2.5 -> 2, 254.5 -> 254
        assert_eq!(mix(&pair).unwrap(), Rgba::new(0, 2, 2, 254));
    }

    #[test]
    fn test_lowest_and_highest() {
        let colors = batch(&[Rgba::new(10, 200, 30, 255), Rgba::new(40, 60, 50, 128)]);
        assert_eq!(lowest(&colors).unwrap(), Rgba::new(10, 60, 30, 128));
        assert_eq!(highest(&colors).unwrap(), Rgba::new(40, 200, 50, 255));
    }

    #[test]
    fn test_lowest_and_highest_are_monotonic() {
        let samples = [
            Rgba::new(120, 40, 200, 255),
            Rgba::new(90, 250, 10, 100),
            Rgba::new(200, 0, 128, 30),
            Rgba::new(5, 180, 255, 240),
        ];
        let mut growing = ColorBatch::new();
        let mut previous: Option<(Rgba, Rgba)> = None;
        for color in samples {
            growing.push(color);
            let low = lowest(&growing).unwrap();
            let high = highest(&growing).unwrap();
            if let Some((prev_low, prev_high)) = previous {
                assert!(low.r <= prev_low.r && low.g <= prev_low.g);
                assert!(low.b <= prev_low.b && low.a <= prev_low.a);
                assert!(high.r >= prev_high.r && high.g >= prev_high.g);
                assert!(high.b >= prev_high.b && high.a >= prev_high.a);
            }
            previous = Some((low, high));
        }
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        let empty = ColorBatch::new();
        for mode in BlendMode::ALL {
            assert!(matches!(reduce(&empty, mode), Err(ColorMixError::EmptyBatch)));
        }
        assert!(matches!(average_saturation(&empty), Err(ColorMixError::EmptyBatch)));
    }

    #[test]
    fn test_average_saturation() {
        let colors = batch(&[Rgba::opaque(255, 0, 0), Rgba::opaque(200, 100, 100)]);
        let average = average_saturation(&colors).unwrap();
        assert!((average - 0.738_095_238_095_238_1).abs() < 1e-12);
    }

    #[test]
    fn test_mix_saturate_raises_max_channel() {
        let colors = batch(&[Rgba::opaque(255, 0, 0), Rgba::opaque(200, 100, 100)]);
        assert_eq!(
            reduce(&colors, BlendMode::MixSaturate).unwrap(),
            Rgba::opaque(232, 100, 100)
        );
    }

    #[test]
    fn test_mix_saturate_moves_expected_channel() {
        let colors = batch(&[Rgba::new(10, 200, 30, 255), Rgba::new(40, 60, 50, 128)]);
        // average saturation is above the base's, so green (the max) moves
        assert_eq!(
            reduce(&colors, BlendMode::MixSaturate).unwrap(),
            Rgba::new(40, 193, 50, 128)
        );

        let colors = batch(&[Rgba::opaque(128, 128, 128), Rgba::new(200, 100, 100, 200)]);
        // ties on the minimum resolve to the first index (green)
        assert_eq!(
            reduce(&colors, BlendMode::MixSaturate).unwrap(),
            Rgba::new(200, 166, 100, 200)
        );
    }

    #[test]
    fn test_mix_saturate_with_full_intensity_base() {
        let colors = batch(&[Rgba::opaque(200, 100, 100), Rgba::opaque(255, 0, 0)]);
        assert_eq!(
            reduce(&colors, BlendMode::MixSaturate).unwrap(),
            Rgba::opaque(255, 255, 0)
        );
    }

    #[test]
    fn test_mix_saturate_keeps_achromatic_base() {
        let gray = Rgba::new(100, 100, 100, 42);
        for target in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(mix_saturate(&batch(&[gray]), target).unwrap(), gray);
        }
        let colors = batch(&[Rgba::opaque(255, 0, 0), gray]);
        assert_eq!(reduce(&colors, BlendMode::MixSaturate).unwrap(), gray);
    }

    #[test]
    fn test_mix_saturate_equal_saturation_is_noop() {
        let color = Rgba::new(200, 100, 100, 7);
        let colors = batch(&[color, color]);
        assert_eq!(reduce(&colors, BlendMode::MixSaturate).unwrap(), color);
    }

    #[test]
    fn test_mix_saturate_lowering_dark_base_uses_second_root() {
        // first lowering root is negative for a dark base, so the second applies
        let colors = batch(&[Rgba::opaque(100, 100, 100), Rgba::opaque(60, 20, 20)]);
        assert_eq!(
            reduce(&colors, BlendMode::MixSaturate).unwrap(),
            Rgba::opaque(60, 36, 20)
        );

        let colors = batch(&[Rgba::opaque(90, 80, 80), Rgba::new(40, 20, 20, 99)]);
        assert_eq!(
            reduce(&colors, BlendMode::MixSaturate).unwrap(),
            Rgba::new(40, 27, 20, 99)
        );
    }

    #[test]
    fn test_select_root_falls_back_outside_unit_interval() {
        assert_eq!(select_root(0.25, 0.75), 0.25);
        assert_eq!(select_root(1.0 + 1e-12, 0.75), 1.0 + 1e-12);
        assert_eq!(select_root(-0.274, 0.141), 0.141);
        assert_eq!(select_root(1.5, 0.3), 0.3);
        assert_eq!(select_root(f64::NAN, 0.3), 0.3);
    }

    #[test]
    fn test_extreme_indices_prefer_first() {
        assert_eq!(extreme_indices([255, 0, 0]), (0, 1));
        assert_eq!(extreme_indices([10, 200, 200]), (1, 0));
        assert_eq!(extreme_indices([7, 7, 7]), (0, 0));
    }
}
