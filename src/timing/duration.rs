/// Divisor applied to the summed gap time when a move skips over at least one scene.
pub const SKIP_DISCOUNT: f64 = 2.5;

/// Transition duration in milliseconds for a move from `from` to `to`.
///
/// `from == None` is the initial placement and always takes zero time. Otherwise the gap
/// times between the two scenes are summed (`scene_times[from..to]` going forward,
/// `scene_times[to..from]` going back) and divided by [`SKIP_DISCOUNT`] when the move spans
/// more than one gap. Gaps missing from `scene_times` contribute nothing.
pub fn compute_duration(from: Option<usize>, to: usize, scene_times: &[f64]) -> f64 {
    let Some(from) = from else {
        return 0.0;
    };
    let gaps = if from <= to { from..to } else { to..from };
    let span = gaps.len();
    let sum: f64 = gaps.filter_map(|gap| scene_times.get(gap)).sum();
    if span > 1 { sum / SKIP_DISCOUNT } else { sum }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/duration.rs"]
mod tests;
