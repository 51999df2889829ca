//! Fixed display series for the chart pages, plus the small layout math that
//! turns them into SVG coordinates.

/// Month labels for the line chart x-axis
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Growth of an indexed portfolio over the past year (base 100)
pub const PORTFOLIO_INDEX: [f64; 12] = [
    100.0, 102.3, 101.1, 104.8, 107.2, 106.5, 109.9, 112.4, 111.0, 114.6, 117.3, 120.1,
];

/// Growth of the reference benchmark over the same period (base 100)
pub const BENCHMARK_INDEX: [f64; 12] = [
    100.0, 101.1, 100.4, 102.6, 104.0, 103.1, 105.2, 106.8, 106.1, 108.0, 109.4, 111.2,
];

/// Sector exposure of the model portfolio, percent of book
pub const SECTOR_EXPOSURE: [(&str, f64); 7] = [
    ("Technology", 32.0),
    ("Financials", 18.0),
    ("Healthcare", 14.0),
    ("Consumer", 12.0),
    ("Energy", 9.0),
    ("Utilities", 5.0),
    ("Other", 10.0),
];

/// Asset-class allocation, percent of book
pub const ASSET_ALLOCATION: [(&str, f64); 5] = [
    ("Equities", 55.0),
    ("Bonds", 25.0),
    ("Cash", 8.0),
    ("Commodities", 7.0),
    ("Real Estate", 5.0),
];

/// Angular extent of one pie slice, as fractions of a full turn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub end: f64,
}

/// Cumulative slice fractions for a set of values. Non-positive totals yield
/// no slices.
pub fn pie_slices(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::with_capacity(values.len());
    let mut acc = 0.0;
    for value in values {
        let start = acc / total;
        acc += value;
        slices.push(Slice {
            start,
            end: acc / total,
        });
    }
    slices
}

/// SVG path for one pie slice, starting at 12 o'clock and sweeping clockwise
pub fn arc_path(cx: f64, cy: f64, r: f64, slice: Slice) -> String {
    let point = |frac: f64| {
        let angle = (frac - 0.25) * std::f64::consts::TAU;
        (cx + r * angle.cos(), cy + r * angle.sin())
    };

    let (x1, y1) = point(slice.start);
    let (x2, y2) = point(slice.end);
    let large_arc = if slice.end - slice.start > 0.5 { 1 } else { 0 };

    format!(
        "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {r:.2} {r:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
    )
}

/// Bar height in plot units for a value against the series maximum
pub fn scale_height(value: f64, max: f64, plot_height: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    (value / max * plot_height).clamp(0.0, plot_height)
}

/// `points` attribute for an SVG polyline spanning the full plot area.
/// The series is normalized to its own min/max; a flat series draws a
/// centered line.
pub fn polyline_points(values: &[f64], width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = step * i as f64;
            let y = if span > 0.0 {
                height - (value - min) / span * height
            } else {
                height / 2.0
            };
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_cover_the_full_circle() {
        let values: Vec<f64> = ASSET_ALLOCATION.iter().map(|(_, v)| *v).collect();
        let slices = pie_slices(&values);

        assert_eq!(slices.len(), values.len());
        assert_eq!(slices[0].start, 0.0);
        assert!((slices.last().unwrap().end - 1.0).abs() < 1e-9);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn empty_or_zero_values_yield_no_slices() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn majority_slice_uses_the_large_arc_flag() {
        let path = arc_path(50.0, 50.0, 40.0, Slice { start: 0.0, end: 0.6 });
        assert!(path.contains(" 1 1 "), "path was {path}");

        let path = arc_path(50.0, 50.0, 40.0, Slice { start: 0.0, end: 0.3 });
        assert!(path.contains(" 0 1 "), "path was {path}");
    }

    #[test]
    fn bar_heights_scale_linearly_and_clamp() {
        assert_eq!(scale_height(50.0, 100.0, 200.0), 100.0);
        assert_eq!(scale_height(150.0, 100.0, 200.0), 200.0);
        assert_eq!(scale_height(10.0, 0.0, 200.0), 0.0);
    }

    #[test]
    fn polyline_emits_one_point_per_value_inside_the_plot() {
        let points = polyline_points(&PORTFOLIO_INDEX, 600.0, 240.0);
        let pairs: Vec<&str> = points.split(' ').collect();
        assert_eq!(pairs.len(), PORTFOLIO_INDEX.len());

        for pair in pairs {
            let (x, y) = pair.split_once(',').unwrap();
            let x: f64 = x.parse().unwrap();
            let y: f64 = y.parse().unwrap();
            assert!((0.0..=600.0).contains(&x));
            assert!((0.0..=240.0).contains(&y));
        }
    }

    #[test]
    fn flat_series_draws_a_centered_line() {
        let points = polyline_points(&[5.0, 5.0, 5.0], 100.0, 50.0);
        for pair in points.split(' ') {
            assert!(pair.ends_with(",25.00"));
        }
    }
}
