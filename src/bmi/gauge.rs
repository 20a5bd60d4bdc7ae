/// BMI rendered at the left edge of the gauge.
pub const GAUGE_MIN: f64 = 10.0;
/// BMI rendered at the right edge of the gauge.
pub const GAUGE_MAX: f64 = 40.0;

pub const GAUGE_TICKS: [&str; 4] = ["10", "20", "30", "40+"];

/// Maps a BMI onto `[0, 1]` along the gauge. Values outside 10..=40 stick to
/// the nearest end.
pub fn gauge_position(bmi: f64) -> f64 {
    (bmi.clamp(GAUGE_MIN, GAUGE_MAX) - GAUGE_MIN) / (GAUGE_MAX - GAUGE_MIN)
}

/// Gauge fill as a CSS width, e.g. `"50%"`.
pub fn gauge_width(position: f64) -> String {
    format!("{}%", position * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(gauge_position(10.0), 0.0);
        assert_eq!(gauge_position(25.0), 0.5);
        assert_eq!(gauge_position(40.0), 1.0);
    }

    #[test]
    fn clamps_outside_scale() {
        assert_eq!(gauge_position(5.0), 0.0);
        assert_eq!(gauge_position(0.0), 0.0);
        assert_eq!(gauge_position(55.0), 1.0);
    }

    #[test]
    fn width_is_percent() {
        assert_eq!(gauge_width(0.5), "50%");
        assert_eq!(gauge_width(0.0), "0%");
        assert_eq!(gauge_width(1.0), "100%");
    }
}
