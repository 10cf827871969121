// SVG markup for progress rings
use crate::domain::ring::{ArcError, ArcResult, compute_arc};

const TRACK_COLOR: &str = "lightgray";
const DONE_COLOR: &str = "#57c282";
const PARTIAL_COLOR: &str = "#5691f0";
const TRACK_WIDTH: u32 = 3;
const METER_WIDTH: u32 = 8;

/// Render one progress ring: the background track plus, depending on how much
/// is finished, nothing, a partial arc, or a full circle.
pub fn render_ring(size: f64, offset: f64, part: f64, total: f64) -> Result<String, ArcError> {
    let radius = size / 2.0;
    let center = radius + offset;
    let canvas = size + offset * 2.0;

    let track = circle(radius, center, TRACK_COLOR, TRACK_WIDTH);
    let meter = match compute_arc(radius, offset, part, total)? {
        ArcResult::Empty => String::new(),
        ArcResult::Full => circle(radius, center, DONE_COLOR, METER_WIDTH),
        ArcResult::Partial(arc) => format!(
            r##"<path d="M {} {} A {} {} 0 {} 1 {} {}" stroke="{}" stroke-width="{}" stroke-linecap="round" fill="none"/>"##,
            fmt(offset),
            fmt(offset + radius),
            fmt(radius),
            fmt(radius),
            u8::from(arc.large_arc),
            fmt(round3(arc.end_x)),
            fmt(round3(arc.end_y)),
            PARTIAL_COLOR,
            METER_WIDTH
        ),
    };

    Ok(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{canvas}" height="{canvas}">{track}{meter}</svg>"#,
        canvas = fmt(canvas)
    ))
}

fn circle(radius: f64, center: f64, stroke: &str, width: u32) -> String {
    format!(
        r#"<circle r="{}" cx="{}" cy="{}" stroke="{}" fill="none" stroke-width="{}"/>"#,
        fmt(radius),
        fmt(center),
        fmt(center),
        stroke,
        width
    )
}

/// Keep arc endpoints readable: three decimals is plenty for an 80px ring and
/// makes the markup stable under floating point noise.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn fmt(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ring_draws_only_the_track() {
        let svg = render_ring(80.0, 10.0, 0.0, 40.0).expect("svg");
        assert!(svg.contains(r#"stroke="lightgray""#));
        assert!(!svg.contains("<path"));
        assert!(!svg.contains(DONE_COLOR));
    }

    #[test]
    fn test_full_ring_is_a_done_circle() {
        let svg = render_ring(80.0, 10.0, 40.0, 40.0).expect("svg");
        assert!(svg.contains(r##"stroke="#57c282""##));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_quarter_ring_path() {
        let svg = render_ring(80.0, 10.0, 10.0, 40.0).expect("svg");
        assert!(svg.contains(r#"d="M 10 50 A 40 40 0 0 1 50 10""#), "svg was: {svg}");
        assert!(svg.contains(r##"stroke="#5691f0""##));
    }

    #[test]
    fn test_late_ring_uses_large_arc_flag() {
        let svg = render_ring(80.0, 10.0, 35.0, 40.0).expect("svg");
        assert!(svg.contains("A 40 40 0 1 1"), "svg was: {svg}");
    }

    #[test]
    fn test_contract_violation_surfaces() {
        assert!(render_ring(80.0, 10.0, 41.0, 40.0).is_err());
    }

    #[test]
    fn test_canvas_covers_ring_and_offset() {
        let svg = render_ring(80.0, 10.0, 0.0, 0.0).expect("svg");
        assert!(svg.contains(r#"width="100" height="100""#));
    }
}
