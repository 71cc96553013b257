//! Integration tests: PNG output geometry and determinism

use std::path::PathBuf;

use breaks_plot::{
    render, BreakMarkerStyle, BreaksChart, FigureSpec, LabelOffsets, RGBColor, SeriesSpec,
    VerticalPlacement,
};

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("breaks-plot-tests").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn sample_chart() -> BreaksChart {
    BreaksChart {
        title: "Coefficient breaks".to_string(),
        title_px: 24,
        x_label: "Year".to_string(),
        y_label: "Coefficient Value".to_string(),
        figure: FigureSpec { width: 640, height: 360 },
        primary: SeriesSpec::new("ln(Real Wage)", RGBColor(139, 0, 0), 2),
        secondary: SeriesSpec::new("Inflation", RGBColor(46, 139, 87), 2),
        x_range: None,
        marker: BreakMarkerStyle {
            line_width: 1,
            font_px: 12,
            offsets: LabelOffsets::forward_or_back(0.3, 1.0, 2.0),
            vertical: VerticalPlacement::Alternating {
                upper: 0.82,
                lower: 0.70,
            },
        },
    }
}

fn sample_data() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let years: Vec<f64> = (1990..2010).map(|y| y as f64).collect();
    let wage: Vec<f64> = years.iter().map(|y| 0.4 + 0.01 * (y - 1990.0)).collect();
    let inflation: Vec<f64> = years
        .iter()
        .map(|y| if *y < 2000.0 { 0.1 } else { 0.3 })
        .collect();
    (years, wage, inflation)
}

#[test]
fn writes_a_png_with_the_requested_geometry() {
    let dir = test_dir("geometry");
    let path = dir.join("chart.png");
    let (years, wage, inflation) = sample_data();

    render(&sample_chart(), &years, &wage, &inflation, &[1999.0], &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    // PNG signature, then IHDR width/height at fixed offsets
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    assert_eq!((width, height), (640, 360));
}

#[test]
fn rendering_is_deterministic() {
    let dir = test_dir("deterministic");
    let first = dir.join("first.png");
    let second = dir.join("second.png");
    let (years, wage, inflation) = sample_data();
    let breaks = [1995.0, 1999.0, 2008.0];

    render(&sample_chart(), &years, &wage, &inflation, &breaks, &first).unwrap();
    render(&sample_chart(), &years, &wage, &inflation, &breaks, &second).unwrap();

    let a = std::fs::read(&first).unwrap();
    let b = std::fs::read(&second).unwrap();
    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn no_breaks_still_renders() {
    let dir = test_dir("no-breaks");
    let path = dir.join("chart.png");
    let (years, wage, inflation) = sample_data();

    render(&sample_chart(), &years, &wage, &inflation, &[], &path).unwrap();
    assert!(path.exists());
}

#[test]
fn empty_time_axis_is_rejected() {
    let dir = test_dir("empty-axis");
    let path = dir.join("chart.png");
    let err = render(&sample_chart(), &[], &[], &[], &[], &path).unwrap_err();
    assert!(matches!(err, breaks_plot::Error::InvalidInput(_)));
}

#[test]
fn misaligned_series_are_rejected() {
    let dir = test_dir("misaligned");
    let path = dir.join("chart.png");
    let (years, wage, _) = sample_data();
    let err = render(&sample_chart(), &years, &wage, &[0.1, 0.2], &[], &path).unwrap_err();
    assert!(matches!(err, breaks_plot::Error::InvalidInput(_)));
}
