//! SVG geometry for the chart panel.
//!
//! Everything here is plain arithmetic over a [`ChartPoint`] series so the
//! components only have to emit elements. Cartesian charts share a [`Frame`];
//! the polar charts are laid out around the center of a square canvas.

use std::f64::consts::PI;

use store::chart::series_max;
use store::ChartPoint;

/// Canvas of a cartesian chart and the margins around its plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const CARTESIAN: Frame = Frame {
    width: 600.0,
    height: 300.0,
    top: 20.0,
    right: 30.0,
    bottom: 60.0,
    left: 50.0,
};

impl Frame {
    pub fn plot_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.top - self.bottom
    }

    /// Bottom edge of the plot area.
    pub fn baseline(&self) -> f64 {
        self.top + self.plot_height()
    }

    /// Horizontal band of point `index` out of `count`: (left edge, width).
    pub fn band(&self, index: usize, count: usize) -> (f64, f64) {
        let width = self.plot_width() / count.max(1) as f64;
        (self.left + width * index as f64, width)
    }

    /// Vertical position of `value` on a scale topping out at `max`.
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        self.baseline() - self.plot_height() * (value / max).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarMark {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One bar per point, centered in its band with a 10% gap on each side.
pub fn bars(points: &[ChartPoint], frame: &Frame) -> Vec<BarMark> {
    let max = series_max(points);
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let (start, band) = frame.band(index, points.len());
            let y = frame.y_for(point.value, max);
            BarMark {
                x: start + band * 0.1,
                y,
                width: band * 0.8,
                height: frame.baseline() - y,
            }
        })
        .collect()
}

/// Line vertices, one per point at the center of its band.
pub fn line_vertices(points: &[ChartPoint], frame: &Frame) -> Vec<(f64, f64)> {
    let max = series_max(points);
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let (start, band) = frame.band(index, points.len());
            (start + band / 2.0, frame.y_for(point.value, max))
        })
        .collect()
}

/// `points` attribute of a `<polyline>` or `<polygon>`.
pub fn svg_points(vertices: &[(f64, f64)]) -> String {
    vertices
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Y-axis gridlines: `(y, value)` for `count + 1` evenly spaced ticks from 0.
pub fn y_ticks(points: &[ChartPoint], frame: &Frame, count: usize) -> Vec<(f64, f64)> {
    let max = series_max(points);
    let count = count.max(1);
    (0..=count)
        .map(|i| {
            let value = max * i as f64 / count as f64;
            (frame.y_for(value, max), value)
        })
        .collect()
}

/// Tick label: integers without decimals, everything else to one place.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Square canvas for the polar charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    pub size: f64,
    /// Inner radius as a fraction of half the canvas.
    pub inner: f64,
    /// Outer radius as a fraction of half the canvas.
    pub outer: f64,
}

pub const RADIAL: Polar = Polar {
    size: 300.0,
    inner: 0.1,
    outer: 0.8,
};

pub const RADAR: Polar = Polar {
    size: 400.0,
    inner: 0.0,
    outer: 0.8,
};

impl Polar {
    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    pub fn inner_radius(&self) -> f64 {
        self.center() * self.inner
    }

    pub fn outer_radius(&self) -> f64 {
        self.center() * self.outer
    }

    /// Point at `radius` along `angle` (radians, 0 = 12 o'clock, clockwise).
    pub fn at(&self, radius: f64, angle: f64) -> (f64, f64) {
        let c = self.center();
        (c + radius * angle.sin(), c - radius * angle.cos())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadialArc {
    pub radius: f64,
    pub thickness: f64,
    /// SVG path of the value arc.
    pub path: String,
}

/// Concentric arcs, first point innermost, each sweeping `value / max` of a
/// full turn clockwise from 12 o'clock.
pub fn radial_arcs(points: &[ChartPoint], polar: &Polar) -> Vec<RadialArc> {
    let max = series_max(points);
    let count = points.len().max(1) as f64;
    let ring = (polar.outer_radius() - polar.inner_radius()) / count;
    let thickness = (ring * 0.8).min(10.0);
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let radius = polar.inner_radius() + ring * (index as f64 + 0.5);
            let fraction = (point.value / max).clamp(0.0, 1.0);
            RadialArc {
                radius,
                thickness,
                path: arc_path(polar, radius, fraction),
            }
        })
        .collect()
}

fn arc_path(polar: &Polar, radius: f64, fraction: f64) -> String {
    // A closed arc has identical endpoints and would not render; stop just short.
    let sweep = (fraction * 2.0 * PI).min(2.0 * PI - 1e-4);
    let (x0, y0) = polar.at(radius, 0.0);
    let (x1, y1) = polar.at(radius, sweep);
    let large = if sweep > PI { 1 } else { 0 };
    format!("M {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large} 1 {x1:.2} {y1:.2}")
}

#[derive(Clone, Debug, PartialEq)]
pub struct Spoke {
    /// Outer end of the spoke.
    pub end: (f64, f64),
    /// Where the label sits, just beyond the end.
    pub label: (f64, f64),
    /// Where the value lands on the spoke.
    pub value: (f64, f64),
}

/// One spoke per point, evenly spaced clockwise from 12 o'clock.
pub fn radar_spokes(points: &[ChartPoint], polar: &Polar) -> Vec<Spoke> {
    let max = series_max(points);
    let count = points.len().max(1) as f64;
    let radius = polar.outer_radius();
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let angle = 2.0 * PI * index as f64 / count;
            Spoke {
                end: polar.at(radius, angle),
                label: polar.at(radius + 14.0, angle),
                value: polar.at(radius * (point.value / max).clamp(0.0, 1.0), angle),
            }
        })
        .collect()
}

/// Concentric grid polygons at each `1/levels` of the outer radius.
pub fn radar_grid(count: usize, polar: &Polar, levels: usize) -> Vec<String> {
    let count = count.max(1);
    (1..=levels)
        .map(|level| {
            let radius = polar.outer_radius() * level as f64 / levels as f64;
            let vertices: Vec<(f64, f64)> = (0..count)
                .map(|i| polar.at(radius, 2.0 * PI * i as f64 / count as f64))
                .collect();
            svg_points(&vertices)
        })
        .collect()
}
