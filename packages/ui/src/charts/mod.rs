//! Chart panel: loads every user once, lets the viewer pick a field, and draws
//! the derived series as a bar, line, radial or radar chart.

use dioxus::prelude::*;

use store::chart::palette_color;
use store::{derive_series, ChartCategory, ChartKind, ChartPoint, LoadState, UserSource};

use crate::dashboard::use_source;
use crate::loader::use_loader;

pub mod layout;

use layout::{CARTESIAN, RADAR, RADIAL};

const STROKE: &str = "#8884d8";

/// Chart of the whole user collection.
///
/// `chart_type` is one of `"bar"`, `"line"`, `"radial"` or `"radar"`; anything
/// else renders an "Invalid chart type" placeholder. `category` is the field
/// being charted; the panel's select writes it. Neither prop refetches.
#[component]
pub fn ChartsPanel(chart_type: String, category: Signal<ChartCategory>) -> Element {
    let mut category = category;
    let source = use_source();
    let users = use_loader(move || {
        let source = source.clone();
        async move { source.fetch_all().await }
    });

    let series = use_memo(move || match &*users.read() {
        LoadState::Loaded(users) => derive_series(users, category()),
        _ => Vec::new(),
    });

    // A failed load has no separate display; it stays on the placeholder.
    let loaded = users.read().data().is_some();

    let chart = if !loaded {
        rsx! { div { class: "chart-placeholder", "Loading..." } }
    } else {
        match chart_type.parse::<ChartKind>() {
            Ok(ChartKind::Bar) => rsx! { BarChart { points: series() } },
            Ok(ChartKind::Line) => rsx! { LineChart { points: series() } },
            Ok(ChartKind::Radial) => rsx! { RadialChart { points: series() } },
            Ok(ChartKind::Radar) => rsx! { RadarChart { points: series() } },
            Err(err) => {
                tracing::warn!("{err}");
                rsx! { div { class: "chart-placeholder", "Invalid chart type" } }
            }
        }
    };

    rsx! {
        div {
            class: "charts-panel",
            div {
                class: "chart-controls",
                select {
                    class: "chart-select",
                    value: category().field(),
                    onchange: move |evt: FormEvent| {
                        if let Some(next) = ChartCategory::from_field(&evt.value()) {
                            category.set(next);
                        }
                    },
                    for (field, label) in ChartCategory::ALL.iter().map(|c| (c.field(), c.label())) {
                        option { key: "{field}", value: field, "{label}" }
                    }
                }
            }
            div { class: "chart-canvas", {chart} }
        }
    }
}

#[component]
fn CartesianAxes(points: Vec<ChartPoint>) -> Element {
    let ticks = layout::y_ticks(&points, &CARTESIAN, 4);
    let label_y = CARTESIAN.baseline() + 12.0;
    let labels: Vec<(f64, String)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let (start, band) = CARTESIAN.band(i, points.len());
            (start + band / 2.0, p.name.clone())
        })
        .collect();

    rsx! {
        for (i, (y, value)) in ticks.into_iter().enumerate() {
            g { key: "tick-{i}",
                line {
                    x1: "{CARTESIAN.left}",
                    y1: "{y}",
                    x2: "{CARTESIAN.width - CARTESIAN.right}",
                    y2: "{y}",
                    stroke: "#e5e7eb",
                    "stroke-dasharray": "3 3",
                }
                text {
                    x: "{CARTESIAN.left - 6.0}",
                    y: "{y + 4.0}",
                    "text-anchor": "end",
                    "font-size": "11",
                    fill: "#6b7280",
                    {layout::format_value(value)}
                }
            }
        }
        for (i, (x, name)) in labels.into_iter().enumerate() {
            text {
                key: "label-{i}",
                x: "{x}",
                y: "{label_y}",
                transform: "rotate(-45 {x} {label_y})",
                "text-anchor": "end",
                "font-size": "9",
                fill: "#6b7280",
                "{name}"
            }
        }
    }
}

#[component]
fn BarChart(points: Vec<ChartPoint>) -> Element {
    let marks = layout::bars(&points, &CARTESIAN);
    rsx! {
        svg {
            class: "chart",
            view_box: "0 0 {CARTESIAN.width} {CARTESIAN.height}",
            CartesianAxes { points: points.clone() }
            for (i, (mark, point)) in marks.into_iter().zip(points.iter()).enumerate() {
                rect {
                    key: "bar-{i}",
                    x: "{mark.x}",
                    y: "{mark.y}",
                    width: "{mark.width}",
                    height: "{mark.height}",
                    fill: STROKE,
                    title { "{point.name}: {point.value}" }
                }
            }
        }
    }
}

#[component]
fn LineChart(points: Vec<ChartPoint>) -> Element {
    let vertices = layout::line_vertices(&points, &CARTESIAN);
    let path = layout::svg_points(&vertices);
    rsx! {
        svg {
            class: "chart",
            view_box: "0 0 {CARTESIAN.width} {CARTESIAN.height}",
            CartesianAxes { points: points.clone() }
            polyline {
                points: "{path}",
                fill: "none",
                stroke: STROKE,
                "stroke-width": "2",
            }
            for (i, ((x, y), point)) in vertices.into_iter().zip(points.iter()).enumerate() {
                circle {
                    key: "dot-{i}",
                    cx: "{x}",
                    cy: "{y}",
                    r: "3",
                    fill: "#fff",
                    stroke: STROKE,
                    title { "{point.name}: {point.value}" }
                }
            }
        }
    }
}

#[component]
fn RadialChart(points: Vec<ChartPoint>) -> Element {
    let arcs = layout::radial_arcs(&points, &RADIAL);
    let center = RADIAL.center();
    rsx! {
        svg {
            class: "chart chart-polar",
            view_box: "0 0 {RADIAL.size} {RADIAL.size}",
            for (i, (arc, point)) in arcs.into_iter().zip(points.iter()).enumerate() {
                g { key: "arc-{i}",
                    circle {
                        cx: "{center}",
                        cy: "{center}",
                        r: "{arc.radius}",
                        fill: "none",
                        stroke: "#eee",
                        "stroke-width": "{arc.thickness}",
                    }
                    path {
                        d: "{arc.path}",
                        fill: "none",
                        stroke: palette_color(i),
                        "stroke-width": "{arc.thickness}",
                        title { "{point.name}: {point.value}" }
                    }
                }
            }
        }
    }
}

#[component]
fn RadarChart(points: Vec<ChartPoint>) -> Element {
    let spokes = layout::radar_spokes(&points, &RADAR);
    let grid = layout::radar_grid(points.len(), &RADAR, 4);
    let values: Vec<(f64, f64)> = spokes.iter().map(|s| s.value).collect();
    let shape = layout::svg_points(&values);
    let center = RADAR.center();
    rsx! {
        svg {
            class: "chart chart-polar",
            view_box: "0 0 {RADAR.size} {RADAR.size}",
            for (i, ring) in grid.into_iter().enumerate() {
                polygon {
                    key: "grid-{i}",
                    points: "{ring}",
                    fill: "none",
                    stroke: "#ddd",
                }
            }
            for (i, (spoke, point)) in spokes.into_iter().zip(points.iter()).enumerate() {
                g { key: "spoke-{i}",
                    line {
                        x1: "{center}",
                        y1: "{center}",
                        x2: "{spoke.end.0}",
                        y2: "{spoke.end.1}",
                        stroke: "#ddd",
                    }
                    text {
                        x: "{spoke.label.0}",
                        y: "{spoke.label.1}",
                        "text-anchor": "middle",
                        "font-size": "9",
                        fill: "#6b7280",
                        "{point.name}"
                    }
                }
            }
            polygon {
                points: "{shape}",
                fill: STROKE,
                "fill-opacity": "0.6",
                stroke: STROKE,
            }
        }
    }
}
