use std::f64::consts::PI;
use std::sync::LazyLock;

use super::config::VizConfig;
use super::state::{Connector, DotState};

const EASING_SAMPLES: usize = 40;

static ELASTIC_EASING: LazyLock<String> = LazyLock::new(|| css_easing(elastic, EASING_SAMPLES));

/// Elastic ease-out: overshoots, then settles on 1.
pub fn elastic(t: f64) -> f64 {
	if t <= 0.0 || t >= 1.0 {
		return t.clamp(0.0, 1.0);
	}
	2f64.powf(-10.0 * t) * ((t - 0.075) * (2.0 * PI) / 0.3).sin() + 1.0
}

/// CSS `linear()` timing function approximating `f` over `samples` steps.
pub fn css_easing(f: fn(f64) -> f64, samples: usize) -> String {
	let points: Vec<String> = (0..=samples)
		.map(|i| format!("{:.4}", f(i as f64 / samples as f64)))
		.collect();
	format!("linear({})", points.join(", "))
}

pub fn connector_path(connector: &Connector) -> String {
	let ((x1, y1), (x2, y2)) = (connector.from, connector.to);
	format!("M{x1} {y1} L {x2} {y2}")
}

pub fn connector_style(visible: bool, config: &VizConfig) -> String {
	format!(
		"opacity: {}; transition: opacity {}ms linear; pointer-events: none;",
		if visible { 1.0 } else { 0.0 },
		config.connector_duration_ms
	)
}

/// Inline style of a dot's circle centered at `(x, y)`: scale around the
/// center plus opacity, both transitioned with the elastic curve.
pub fn circle_style(x: f64, y: f64, state: DotState, config: &VizConfig) -> String {
	let (scale, opacity) = state.appearance(config);
	let (duration, easing) = (config.dot_duration_ms, ELASTIC_EASING.as_str());
	format!(
		"transform-origin: {x}px {y}px; transform: scale({scale}); opacity: {opacity}; \
		 transition: transform {duration}ms {easing}, opacity {duration}ms {easing}; cursor: pointer;"
	)
}

pub fn label_style(config: &VizConfig) -> String {
	format!(
		"font-size: {}px; font-family: {}; cursor: pointer; user-select: none;",
		config.font_size, config.font_family
	)
}

/// Splits a label on `\n` and pairs each line with its `dy` offset in `em`,
/// so the block of lines stays vertically centered on the dot.
pub fn label_lines(label: &str, line_height: f64) -> Vec<(String, f64)> {
	let lines: Vec<&str> = label.split('\n').collect();
	let first = -(lines.len() as f64 - 1.0) / 2.0 * line_height;
	lines
		.into_iter()
		.enumerate()
		.map(|(i, line)| (line.to_string(), if i == 0 { first } else { line_height }))
		.collect()
}
