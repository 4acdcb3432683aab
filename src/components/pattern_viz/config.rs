use super::error::VizError;
use super::types::Category;

/// Visual constants of the diagram. The defaults reproduce the classic look:
/// 50px dots on a 110px grid, three columns per block.
#[derive(Clone, Debug, PartialEq)]
pub struct VizConfig {
	/// Circle radius in pixels.
	pub radius: f64,
	/// Space between two neighbouring circles of a block.
	pub gap: f64,
	/// Distance between the surface edge and the first circle.
	pub margin: f64,
	/// Dots per row in each block.
	pub columns: usize,
	/// Extra space between the technology and the pattern block.
	pub block_gap: f64,
	/// Fill of technology dots.
	pub technology_color: String,
	/// Fill of pattern dots.
	pub pattern_color: String,
	/// Circle opacity at rest.
	pub idle_opacity: f64,
	/// Circle opacity under the pointer.
	pub highlight_opacity: f64,
	/// Circle scale under the pointer.
	pub highlight_scale: f64,
	/// Length of the elastic grow/shrink transition.
	pub dot_duration_ms: u32,
	/// Length of the connector fade.
	pub connector_duration_ms: u32,
	/// Stroke of connector lines.
	pub connector_color: String,
	/// Stroke width of connector lines.
	pub connector_width: f64,
	/// Fill of label text.
	pub label_color: String,
	/// Label size in pixels.
	pub font_size: f64,
	/// CSS font stack of labels.
	pub font_family: String,
	/// Line height of multi-line labels, in `em`.
	pub line_height: f64,
}

impl Default for VizConfig {
	fn default() -> Self {
		Self {
			radius: 50.0,
			gap: 10.0,
			margin: 10.0,
			columns: 3,
			block_gap: 50.0,
			technology_color: "#086fa1".into(),
			pattern_color: "#ff8900".into(),
			idle_opacity: 0.5,
			highlight_opacity: 1.0,
			highlight_scale: 1.15,
			dot_duration_ms: 1000,
			connector_duration_ms: 200,
			connector_color: "#999999".into(),
			connector_width: 3.0,
			label_color: "#ffffff".into(),
			font_size: 20.0,
			font_family: "'League Gothic','Futura-CondensedMedium','Arial Narrow',sans-serif".into(),
			line_height: 1.2,
		}
	}
}

impl VizConfig {
	/// Distance between the centers of two neighbouring dots.
	pub fn spacing(&self) -> f64 {
		self.radius * 2.0 + self.gap
	}

	/// Grid origin of the technology block.
	pub fn technology_origin(&self) -> (f64, f64) {
		(self.radius + self.margin, self.radius + self.margin)
	}

	/// Grid origin of the pattern block, right of the full technology block.
	pub fn pattern_origin(&self) -> (f64, f64) {
		let (tech_x, tech_y) = self.technology_origin();
		(
			tech_x + self.spacing() * self.columns as f64 + self.block_gap,
			tech_y,
		)
	}

	/// Fill color of a dot of `category`.
	pub fn color_for(&self, category: Category) -> &str {
		match category {
			Category::Technology => &self.technology_color,
			Category::Pattern => &self.pattern_color,
		}
	}

	/// Rejects values that would put NaN or infinite coordinates into the
	/// drawing, or opacities outside `0..=1`.
	pub fn validate(&self) -> Result<(), VizError> {
		if self.columns == 0 {
			return Err(VizError::InvalidConfig("columns must be at least 1".into()));
		}
		for (name, value) in [
			("radius", self.radius),
			("highlight_scale", self.highlight_scale),
			("connector_width", self.connector_width),
			("font_size", self.font_size),
			("line_height", self.line_height),
		] {
			if !(value.is_finite() && value > 0.0) {
				return Err(VizError::InvalidConfig(format!(
					"{name} must be a positive finite number, got {value}"
				)));
			}
		}
		for (name, value) in [
			("gap", self.gap),
			("margin", self.margin),
			("block_gap", self.block_gap),
		] {
			if !(value.is_finite() && value >= 0.0) {
				return Err(VizError::InvalidConfig(format!(
					"{name} must be a finite, non-negative number, got {value}"
				)));
			}
		}
		for (name, value) in [
			("idle_opacity", self.idle_opacity),
			("highlight_opacity", self.highlight_opacity),
		] {
			if !(0.0..=1.0).contains(&value) {
				return Err(VizError::InvalidConfig(format!(
					"{name} must lie in 0..=1, got {value}"
				)));
			}
		}
		Ok(())
	}
}
