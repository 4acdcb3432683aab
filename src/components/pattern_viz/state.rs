use std::collections::HashMap;

use log::{debug, warn};

use super::config::VizConfig;
use super::error::VizError;
use super::layout::grid_position;
use super::navigate::Navigator;
use super::types::{Category, DiagramData, EntityRecord};

/// Position of a node in [`PatternVizState::nodes`].
pub type NodeIdx = usize;
/// Position of a connector in [`PatternVizState::connectors`].
pub type ConnectorIdx = usize;

/// Browsing context used for every activation.
pub const NEW_TAB: &str = "_blank";

/// Visual state of a dot. Only pointer enter/exit on the dot's own circle or
/// label moves it between the two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DotState {
	/// Scale 1, half transparent, connectors hidden.
	#[default]
	Idle,
	/// Enlarged, opaque, connectors shown.
	Highlighted,
}

impl DotState {
	/// Circle scale and opacity for this state.
	pub fn appearance(self, config: &VizConfig) -> (f64, f64) {
		match self {
			Self::Idle => (1.0, config.idle_opacity),
			Self::Highlighted => (config.highlight_scale, config.highlight_opacity),
		}
	}
}

/// A dot of the diagram.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Registry key.
	pub id: String,
	/// Link opened on click, may be empty.
	pub uri: String,
	/// Text drawn over the circle.
	pub label: String,
	/// Block the dot belongs to.
	pub category: Category,
	/// Circle fill.
	pub color: String,
	/// Center x, fixed at construction.
	pub x: f64,
	/// Center y, fixed at construction.
	pub y: f64,
	/// Connectors touching this node, in relation order.
	pub connectors: Vec<ConnectorIdx>,
	/// Current visual state.
	pub state: DotState,
}

/// A line between two related dots.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
	/// The two dots listing this connector.
	pub endpoints: (NodeIdx, NodeIdx),
	/// Center of the first endpoint.
	pub from: (f64, f64),
	/// Center of the second endpoint.
	pub to: (f64, f64),
	/// Whether the line is currently shown.
	pub visible: bool,
}

/// A request to open `url` in the browsing context `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
	/// Link of the activated dot.
	pub url: String,
	/// Browsing context, always [`NEW_TAB`].
	pub target: &'static str,
}

/// The node registry plus the per-node and per-connector visual state.
///
/// Positions and connector lists are fixed once [`PatternVizState::new`]
/// returns; afterwards only [`DotState`] and connector visibility change.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternVizState {
	/// Technologies first, then patterns, each in input order.
	pub nodes: Vec<Node>,
	/// One per relation, in input order.
	pub connectors: Vec<Connector>,
	/// Surface width in pixels.
	pub width: f64,
	/// Surface height in pixels.
	pub height: f64,
	/// Visual constants the layout was computed with.
	pub config: VizConfig,
	id_to_idx: HashMap<String, NodeIdx>,
}

impl PatternVizState {
	/// Lays out every dot and builds every connector, or fails without a
	/// partial diagram.
	pub fn new(data: &DiagramData, width: f64, height: f64, config: VizConfig) -> Result<Self, VizError> {
		config.validate()?;
		if !(width > 0.0 && height > 0.0) {
			return Err(VizError::InvalidConfig(format!(
				"surface size must be positive, got {width}x{height}"
			)));
		}

		let mut state = Self {
			nodes: Vec::with_capacity(data.technologies.len() + data.patterns.len()),
			connectors: Vec::with_capacity(data.relations.len()),
			width,
			height,
			id_to_idx: HashMap::new(),
			config,
		};

		let (tech_origin, pattern_origin) = (
			state.config.technology_origin(),
			state.config.pattern_origin(),
		);
		state.add_block(&data.technologies, Category::Technology, tech_origin)?;
		state.add_block(&data.patterns, Category::Pattern, pattern_origin)?;

		for (i, relation) in data.relations.iter().enumerate() {
			state.add_connector(i, &relation.from_id, &relation.to_id)?;
		}

		debug!(
			"pattern diagram built: {} nodes, {} connectors",
			state.nodes.len(),
			state.connectors.len()
		);
		Ok(state)
	}

	fn add_block(
		&mut self,
		records: &[EntityRecord],
		category: Category,
		origin: (f64, f64),
	) -> Result<(), VizError> {
		let (columns, spacing) = (self.config.columns, self.config.spacing());
		let color = self.config.color_for(category).to_string();
		for (i, record) in records.iter().enumerate() {
			if self.id_to_idx.contains_key(&record.id) {
				return Err(VizError::DuplicateNode(record.id.clone()));
			}
			let (x, y) = grid_position(i, columns, origin, spacing);
			if y + self.config.radius > self.height {
				warn!("node `{}` at y={y} overflows the {}px surface", record.id, self.height);
			}

			self.id_to_idx.insert(record.id.clone(), self.nodes.len());
			self.nodes.push(Node {
				id: record.id.clone(),
				uri: record.uri.clone(),
				label: record.name.clone(),
				category,
				color: color.clone(),
				x,
				y,
				connectors: Vec::new(),
				state: DotState::Idle,
			});
		}
		Ok(())
	}

	fn add_connector(&mut self, relation: usize, from_id: &str, to_id: &str) -> Result<(), VizError> {
		let lookup = |id: &str| {
			self.index_of(id).ok_or_else(|| VizError::UnknownNode {
				id: id.to_string(),
				relation,
			})
		};
		let (src, dst) = (lookup(from_id)?, lookup(to_id)?);
		if src == dst {
			return Err(VizError::SelfRelation {
				id: from_id.to_string(),
				relation,
			});
		}

		let idx = self.connectors.len();
		self.connectors.push(Connector {
			endpoints: (src, dst),
			from: (self.nodes[src].x, self.nodes[src].y),
			to: (self.nodes[dst].x, self.nodes[dst].y),
			visible: false,
		});
		self.nodes[src].connectors.push(idx);
		self.nodes[dst].connectors.push(idx);
		Ok(())
	}

	/// Index of the dot with `id`.
	pub fn index_of(&self, id: &str) -> Option<NodeIdx> {
		self.id_to_idx.get(id).copied()
	}

	/// The dot with `id`.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.index_of(id).map(|idx| &self.nodes[idx])
	}

	/// Pointer entered the dot's circle or label.
	pub fn enter(&mut self, idx: NodeIdx) -> Result<(), VizError> {
		self.set_highlight(idx, DotState::Highlighted)
	}

	/// Pointer left the dot's circle or label.
	pub fn exit(&mut self, idx: NodeIdx) -> Result<(), VizError> {
		self.set_highlight(idx, DotState::Idle)
	}

	// A connector shared by two dots takes whatever the last endpoint wrote.
	fn set_highlight(&mut self, idx: NodeIdx, state: DotState) -> Result<(), VizError> {
		let node = self.nodes.get_mut(idx).ok_or(VizError::NoSuchNode(idx))?;
		node.state = state;
		let visible = state == DotState::Highlighted;
		for &c in &node.connectors {
			self.connectors[c].visible = visible;
		}
		Ok(())
	}

	/// Dot clicked: open its uri in a new tab. An empty uri is still handed to
	/// the navigator, which opens a blank tab.
	pub fn activate<N: Navigator + ?Sized>(&self, idx: NodeIdx, navigator: &N) -> Result<Navigation, VizError> {
		let node = self
			.nodes
			.get(idx)
			.ok_or(VizError::NoSuchNode(idx))?;
		if node.uri.is_empty() {
			debug!("node `{}` has no uri, opening a blank tab", node.id);
		}
		let navigation = Navigation {
			url: node.uri.clone(),
			target: NEW_TAB,
		};
		navigator.open(&navigation.url, navigation.target)?;
		Ok(navigation)
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use super::*;
	use crate::components::pattern_viz::types::Relation;

	#[derive(Default)]
	struct RecordingNavigator {
		opened: RefCell<Vec<(String, String)>>,
	}

	impl Navigator for RecordingNavigator {
		fn open(&self, url: &str, target: &str) -> Result<(), VizError> {
			self.opened.borrow_mut().push((url.into(), target.into()));
			Ok(())
		}
	}

	fn scenario() -> DiagramData {
		DiagramData {
			technologies: vec![
				EntityRecord::new("jee", "JEE", "http://en.wikipedia.org/wiki/Java_EE"),
				EntityRecord::new("ws", "WS", ""),
			],
			patterns: vec![
				EntityRecord::new("broker", "Broker", "http://en.wikipedia.org/wiki/Message_broker"),
				EntityRecord::new("layers", "Layers", ""),
			],
			relations: vec![
				Relation::new("jee", "broker"),
				Relation::new("jee", "layers"),
				Relation::new("ws", "broker"),
			],
		}
	}

	fn build(data: &DiagramData) -> PatternVizState {
		PatternVizState::new(data, 800.0, 600.0, VizConfig::default()).unwrap()
	}

	fn connector_count(state: &PatternVizState, id: &str) -> usize {
		state.node(id).unwrap().connectors.len()
	}

	#[test]
	fn scenario_counts() {
		let state = build(&scenario());
		assert_eq!(state.nodes.len(), 4);
		assert_eq!(state.connectors.len(), 3);
		assert_eq!(connector_count(&state, "jee"), 2);
		assert_eq!(connector_count(&state, "broker"), 2);
		assert_eq!(connector_count(&state, "layers"), 1);
		assert_eq!(connector_count(&state, "ws"), 1);
	}

	#[test]
	fn connectors_belong_to_exactly_their_endpoints() {
		let state = build(&scenario());
		for (c, connector) in state.connectors.iter().enumerate() {
			let (a, b) = connector.endpoints;
			for (n, node) in state.nodes.iter().enumerate() {
				let hits = node.connectors.iter().filter(|&&x| x == c).count();
				let expected = usize::from(n == a || n == b);
				assert_eq!(hits, expected, "connector {c} in node {}", node.id);
			}
		}
	}

	#[test]
	fn blocks_are_laid_out_independently() {
		let state = build(&scenario());
		let jee = state.node("jee").unwrap();
		let ws = state.node("ws").unwrap();
		let broker = state.node("broker").unwrap();
		let layers = state.node("layers").unwrap();
		assert_eq!((jee.x, jee.y), (60.0, 60.0));
		assert_eq!((ws.x, ws.y), (170.0, 60.0));
		assert_eq!((broker.x, broker.y), (440.0, 60.0));
		assert_eq!((layers.x, layers.y), (550.0, 60.0));
		assert_eq!(jee.category, Category::Technology);
		assert_eq!(broker.category, Category::Pattern);
		assert_eq!(jee.color, "#086fa1");
		assert_eq!(broker.color, "#ff8900");
	}

	#[test]
	fn connector_segment_joins_endpoint_positions() {
		let state = build(&scenario());
		let first = &state.connectors[0];
		assert_eq!(first.from, (60.0, 60.0));
		assert_eq!(first.to, (440.0, 60.0));
		assert!(state.connectors.iter().all(|c| !c.visible));
	}

	#[test]
	fn layout_is_deterministic() {
		let data = scenario();
		assert_eq!(build(&data), build(&data));
	}

	#[test]
	fn unknown_id_is_reported() {
		let mut data = scenario();
		data.relations.push(Relation::new("ws", "proxy"));
		let err = PatternVizState::new(&data, 800.0, 600.0, VizConfig::default()).unwrap_err();
		assert_eq!(
			err,
			VizError::UnknownNode {
				id: "proxy".into(),
				relation: 3
			}
		);
		assert!(err.to_string().contains("proxy"));
	}

	#[test]
	fn duplicate_id_is_rejected() {
		let mut data = scenario();
		data.patterns.push(EntityRecord::new("jee", "Again", ""));
		assert_eq!(
			PatternVizState::new(&data, 800.0, 600.0, VizConfig::default()),
			Err(VizError::DuplicateNode("jee".into()))
		);
	}

	#[test]
	fn self_relation_is_rejected() {
		let mut data = scenario();
		data.relations.insert(0, Relation::new("ws", "ws"));
		assert!(matches!(
			PatternVizState::new(&data, 800.0, 600.0, VizConfig::default()),
			Err(VizError::SelfRelation { relation: 0, .. })
		));
	}

	#[test]
	fn zero_sized_surface_is_rejected() {
		assert!(PatternVizState::new(&scenario(), 0.0, 600.0, VizConfig::default()).is_err());
	}

	#[test]
	fn enter_highlights_only_that_node_and_its_connectors() {
		let mut state = build(&scenario());
		let layers = state.index_of("layers").unwrap();
		state.enter(layers).unwrap();

		for node in &state.nodes {
			let expected = if node.id == "layers" {
				DotState::Highlighted
			} else {
				DotState::Idle
			};
			assert_eq!(node.state, expected, "{}", node.id);
		}
		let visible: Vec<_> = state.connectors.iter().map(|c| c.visible).collect();
		assert_eq!(visible, vec![false, true, false]);

		state.exit(layers).unwrap();
		assert!(state.nodes.iter().all(|n| n.state == DotState::Idle));
		assert!(state.connectors.iter().all(|c| !c.visible));
	}

	#[test]
	fn shared_connector_is_revealed_from_either_end() {
		let mut state = build(&scenario());
		let (jee, broker) = (state.index_of("jee").unwrap(), state.index_of("broker").unwrap());

		state.enter(broker).unwrap();
		assert!(state.connectors[0].visible);
		assert!(state.connectors[2].visible);
		assert!(!state.connectors[1].visible);
		state.exit(broker).unwrap();

		state.enter(jee).unwrap();
		assert!(state.connectors[0].visible);
		assert!(state.connectors[1].visible);
		assert!(!state.connectors[2].visible);
	}

	#[test]
	fn appearance_per_state() {
		let config = VizConfig::default();
		assert_eq!(DotState::Idle.appearance(&config), (1.0, 0.5));
		assert_eq!(DotState::Highlighted.appearance(&config), (1.15, 1.0));
	}

	#[test]
	fn activate_opens_uri_in_new_tab_once() {
		let state = build(&scenario());
		let navigator = RecordingNavigator::default();
		let jee = state.index_of("jee").unwrap();

		let navigation = state.activate(jee, &navigator).unwrap();
		assert_eq!(navigation.url, "http://en.wikipedia.org/wiki/Java_EE");
		assert_eq!(
			*navigator.opened.borrow(),
			vec![("http://en.wikipedia.org/wiki/Java_EE".to_string(), "_blank".to_string())]
		);
	}

	#[test]
	fn activate_with_empty_uri_still_navigates() {
		let state = build(&scenario());
		let navigator = RecordingNavigator::default();
		let ws = state.index_of("ws").unwrap();

		state.activate(ws, &navigator).unwrap();
		assert_eq!(*navigator.opened.borrow(), vec![(String::new(), "_blank".to_string())]);
	}

	#[test]
	fn out_of_range_index_is_reported_by_every_handler() {
		let mut state = build(&scenario());
		let before = state.clone();
		let missing = state.nodes.len();

		assert_eq!(state.enter(missing), Err(VizError::NoSuchNode(missing)));
		assert_eq!(state.exit(missing), Err(VizError::NoSuchNode(missing)));
		assert_eq!(
			state.activate(missing, &RecordingNavigator::default()),
			Err(VizError::NoSuchNode(missing))
		);
		assert_eq!(state, before);
	}
}
