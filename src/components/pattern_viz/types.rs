/// One technology or pattern as supplied by the host page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRecord {
	/// Unique key, shared by both lists.
	pub id: String,
	/// Label text; `\n` starts a new line.
	pub name: String,
	/// Link opened on click, may be empty.
	pub uri: String,
}

impl EntityRecord {
	/// Creates a record from anything string-like.
	pub fn new(id: impl Into<String>, name: impl Into<String>, uri: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			uri: uri.into(),
		}
	}
}

/// A declared link between a technology (`from_id`) and a pattern (`to_id`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Relation {
	/// Technology end.
	pub from_id: String,
	/// Pattern end.
	pub to_id: String,
}

impl Relation {
	/// Relation between two ids.
	pub fn new(from_id: impl Into<String>, to_id: impl Into<String>) -> Self {
		Self {
			from_id: from_id.into(),
			to_id: to_id.into(),
		}
	}
}

/// Everything the diagram is built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagramData {
	/// Left block, in layout order.
	pub technologies: Vec<EntityRecord>,
	/// Right block, in layout order.
	pub patterns: Vec<EntityRecord>,
	/// Lines to draw, in drawing order.
	pub relations: Vec<Relation>,
}

/// Which block a dot belongs to; decides its fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
	/// Left block.
	Technology,
	/// Right block.
	Pattern,
}
