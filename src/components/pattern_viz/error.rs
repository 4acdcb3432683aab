use thiserror::Error;

/// Errors raised while building or mounting a pattern diagram.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VizError {
	/// A relation names an id that no technology or pattern carries.
	#[error("relation #{relation} references unknown node `{id}`")]
	UnknownNode {
		/// The id that was not found.
		id: String,
		/// Position of the relation in the input list.
		relation: usize,
	},

	/// Two records share the same id.
	#[error("duplicate node id `{0}`")]
	DuplicateNode(String),

	/// A relation connects a node to itself.
	#[error("relation #{relation} connects `{id}` to itself")]
	SelfRelation {
		/// The id on both ends.
		id: String,
		/// Position of the relation in the input list.
		relation: usize,
	},

	/// A handler was bound to a node index outside the registry.
	#[error("no node at index {0}")]
	NoSuchNode(usize),

	/// A [`VizConfig`](super::VizConfig) value or the surface size is unusable.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	/// No element with the requested id exists in the document.
	#[error("container element `{0}` not found")]
	ContainerNotFound(String),

	/// `window`/`document` is missing or a DOM call threw.
	#[error("browser error: {0}")]
	Browser(String),
}
