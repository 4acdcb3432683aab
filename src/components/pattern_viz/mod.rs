mod component;
mod config;
mod error;
mod layout;
mod mount;
mod navigate;
mod render;
mod state;
mod types;

pub use component::PatternViz;
pub use config::VizConfig;
pub use error::VizError;
pub use mount::{PatternVizHandle, mount_pattern_viz};
pub use navigate::{BrowserNavigator, Navigator};
pub use state::{DotState, Navigation, PatternVizState};
pub use types::{Category, DiagramData, EntityRecord, Relation};
