use leptos::mount::{UnmountHandle, mount_to};
use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyViewState;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::component::diagram_view;
use super::config::VizConfig;
use super::error::VizError;
use super::navigate::BrowserNavigator;
use super::state::PatternVizState;
use super::types::DiagramData;

/// A diagram mounted into a host element. Dropping it removes the diagram.
pub struct PatternVizHandle {
	_mounted: UnmountHandle<AnyViewState>,
}

/// Builds the diagram and mounts it into the element with id `dom_id`.
pub fn mount_pattern_viz(
	dom_id: &str,
	width: f64,
	height: f64,
	data: DiagramData,
	config: VizConfig,
) -> Result<PatternVizHandle, VizError> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| VizError::Browser("no document".into()))?;
	let container: HtmlElement = document
		.get_element_by_id(dom_id)
		.ok_or_else(|| VizError::ContainerNotFound(dom_id.into()))?
		.dyn_into()
		.map_err(|_| VizError::ContainerNotFound(dom_id.into()))?;

	let state = PatternVizState::new(&data, width, height, config)?;
	let mounted = mount_to(container, move || diagram_view(state, BrowserNavigator).into_any());
	info!("pattern diagram mounted into #{dom_id}");

	Ok(PatternVizHandle { _mounted: mounted })
}
