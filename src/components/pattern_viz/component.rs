use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::error;

use super::config::VizConfig;
use super::navigate::{BrowserNavigator, Navigator};
use super::render;
use super::state::{ConnectorIdx, NodeIdx, PatternVizState};
use super::types::DiagramData;

/// Relationship diagram of technologies and patterns.
///
/// Building the registry is all-or-nothing: a bad relation or a duplicate id
/// turns the whole view into an error for the surrounding `ErrorBoundary`.
#[component]
pub fn PatternViz(
	#[prop(into)] dom_id: String,
	width: f64,
	height: f64,
	data: DiagramData,
	#[prop(optional)] config: Option<VizConfig>,
) -> impl IntoView {
	PatternVizState::new(&data, width, height, config.unwrap_or_default()).map(|state| {
		view! {
			<div id=dom_id class="pattern-viz">
				{diagram_view(state, BrowserNavigator)}
			</div>
		}
	})
}

/// The SVG surface: connectors first so they stay beneath every dot.
pub fn diagram_view<N>(state: PatternVizState, navigator: N) -> impl IntoView
where
	N: Navigator + Clone + Send + Sync + 'static,
{
	let (width, height) = (state.width, state.height);
	let (node_count, connector_count) = (state.nodes.len(), state.connectors.len());
	let state = RwSignal::new(state);

	let connectors = (0..connector_count)
		.map(|c| connector_view(state, c))
		.collect_view();
	let dots = (0..node_count)
		.map(|idx| dot_view(state, idx, navigator.clone()))
		.collect_view();

	view! {
		<svg
			width=width.to_string()
			height=height.to_string()
			viewBox=format!("0 0 {width} {height}")
		>
			<g class="connectors">{connectors}</g>
			<g class="dots">{dots}</g>
		</svg>
	}
}

fn connector_view(state: RwSignal<PatternVizState>, c: ConnectorIdx) -> impl IntoView {
	let (d, stroke, stroke_width) = state.with_untracked(|s| {
		(
			render::connector_path(&s.connectors[c]),
			s.config.connector_color.clone(),
			s.config.connector_width,
		)
	});
	let visible = Memo::new(move |_| state.with(|s| s.connectors[c].visible));

	view! {
		<path
			d=d
			fill="none"
			stroke=stroke
			stroke-width=stroke_width.to_string()
			style=move || {
				let shown = visible.get();
				state.with_untracked(|s| render::connector_style(shown, &s.config))
			}
		/>
	}
}

fn dot_view<N>(state: RwSignal<PatternVizState>, idx: NodeIdx, navigator: N) -> impl IntoView
where
	N: Navigator + Clone + Send + Sync + 'static,
{
	let (x, y, radius, fill, lines, label_color, label_style) = state.with_untracked(|s| {
		let node = &s.nodes[idx];
		(
			node.x,
			node.y,
			s.config.radius,
			node.color.clone(),
			render::label_lines(&node.label, s.config.line_height),
			s.config.label_color.clone(),
			render::label_style(&s.config),
		)
	});

	// Hovering one dot rewrites the shared signal; the memo keeps every other
	// circle's style untouched.
	let dot_state = Memo::new(move |_| state.with(|s| s.nodes[idx].state));
	let circle_style = move || {
		let dot = dot_state.get();
		state.with_untracked(|s| render::circle_style(x, y, dot, &s.config))
	};

	let on_enter = move |_: MouseEvent| {
		if let Some(Err(e)) = state.try_update(|s| s.enter(idx)) {
			error!("highlighting dot #{idx} failed: {e}");
		}
	};
	let on_exit = move |_: MouseEvent| {
		if let Some(Err(e)) = state.try_update(|s| s.exit(idx)) {
			error!("resetting dot #{idx} failed: {e}");
		}
	};
	let on_click = move |nav: N| {
		move |_: MouseEvent| {
			if let Err(e) = state.with_untracked(|s| s.activate(idx, &nav)) {
				error!("opening link of dot #{idx} failed: {e}");
			}
		}
	};

	let tspans = lines
		.into_iter()
		.map(|(line, dy)| {
			view! {
				<tspan x=x.to_string() dy=format!("{dy}em")>
					{line}
				</tspan>
			}
		})
		.collect_view();

	view! {
		<g class="dot">
			<circle
				cx=x.to_string()
				cy=y.to_string()
				r=radius.to_string()
				fill=fill
				stroke-width="0"
				style=circle_style
				on:mouseenter=on_enter
				on:mouseleave=on_exit
				on:click=on_click(navigator.clone())
			/>
			<text
				x=x.to_string()
				y=y.to_string()
				fill=label_color
				text-anchor="middle"
				dominant-baseline="central"
				style=label_style
				on:mouseenter=on_enter
				on:mouseleave=on_exit
				on:click=on_click(navigator)
			>
				{tspans}
			</text>
		</g>
	}
}
