use leptos::prelude::*;

use crate::components::pattern_viz::{DiagramData, EntityRecord, PatternViz, Relation};

/// Java EE technologies and the enterprise patterns they implement.
fn sample_data() -> DiagramData {
	let technologies = [
		("jee", "JEE", "http://en.wikipedia.org/wiki/Java_EE"),
		("11", "JSP", ""),
		("13", "JSF", ""),
		("14", "EJB", ""),
		("15", "JPA", ""),
		("16", "SOAP", ""),
		("17", "JMS", ""),
		("ws", "WS", ""),
		("20", "WSDL", ""),
		("21", "XML", ""),
	];
	let patterns = [
		("broker", "Broker", "http://en.wikipedia.org/wiki/Message_broker"),
		("1", "Front\nController", ""),
		("2", "Page\nController", ""),
		("layers", "Layers", ""),
		("3", "MVC", ""),
		("lazy", "Lazy Load", ""),
		("5", "Observer", ""),
		("proxy", "Proxy", ""),
	];
	let relations = [
		("jee", "broker"),
		("jee", "layers"),
		("jee", "lazy"),
		("jee", "proxy"),
		("ws", "broker"),
		("ws", "layers"),
	];

	let records = |rows: &[(&str, &str, &str)]| -> Vec<EntityRecord> {
		rows.iter()
			.map(|&(id, name, uri)| EntityRecord::new(id, name, uri))
			.collect()
	};
	DiagramData {
		technologies: records(&technologies),
		patterns: records(&patterns),
		relations: relations
			.iter()
			.map(|&(from, to)| Relation::new(from, to))
			.collect(),
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<h1>"Technologies & Patterns"</h1>
			<p class="subtitle">"Hover a dot to see its relations. Click it to read more."</p>
			<PatternViz dom_id="vizDiv" width=800.0 height=600.0 data=sample_data() />
		</ErrorBoundary>
	}
}
