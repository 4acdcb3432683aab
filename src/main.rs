// The binary only mounts the app; every other dependency is used by the library.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use pattern_viz::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
