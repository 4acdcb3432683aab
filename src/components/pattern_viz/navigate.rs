use super::error::VizError;

/// Opens urls on behalf of the diagram.
pub trait Navigator {
	/// Opens `url` in the browsing context named `target`.
	fn open(&self, url: &str, target: &str) -> Result<(), VizError>;
}

/// `window.open` of the current document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
	fn open(&self, url: &str, target: &str) -> Result<(), VizError> {
		let window = web_sys::window().ok_or_else(|| VizError::Browser("no window".into()))?;
		window
			.open_with_url_and_target(url, target)
			.map_err(|e| VizError::Browser(format!("window.open failed: {e:?}")))?;
		Ok(())
	}
}
