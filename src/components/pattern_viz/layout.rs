/// Grid coordinates of the `index`-th dot of a block.
///
/// Dots fill a block row by row: `column = index % columns`,
/// `row = index / columns`. Callers guarantee `columns > 0`.
pub fn grid_position(index: usize, columns: usize, origin: (f64, f64), spacing: f64) -> (f64, f64) {
	let (column, row) = (index % columns, index / columns);
	(
		origin.0 + column as f64 * spacing,
		origin.1 + row as f64 * spacing,
	)
}
