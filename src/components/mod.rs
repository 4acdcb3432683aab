pub mod pattern_viz;
