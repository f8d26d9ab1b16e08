pub mod collision;
pub mod orbit_headless;
pub mod orbit_vis2d;
