pub mod talks;

pub use talks::all_talks;
