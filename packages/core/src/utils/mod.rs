//! Helpers over plain JSON values.

pub mod render;
pub mod sorted;

pub use render::render_json_to_string_block;
pub use sorted::{array_with_sorted_items, json_for_array_with_sorted_items, json_for_object_with_sorted_keys, object_with_sorted_keys};
