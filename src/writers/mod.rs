pub mod json_writer;
pub mod text_renderer;

pub use json_writer::JsonWriter;
pub use text_renderer::TextRenderer;
