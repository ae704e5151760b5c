//! Application use cases / business logic

pub mod batch;
pub mod generate;
pub mod render;

pub use batch::{BatchItem, BatchOutcome, BatchReport, BatchRunner};
pub use generate::AnagramGenerator;
pub use render::{OutputFormat, RenderConfig, Renderer};
