pub mod image_io;
pub mod page_pipeline;
pub mod palette_loader;

pub use page_pipeline::{ColorReport, LineArtSummary, PagePipeline};
pub use palette_loader::{load_palette, parse_palette};
