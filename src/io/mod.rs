//! PDF file I/O: loading documents and atomic writes.

pub mod reader;
pub mod writer;

pub use reader::load_pdf;
pub use writer::write_atomic;
