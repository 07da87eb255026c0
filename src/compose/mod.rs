pub mod ops;
pub mod postprocess;
pub mod svg;
