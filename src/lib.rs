pub mod canvas;
pub mod contents_json;
pub mod curves;
pub mod export;
pub mod glyph;
pub mod gradient;
pub mod icon_gen;
pub mod preset;
pub mod raster;
