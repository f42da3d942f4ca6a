pub mod builder;
pub mod raster;
pub(crate) mod resample;
