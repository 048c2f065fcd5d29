pub mod bar_raster;
