pub mod header;
pub mod pending_list;
pub mod processing_indicator;
pub mod results_gallery;
pub mod upload_area;
