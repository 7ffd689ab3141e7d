//! Output adapters for analysis results

mod table;

pub use table::{
    write_box_samples, write_box_samples_to_path, write_radial_density,
    write_radial_density_to_path, write_scale_series, write_scale_series_to_path,
};
