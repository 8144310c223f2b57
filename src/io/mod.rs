pub mod csv_export;
pub mod csv_import;
pub mod file;

pub use file::{data_dir, load_schedule, save_schedule};
