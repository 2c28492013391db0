//! Record store implementations of the repository traits.

mod csv_fan_repository;

pub use csv_fan_repository::CsvFanRepository;
