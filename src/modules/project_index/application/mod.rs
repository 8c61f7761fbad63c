pub mod ports;
pub mod project_index_use_cases;
pub mod use_cases;
