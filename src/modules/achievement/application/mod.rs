pub mod achievement_use_cases;
pub mod ports;
pub mod services;
