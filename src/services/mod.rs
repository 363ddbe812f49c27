pub mod conversion_service;
pub mod rate_provider;
pub mod user_service;
