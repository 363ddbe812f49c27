pub mod conversion_dto;
pub mod user_dto;
