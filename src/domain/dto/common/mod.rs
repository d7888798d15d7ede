//! 여러 도메인에서 공유하는 DTO

pub mod rejection;

pub use rejection::RejectionDto;
