//! 사용자 관리 서비스 모듈
//!
//! 사용자 프로필 생성/조회/검색, 계정 비활성화, 아바타 키 관리를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user = state.user_service.get_user(&id, Some(&viewer_id)).await?;
//! ```

pub mod user_service;
pub mod avatar_service;

pub use user_service::UserService;
pub use avatar_service::{AvatarService, AvatarUpload};
