//! # Validators Module
//!
//! 상태 전이 전에 호출되는 규칙 검사들입니다. 각 검사는 위반 시
//! 해당 규칙 전용 에러 종류로 실패하며, 어떤 상태도 변경하지 않습니다.
//!
//! | 검사 | 실패 에러 |
//! |------|-----------|
//! | 참여자 검사 (요청자 ≠ 수신자, 둘 다 존재) | `InvalidParticipants` |
//! | 빈도 검사 (쿨다운 기간 내 이전 요청) | `DuplicateRequestWindow` |
//! | 상태 검사 (PENDING에서만 전이) | `InvalidStateTransition` |
//! | 역할 검사 (멘토십 순환 / 이미 멘토) | `CyclicMentorship` / `ConflictError` |
//! | 추천 요청 내용 검사 (메시지, 스킬) | `ValidationError` |

pub mod request_validator;
pub mod mentorship_validator;
pub mod recommendation_validator;

pub use request_validator::*;
pub use mentorship_validator::*;
pub use recommendation_validator::*;
