//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리와 이벤트 발행자를 `Arc<dyn ...>`로 주입받아 생성되며,
//! [`AppState`](crate::core::state::AppState)가 한 번 조립해 핸들러에 공유합니다.
//!
//! - [`users`] - 사용자 프로필, 아바타, 비활성화
//! - [`mentorship`] - 멘토/멘티 관계와 멘토십 요청
//! - [`recommendation`] - 추천 요청
//! - [`requests`] - 두 요청 종류가 공유하는 생명주기
//! - [`events`] - 이벤트 발행과 밴 이벤트 구독

pub mod events;
pub mod requests;
pub mod mentorship;
pub mod recommendation;
pub mod users;
