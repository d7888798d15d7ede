//! BSON 시각 ↔ `chrono` 시각 변환
//!
//! 엔티티는 MongoDB에 네이티브 날짜로 저장되도록 BSON `DateTime`을 쓰고,
//! DTO와 이벤트는 RFC 3339로 직렬화되는 `chrono::DateTime<Utc>`를 씁니다.

use chrono::Utc;
use mongodb::bson;

/// BSON 시각을 `chrono` 시각으로 변환합니다.
///
/// 표현 범위를 벗어나는 값은 유닉스 epoch로 바뀝니다.
pub fn to_chrono(value: bson::DateTime) -> chrono::DateTime<Utc> {
    chrono::DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

pub fn to_bson(value: chrono::DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(value.timestamp_millis())
}
