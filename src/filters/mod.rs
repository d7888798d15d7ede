//! # Filter Pipeline Module
//!
//! 메모리에 올라온 레코드 시퀀스를 검색 조건(필터 DTO)으로 좁히는 파이프라인입니다.
//!
//! ```text
//! records ──▶ [filter 1] ──▶ [filter 2] ──▶ ... ──▶ filtered records
//!               │ is_applicable(criteria)?  아니면 건너뜀
//! ```
//!
//! - [`Filter`] - 하나의 필드에 대한 조건. 조건 값이 있을 때만 적용됩니다.
//! - [`FilterChain`] - 등록 순서대로 적용 가능한 필터를 AND로 합성합니다.
//!   적용 가능한 필터가 없으면 입력 시퀀스가 그대로 통과합니다.
//!
//! 필터 결과는 지연 평가되는 iterator이며 입력 순서를 그대로 유지합니다.
//! 정규식 패턴은 필드 전체가 일치해야 하며, 잘못된 패턴은 레코드를 하나도
//! 소비하기 전에 `ValidationError`로 실패합니다.

pub mod field_filters;
pub mod user_filters;
pub mod mentorship_filters;
pub mod recommendation_filters;

pub use field_filters::{Bound, BoundFilter, EqualsFilter, OneOfFilter, PatternFilter};
pub use user_filters::user_filter_chain;
pub use mentorship_filters::mentorship_request_filter_chain;
pub use recommendation_filters::recommendation_request_filter_chain;

use regex::Regex;
use crate::core::errors::{AppError, AppResult};

/// 필터 사이를 흐르는 지연 레코드 시퀀스
pub type Records<'a, T> = Box<dyn Iterator<Item = T> + 'a>;

/// 단일 조건 필터
pub trait Filter<T, C>: Send + Sync {
    /// 로그와 에러 메시지에 쓰이는 필터 이름
    fn name(&self) -> &'static str;

    /// 이 필터가 보는 조건 필드가 채워져 있는지 확인합니다.
    fn is_applicable(&self, criteria: &C) -> bool;

    /// 조건을 만족하는 레코드만 남긴 시퀀스를 반환합니다.
    fn apply<'a>(&self, records: Records<'a, T>, criteria: &C) -> AppResult<Records<'a, T>>;
}

/// 등록 순서를 유지하는 필터 체인
pub struct FilterChain<T, C> {
    filters: Vec<Box<dyn Filter<T, C>>>,
}

impl<T: 'static, C: 'static> FilterChain<T, C> {
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// 필터를 체인 끝에 등록합니다.
    pub fn register<F>(mut self, filter: F) -> Self
    where
        F: Filter<T, C> + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// 조건에 대해 적용될 필터 이름 (등록 순서)
    pub fn applicable(&self, criteria: &C) -> Vec<&'static str> {
        self.filters
            .iter()
            .filter(|filter| filter.is_applicable(criteria))
            .map(|filter| filter.name())
            .collect()
    }

    /// 적용 가능한 필터들을 등록 순서대로 합성합니다.
    pub fn apply<'a, I>(&self, records: I, criteria: &C) -> AppResult<Records<'a, T>>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        let mut records: Records<'a, T> = Box::new(records.into_iter());

        for filter in self.filters.iter().filter(|filter| filter.is_applicable(criteria)) {
            log::debug!("필터 적용: {}", filter.name());
            records = filter.apply(records, criteria)?;
        }

        Ok(records)
    }

    /// [`apply`](Self::apply) 결과를 `Vec`으로 모읍니다.
    pub fn filter_all(&self, records: Vec<T>, criteria: &C) -> AppResult<Vec<T>> {
        Ok(self.apply(records, criteria)?.collect())
    }
}

impl<T: 'static, C: 'static> Default for FilterChain<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

/// 필드 전체 일치 정규식을 컴파일합니다.
///
/// `Seoul|Busan`은 `^(?:Seoul|Busan)$`로 컴파일되어 `Seoul City`와 일치하지 않습니다.
pub fn pattern_regex(pattern: &str, field: &str) -> AppResult<Regex> {
    Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
        AppError::ValidationError(format!("{} 패턴이 올바르지 않습니다: {}", field, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        size: i32,
    }

    #[derive(Default)]
    struct Criteria {
        name_pattern: Option<String>,
        min_size: Option<i32>,
    }

    fn chain() -> FilterChain<Item, Criteria> {
        FilterChain::new()
            .register(PatternFilter::new(
                "name",
                |c: &Criteria| c.name_pattern.as_deref(),
                |item: &Item| Some(item.name),
            ))
            .register(BoundFilter::new(
                "min_size",
                Bound::AtLeast,
                |c: &Criteria| c.min_size,
                |item: &Item| Some(item.size),
            ))
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "apple", size: 3 },
            Item { name: "avocado", size: 5 },
            Item { name: "banana", size: 7 },
        ]
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let result = chain().filter_all(items(), &Criteria::default()).unwrap();
        assert_eq!(result, items());
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain: FilterChain<Item, Criteria> = FilterChain::new();
        let criteria = Criteria { min_size: Some(100), ..Default::default() };
        assert_eq!(chain.filter_all(items(), &criteria).unwrap(), items());
    }

    #[test]
    fn test_filters_compose_with_and() {
        let criteria = Criteria { name_pattern: Some("a.*".to_string()), min_size: Some(4) };

        let result = chain().filter_all(items(), &criteria).unwrap();

        assert_eq!(result, vec![Item { name: "avocado", size: 5 }]);
        assert_eq!(chain().applicable(&criteria), vec!["name", "min_size"]);
    }

    #[test]
    fn test_disjoint_filters_commute() {
        let reversed: FilterChain<Item, Criteria> = FilterChain::new()
            .register(BoundFilter::new(
                "min_size",
                Bound::AtLeast,
                |c: &Criteria| c.min_size,
                |item: &Item| Some(item.size),
            ))
            .register(PatternFilter::new(
                "name",
                |c: &Criteria| c.name_pattern.as_deref(),
                |item: &Item| Some(item.name),
            ));
        let criteria = Criteria { name_pattern: Some("a.*|b.*".to_string()), min_size: Some(5) };

        assert_eq!(
            chain().filter_all(items(), &criteria).unwrap(),
            reversed.filter_all(items(), &criteria).unwrap()
        );
    }

    #[test]
    fn test_pattern_must_match_whole_field() {
        let criteria = Criteria { name_pattern: Some("app".to_string()), ..Default::default() };
        assert!(chain().filter_all(items(), &criteria).unwrap().is_empty());

        let regex = pattern_regex("Seoul|Busan", "city").unwrap();
        assert!(regex.is_match("Busan"));
        assert!(!regex.is_match("Seoul City"));
    }

    #[test]
    fn test_invalid_pattern_fails() {
        let criteria = Criteria { name_pattern: Some("(".to_string()), ..Default::default() };
        let result = chain().filter_all(items(), &criteria);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
