//! 필드 단위 필터 구성 요소
//!
//! 도메인별 필터 체인은 아래 구성 요소에 "조건 필드 접근자"와
//! "레코드 필드 접근자"를 넘겨 만듭니다. 접근자는 함수 포인터이므로
//! 체인은 시작 시 한 번 만들어진 디스패치 테이블로 동작합니다.

use std::collections::HashSet;
use super::{pattern_regex, Filter, Records};
use crate::core::errors::AppResult;

/// 정규식 전체 일치 필터
///
/// 레코드 필드가 `None`이면 어떤 패턴과도 일치하지 않습니다.
pub struct PatternFilter<T, C> {
    name: &'static str,
    criterion: fn(&C) -> Option<&str>,
    field: fn(&T) -> Option<&str>,
}

impl<T, C> PatternFilter<T, C> {
    pub fn new(
        name: &'static str,
        criterion: fn(&C) -> Option<&str>,
        field: fn(&T) -> Option<&str>,
    ) -> Self {
        Self { name, criterion, field }
    }
}

impl<T: 'static, C: 'static> Filter<T, C> for PatternFilter<T, C> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_applicable(&self, criteria: &C) -> bool {
        (self.criterion)(criteria).is_some()
    }

    fn apply<'a>(&self, records: Records<'a, T>, criteria: &C) -> AppResult<Records<'a, T>> {
        let Some(pattern) = (self.criterion)(criteria) else {
            return Ok(records);
        };
        let regex = pattern_regex(pattern, self.name)?;
        let field = self.field;

        Ok(Box::new(records.filter(move |record| {
            field(record).is_some_and(|value| regex.is_match(value))
        })))
    }
}

/// ID 목록 포함 필터
///
/// 빈 목록은 적용되지 않습니다.
pub struct OneOfFilter<T, C> {
    name: &'static str,
    criterion: fn(&C) -> &[String],
    field: fn(&T) -> &str,
}

impl<T, C> OneOfFilter<T, C> {
    pub fn new(name: &'static str, criterion: fn(&C) -> &[String], field: fn(&T) -> &str) -> Self {
        Self { name, criterion, field }
    }
}

impl<T: 'static, C: 'static> Filter<T, C> for OneOfFilter<T, C> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_applicable(&self, criteria: &C) -> bool {
        !(self.criterion)(criteria).is_empty()
    }

    fn apply<'a>(&self, records: Records<'a, T>, criteria: &C) -> AppResult<Records<'a, T>> {
        let allowed: HashSet<String> = (self.criterion)(criteria).iter().cloned().collect();
        let field = self.field;

        Ok(Box::new(records.filter(move |record| allowed.contains(field(record)))))
    }
}

/// 값 일치 필터 (상태, 단일 ID)
pub struct EqualsFilter<T, C> {
    name: &'static str,
    criterion: fn(&C) -> Option<&str>,
    field: fn(&T) -> &str,
}

impl<T, C> EqualsFilter<T, C> {
    pub fn new(name: &'static str, criterion: fn(&C) -> Option<&str>, field: fn(&T) -> &str) -> Self {
        Self { name, criterion, field }
    }
}

impl<T: 'static, C: 'static> Filter<T, C> for EqualsFilter<T, C> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_applicable(&self, criteria: &C) -> bool {
        (self.criterion)(criteria).is_some()
    }

    fn apply<'a>(&self, records: Records<'a, T>, criteria: &C) -> AppResult<Records<'a, T>> {
        let Some(expected) = (self.criterion)(criteria).map(str::to_string) else {
            return Ok(records);
        };
        let field = self.field;

        Ok(Box::new(records.filter(move |record| field(record) == expected)))
    }
}

/// 경계 비교 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// 값 ≥ 경계
    AtLeast,
    /// 값 ≤ 경계
    AtMost,
    /// 값 > 경계
    After,
    /// 값 < 경계
    Before,
}

impl Bound {
    fn admits<V: PartialOrd>(self, value: &V, bound: &V) -> bool {
        match self {
            Bound::AtLeast => value >= bound,
            Bound::AtMost => value <= bound,
            Bound::After => value > bound,
            Bound::Before => value < bound,
        }
    }
}

/// 범위 경계 필터 (경력 최소/최대, 생성 시각 이후/이전)
///
/// 레코드 필드가 `None`이면 걸러집니다.
pub struct BoundFilter<T, C, V> {
    name: &'static str,
    bound: Bound,
    criterion: fn(&C) -> Option<V>,
    field: fn(&T) -> Option<V>,
}

impl<T, C, V> BoundFilter<T, C, V> {
    pub fn new(
        name: &'static str,
        bound: Bound,
        criterion: fn(&C) -> Option<V>,
        field: fn(&T) -> Option<V>,
    ) -> Self {
        Self { name, bound, criterion, field }
    }
}

impl<T, C, V> Filter<T, C> for BoundFilter<T, C, V>
where
    T: 'static,
    C: 'static,
    V: PartialOrd + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_applicable(&self, criteria: &C) -> bool {
        (self.criterion)(criteria).is_some()
    }

    fn apply<'a>(&self, records: Records<'a, T>, criteria: &C) -> AppResult<Records<'a, T>> {
        let Some(limit) = (self.criterion)(criteria) else {
            return Ok(records);
        };
        let (bound, field) = (self.bound, self.field);

        Ok(Box::new(records.filter(move |record| {
            field(record).is_some_and(|value| bound.admits(&value, &limit))
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_admits() {
        assert!(Bound::AtLeast.admits(&3, &3));
        assert!(Bound::AtMost.admits(&3, &3));
        assert!(!Bound::After.admits(&3, &3));
        assert!(!Bound::Before.admits(&3, &3));
        assert!(Bound::Before.admits(&2, &3));
    }
}
