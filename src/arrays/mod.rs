//! 슬라이스 조작 모듈
//!
//! 멤버십 검사, 중복 제거, 분할, 평탄화 등 단일 순회 슬라이스 연산을
//! 제공합니다. 모든 함수는 입력을 변경하지 않고 새 벡터를 반환합니다.

use std::collections::HashSet;
use std::hash::Hash;

/// 슬라이스에 특정 요소가 포함되어 있는지 확인합니다
pub fn contains<T: PartialEq>(slice: &[T], element: &T) -> bool {
    slice.iter().any(|item| item == element)
}

/// 요소의 첫 번째 등장을 제거한 새 벡터를 반환합니다
///
/// 요소가 없으면 원본과 같은 내용의 벡터를 반환합니다.
pub fn remove_first<T: PartialEq + Clone>(slice: &[T], element: &T) -> Vec<T> {
    let mut result = Vec::with_capacity(slice.len());
    let mut removed = false;

    for item in slice {
        if !removed && item == element {
            removed = true;
            continue;
        }
        result.push(item.clone());
    }

    result
}

/// 중복 요소를 제거한 새 벡터를 반환합니다
///
/// 첫 등장 순서가 유지됩니다.
pub fn unique<T: Eq + Hash + Clone>(slice: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for item in slice {
        if seen.insert(item.clone()) {
            result.push(item.clone());
        }
    }

    result
}

/// 요소 순서를 뒤집은 새 벡터를 반환합니다
pub fn reverse<T: Clone>(slice: &[T]) -> Vec<T> {
    slice.iter().rev().cloned().collect()
}

/// 슬라이스를 지정한 크기의 청크들로 분할합니다
///
/// 마지막 청크는 크기가 더 작을 수 있습니다. 크기가 0이면 빈 결과를
/// 반환합니다.
pub fn chunk<T: Clone>(slice: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }

    slice.chunks(size).map(|c| c.to_vec()).collect()
}

/// 2차원 슬라이스를 1차원 벡터로 평탄화합니다
pub fn flatten<T: Clone>(slices: &[Vec<T>]) -> Vec<T> {
    slices.iter().flatten().cloned().collect()
}
