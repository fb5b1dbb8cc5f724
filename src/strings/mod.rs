//! 문자열 처리 모듈
//!
//! 뒤집기, 케이스 변환, 절단 등 단일 순회 문자열 변환 함수들을
//! 제공합니다. 모든 함수는 문자(char) 경계를 존중하여 멀티바이트
//! 문자열에서도 안전합니다.

use once_cell::sync::Lazy;
use regex::Regex;

static CAMEL_BOUNDARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("invalid camel boundary pattern"));

/// 문자 순서를 뒤집은 문자열을 반환합니다
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// 문자열이 회문(palindrome)인지 확인합니다
///
/// 대소문자와 공백은 무시합니다.
pub fn is_palindrome(s: &str) -> bool {
    let cleaned: String = s
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_lowercase)
        .collect();
    cleaned == reverse(&cleaned)
}

/// 각 단어의 첫 글자를 대문자로 변환합니다
///
/// 나머지 글자는 소문자로 변환됩니다.
pub fn capitalize(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>()
                        + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 문자열을 camelCase로 변환합니다
///
/// 공백으로 구분된 단어들을 결합하며, 첫 단어는 모두 소문자로,
/// 이후 단어는 첫 글자만 대문자로 변환합니다.
pub fn camel_case(s: &str) -> String {
    let mut words = s.split_whitespace();

    let first = match words.next() {
        Some(word) => word.to_lowercase(),
        None => return s.to_string(),
    };

    let rest: String = words
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => {
                    c.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect();

    first + &rest
}

/// 문자열을 snake_case로 변환합니다
///
/// camelCase 경계에 언더스코어를 삽입한 뒤 전체를 소문자로 변환하고,
/// 공백을 언더스코어로 치환합니다.
pub fn snake_case(s: &str) -> String {
    let snake = CAMEL_BOUNDARY_REGEX.replace_all(s, "${1}_${2}");
    snake.to_lowercase().replace(' ', "_")
}

/// 문자열을 지정한 길이로 절단하고 접미사를 붙입니다
///
/// 길이는 문자(char) 수 기준입니다. 원본이 길이 이하이면 그대로
/// 반환합니다.
///
/// # 예제
///
/// ```rust,ignore
/// assert_eq!(truncate("hello world", 8, "..."), "hello...");
/// ```
pub fn truncate(s: &str, length: usize, suffix: &str) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }

    let keep = length.saturating_sub(suffix.chars().count());
    let truncated: String = s.chars().take(keep).collect();
    truncated + suffix
}

/// 모든 공백 문자를 제거합니다
pub fn remove_spaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// 공백으로 구분된 단어 수를 셉니다
pub fn count_words(s: &str) -> usize {
    s.split_whitespace().count()
}

/// 문자열이 비어 있거나 공백만으로 구성되어 있는지 확인합니다
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// 대소문자를 무시하고 부분 문자열 포함 여부를 확인합니다
pub fn contains_ignore_case(s: &str, substr: &str) -> bool {
    s.to_lowercase().contains(&substr.to_lowercase())
}
