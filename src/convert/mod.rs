//! 타입 변환 모듈
//!
//! 동적 타입 값([`Value`])을 기본 타입으로 강제 변환하는 순수 함수들을
//! 제공합니다. 모든 변환은 동기적이고 부수 효과가 없으며, 실패는 항상
//! [`ConvertError`]로 반환됩니다. 지원되는 소스 종류마다 변환 규칙이
//! 명시적으로 정의되어 있고, 규칙이 없는 종류는 `UnsupportedType`으로
//! 실패합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use common_utils::convert::{self, Value};
//!
//! assert_eq!(convert::to_int(&Value::from("42"))?, 42);
//! assert_eq!(convert::to_bool(&Value::from(1i64))?, true);
//! assert_eq!(convert::to_string_value(&Value::from(3.14f64)), "3.14");
//! ```

pub mod value;

pub use value::Value;

use serde::Serialize;

use crate::errors::{ConvertError, ConvertResult};

/// 동적 타입 값을 64비트 정수로 변환합니다
///
/// # 변환 규칙
///
/// - 정수: 그대로 통과 (32비트는 확장)
/// - 부동소수점: 0 방향으로 절사
/// - 문자열: 10진 정수 리터럴로 파싱 (실패 시 `Parse`)
/// - 불리언: `true` → 1, `false` → 0
/// - 그 외: `UnsupportedType`
///
/// # 예제
///
/// ```rust,ignore
/// assert_eq!(to_int(&Value::from("42"))?, 42);
/// assert_eq!(to_int(&Value::from(3.9f64))?, 3);
/// assert!(to_int(&Value::List(vec![])).is_err());
/// ```
pub fn to_int(value: &Value) -> ConvertResult<i64> {
    match value {
        Value::Int(n) => Ok(*n),
        Value::Int32(n) => Ok(i64::from(*n)),
        Value::Float(x) => Ok(*x as i64),
        Value::Float32(x) => Ok(*x as i64),
        Value::Str(s) => s.parse::<i64>().map_err(|_| ConvertError::Parse {
            value: s.clone(),
            target: "i64",
        }),
        Value::Bool(b) => Ok(if *b { 1 } else { 0 }),
        Value::List(_) | Value::Null => Err(ConvertError::UnsupportedType {
            kind: value.kind(),
            target: "i64",
        }),
    }
}

/// 동적 타입 값을 불리언으로 변환합니다
///
/// # 변환 규칙
///
/// - 불리언: 그대로 통과
/// - 문자열: 정규 불리언 리터럴 문법으로 파싱
///   (`1`, `t`, `T`, `TRUE`, `true`, `True` / `0`, `f`, `F`, `FALSE`,
///   `false`, `False`; 그 외는 `Parse`)
/// - 수치 타입: `값 != 0`
/// - 그 외: `UnsupportedType`
pub fn to_bool(value: &Value) -> ConvertResult<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Str(s) => match s.as_str() {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(ConvertError::Parse {
                value: s.clone(),
                target: "bool",
            }),
        },
        Value::Int(n) => Ok(*n != 0),
        Value::Int32(n) => Ok(*n != 0),
        Value::Float(x) => Ok(*x != 0.0),
        Value::Float32(x) => Ok(*x != 0.0),
        Value::List(_) | Value::Null => Err(ConvertError::UnsupportedType {
            kind: value.kind(),
            target: "bool",
        }),
    }
}

/// 동적 타입 값을 64비트 부동소수점으로 변환합니다
///
/// # 변환 규칙
///
/// - 부동소수점: 그대로 통과 (32비트는 확장)
/// - 정수: 부동소수점으로 변환
/// - 문자열: 10진 부동소수점 리터럴로 파싱 (실패 시 `Parse`)
/// - 불리언: `true` → 1.0, `false` → 0.0
/// - 그 외: `UnsupportedType`
pub fn to_float(value: &Value) -> ConvertResult<f64> {
    match value {
        Value::Float(x) => Ok(*x),
        Value::Float32(x) => Ok(f64::from(*x)),
        Value::Int(n) => Ok(*n as f64),
        Value::Int32(n) => Ok(f64::from(*n)),
        Value::Str(s) => s.parse::<f64>().map_err(|_| ConvertError::Parse {
            value: s.clone(),
            target: "f64",
        }),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::List(_) | Value::Null => Err(ConvertError::UnsupportedType {
            kind: value.kind(),
            target: "f64",
        }),
    }
}

/// 동적 타입 값을 문자열로 변환합니다
///
/// 전체 함수(total function)로, 절대 실패하지 않습니다. 지원되는 모든
/// 종류에 대해 정규 문자열 표현이 정의되어 있으며 ([`Value`]의
/// `Display` 구현 참조), 그 외의 종류는 디버그 성격의 대체 표현을
/// 사용합니다.
pub fn to_string_value(value: &Value) -> String {
    value.to_string()
}

/// 동적 타입 값 슬라이스를 정수 벡터로 변환합니다
///
/// 요소별로 [`to_int`]를 적용하며, 첫 실패 지점의 인덱스를
/// `Element` 에러로 감싸 반환합니다.
pub fn to_int_slice(values: &[Value]) -> ConvertResult<Vec<i64>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            to_int(value).map_err(|source| ConvertError::Element {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

/// 동적 타입 값 슬라이스를 문자열 벡터로 변환합니다
///
/// [`to_string_value`]가 전체 함수이므로 이 함수도 절대 실패하지 않습니다.
pub fn to_string_slice(values: &[Value]) -> Vec<String> {
    values.iter().map(to_string_value).collect()
}

/// JSON 문자열을 객체 맵으로 파싱합니다
///
/// 최상위가 JSON 객체가 아니거나 문법이 잘못된 경우 `Json` 에러를
/// 반환합니다.
pub fn parse_json(json: &str) -> ConvertResult<serde_json::Map<String, serde_json::Value>> {
    let map = serde_json::from_str(json)?;
    Ok(map)
}

/// 직렬화 가능한 값을 JSON 문자열로 변환합니다
pub fn to_json<T: Serialize>(value: &T) -> ConvertResult<String> {
    let json = serde_json::to_string(value)?;
    Ok(json)
}

/// 16진수 문자열을 정수로 변환합니다
///
/// 접두사 없는 16진 표기를 기대합니다 (`ff`, `-1a`).
pub fn from_hex(hex: &str) -> ConvertResult<i64> {
    i64::from_str_radix(hex, 16).map_err(|_| ConvertError::Parse {
        value: hex.to_string(),
        target: "i64 (hex)",
    })
}

/// 정수를 16진수 문자열로 변환합니다
///
/// 소문자, 접두사 없음. 음수는 `-` 부호로 표기됩니다.
pub fn to_hex(value: i64) -> String {
    if value < 0 {
        format!("-{:x}", value.unsigned_abs())
    } else {
        format!("{:x}", value)
    }
}

/// 2진수 문자열을 정수로 변환합니다
pub fn from_binary(binary: &str) -> ConvertResult<i64> {
    i64::from_str_radix(binary, 2).map_err(|_| ConvertError::Parse {
        value: binary.to_string(),
        target: "i64 (binary)",
    })
}

/// 정수를 2진수 문자열로 변환합니다
pub fn to_binary(value: i64) -> String {
    if value < 0 {
        format!("-{:b}", value.unsigned_abs())
    } else {
        format!("{:b}", value)
    }
}
