//! 동적 타입 값 표현
//!
//! 변환 함수들이 소비하는 태그드 유니언 [`Value`]를 정의합니다.
//! 지원되는 소스 종류의 집합은 닫혀 있으며, 새로운 종류를 추가하면
//! 모든 변환 지점에서 컴파일 타임에 매칭 누락이 드러납니다.

use std::fmt;

/// 변환 대상이 되는 동적 타입 값
///
/// 문자열, 불리언, 32/64비트 정수, 32/64비트 부동소수점, 리스트,
/// 그리고 표현 불가능한 값을 나타내는 `Null`로 구성됩니다.
/// 값은 변환 중 절대 변경되지 않습니다.
///
/// # Examples
///
/// ```rust,ignore
/// use common_utils::convert::Value;
///
/// let v = Value::from(42i64);
/// assert_eq!(v.kind(), "int");
/// assert_eq!(v.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 문자열
    Str(String),
    /// 불리언
    Bool(bool),
    /// 64비트 정수
    Int(i64),
    /// 32비트 정수
    Int32(i32),
    /// 64비트 부동소수점
    Float(f64),
    /// 32비트 부동소수점
    Float32(f32),
    /// 값의 리스트 (기본 타입으로 변환 불가)
    List(Vec<Value>),
    /// 표현할 수 없는 값 (JSON null, 객체 등)
    Null,
}

impl Value {
    /// 값의 종류 이름을 반환합니다
    ///
    /// 에러 메시지에서 미지원 소스 종류를 식별하는 데 사용됩니다.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Int32(_) => "int32",
            Value::Float(_) => "float",
            Value::Float32(_) => "float32",
            Value::List(_) => "list",
            Value::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    /// 정규 문자열 표현을 생성합니다
    ///
    /// 정수는 10진수, 부동소수점은 최단 왕복 표현, 불리언은
    /// `true`/`false`, 문자열은 그대로 출력됩니다. 리스트와 null은
    /// 디버그 성격의 대체 표현을 사용합니다.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Int32(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Float32(x) => write!(f, "{}", x),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int32(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float32(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<serde_json::Value> for Value {
    /// JSON 값을 동적 타입 값으로 변환합니다
    ///
    /// JSON 객체는 기본 타입 표현이 없으므로 `Null`로 매핑되며,
    /// 이후 모든 변환이 `UnsupportedType`으로 실패합니다.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(_) => Value::Null,
        }
    }
}
