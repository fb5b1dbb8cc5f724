//! 타입 변환 통합 테스트
//!
//! 변환 계열의 계약을 공개 API를 통해 확인합니다: 소스 종류별 변환
//! 규칙, 타입이 지정된 실패, `to_string_value`의 전체성과 왕복 속성.

use common_utils::convert::{self, Value};
use common_utils::errors::ConvertError;

#[test]
fn test_to_int_contract() {
    assert_eq!(convert::to_int(&Value::from("42")).unwrap(), 42);
    assert_eq!(convert::to_int(&Value::from(3.9f64)).unwrap(), 3);
    assert_eq!(convert::to_int(&Value::from(true)).unwrap(), 1);

    // 파싱 실패는 Parse 에러
    assert!(matches!(
        convert::to_int(&Value::from("abc")),
        Err(ConvertError::Parse { .. })
    ));

    // 리스트는 변환 규칙이 없음 (에러 메시지에 종류가 명시됨)
    let list = Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    let error = convert::to_int(&list).unwrap_err();
    assert!(matches!(error, ConvertError::UnsupportedType { kind: "list", .. }));
    assert!(error.to_string().contains("list"));
}

#[test]
fn test_to_bool_and_to_float_contracts() {
    assert!(convert::to_bool(&Value::from("true")).unwrap());
    assert!(!convert::to_bool(&Value::from("0")).unwrap());
    assert!(convert::to_bool(&Value::from(-1i64)).unwrap());
    assert!(matches!(
        convert::to_bool(&Value::from("maybe")),
        Err(ConvertError::Parse { .. })
    ));

    assert_eq!(convert::to_float(&Value::from("2.5")).unwrap(), 2.5);
    assert_eq!(convert::to_float(&Value::from(false)).unwrap(), 0.0);
    assert!(convert::to_float(&Value::Null).is_err());
}

#[test]
fn test_to_string_value_total_and_round_trip() {
    // 모든 종류에 대해 실패 없이 표현을 생성
    let values = vec![
        Value::from("text"),
        Value::from(true),
        Value::from(-7i64),
        Value::from(7i32),
        Value::from(0.25f64),
        Value::from(0.5f32),
        Value::List(vec![Value::Int(1)]),
        Value::Null,
    ];
    for value in &values {
        assert!(!convert::to_string_value(value).is_empty());
    }

    // 정수 왕복: to_int(to_string(n)) == n
    for n in [0i64, 1, -1, 999_999, i64::MAX, i64::MIN] {
        let s = convert::to_string_value(&Value::Int(n));
        assert_eq!(convert::to_int(&Value::from(s)).unwrap(), n);
    }
}

#[test]
fn test_slice_conversions() {
    let values = vec![Value::from("10"), Value::Bool(true), Value::Float(2.9)];
    assert_eq!(convert::to_int_slice(&values).unwrap(), vec![10, 1, 2]);
    assert_eq!(convert::to_string_slice(&values), vec!["10", "true", "2.9"]);

    let broken = vec![Value::Int(1), Value::Null];
    match convert::to_int_slice(&broken).unwrap_err() {
        ConvertError::Element { index, source } => {
            assert_eq!(index, 1);
            assert!(matches!(*source, ConvertError::UnsupportedType { .. }));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_json_interop() {
    let map = convert::parse_json(r#"{"id": 7, "name": "kim"}"#).unwrap();
    assert_eq!(map["id"], 7);
    assert_eq!(map["name"], "kim");

    // JSON 배열을 Value로 들여와 변환 규칙 적용
    let json: serde_json::Value = serde_json::from_str(r#"[1, "2", 3.0, true]"#).unwrap();
    if let Value::List(items) = Value::from(json) {
        assert_eq!(convert::to_int_slice(&items).unwrap(), vec![1, 2, 3, 1]);
    } else {
        panic!("expected list");
    }
}
