//! 시간 및 날짜 헬퍼 모듈
//!
//! 기간(duration)의 사람 친화적 포맷팅, 상대 시간 표현, 하루의
//! 시작/끝 계산 등을 제공합니다. 모든 연산은 `chrono` 타입 위에서
//! 동작합니다.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

/// 기간을 사람이 읽기 쉬운 문자열로 포맷합니다
///
/// 크기에 따라 표현 단계가 달라집니다:
///
/// - 1분 미만: `42s`
/// - 1시간 미만: `5m 30s`
/// - 24시간 미만: `2h 15m`
/// - 그 이상: `3d 7h`
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.num_seconds();

    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }
    if total_seconds < 3600 {
        return format!("{}m {}s", total_seconds / 60, total_seconds % 60);
    }

    let total_minutes = total_seconds / 60;
    if total_minutes < 24 * 60 {
        return format!("{}h {}m", total_minutes / 60, total_minutes % 60);
    }

    let total_hours = total_minutes / 60;
    format!("{}d {}h", total_hours / 24, total_hours % 24)
}

/// 주어진 시각이 얼마나 오래 전인지 상대 표현으로 반환합니다
///
/// `"just now"`, `"5 minutes ago"`, `"1 hour ago"`, `"3 days ago"`,
/// `"2 months ago"`(30일 기준), `"1 year ago"`(365일 기준) 형태이며
/// 단수/복수가 구분됩니다.
pub fn time_ago(t: DateTime<Utc>) -> String {
    let diff = Utc::now().signed_duration_since(t);

    if diff < Duration::minutes(1) {
        return "just now".to_string();
    }
    if diff < Duration::hours(1) {
        return plural(diff.num_minutes(), "minute");
    }
    if diff < Duration::days(1) {
        return plural(diff.num_hours(), "hour");
    }

    let days = diff.num_days();
    if days < 30 {
        return plural(days, "day");
    }
    if days < 365 {
        return plural(days / 30, "month");
    }
    plural(days / 365, "year")
}

/// `"N unit(s) ago"` 형태의 문자열을 생성합니다
fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// 주어진 시각이 속한 날의 시작(00:00:00)을 반환합니다
pub fn start_of_day(t: DateTime<Utc>) -> DateTime<Utc> {
    t.date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
}

/// 주어진 시각이 속한 날의 끝(23:59:59.999999999)을 반환합니다
pub fn end_of_day(t: DateTime<Utc>) -> DateTime<Utc> {
    t.date_naive()
        .and_hms_nano_opt(23, 59, 59, 999_999_999)
        .expect("end of day is always a valid time")
        .and_utc()
}

/// 주어진 시각이 주말(토/일)인지 확인합니다
pub fn is_weekend(t: DateTime<Utc>) -> bool {
    matches!(t.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 주어진 연도가 윤년인지 확인합니다
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
