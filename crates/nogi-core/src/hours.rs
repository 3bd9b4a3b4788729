//! Opening-hours rendering with today's weekday emphasized.
//!
//! Places returns `weekdayDescriptions` as free text such as
//! `"火曜日: 11時00分～22時00分"`. No structured parsing is attempted; the
//! only transformation is wrapping today's weekday name in `<b>` and
//! joining the lines with `<br>` for markup rendering. Upstream text is
//! escaped first, so `<b>` and `<br>` are the only tags in the output.

use chrono::Weekday;

/// Marker placed between lines. The output is rendered as markup, so a raw
/// newline would collapse.
pub const LINE_BREAK: &str = "<br>";

const WEEKDAY_NAMES_JA: [&str; 7] = [
    "月曜日",
    "火曜日",
    "水曜日",
    "木曜日",
    "金曜日",
    "土曜日",
    "日曜日",
];

/// Japanese name for `day`, as it appears in Places weekday descriptions.
#[must_use]
pub fn weekday_name_ja(day: Weekday) -> &'static str {
    WEEKDAY_NAMES_JA[day.num_days_from_monday() as usize]
}

/// Joins `lines` with [`LINE_BREAK`], wrapping every occurrence of today's
/// weekday name in `<b>…</b>`.
///
/// Lines that themselves contain `\n` are split first, and `&`, `<`, `>` in
/// each line are escaped. When no line mentions today (placeholder or
/// malformed data) the plain join is returned.
#[must_use]
pub fn highlight_today<S: AsRef<str>>(lines: &[S], today: Weekday) -> String {
    let name = weekday_name_ja(today);
    let emphasized = format!("<b>{name}</b>");

    lines
        .iter()
        .flat_map(|line| line.as_ref().split('\n'))
        .map(|line| {
            let line = escape_markup(line);
            if line.contains(name) {
                line.replace(name, &emphasized)
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
