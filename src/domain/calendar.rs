//! Date column values for the two supported calendars.

use super::enums::CalendarVariant;
use chrono::{DateTime, Datelike, Local};

/// Leap-cycle break years of the Jalali calendar
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// A calendar date as (year, month, day)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Month and day of `at` in the requested calendar.
///
/// Dates outside the Jalali conversion range fall back to Gregorian.
pub fn month_day(at: DateTime<Local>, variant: CalendarVariant) -> (u32, u32) {
    let (month, day) = (at.month(), at.day());
    match variant {
        CalendarVariant::Gregorian => (month, day),
        CalendarVariant::Jalali => gregorian_to_jalali(at.year(), month, day)
            .map(|date| (date.month, date.day))
            .unwrap_or((month, day)),
    }
}

/// Format the `(MM/DD)` date field
pub fn format_date_field(at: DateTime<Local>, variant: CalendarVariant) -> String {
    let (month, day) = month_day(at, variant);
    format!("({:02}/{:02})", month, day)
}

/// Convert a Gregorian date to the Jalali (Solar Hijri) calendar.
///
/// Returns `None` for years outside the supported range.
pub fn gregorian_to_jalali(gy: i32, gm: u32, gd: u32) -> Option<CalendarDate> {
    let jdn = gregorian_to_day_number(gy, gm as i32, gd as i32);
    let mut jy = gy - 621;
    let cal = jalali_year_info(jy)?;
    let first_day = gregorian_to_day_number(gy, 3, cal.march);
    let mut k = jdn - first_day;

    if k >= 0 {
        if k <= 185 {
            return Some(CalendarDate {
                year: jy,
                month: (1 + k / 31) as u32,
                day: (k % 31 + 1) as u32,
            });
        }
        k -= 186;
    } else {
        jy -= 1;
        k += 179;
        if cal.leap == 1 {
            k += 1;
        }
    }

    Some(CalendarDate {
        year: jy,
        month: (7 + k / 30) as u32,
        day: (k % 30 + 1) as u32,
    })
}

struct JalaliYear {
    /// Years since the last leap year (0 means leap)
    leap: i32,
    /// Gregorian day in March on which the Jalali year starts
    march: i32,
}

fn jalali_year_info(jy: i32) -> Option<JalaliYear> {
    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];

    if jy < jp || jy >= BREAKS[BREAKS.len() - 1] {
        return None;
    }

    let mut jump = 0;
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Some(JalaliYear { leap, march })
}

/// Julian day number of a Gregorian date
fn gregorian_to_day_number(gy: i32, gm: i32, gd: i32) -> i32 {
    let d = (gy + (gm - 8) / 6 + 100100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34840408;
    d - (gy + 100100 + (gm - 8) / 6) / 100 * 3 / 4 + 752
}
