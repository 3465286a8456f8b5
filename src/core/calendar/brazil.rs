//! Built-in holidays for São Paulo state, Brazil (national + state).

use super::{CalendarError, HolidayMap, HolidayProvider};
use chrono::{Days, NaiveDate};

const FIRST_YEAR: i32 = 1900;
const LAST_YEAR: i32 = 2199;

/// Fixed-date national holidays: (month, day, name, first year observed).
const NATIONAL_FIXED: [(u32, u32, &str, i32); 8] = [
    (1, 1, "Confraternização Universal", FIRST_YEAR),
    (4, 21, "Tiradentes", FIRST_YEAR),
    (5, 1, "Dia do Trabalhador", LABOUR_DAY_SINCE),
    (9, 7, "Independência do Brasil", FIRST_YEAR),
    (10, 12, "Nossa Senhora Aparecida", APARECIDA_SINCE),
    (11, 2, "Finados", FIRST_YEAR),
    (11, 15, "Proclamação da República", FIRST_YEAR),
    (12, 25, "Natal", CHRISTMAS_SINCE),
];

/// Decree 4.859/1924.
const LABOUR_DAY_SINCE: i32 = 1925;
/// Law 6.802/1980.
const APARECIDA_SINCE: i32 = 1980;
/// Decree 4.497/1922.
const CHRISTMAS_SINCE: i32 = 1922;
/// National since Law 14.759/2023.
const BLACK_CONSCIOUSNESS_SINCE: i32 = 2024;
/// State holiday since State Law 9.497/1997.
const CONSTITUTIONALIST_REVOLUTION_SINCE: i32 = 1997;

#[derive(Debug, Default, Clone, Copy)]
pub struct BrazilSaoPaulo;

impl BrazilSaoPaulo {
    pub const CODE: &'static str = "BR-SP";
}

impl HolidayProvider for BrazilSaoPaulo {
    fn jurisdiction(&self) -> &str {
        Self::CODE
    }

    fn holidays_for(&self, year: i32) -> Result<HolidayMap, CalendarError> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange(year));
        }

        let mut map = HolidayMap::new();

        for (month, day, name, since) in NATIONAL_FIXED {
            if year >= since {
                insert(&mut map, year, month, day, name)?;
            }
        }

        let good_friday = easter_sunday(year)
            .and_then(|e| e.checked_sub_days(Days::new(2)))
            .ok_or(CalendarError::YearOutOfRange(year))?;
        map.insert(good_friday, "Sexta-feira Santa".to_string());

        if year >= BLACK_CONSCIOUSNESS_SINCE {
            insert(
                &mut map,
                year,
                11,
                20,
                "Dia Nacional de Zumbi e da Consciência Negra",
            )?;
        }

        if year >= CONSTITUTIONALIST_REVOLUTION_SINCE {
            insert(&mut map, year, 7, 9, "Revolução Constitucionalista de 1932")?;
        }

        Ok(map)
    }
}

fn insert(
    map: &mut HolidayMap,
    year: i32,
    month: u32,
    day: u32,
    name: &str,
) -> Result<(), CalendarError> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| CalendarError::Source(format!("invalid date {year}-{month:02}-{day:02}")))?;
    map.insert(date, name.to_string());
    Ok(())
}

/// Gregorian Easter Sunday (anonymous Gregorian computus).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}
