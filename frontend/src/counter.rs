//! The "visits today" numbers shown on the landing and thank-you pages.
//!
//! Values are not real traffic: they grow linearly over the Brasília day
//! between a floor and a ceiling, with a little random jitter.

use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Timelike, Utc, Weekday};
use chrono_tz::America::Sao_Paulo;
use rand::Rng;

const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateStyle {
    /// `16/10/2026`
    Short,
    /// `sexta-feira, 16 de outubro de 2026`
    Long,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterProfile {
    pub floor: u32,
    pub ceiling: u32,
    pub jitter_min: i32,
    pub jitter_max: i32,
    pub refresh_min_ms: u32,
    pub refresh_max_ms: u32,
    pub label: &'static str,
    pub date_style: DateStyle,
}

pub const LANDING_VISITS: CounterProfile = CounterProfile {
    floor: 30,
    ceiling: 754,
    jitter_min: -5,
    jitter_max: 10,
    refresh_min_ms: 60_000,
    refresh_max_ms: 180_000,
    label: "visitas hoje",
    date_style: DateStyle::Short,
};

pub const THANK_YOU_VIEWS: CounterProfile = CounterProfile {
    floor: 35,
    ceiling: 765,
    jitter_min: -8,
    jitter_max: 20,
    refresh_min_ms: 120_000,
    refresh_max_ms: 240_000,
    label: "visualizaram hoje",
    date_style: DateStyle::Long,
};

/// Wall clock shifted to UTC-3.
pub fn brasilia_time(now: DateTime<Utc>) -> NaiveDateTime {
    now.naive_utc() - Duration::hours(3)
}

/// Minutes since Brasília midnight over minutes per day, in `[0, 1)`.
pub fn day_fraction(now: DateTime<Utc>) -> f64 {
    let local = brasilia_time(now);
    (local.hour() * 60 + local.minute()) as f64 / MINUTES_PER_DAY
}

impl CounterProfile {
    pub fn baseline(&self, now: DateTime<Utc>) -> i64 {
        let span = (self.ceiling - self.floor) as f64;
        self.floor as i64 + (day_fraction(now) * span).floor() as i64
    }

    pub fn sample<R: Rng + ?Sized>(&self, now: DateTime<Utc>, rng: &mut R) -> u32 {
        let jitter = rng.gen_range(self.jitter_min..=self.jitter_max) as i64;
        (self.baseline(now) + jitter).clamp(self.floor as i64, self.ceiling as i64) as u32
    }

    /// Refresh period, drawn once per page mount.
    pub fn refresh_interval_ms<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.refresh_min_ms..self.refresh_max_ms)
    }

    pub fn date_label(&self, now: DateTime<Utc>) -> String {
        match self.date_style {
            DateStyle::Short => short_date(now),
            DateStyle::Long => long_date(now),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterReading {
    pub count: u32,
    pub date: String,
}

impl CounterReading {
    pub fn take<R: Rng + ?Sized>(profile: &CounterProfile, now: DateTime<Utc>, rng: &mut R) -> Self {
        Self {
            count: profile.sample(now, rng),
            date: profile.date_label(now),
        }
    }
}

/// Groups thousands with dots, as pt-BR does.
pub fn format_count(count: u32) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

pub fn short_date(now: DateTime<Utc>) -> String {
    brasilia_time(now).format("%d/%m/%Y").to_string()
}

pub fn long_date(now: DateTime<Utc>) -> String {
    let local = now.with_timezone(&Sao_Paulo);
    format!(
        "{}, {} de {} de {}",
        weekday_name(local.weekday()),
        local.day(),
        month_name(local.month()),
        local.year()
    )
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "janeiro",
        2 => "fevereiro",
        3 => "março",
        4 => "abril",
        5 => "maio",
        6 => "junho",
        7 => "julho",
        8 => "agosto",
        9 => "setembro",
        10 => "outubro",
        11 => "novembro",
        _ => "dezembro",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, h, m, 0).unwrap()
    }

    #[test]
    fn day_fraction_uses_utc_minus_three() {
        // 03:00 UTC is Brasília midnight
        assert_eq!(day_fraction(at(3, 0)), 0.0);
        assert_eq!(day_fraction(at(15, 0)), 0.5);
        assert_eq!(day_fraction(at(2, 59)), (23.0 * 60.0 + 59.0) / MINUTES_PER_DAY);
    }

    #[test]
    fn baseline_interpolates_between_bounds() {
        assert_eq!(LANDING_VISITS.baseline(at(3, 0)), 30);
        assert_eq!(LANDING_VISITS.baseline(at(15, 0)), 30 + 362);
        assert_eq!(THANK_YOU_VIEWS.baseline(at(15, 0)), 35 + 365);
        assert!(THANK_YOU_VIEWS.baseline(at(2, 59)) < 765);
    }

    #[test]
    fn samples_stay_within_bounds_all_day() {
        let mut rng = StdRng::seed_from_u64(7);
        for profile in [LANDING_VISITS, THANK_YOU_VIEWS] {
            for minute in 0..(24 * 60) {
                let now = at(0, 0) + Duration::minutes(minute);
                for _ in 0..5 {
                    let value = profile.sample(now, &mut rng);
                    assert!(
                        (profile.floor..=profile.ceiling).contains(&value),
                        "{} out of bounds at minute {}",
                        value,
                        minute
                    );
                }
            }
        }
    }

    #[test]
    fn jitter_stays_in_its_window_mid_day() {
        let mut rng = StdRng::seed_from_u64(42);
        let base = LANDING_VISITS.baseline(at(15, 0));
        for _ in 0..200 {
            let value = LANDING_VISITS.sample(at(15, 0), &mut rng) as i64;
            assert!((base - 5..=base + 10).contains(&value));
        }
    }

    #[test]
    fn refresh_interval_respects_page_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let landing = LANDING_VISITS.refresh_interval_ms(&mut rng);
            assert!((60_000..180_000).contains(&landing));
            let thanks = THANK_YOU_VIEWS.refresh_interval_ms(&mut rng);
            assert!((120_000..240_000).contains(&thanks));
        }
    }

    #[test]
    fn counts_use_dot_grouping() {
        assert_eq!(format_count(7), "7");
        assert_eq!(format_count(754), "754");
        assert_eq!(format_count(1_234), "1.234");
        assert_eq!(format_count(1_234_567), "1.234.567");
    }

    #[test]
    fn dates_are_rendered_in_brasilia() {
        assert_eq!(short_date(at(12, 0)), "16/10/2026");
        // 01:00 UTC on the 16th is still the 15th in Brasília
        assert_eq!(short_date(at(1, 0)), "15/10/2026");
        assert_eq!(long_date(at(12, 0)), "sexta-feira, 16 de outubro de 2026");
        assert_eq!(long_date(at(1, 0)), "quinta-feira, 15 de outubro de 2026");
    }

    #[test]
    fn reading_uses_the_profile_date_style() {
        let mut rng = StdRng::seed_from_u64(3);
        let reading = CounterReading::take(&LANDING_VISITS, at(12, 0), &mut rng);
        assert_eq!(reading.date, "16/10/2026");
        let reading = CounterReading::take(&THANK_YOU_VIEWS, at(12, 0), &mut rng);
        assert!(reading.date.starts_with("sexta-feira"));
    }
}
