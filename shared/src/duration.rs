//! ISO-8601 时长类型
//!
//! 交通类活动的 `transportDuration` 以 ISO-8601 时长字符串传输（如 `PT2H30M`）。
//! 这里只支持天、时、分、秒四个单位，足以覆盖行程内的交通耗时。

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// 以秒为精度的 ISO-8601 时长
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct IsoDuration(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDurationError(String);

impl fmt::Display for ParseDurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ISO-8601 duration: {}", self.0)
    }
}

impl std::error::Error for ParseDurationError {}

impl IsoDuration {
    #[inline]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    #[inline]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn parse(s: &str) -> Result<Self, ParseDurationError> {
        let err = || ParseDurationError(s.to_string());
        let rest = s.trim().strip_prefix('P').ok_or_else(err)?;
        if rest.is_empty() {
            return Err(err());
        }

        let (date_part, time_part) = match rest.split_once('T') {
            Some((_, "")) => return Err(err()),
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };

        let mut total = 0u64;
        total += parse_units(date_part, &[('D', SECS_PER_DAY)]).ok_or_else(err)?;
        if let Some(time) = time_part {
            total += parse_units(
                time,
                &[('H', SECS_PER_HOUR), ('M', SECS_PER_MINUTE), ('S', 1)],
            )
            .ok_or_else(err)?;
        }
        Ok(Self(total))
    }
}

/// 按顺序解析 `<数字><单位>` 片段，单位必须按给定顺序且不重复出现
fn parse_units(mut s: &str, units: &[(char, u64)]) -> Option<u64> {
    let mut total = 0u64;
    let mut next_unit = 0;
    while !s.is_empty() {
        let digits = s.find(|c: char| !c.is_ascii_digit())?;
        if digits == 0 {
            return None;
        }
        let value: u64 = s[..digits].parse().ok()?;
        let unit = s[digits..].chars().next()?;
        let offset = units[next_unit..].iter().position(|(u, _)| *u == unit)?;
        let (_, factor) = units[next_unit + offset];
        total = total.checked_add(value.checked_mul(factor)?)?;
        next_unit += offset + 1;
        s = &s[digits + unit.len_utf8()..];
    }
    Some(total)
}

impl FromStr for IsoDuration {
    type Err = ParseDurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for IsoDuration {
    /// 输出规范形式，如 `P1DT2H30M`；零时长输出 `PT0S`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("PT0S");
        }
        let days = self.0 / SECS_PER_DAY;
        let hours = self.0 % SECS_PER_DAY / SECS_PER_HOUR;
        let minutes = self.0 % SECS_PER_HOUR / SECS_PER_MINUTE;
        let secs = self.0 % SECS_PER_MINUTE;

        f.write_str("P")?;
        if days > 0 {
            write!(f, "{}D", days)?;
        }
        if hours + minutes + secs > 0 {
            f.write_str("T")?;
            if hours > 0 {
                write!(f, "{}H", hours)?;
            }
            if minutes > 0 {
                write!(f, "{}M", minutes)?;
            }
            if secs > 0 {
                write!(f, "{}S", secs)?;
            }
        }
        Ok(())
    }
}

impl From<IsoDuration> for Duration {
    fn from(d: IsoDuration) -> Self {
        Duration::from_secs(d.0)
    }
}

impl Serialize for IsoDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_transport_durations() {
        assert_eq!(IsoDuration::parse("PT2H").unwrap().as_secs(), 7200);
        assert_eq!(IsoDuration::parse("PT1H30M").unwrap().as_secs(), 5400);
        assert_eq!(IsoDuration::parse("P1DT6H").unwrap().as_secs(), 86400 + 21600);
        assert_eq!(IsoDuration::parse("PT45S").unwrap().as_secs(), 45);
        assert_eq!(IsoDuration::parse("P2D").unwrap().as_secs(), 2 * 86400);
    }

    #[test]
    fn rejects_malformed_durations() {
        for bad in ["", "P", "PT", "2H", "PTH", "PT2", "PT30M2H", "PT2H2H", "P1H", "PT-1H", "3 hours"] {
            assert!(IsoDuration::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(IsoDuration::from_secs(2 * 3600 + 30 * 60).to_string(), "PT2H30M");
        assert_eq!(IsoDuration::from_secs(86400 + 60).to_string(), "P1DT1M");
        assert_eq!(IsoDuration::from_secs(0).to_string(), "PT0S");
        assert_eq!(IsoDuration::parse("PT90M").unwrap().to_string(), "PT1H30M");
    }
}
