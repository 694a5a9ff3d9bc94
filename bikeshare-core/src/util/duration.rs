/// a number of seconds split into days, hours, minutes and seconds by
/// repeated divmod. when `days` is `None` the hours are left unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationBreakdown {
    pub days: Option<u64>,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationBreakdown {
    pub fn with_days(total_seconds: u64) -> DurationBreakdown {
        let (minutes, seconds) = divmod(total_seconds, 60);
        let (hours, minutes) = divmod(minutes, 60);
        let (days, hours) = divmod(hours, 24);
        DurationBreakdown {
            days: Some(days),
            hours,
            minutes,
            seconds,
        }
    }

    pub fn without_days(total_seconds: u64) -> DurationBreakdown {
        let (minutes, seconds) = divmod(total_seconds, 60);
        let (hours, minutes) = divmod(minutes, 60);
        DurationBreakdown {
            days: None,
            hours,
            minutes,
            seconds,
        }
    }
}

impl std::fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(days) = self.days {
            write!(f, "{days} days, ")?;
        }
        write!(
            f,
            "{} hours, {} minutes and {} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

fn divmod(value: u64, divisor: u64) -> (u64, u64) {
    (value / divisor, value % divisor)
}
