//! Countdown display formatting.

use serde::Serialize;

/// A formatted countdown for one arrival row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EtaDisplay {
    /// "NOW" or the whole number of minutes as a string.
    pub value: String,
    /// True when the countdown collapsed to "NOW".
    pub is_now: bool,
}

/// Convert raw seconds-until-arrival into its sign display form.
///
/// Seconds round to whole minutes with round-half-up (ties toward
/// positive infinity, so 30s displays as "1" and 90s as "2"). Zero or
/// negative minutes collapse to "NOW": an overdue vehicle is
/// indistinguishable from an imminent one on the sign.
pub fn format_eta(eta_seconds: i64) -> EtaDisplay {
    let minutes = (eta_seconds + 30).div_euclid(60);

    if minutes <= 0 {
        EtaDisplay {
            value: "NOW".to_string(),
            is_now: true,
        }
    } else {
        EtaDisplay {
            value: minutes.to_string(),
            is_now: false,
        }
    }
}
