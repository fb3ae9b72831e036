//! Spaced repetition scheduling
//!
//! A simplified SM-2 curve over three ratings:
//! - Forgot: the interval resets to one day and the ease factor decays
//! - Good: the interval grows by the ease factor
//! - Easy: the interval grows by the ease factor with a bonus, and the
//!   ease factor itself grows
//!
//! The ease factor never drops below 1.3 and the interval never drops
//! below one day.

use chrono::{DateTime, Duration, Utc};

use super::models::{Performance, RecallItem};

/// Minimum ease factor allowed
pub const MIN_EASE_FACTOR: f32 = 1.3;

/// Ease penalty applied on a "forgot" rating
const FORGOT_EASE_PENALTY: f32 = 0.2;

/// Ease bonus applied on an "easy" rating
const EASY_EASE_BONUS: f32 = 0.15;

/// Extra interval multiplier applied on an "easy" rating
const EASY_INTERVAL_BONUS: f32 = 1.3;

/// Result of scheduling the next review
#[derive(Debug, Clone)]
pub struct ScheduleResult {
    pub interval: i64,
    pub ease_factor: f32,
    pub next_review_at: DateTime<Utc>,
}

/// Compute the next review for an item given a performance rating
pub fn next_review(item: &RecallItem, performance: Performance) -> ScheduleResult {
    let mut ease_factor = item.ease_factor;

    let interval = match performance {
        Performance::Forgot => {
            ease_factor -= FORGOT_EASE_PENALTY;
            1
        }
        Performance::Good => (item.interval as f32 * ease_factor).ceil() as i64,
        Performance::Easy => {
            let interval =
                (item.interval as f32 * ease_factor * EASY_INTERVAL_BONUS).ceil() as i64;
            ease_factor += EASY_EASE_BONUS;
            interval
        }
    };

    let interval = interval.max(1);
    let ease_factor = ease_factor.max(MIN_EASE_FACTOR);

    ScheduleResult {
        interval,
        ease_factor,
        next_review_at: Utc::now() + Duration::days(interval),
    }
}

/// Interval each rating would give, for display next to the rating keys.
/// Order: [Forgot, Good, Easy].
pub fn preview_intervals(item: &RecallItem) -> [i64; 3] {
    [
        next_review(item, Performance::Forgot).interval,
        next_review(item, Performance::Good).interval,
        next_review(item, Performance::Easy).interval,
    ]
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: i64) -> String {
    if days <= 0 {
        "now".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        format!("{}w", days / 7)
    } else if days < 365 {
        format!("{}mo", days / 30)
    } else {
        format!("{}y", days / 365)
    }
}
