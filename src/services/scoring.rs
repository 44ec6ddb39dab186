//! Score formula shared by recorded submissions and previews.

const BASE_SCORE: i64 = 1000;
const PENALTY_PER_SECOND: i64 = 1;
const PENALTY_PER_ATTEMPT: i64 = 50;
const HINT_PENALTY: i64 = 200;

/// Points for a finished game: 1000, minus one point per second, minus 50 per attempt,
/// minus 200 when the hint was used, never below zero.
pub fn calculate_score(time_in_seconds: u32, attempts: u32, used_hint: bool) -> u32 {
    let mut score = BASE_SCORE;
    score -= i64::from(time_in_seconds) * PENALTY_PER_SECOND;
    score -= i64::from(attempts) * PENALTY_PER_ATTEMPT;
    if used_hint {
        score -= HINT_PENALTY;
    }

    // clamped to 0..=BASE_SCORE, so the cast is lossless
    score.max(0) as u32
}
