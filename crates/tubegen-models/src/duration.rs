//! Video duration helpers.

/// Duration reported for every generated video.
pub const PLACEHOLDER_DURATION: &str = "2:30";

/// Average narration speed used by [`estimate_duration`].
pub const WORDS_PER_MINUTE: usize = 150;

/// Estimate narration length for a script as `M:SS`.
///
/// Minutes are rounded up from the word count; the seconds part is derived
/// from the words left over after whole minutes at 2.5 words per second.
///
/// Not used by the generation endpoint, which reports [`PLACEHOLDER_DURATION`].
///
/// # Examples
/// ```
/// use tubegen_models::duration::estimate_duration;
/// assert_eq!(estimate_duration(&"word ".repeat(75)), "1:30");
/// assert_eq!(estimate_duration(&"word ".repeat(300)), "2:00");
/// ```
pub fn estimate_duration(script: &str) -> String {
    let words = script.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE);
    let seconds = ((words % WORDS_PER_MINUTE) as f64 / 2.5).floor() as usize;

    format!("{}:{:02}", minutes, seconds)
}
