//! Text shown to the learner: equations and the closing explanation.

use super::config::GameConfig;

/// "14 ÷ 3 = ?"
pub fn equation(config: &GameConfig) -> String {
    format!("{} ÷ {} = ?", config.dividend(), config.divisor())
}

/// "14 ÷ 3 = 4 R 2"
pub fn solution(config: &GameConfig) -> String {
    format!(
        "{} ÷ {} = {} R {}",
        config.dividend(),
        config.divisor(),
        config.quotient(),
        config.remainder()
    )
}

/// Story describing how the apples were shared.
///
/// Depends only on the configuration, so it can be computed at any time, but
/// it reads as a wrap-up and is shown once the round is solved.
///
/// ```rust
/// use divvy::game::{explanation, GameConfig};
///
/// let text = explanation(&GameConfig::new(7, 3));
/// assert!(text.contains("every basket got 2 apples"));
/// assert!(text.contains("we had 1 apple left over"));
/// ```
pub fn explanation(config: &GameConfig) -> String {
    let dividend = config.dividend();
    let divisor = config.divisor();
    let quotient = config.quotient();
    let remainder = config.remainder();

    if remainder == 0 {
        return format!(
            "Amazing! We shared {dividend} apples equally among {divisor} baskets. \
             Each basket got exactly {quotient} apples, and there were 0 left over. \
             Perfect sharing!"
        );
    }

    let noun = if remainder > 1 { "apples" } else { "apple" };
    format!(
        "Great work! We started with {dividend} apples. When we shared them into \
         {divisor} baskets, every basket got {quotient} apples. But we had {remainder} \
         {noun} left over that couldn't fit evenly. That's the remainder!"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equation_shows_question() {
        assert_eq!(equation(&GameConfig::new(14, 3)), "14 ÷ 3 = ?");
    }

    #[test]
    fn solution_shows_quotient_and_remainder() {
        assert_eq!(solution(&GameConfig::new(14, 3)), "14 ÷ 3 = 4 R 2");
        assert_eq!(solution(&GameConfig::new(12, 4)), "12 ÷ 4 = 3 R 0");
    }

    #[test]
    fn perfect_sharing_message() {
        let text = explanation(&GameConfig::new(12, 4));
        assert_eq!(
            text,
            "Amazing! We shared 12 apples equally among 4 baskets. Each basket got \
             exactly 3 apples, and there were 0 left over. Perfect sharing!"
        );
    }

    #[test]
    fn remainder_message_pluralizes() {
        let text = explanation(&GameConfig::new(14, 3));
        assert_eq!(
            text,
            "Great work! We started with 14 apples. When we shared them into 3 baskets, \
             every basket got 4 apples. But we had 2 apples left over that couldn't fit \
             evenly. That's the remainder!"
        );
    }

    #[test]
    fn single_leftover_is_singular() {
        let text = explanation(&GameConfig::new(10, 3));
        assert!(text.contains("we had 1 apple left over"));
        assert!(!text.contains("1 apples"));
    }

    #[test]
    fn zero_quotient_still_explains() {
        let text = explanation(&GameConfig::new(2, 5));
        assert!(text.contains("every basket got 0 apples"));
        assert!(text.contains("2 apples left over"));
    }
}
