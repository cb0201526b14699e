//! Formatting utilities for terminal output

use crate::core::{GameSession, Letter};

/// The word mask with a space between positions, e.g. `c _ t`
#[must_use]
pub fn spaced_mask(session: &GameSession) -> String {
    let mask = session.mask();
    let mut result = String::with_capacity(mask.len() * 2);
    for (i, ch) in mask.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Comma-separated letters, or `None` when there are none
#[must_use]
pub fn letter_list(letters: &[Letter]) -> String {
    if letters.is_empty() {
        return "None".to_string();
    }
    letters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Average to one decimal place
#[must_use]
pub fn average(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |avg| format!("{avg:.1}"))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;

    #[test]
    fn spaced_mask_separates_positions() {
        let mut session = GameSession::new(SecretWord::new("cat").unwrap());
        assert_eq!(spaced_mask(&session), "_ _ _");
        session.guess("a").unwrap();
        assert_eq!(spaced_mask(&session), "_ a _");
    }

    #[test]
    fn letter_list_empty() {
        assert_eq!(letter_list(&[]), "None");
    }

    #[test]
    fn letter_list_joins() {
        let letters = [Letter::new('q').unwrap(), Letter::new('x').unwrap()];
        assert_eq!(letter_list(&letters), "q, x");
    }

    #[test]
    fn average_one_decimal() {
        assert_eq!(average(Some(47.5)), "47.5");
        assert_eq!(average(Some(95.0 / 3.0)), "31.7");
        assert_eq!(average(Some(-5.0)), "-5.0");
        assert_eq!(average(None), "n/a");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
