//! ASCII-art gallows
//!
//! The figure grows with the error count. Budgets of 6 and 7 errors get a
//! dedicated drawing with one body part per error; any other budget is
//! drawn in five stages from the ratio of errors to the budget.

const TOP: &str = "  +---+\n  |   |\n";
const EMPTY: &str = "      |\n";
const BASE: &str = "      |\n=========";

const HEAD: &str = "  O   |\n";
const TRUNK: &str = "  |   |\n";
const LEFT_ARM: &str = " /|   |\n";
const BOTH_ARMS: &str = " /|\\  |\n";
const LEFT_LEG: &str = " /    |\n";
const BOTH_LEGS: &str = " / \\  |\n";

/// Draws the hangman figure for a given error budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gallows {
    max_errors: u32,
}

impl Gallows {
    #[must_use]
    pub const fn new(max_errors: u32) -> Self {
        Self { max_errors }
    }

    #[must_use]
    pub const fn max_errors(self) -> u32 {
        self.max_errors
    }

    /// The drawing for `errors` wrong guesses
    ///
    /// # Examples
    /// ```
    /// use hangman::output::Gallows;
    ///
    /// let art = Gallows::new(6).render(1);
    /// assert!(art.contains("  O   |"));
    /// assert!(art.ends_with("========="));
    /// ```
    #[must_use]
    pub fn render(self, errors: u32) -> String {
        match self.max_errors {
            6 => Self::render_six(errors),
            7 => Self::render_seven(errors),
            _ => self.render_staged(errors),
        }
    }

    fn render_six(errors: u32) -> String {
        [
            TOP,
            head(errors, 1),
            body(errors, 2, 3, 4),
            legs(errors, 5, 6),
            BASE,
        ]
        .concat()
    }

    fn render_seven(errors: u32) -> String {
        // The last row shows the trunk extending before the legs appear
        let lower = if errors >= 7 {
            BOTH_LEGS
        } else if errors >= 6 {
            LEFT_LEG
        } else if errors >= 3 {
            TRUNK
        } else {
            EMPTY
        };

        [TOP, head(errors, 1), body(errors, 2, 4, 5), lower, BASE].concat()
    }

    fn render_staged(self, errors: u32) -> String {
        let progress = f64::from(errors) / f64::from(self.max_errors.max(1));

        let rows: [&str; 3] = if progress < 0.2 {
            [EMPTY, EMPTY, EMPTY]
        } else if progress < 0.4 {
            [HEAD, EMPTY, EMPTY]
        } else if progress < 0.6 {
            [HEAD, TRUNK, EMPTY]
        } else if progress < 0.8 {
            [HEAD, BOTH_ARMS, EMPTY]
        } else {
            [HEAD, BOTH_ARMS, BOTH_LEGS]
        };

        [TOP, rows[0], rows[1], rows[2], BASE].concat()
    }
}

const fn head(errors: u32, threshold: u32) -> &'static str {
    if errors >= threshold { HEAD } else { EMPTY }
}

const fn body(errors: u32, trunk: u32, left_arm: u32, right_arm: u32) -> &'static str {
    if errors >= right_arm {
        BOTH_ARMS
    } else if errors >= left_arm {
        LEFT_ARM
    } else if errors >= trunk {
        TRUNK
    } else {
        EMPTY
    }
}

const fn legs(errors: u32, left_leg: u32, right_leg: u32) -> &'static str {
    if errors >= right_leg {
        BOTH_LEGS
    } else if errors >= left_leg {
        LEFT_LEG
    } else {
        EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_errors_empty_gallows() {
        assert_eq!(
            Gallows::new(6).render(0),
            "  +---+\n  |   |\n      |\n      |\n      |\n      |\n========="
        );
    }

    #[test]
    fn six_errors_complete_figure() {
        assert_eq!(
            Gallows::new(6).render(6),
            "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n========="
        );
    }

    #[test]
    fn six_errors_one_part_per_error() {
        let gallows = Gallows::new(6);
        assert!(gallows.render(2).contains(TRUNK));
        assert!(gallows.render(3).contains(LEFT_ARM));
        assert!(gallows.render(4).contains(BOTH_ARMS));
        assert!(gallows.render(5).contains(LEFT_LEG));
    }

    #[test]
    fn seven_errors_trunk_row() {
        let gallows = Gallows::new(7);
        assert_eq!(
            gallows.render(3),
            "  +---+\n  |   |\n  O   |\n  |   |\n  |   |\n      |\n========="
        );
        assert!(gallows.render(4).contains(LEFT_ARM));
        assert!(gallows.render(7).contains(BOTH_LEGS));
    }

    #[test]
    fn staged_rendering_for_other_budgets() {
        let gallows = Gallows::new(10);
        assert!(!gallows.render(1).contains(HEAD));
        assert!(gallows.render(2).contains(HEAD));
        assert!(gallows.render(5).contains(TRUNK));
        assert!(gallows.render(7).contains(BOTH_ARMS));
        assert!(!gallows.render(7).contains(BOTH_LEGS));
        assert!(gallows.render(10).contains(BOTH_LEGS));
    }

    #[test]
    fn every_drawing_has_the_same_height() {
        for max in [1, 3, 6, 7, 12] {
            let gallows = Gallows::new(max);
            for errors in 0..=max {
                assert_eq!(gallows.render(errors).lines().count(), 7);
            }
        }
    }
}
