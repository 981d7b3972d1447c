//! Recipient fitting.
//!
//! Greedy left-to-right pass that decides how many recipients are shown verbatim, whether an
//! ellipsis follows them, and what the `+N` badge says. Space for the ellipsis and the badge is
//! reserved *before* each item is accepted, using the hidden count that rejecting this very item
//! would produce, so text plus badge never overflows the container.

use crate::core::measure::{MemoMeasurer, TextMeasurer, TextStyle};

pub const SEPARATOR: &str = ", ";
pub const ELLIPSIS: &str = "...";
/// Reserved after every non-last item: the separator plus the ellipsis that may follow it.
pub const ELLIPSIS_MARKER: &str = ", ...";

/// Pixel geometry of the badge around its `+N` label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeMetrics {
    pub margin: f32,
    pub left_pad: f32,
    pub right_pad: f32,
}

impl BadgeMetrics {
    pub const fn new(margin: f32, left_pad: f32, right_pad: f32) -> Self {
        Self {
            margin,
            left_pad,
            right_pad,
        }
    }

    /// Terminal badge ` +N `: one padding cell each side, no margin.
    pub const fn cells(cell_width_px: f32) -> Self {
        Self::new(0.0, cell_width_px, cell_width_px)
    }

    pub fn chrome(&self) -> f32 {
        self.margin + self.left_pad + self.right_pad
    }
}

impl Default for BadgeMetrics {
    fn default() -> Self {
        Self::new(4.0, 6.0, 6.0)
    }
}

/// Outcome of one fitting pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FitResult {
    pub display_text: String,
    pub hidden_count: usize,
}

impl FitResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// `"+N"` when at least one recipient is hidden.
    pub fn badge_label(&self) -> Option<String> {
        (self.hidden_count > 0).then(|| badge_label(self.hidden_count))
    }

    pub fn is_complete(&self) -> bool {
        self.hidden_count == 0
    }
}

fn badge_label(count: usize) -> String {
    format!("+{count}")
}

/// Stateless recipient fitter; configuration only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipientFitter {
    style: TextStyle,
    badge: BadgeMetrics,
}

impl RecipientFitter {
    pub fn new(style: TextStyle) -> Self {
        Self {
            style,
            badge: BadgeMetrics::default(),
        }
    }

    pub fn with_badge(mut self, badge: BadgeMetrics) -> Self {
        self.badge = badge;
        self
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn badge(&self) -> BadgeMetrics {
        self.badge
    }

    /// Run one fitting pass.
    ///
    /// `container_width` is in the same pixel units the measurer reports. Zero, negative, and
    /// NaN widths all mean "no space"; the first recipient is still shown.
    pub fn fit<S, M>(&self, container_width: f32, recipients: &[S], measurer: &M) -> FitResult
    where
        S: AsRef<str>,
        M: TextMeasurer + ?Sized,
    {
        let total = recipients.len();
        if total == 0 {
            return FitResult::empty();
        }

        let measurer = MemoMeasurer::new(measurer, &self.style);
        let mut remaining = container_width;
        let mut display_text = String::new();

        for (index, recipient) in recipients.iter().enumerate() {
            let recipient = recipient.as_ref();
            let remaining_items = total - index;
            let is_first = index == 0;
            let is_last = index + 1 == total;

            // Hidden count if this item is the one that does not fit. A first item is shown
            // regardless, so it never counts as hidden.
            let candidate_hidden = if is_first {
                remaining_items - 1
            } else {
                remaining_items
            };
            let badge_reserved = if candidate_hidden > 0 {
                measurer.measure(&badge_label(candidate_hidden), &self.style) + self.badge.chrome()
            } else {
                0.0
            };
            let ellipsis_reserved = if is_last {
                0.0
            } else {
                measurer.measure(ELLIPSIS_MARKER, &self.style)
            };

            let item_text = if is_last {
                recipient.to_string()
            } else {
                format!("{recipient}{SEPARATOR}")
            };
            let item_width = measurer.measure(&item_text, &self.style);

            if remaining > item_width + ellipsis_reserved + badge_reserved {
                display_text.push_str(&item_text);
                remaining -= item_width;
                continue;
            }

            display_text.push_str(if is_first { recipient } else { ELLIPSIS });
            tracing::debug!(
                container_width,
                total,
                shown = index.max(1),
                hidden = candidate_hidden,
                "recipients elided"
            );
            return FitResult {
                display_text,
                hidden_count: candidate_hidden,
            };
        }

        tracing::debug!(container_width, total, "all recipients fit");
        FitResult {
            display_text,
            hidden_count: 0,
        }
    }
}

/// Fit with the default style and badge geometry.
pub fn fit_recipients<S, M>(container_width: f32, recipients: &[S], measurer: &M) -> FitResult
where
    S: AsRef<str>,
    M: TextMeasurer + ?Sized,
{
    RecipientFitter::default().fit(container_width, recipients, measurer)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{fit_recipients, BadgeMetrics, FitResult, RecipientFitter};
    use crate::core::measure::{FallbackMeasurer, TextStyle};

    // With the fallback formula and default badge geometry (16 px of chrome):
    //   "a@x.com, " = 92, "a@x.com" = 76, ", ..." = 60, "+1"/"+2" badge = 36 + 16 = 52.

    fn fit(width: f32, recipients: &[&str]) -> FitResult {
        fit_recipients(width, recipients, &FallbackMeasurer)
    }

    fn result(text: &str, hidden_count: usize) -> FitResult {
        FitResult {
            display_text: text.to_string(),
            hidden_count,
        }
    }

    #[test]
    fn everything_fits() {
        assert_eq!(
            fit(400.0, &["a@x.com", "b@x.com"]),
            result("a@x.com, b@x.com", 0)
        );
    }

    #[test]
    fn overflow_shows_ellipsis_and_badge() {
        assert_eq!(
            fit(250.0, &["a@x.com", "b@x.com", "c@x.com"]),
            result("a@x.com, ...", 2)
        );
    }

    #[test]
    fn lone_recipient_that_overflows_is_shown_without_badge() {
        let fitted = fit(100.0, &["averylongaddress@example.com"]);
        assert_eq!(fitted, result("averylongaddress@example.com", 0));
        assert_eq!(fitted.badge_label(), None);
    }

    #[test]
    fn first_recipient_is_shown_even_when_it_does_not_fit() {
        let fitted = fit(100.0, &["a@x.com", "b@x.com"]);
        assert_eq!(fitted, result("a@x.com", 1));
        assert_eq!(fitted.badge_label().as_deref(), Some("+1"));
    }

    #[test]
    fn empty_list_is_empty_result() {
        assert_eq!(fit(500.0, &[]), FitResult::empty());
        assert!(FitResult::empty().is_complete());
    }

    #[test]
    fn comparison_is_strict() {
        // First item needs 92 + 60 + 52 = 204.
        assert_eq!(fit(204.0, &["a@x.com", "b@x.com"]), result("a@x.com", 1));
        // Second (last) item needs 76 + 52 = 128 of the remaining 205 - 92 = 113.
        assert_eq!(fit(205.0, &["a@x.com", "b@x.com"]), result("a@x.com, ...", 1));
        assert_eq!(
            fit(220.5, &["a@x.com", "b@x.com"]),
            result("a@x.com, b@x.com", 0)
        );
    }

    #[test]
    fn non_positive_and_nan_widths_mean_no_space() {
        for width in [0.0, -50.0, f32::NAN] {
            assert_eq!(
                fit(width, &["a@x.com", "b@x.com", "c@x.com"]),
                result("a@x.com", 2)
            );
        }
    }

    #[test]
    fn badge_digit_count_is_reserved() {
        let recipients: Vec<String> = (0..12).map(|i| format!("r{i}@x.com")).collect();
        // "+11" is 44 px wide, so the first item needs 100 + 60 + 60 = 220.
        let fitted = fit_recipients(219.0, &recipients, &FallbackMeasurer);
        assert_eq!(fitted, result("r0@x.com", 11));
        let fitted = fit_recipients(221.0, &recipients, &FallbackMeasurer);
        assert_eq!(fitted, result("r0@x.com, ...", 11));
    }

    #[test]
    fn duplicates_are_independent() {
        assert_eq!(
            fit(1000.0, &["a@x.com", "a@x.com"]),
            result("a@x.com, a@x.com", 0)
        );
    }

    #[test]
    fn empty_strings_are_accepted() {
        assert_eq!(fit(1000.0, &["", "b@x.com"]), result(", b@x.com", 0));
        assert_eq!(fit(0.0, &[""]), result("", 0));
    }

    #[test]
    fn badge_geometry_is_part_of_the_reservation() {
        let fitter = RecipientFitter::new(TextStyle::default()).with_badge(BadgeMetrics::new(
            0.0, 0.0, 0.0,
        ));
        // Without chrome the first item needs 92 + 60 + 36 = 188.
        assert_eq!(
            fitter.fit(190.0, &["a@x.com", "b@x.com", "c@x.com"], &FallbackMeasurer),
            result("a@x.com, ...", 2)
        );
        assert_eq!(
            fit(190.0, &["a@x.com", "b@x.com", "c@x.com"]),
            result("a@x.com", 2)
        );
    }

    #[test]
    fn measurer_sees_the_fitter_style() {
        let fitter = RecipientFitter::new(TextStyle::new(20.0, "serif"));
        let measurer = |text: &str, style: &TextStyle| {
            assert_eq!(style.font_family, "serif");
            text.chars().count() as f32 * style.font_size
        };
        // "a@x.com, " = 180, ", ..." = 100, "+1" = 40 + 16.
        assert_eq!(
            fitter.fit(337.0, &["a@x.com", "b@x.com"], &measurer),
            result("a@x.com, ...", 1)
        );
    }
}
