//! Single-line recipient list with a trailing `+N` badge.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::EnvConfig;
use crate::core::component::Component;
use crate::core::fit::{BadgeMetrics, FitResult, RecipientFitter, ELLIPSIS};
use crate::core::measure::{CellBackend, ResilientMeasurer, TextMeasurer, TextStyle};
use crate::core::text::clip::{clip_to_cells, pad_to_cells};
use crate::core::text::width::cell_width;
use crate::runtime::resize::{ResizeBus, ResizeSubscription};

/// Events that make the line refit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitTrigger {
    RecipientsChanged,
    Resized(f32),
}

/// Terminal measurer: cell grid, falling back to the fixed formula when the grid is unusable.
pub type TerminalMeasurer = ResilientMeasurer<CellBackend>;

pub struct RecipientLine<M> {
    recipients: Vec<String>,
    fitter: RecipientFitter,
    measurer: M,
    container_width: f32,
    cell_width_px: f32,
    result: FitResult,
}

impl<M: TextMeasurer> RecipientLine<M> {
    /// `cell_width_px` converts the render width in cells into container pixels.
    pub fn new(fitter: RecipientFitter, measurer: M, cell_width_px: f32) -> Self {
        Self {
            recipients: Vec::new(),
            fitter,
            measurer,
            container_width: 0.0,
            cell_width_px,
            result: FitResult::empty(),
        }
    }

    pub fn set_recipients<I, S>(&mut self, recipients: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipients = recipients.into_iter().map(Into::into).collect();
        self.dispatch(FitTrigger::RecipientsChanged);
    }

    pub fn set_container_width(&mut self, width: f32) {
        self.dispatch(FitTrigger::Resized(width));
    }

    /// Apply a trigger and refit synchronously.
    pub fn dispatch(&mut self, trigger: FitTrigger) {
        if let FitTrigger::Resized(width) = trigger {
            self.container_width = width;
        }
        self.result = self
            .fitter
            .fit(self.container_width, &self.recipients, &self.measurer);
    }

    pub fn recipients(&self) -> &[String] {
        &self.recipients
    }

    pub fn container_width(&self) -> f32 {
        self.container_width
    }

    pub fn display_text(&self) -> &str {
        &self.result.display_text
    }

    pub fn hidden_count(&self) -> usize {
        self.result.hidden_count
    }

    pub fn result(&self) -> &FitResult {
        &self.result
    }

    fn render_line(&self, width: usize) -> String {
        let badge = self
            .result
            .badge_label()
            .map(|label| clip_to_cells(&format!(" {label} "), width, ""))
            .unwrap_or_default();
        let text_cells = width.saturating_sub(cell_width(&badge));
        let text = clip_to_cells(&self.result.display_text, text_cells, ELLIPSIS);
        let mut line = pad_to_cells(&text, text_cells);
        line.push_str(&badge);
        line
    }
}

impl RecipientLine<TerminalMeasurer> {
    /// A line measured on the terminal cell grid, badge padded by one cell each side.
    pub fn for_terminal(style: TextStyle, cell_width_px: f32) -> Self {
        let fitter = RecipientFitter::new(style).with_badge(BadgeMetrics::cells(cell_width_px));
        Self::new(
            fitter,
            ResilientMeasurer::new(CellBackend::new(cell_width_px)),
            cell_width_px,
        )
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        Self::for_terminal(config.text_style(), config.resolved_cell_width_px())
    }
}

impl<M: TextMeasurer + Send + 'static> RecipientLine<M> {
    /// Share the line and keep it subscribed to `bus` until the returned handle is dropped.
    pub fn mount(self, bus: &ResizeBus) -> MountedRecipientLine<M> {
        let line = Arc::new(Mutex::new(self));
        let target = Arc::clone(&line);
        let subscription = bus.subscribe(move |width| {
            lock(&target).set_container_width(width);
        });
        MountedRecipientLine {
            line,
            _subscription: subscription,
        }
    }
}

impl<M: TextMeasurer> Component for RecipientLine<M> {
    fn render(&mut self, width: usize) -> Vec<String> {
        // The width the line is actually drawn at wins over any earlier report.
        let container_width = width as f32 * self.cell_width_px;
        if container_width != self.container_width {
            self.dispatch(FitTrigger::Resized(container_width));
        }
        vec![self.render_line(width)]
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A [`RecipientLine`] subscribed to container resizes.
///
/// Dropping it (directly or via [`MountedRecipientLine::unmount`]) releases the subscription.
pub struct MountedRecipientLine<M> {
    line: Arc<Mutex<RecipientLine<M>>>,
    _subscription: ResizeSubscription,
}

impl<M: TextMeasurer> MountedRecipientLine<M> {
    pub fn with<R>(&self, f: impl FnOnce(&mut RecipientLine<M>) -> R) -> R {
        f(&mut lock(&self.line))
    }

    pub fn result(&self) -> FitResult {
        lock(&self.line).result().clone()
    }

    pub fn unmount(self) {
        tracing::debug!("recipient line unmounted");
    }
}

impl<M: TextMeasurer> Component for MountedRecipientLine<M> {
    fn render(&mut self, width: usize) -> Vec<String> {
        lock(&self.line).render(width)
    }
}
