//! Text measurement capability.
//!
//! The fitter only ever asks "how many pixels wide is this string in this style". Hosts plug in
//! whatever can answer that: a terminal cell grid, a glyph-metrics backend, or the deterministic
//! fallback formula when nothing better is available.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::core::error::MeasureError;
use crate::core::text::width::cell_width;

pub const DEFAULT_FONT_SIZE_PX: f32 = 14.0;
pub const DEFAULT_FONT_FAMILY: &str = "monospace";

/// Per-character advance of the fallback formula.
pub const FALLBACK_CHAR_WIDTH_PX: f32 = 8.0;
/// Constant allowance added by the fallback formula.
pub const FALLBACK_ALLOWANCE_PX: f32 = 20.0;

/// Monospace advance relative to the font size, used when no cell width is configured.
pub const CELL_ASPECT_RATIO: f32 = 0.6;

/// Visual style of the element the text will render in.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub font_family: String,
}

impl TextStyle {
    pub fn new(font_size: f32, font_family: impl Into<String>) -> Self {
        Self {
            font_size,
            font_family: font_family.into(),
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE_PX, DEFAULT_FONT_FAMILY)
    }
}

/// Width of `text` in pixels when rendered with `style`.
pub trait TextMeasurer {
    /// Rendered width in pixels, always `>= 0`.
    fn measure(&self, text: &str, style: &TextStyle) -> f32;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &TextStyle) -> f32,
{
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        self(text, style)
    }
}

/// Deterministic approximation: 8 px per character plus a 20 px allowance.
pub fn fallback_width(text: &str) -> f32 {
    text.chars().count() as f32 * FALLBACK_CHAR_WIDTH_PX + FALLBACK_ALLOWANCE_PX
}

/// Measurer that always answers with [`fallback_width`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackMeasurer;

impl TextMeasurer for FallbackMeasurer {
    fn measure(&self, text: &str, _style: &TextStyle) -> f32 {
        fallback_width(text)
    }
}

/// A real rendering backend that may be missing or fail.
pub trait MeasureBackend {
    fn try_measure(&self, text: &str, style: &TextStyle) -> Result<f32, MeasureError>;
}

/// Wraps an optional backend and degrades to [`fallback_width`] whenever it cannot answer.
///
/// Degradation is silent for callers; it is only visible as a `trace` event.
#[derive(Debug, Clone)]
pub struct ResilientMeasurer<B> {
    backend: Option<B>,
}

impl<B> ResilientMeasurer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A measurer with no rendering context; every request uses the fallback formula.
    pub fn unavailable() -> Self {
        Self { backend: None }
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }
}

impl<B: MeasureBackend> ResilientMeasurer<B> {
    fn measure_with_backend(&self, text: &str, style: &TextStyle) -> Result<f32, MeasureError> {
        let backend = self.backend.as_ref().ok_or(MeasureError::Unavailable)?;
        let width = backend.try_measure(text, style)?;
        if width.is_finite() && width >= 0.0 {
            Ok(width)
        } else {
            Err(MeasureError::InvalidWidth {
                text: text.to_string(),
                width,
            })
        }
    }
}

impl<B: MeasureBackend> TextMeasurer for ResilientMeasurer<B> {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        match self.measure_with_backend(text, style) {
            Ok(width) => width,
            Err(err) => {
                tracing::trace!(error = %err, text, "measurement degraded to fallback width");
                fallback_width(text)
            }
        }
    }
}

/// Terminal grid backend: grapheme cell count times the pixel width of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellBackend {
    cell_width_px: Option<f32>,
}

impl CellBackend {
    pub fn new(cell_width_px: f32) -> Self {
        Self {
            cell_width_px: Some(cell_width_px),
        }
    }

    /// Derive the cell width from the style's font size on every request.
    pub fn from_font_size() -> Self {
        Self {
            cell_width_px: None,
        }
    }

    pub fn cell_width_px(&self, style: &TextStyle) -> Result<f32, MeasureError> {
        match self.cell_width_px {
            Some(width) if width.is_finite() && width > 0.0 => Ok(width),
            Some(_) => Err(MeasureError::Unavailable),
            None if style.font_size.is_finite() && style.font_size > 0.0 => {
                Ok(style.font_size * CELL_ASPECT_RATIO)
            }
            None => Err(MeasureError::InvalidFontSize {
                font_size: style.font_size,
            }),
        }
    }
}

impl MeasureBackend for CellBackend {
    fn try_measure(&self, text: &str, style: &TextStyle) -> Result<f32, MeasureError> {
        let cell = self.cell_width_px(style)?;
        Ok(cell_width(text) as f32 * cell)
    }
}

/// Memoizes widths for a single fitting pass.
///
/// Bound to one style; requests in any other style bypass the memo. Lives only as long as the
/// pass that created it, so theme or zoom changes between passes are always observed.
pub struct MemoMeasurer<'a, M: ?Sized> {
    inner: &'a M,
    style: &'a TextStyle,
    widths: RefCell<HashMap<String, f32>>,
}

impl<'a, M: TextMeasurer + ?Sized> MemoMeasurer<'a, M> {
    pub fn new(inner: &'a M, style: &'a TextStyle) -> Self {
        Self {
            inner,
            style,
            widths: RefCell::new(HashMap::new()),
        }
    }

    pub fn cached_len(&self) -> usize {
        self.widths.borrow().len()
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for MemoMeasurer<'_, M> {
    fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        if style != self.style {
            return self.inner.measure(text, style);
        }
        if let Some(width) = self.widths.borrow().get(text) {
            return *width;
        }
        let width = self.inner.measure(text, style);
        self.widths.borrow_mut().insert(text.to_string(), width);
        width
    }
}
