//! Component trait.

/// Renderable component interface.
pub trait Component {
    /// Render to a list of lines, each exactly `width` cells wide.
    ///
    /// `width` is the space the host gives the component right now; a change in it is a
    /// layout-affecting event and components may recompute their content from it.
    fn render(&mut self, width: usize) -> Vec<String>;

    /// Invalidate any cached state.
    fn invalidate(&mut self) {}
}
