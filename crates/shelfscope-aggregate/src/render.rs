use shelfscope_core::ProductBundle;

/// Presentation collaborator that receives a completed bundle.
///
/// Renderers never see partial results: [`crate::inspect`] calls
/// [`BundleRenderer::render`] once per successful run and not at all when
/// the run aborts.
pub trait BundleRenderer {
    type Error: std::fmt::Display;

    /// # Errors
    ///
    /// Returns the renderer's own error if output could not be produced.
    fn render(&mut self, bundle: &ProductBundle) -> Result<(), Self::Error>;
}
