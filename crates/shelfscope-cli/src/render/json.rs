use std::io::{self, Write};

use shelfscope_aggregate::BundleRenderer;
use shelfscope_core::ProductBundle;

/// Emits the bundle as pretty-printed JSON. Unknown values are `null`.
pub(crate) struct JsonRenderer<W> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> BundleRenderer for JsonRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, bundle: &ProductBundle) -> Result<(), Self::Error> {
        serde_json::to_writer_pretty(&mut self.out, bundle)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
