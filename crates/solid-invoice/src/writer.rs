//! Invoice file output.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cart::ShoppingCart;
use crate::error::{InvoiceError, Result};
use crate::render::render_invoice;

/// How an existing destination file is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the file's contents.
    #[default]
    Overwrite,
    /// Add the report after the file's contents.
    Append,
}

/// Writes rendered invoices to disk.
///
/// Missing files are created in either mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvoiceWriter {
    mode: WriteMode,
}

impl InvoiceWriter {
    /// Creates a writer that overwrites its destination.
    pub fn new() -> Self {
        InvoiceWriter::default()
    }

    /// Appends to the destination instead of overwriting it when `append` is set.
    pub fn append(mut self, append: bool) -> Self {
        self.mode = if append {
            WriteMode::Append
        } else {
            WriteMode::Overwrite
        };
        self
    }

    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// Renders `cart` and writes the report to `path`.
    ///
    /// Returns the path written to. Nothing is written if the cart's total
    /// overflows.
    pub fn save(&self, cart: &ShoppingCart, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(InvoiceError::invalid("path", "destination path is empty"));
        }

        let report = render_invoice(cart)?;

        let mut options = OpenOptions::new();
        options.create(true);
        match self.mode {
            WriteMode::Overwrite => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };

        let mut file = options
            .open(path)
            .map_err(|source| InvoiceError::io(path, source))?;
        file.write_all(report.as_bytes())
            .map_err(|source| InvoiceError::io(path, source))?;

        tracing::debug!(
            path = %path.display(),
            items = cart.len(),
            bytes = report.len(),
            mode = ?self.mode,
            "invoice written"
        );

        Ok(path.to_path_buf())
    }
}
