//! # Receipt Surfaces
//!
//! Where a rendered receipt goes. champ-core renders the HTML; a surface
//! presents it (print window, file, spool directory).
//!
//! A surface failure never fails the sale: by the time presentation runs,
//! the sale already exists on the backend. Failures are logged and the
//! flow continues.

use std::io;
use std::path::PathBuf;

use tracing::info;

/// Presentation target for rendered receipts.
pub trait ReceiptSurface: Send + Sync {
    /// Presents a receipt document for the given sale number.
    fn present(&self, sale_number: &str, document: &str) -> io::Result<()>;
}

/// Surface that writes each receipt to `receipt-<sale_number>.html` in a
/// spool directory, for hosts that hand printing to the OS.
#[derive(Debug, Clone)]
pub struct FileSurface {
    dir: PathBuf,
}

impl FileSurface {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSurface { dir: dir.into() }
    }

    /// Target path for a sale number.
    fn path_for(&self, sale_number: &str) -> PathBuf {
        // Sale numbers are backend-issued (S-000123 style) but sanitize
        // anyway so a hostile value cannot escape the spool directory.
        let safe: String = sale_number
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("receipt-{safe}.html"))
    }
}

impl ReceiptSurface for FileSurface {
    fn present(&self, sale_number: &str, document: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(sale_number);
        std::fs::write(&path, document)?;
        info!(?path, "Receipt written");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_surface_writes_receipt() {
        let dir = tempfile::tempdir().unwrap();
        let surface = FileSurface::new(dir.path());
        surface
            .present("S-000123", "<html>receipt</html>")
            .unwrap();

        let written = std::fs::read_to_string(dir.path().join("receipt-S-000123.html")).unwrap();
        assert_eq!(written, "<html>receipt</html>");
    }

    #[test]
    fn test_file_surface_sanitizes_sale_number() {
        let dir = tempfile::tempdir().unwrap();
        let surface = FileSurface::new(dir.path());
        surface.present("../evil", "x").unwrap();
        assert!(dir.path().join("receipt-___evil.html").exists());
    }

    #[test]
    fn test_file_surface_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let surface = FileSurface::new(dir.path().join("spool/receipts"));
        surface.present("S-1", "x").unwrap();
        assert!(dir.path().join("spool/receipts/receipt-S-1.html").exists());
    }
}
