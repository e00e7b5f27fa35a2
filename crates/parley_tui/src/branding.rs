//! Header branding: a text banner read once at startup.

use std::path::Path;

use parley_constant::app::DISPLAY_NAME;
use tracing::{debug, warn};

/// Banner rows beyond this are ignored.
pub const MAX_BANNER_LINES: usize = 6;

/// Branding shown in the header. Empty banner means the plain title only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branding {
    banner: Vec<String>,
}

impl Branding {
    /// Title-only branding.
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn from_banner(text: &str) -> Self {
        let banner: Vec<String> = text
            .lines()
            .map(|l| l.trim_end().to_string())
            .take(MAX_BANNER_LINES)
            .collect();
        let last_content = banner.iter().rposition(|l| !l.is_empty()).map_or(0, |i| i + 1);
        Self {
            banner: banner.into_iter().take(last_content).collect(),
        }
    }

    /// Read the banner at `path`. A missing or unreadable file falls back to [Branding::plain].
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let branding = Self::from_banner(&text);
                debug!(path = %path.display(), lines = branding.banner.len(), "branding loaded");
                branding
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no branding banner, using title");
                Self::plain()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "branding banner unreadable, using title");
                Self::plain()
            }
        }
    }

    pub fn title(&self) -> &'static str {
        DISPLAY_NAME
    }

    pub fn banner(&self) -> &[String] {
        &self.banner
    }

    pub fn is_plain(&self) -> bool {
        self.banner.is_empty()
    }

    /// Rows the header needs for this branding, excluding the bottom border.
    pub fn rows(&self) -> u16 {
        self.banner.len().max(1) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_title() {
        let branding = Branding::load(Path::new("/nonexistent/parley/bb.txt"));
        assert!(branding.is_plain());
        assert_eq!(branding.title(), "BB-GPT");
        assert_eq!(branding.rows(), 1);
    }

    #[test]
    fn directory_path_falls_back_to_title() {
        let branding = Branding::load(&std::env::temp_dir());
        assert!(branding.is_plain());
    }

    #[test]
    fn banner_is_capped_and_trimmed() {
        let text = "a  \nb\n\nc\nd\ne\nf\ng\n";
        let branding = Branding::from_banner(text);
        assert_eq!(branding.banner(), &["a", "b", "", "c", "d", "e"]);
        assert_eq!(branding.rows(), 6);
    }

    #[test]
    fn trailing_blank_rows_are_dropped() {
        let branding = Branding::from_banner("[bb]\n\n\n");
        assert_eq!(branding.banner(), &["[bb]"]);
    }

    #[test]
    fn blank_banner_is_plain() {
        assert!(Branding::from_banner("\n  \n").is_plain());
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("parley-branding-{}.txt", std::process::id()));
        std::fs::write(&path, "[ BB ]\n").unwrap();
        let branding = Branding::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(branding.banner(), &["[ BB ]"]);
    }
}
