use std::path::{Path, PathBuf};
use anyhow::anyhow;
use charming::{Chart, ImageFormat, ImageRenderer};
use charming::theme::Theme;
use clap::ValueEnum;
use tracing::debug;

pub const CHART_THEME: Theme = Theme::Default;
pub const CHART_BACKGROUND: &str = "white";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Png,
    Svg,
    /// Png and svg side by side.
    Both,
}

impl Format {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Format::Png  => &["png"],
            Format::Svg  => &["svg"],
            Format::Both => &["png", "svg"],
        }
    }
}

/// Where and how charts are written.
#[derive(Debug, Clone)]
pub struct Output {
    pub dir: PathBuf,
    pub format: Format,
    /// Multiplier for every chart's pixel size.
    pub scale: f64,
}

impl Output {
    pub fn paths(&self, stem: &str) -> Vec<PathBuf> {
        self.format.extensions().iter()
            .map(|ext| self.dir.join(stem).with_extension(ext))
            .collect()
    }

    pub fn size(&self, (width, height): (u32, u32)) -> (u32, u32) {
        let scale = |px: u32| ((px as f64 * self.scale).round() as u32).max(1);
        (scale(width), scale(height))
    }

    /// Render `chart` once per output format. Returns written files.
    pub fn save(&self, chart: &Chart, stem: &str, size: (u32, u32)) -> anyhow::Result<Vec<PathBuf>> {
        let (width, height) = self.size(size);
        let mut renderer = ImageRenderer::new(width, height).theme(CHART_THEME);

        let paths = self.paths(stem);
        for path in &paths {
            debug!(path = %path.display(), width, height, "rendering");
            let saved = if is_svg(path) {
                renderer.save(chart, path)
            } else {
                renderer.save_format(ImageFormat::Png, chart, path)
            };
            saved.map_err(|e| anyhow!("failed to render {}: {e:?}", path.display()))?;
        }
        Ok(paths)
    }
}

fn is_svg(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "svg")
}
