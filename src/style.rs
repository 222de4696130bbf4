use crate::error::VennError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Colours and geometry of the rendered diagram. Any field left out of a
/// style file keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlotStyle {
    /// canvas width in pixels
    pub width: u32,
    /// canvas height in pixels
    pub height: u32,
    pub font_size: f64,
    /// fill colour of the A, B and C circles
    pub colors: [String; 3],
    /// fill opacity of each circle, between 0 and 1
    pub opacity: f64,
    pub background: String,
}

impl Default for PlotStyle {
    fn default() -> Self {
        PlotStyle {
            width: 600,
            height: 600,
            font_size: 14.0,
            colors: ["red".into(), "green".into(), "blue".into()],
            opacity: 0.4,
            background: "white".into(),
        }
    }
}

impl PlotStyle {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, VennError> {
        let style: PlotStyle = serde_yaml::from_str(yaml)?;
        style.validate()
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, VennError> {
        let style_file = File::open(path)?;
        let style: PlotStyle = serde_yaml::from_reader(style_file)?;
        style.validate()
    }

    fn validate(self) -> Result<Self, VennError> {
        if self.width == 0 || self.height == 0 {
            return Err(VennError::InvalidArgument("width and height must be positive".into()));
        }
        if !(self.font_size > 0.0) {
            return Err(VennError::InvalidArgument("font_size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(VennError::InvalidArgument(format!(
                "opacity must be between 0 and 1, got {}",
                self.opacity
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_style() -> Result<(), VennError> {
        let style = PlotStyle::from_yaml_str("width: 800\ncolors: [\"#1b9e77\", \"#d95f02\", \"#7570b3\"]\n")?;
        assert_eq!(style.width, 800);
        assert_eq!(style.height, 600);
        assert_eq!(style.colors[1], "#d95f02");
        assert_eq!(style.opacity, 0.4);
        Ok(())
    }

    #[test]
    fn test_style_file() -> Result<(), VennError> {
        let style = PlotStyle::from_yaml_file(Path::new("test/style.yml"))?;
        assert_eq!(style.font_size, 18.0);
        assert_eq!(style.opacity, 0.5);
        assert_eq!(style.background, "#fafafa");
        Ok(())
    }

    #[test]
    fn test_invalid_style() {
        assert!(matches!(
            PlotStyle::from_yaml_str("opacity: 1.5"),
            Err(VennError::InvalidArgument(_))
        ));
        assert!(matches!(
            PlotStyle::from_yaml_str("width: 0"),
            Err(VennError::InvalidArgument(_))
        ));
        assert!(matches!(
            PlotStyle::from_yaml_str("colours: [red, green, blue]"),
            Err(VennError::Style(_))
        ));
        assert!(matches!(
            PlotStyle::from_yaml_str("colors: [red, green]"),
            Err(VennError::Style(_))
        ));
    }
}
