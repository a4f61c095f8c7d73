use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use placer::ShapeLimits;

pub const DEFAULT_NUM_SAMPLES: usize = 12_500;
pub const MIN_OBJECTS: u32 = 2;

#[derive(Clone, Debug)]
pub struct GenConfig {
    pub out_dir: PathBuf, // "data"
    pub side: u32,        // square images
    pub max_objects: u32,
    pub num_samples: usize,
    pub seed: u64,
    pub preview: usize, // first N images get a boxed copy in preview/
    pub font_dir: PathBuf,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("data"),
            side: 128,
            max_objects: 10,
            num_samples: DEFAULT_NUM_SAMPLES,
            seed: 0,
            preview: 0,
            font_dir: PathBuf::from("assets/fonts"),
        }
    }
}

impl GenConfig {
    /// Checks the run parameters and derives the sampling ranges for `side`.
    pub fn validate(&self) -> Result<ShapeLimits> {
        ensure!(
            self.max_objects >= MIN_OBJECTS,
            "max_objects must be at least {MIN_OBJECTS}, got {}",
            self.max_objects
        );
        ensure!(self.num_samples > 0, "num_samples must be positive");
        ShapeLimits::new(self.side, self.side)
            .with_context(|| format!("image side {} is too small", self.side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let limits = GenConfig::default().validate().unwrap();
        assert_eq!(limits.width(), 128);
    }

    #[test]
    fn rejects_bad_parameters() {
        let few = GenConfig {
            max_objects: 1,
            ..Default::default()
        };
        assert!(few.validate().unwrap_err().to_string().contains("max_objects"));

        let tiny = GenConfig {
            side: 12,
            ..Default::default()
        };
        let err = tiny.validate().unwrap_err();
        assert!(err.to_string().contains("too small"));
        assert!(format!("{err:#}").contains("circle radius"));

        let none = GenConfig {
            num_samples: 0,
            ..Default::default()
        };
        assert!(none.validate().is_err());
    }
}
