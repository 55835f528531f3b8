// ============================================================================
// spritegen-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for BatchConfig
//
// Fluent construction of BatchConfig. Unset fields fall back to the
// defaults in the parent module.

use std::path::PathBuf;

use super::{BatchConfig, SpriteConfig};

/// Builder for creating `BatchConfig` instances.
#[derive(Debug, Clone, Default)]
pub struct BatchConfigBuilder {
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    sprite: SpriteConfig,
    keep_partial_output: bool,
}

impl BatchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_dir(mut self, input_dir: PathBuf) -> Self {
        self.input_dir = Some(input_dir);
        self
    }

    pub fn output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = Some(output_dir);
        self
    }

    /// Replaces the whole sprite layout at once.
    pub fn sprite(mut self, sprite: SpriteConfig) -> Self {
        self.sprite = sprite;
        self
    }

    pub fn columns(mut self, columns: u32) -> Self {
        self.sprite.columns = columns;
        self
    }

    pub fn tile_size(mut self, width: u32, height: u32) -> Self {
        self.sprite.tile_width = width;
        self.sprite.tile_height = height;
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.sprite.quality = quality;
        self
    }

    /// Leave ffmpeg's output in place when it exits with an error.
    pub fn keep_partial_output(mut self, keep: bool) -> Self {
        self.keep_partial_output = keep;
        self
    }

    /// Builds the config. Values are not validated here; call
    /// [`BatchConfig::validate`] before processing.
    pub fn build(self) -> BatchConfig {
        let defaults = BatchConfig::default();
        BatchConfig {
            input_dir: self.input_dir.unwrap_or(defaults.input_dir),
            output_dir: self.output_dir.unwrap_or(defaults.output_dir),
            sprite: self.sprite,
            remove_partial_output: !self.keep_partial_output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_paths_use_defaults() {
        let config = BatchConfigBuilder::new().build();
        assert_eq!(config.input_dir, PathBuf::from("input"));
        assert_eq!(config.output_dir, PathBuf::from("output"));
        assert_eq!(config.sprite, SpriteConfig::default());
    }

    #[test]
    fn overrides_applied() {
        let config = BatchConfigBuilder::new()
            .input_dir(PathBuf::from("/videos"))
            .output_dir(PathBuf::from("/sprites"))
            .columns(5)
            .tile_size(320, 180)
            .quality(4)
            .keep_partial_output(true)
            .build();

        assert_eq!(config.input_dir, PathBuf::from("/videos"));
        assert_eq!(config.output_dir, PathBuf::from("/sprites"));
        assert_eq!(config.sprite.columns, 5);
        assert_eq!((config.sprite.tile_width, config.sprite.tile_height), (320, 180));
        assert_eq!(config.sprite.quality, 4);
        assert!(!config.remove_partial_output);
    }
}
