//! Startup color palette generation.
//!
//! The palette only seeds the color choices offered to the user; the engine
//! never depends on how it was produced.

use crate::draw::{BLACK, Color};
use anyhow::Result;
use async_trait::async_trait;

/// Abstraction over where palette colors come from.
#[async_trait]
pub trait PaletteSource: Send + Sync {
    /// Produces `count` distinct colors, none of them black.
    async fn palette(&self, count: usize) -> Result<Vec<Color>>;
}

/// Uniformly random RGB swatches.
#[derive(Debug, Clone, Default)]
pub struct RandomPalette {
    /// Fixed seed for reproducible palettes; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl RandomPalette {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

#[async_trait]
impl PaletteSource for RandomPalette {
    async fn palette(&self, count: usize) -> Result<Vec<Color>> {
        let mut rng = match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let mut colors: Vec<Color> = Vec::with_capacity(count);
        while colors.len() < count {
            let color = Color::new(rng.u8(..), rng.u8(..), rng.u8(..));
            if color != BLACK && !colors.contains(&color) {
                colors.push(color);
            }
            tokio::task::yield_now().await;
        }
        Ok(colors)
    }
}

/// Builds the swatch list shown at startup: black first, then `count` colors
/// from `source`.
pub async fn seed_palette<S: PaletteSource + ?Sized>(
    source: &S,
    count: usize,
) -> Result<Vec<Color>> {
    let mut swatches = vec![BLACK];
    swatches.extend(source.palette(count).await?);
    log::debug!(
        "Palette: {}",
        swatches
            .iter()
            .map(Color::to_hex)
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(swatches)
}
