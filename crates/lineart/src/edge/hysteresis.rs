//! Tri-state edge classification, hysteresis linking and the majority seal.

use image::{Rgba, RgbaImage};

use super::threshold::Thresholds;
use crate::raster::ScalarField;

/// Minimum strong pixels in a 3×3 window for the seal to mark its center.
const SEAL_MAJORITY: usize = 5;

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);
const PAPER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Classification of one working-canvas pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeState {
    #[default]
    Background,
    Weak,
    Strong,
}

/// Per-pixel edge states at working resolution.
///
/// After [`EdgeMap::link`] only `Background` and `Strong` remain.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMap {
    states: ScalarField<EdgeState>,
}

impl EdgeMap {
    /// Classify thinned magnitudes against dual thresholds.
    ///
    /// Zero magnitudes are always background, even when both thresholds are
    /// zero.
    pub fn classify(nms: &ScalarField<f32>, thresholds: Thresholds) -> Self {
        let states = ScalarField::from_fn(nms.width(), nms.height(), |x, y| {
            let m = nms.get(x, y);
            if m > 0.0 && m >= thresholds.high {
                EdgeState::Strong
            } else if m > 0.0 && m >= thresholds.low {
                EdgeState::Weak
            } else {
                EdgeState::Background
            }
        });
        Self { states }
    }

    /// Wrap precomputed states.
    pub fn from_states(states: ScalarField<EdgeState>) -> Self {
        Self { states }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.states.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.states.height()
    }

    #[inline]
    pub fn state(&self, x: usize, y: usize) -> EdgeState {
        self.states.get(x, y)
    }

    #[inline]
    pub fn is_strong(&self, x: usize, y: usize) -> bool {
        self.states.get(x, y) == EdgeState::Strong
    }

    /// Number of strong pixels.
    pub fn strong_count(&self) -> usize {
        self.states
            .as_slice()
            .iter()
            .filter(|&&s| s == EdgeState::Strong)
            .count()
    }

    fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let (w, h) = (self.width(), self.height());
        let x0 = x.saturating_sub(1);
        let y0 = y.saturating_sub(1);
        let x1 = (x + 1).min(w - 1);
        let y1 = (y + 1).min(h - 1);
        (y0..=y1).flat_map(move |ny| (x0..=x1).map(move |nx| (nx, ny)))
    }

    /// Promote weak pixels 8-connected to a strong pixel until no promotion
    /// is possible, then drop the remaining weak pixels to background.
    ///
    /// Returns the number of promoted pixels. Linking an already linked map
    /// returns 0 and changes nothing.
    pub fn link(&mut self) -> usize {
        let width = self.width();
        let mut worklist: Vec<(usize, usize)> = self
            .states
            .as_slice()
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == EdgeState::Strong)
            .map(|(i, _)| (i % width, i / width))
            .collect();

        let mut promoted = 0;
        while let Some((x, y)) = worklist.pop() {
            let weak: Vec<(usize, usize)> = self
                .neighbors(x, y)
                .filter(|&(nx, ny)| self.states.get(nx, ny) == EdgeState::Weak)
                .collect();
            for (nx, ny) in weak {
                self.states.set(nx, ny, EdgeState::Strong);
                worklist.push((nx, ny));
                promoted += 1;
            }
        }

        for y in 0..self.height() {
            for x in 0..width {
                if self.states.get(x, y) == EdgeState::Weak {
                    self.states.set(x, y, EdgeState::Background);
                }
            }
        }

        promoted
    }

    /// One 3×3 majority pass over a snapshot of the map.
    ///
    /// A pixel becomes strong when at least 5 in-bounds cells of its window,
    /// itself included, are strong. Other pixels keep their state.
    pub fn seal(&self) -> EdgeMap {
        let states = ScalarField::from_fn(self.width(), self.height(), |x, y| {
            let current = self.states.get(x, y);
            if current == EdgeState::Strong {
                return current;
            }
            let strong = self
                .neighbors(x, y)
                .filter(|&(nx, ny)| self.is_strong(nx, ny))
                .count();
            if strong >= SEAL_MAJORITY {
                EdgeState::Strong
            } else {
                current
            }
        });
        EdgeMap { states }
    }

    /// Strong pixels as opaque black ink on opaque white paper.
    pub fn render(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            if self.is_strong(x as usize, y as usize) {
                INK
            } else {
                PAPER
            }
        })
    }
}
