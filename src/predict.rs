//! JPEG-LS-style spatial prediction.
//!
//! Lossless predictors over a row-major single-channel plane. Each
//! sample is predicted from its decoded neighbors (N = above, W = left,
//! NW = above-left; out-of-border neighbors read as 0) and replaced by
//! the residual `(sample - prediction) mod 256`. Residual planes of
//! natural images have far lower order-0 entropy than the raw samples,
//! which is the whole point: predict first, then entropy-code.

use crate::error::{Error, Result};

/// The eight classic prediction schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predictor {
    /// W
    West,
    /// N
    North,
    /// NW
    NorthWest,
    /// N + W - NW
    Gradient,
    /// N + (W - NW) / 2
    NorthBiased,
    /// W + (N - NW) / 2
    WestBiased,
    /// ((N + W) mod 256) / 2
    Average,
    /// The LOCO-I median predictor.
    Loco,
}

/// All schemes, in their traditional numbering order.
pub const ALL_PREDICTORS: [Predictor; 8] = [
    Predictor::West,
    Predictor::North,
    Predictor::NorthWest,
    Predictor::Gradient,
    Predictor::NorthBiased,
    Predictor::WestBiased,
    Predictor::Average,
    Predictor::Loco,
];

impl Predictor {
    /// Predict a sample from its three causal neighbors.
    pub fn predict(self, n: i32, w: i32, nw: i32) -> i32 {
        match self {
            Predictor::West => w,
            Predictor::North => n,
            Predictor::NorthWest => nw,
            Predictor::Gradient => n + w - nw,
            Predictor::NorthBiased => n + (w - nw).div_euclid(2),
            Predictor::WestBiased => w + (n - nw).div_euclid(2),
            Predictor::Average => ((n + w).rem_euclid(256)) / 2,
            Predictor::Loco => {
                let (min, max) = (w.min(n), w.max(n));
                if nw >= max {
                    min
                } else if nw <= min {
                    max
                } else {
                    w + n - nw
                }
            }
        }
    }
}

fn sample(plane: &[u8], width: usize, row: usize, col: usize) -> i32 {
    plane[row * width + col] as i32
}

fn neighbors(plane: &[u8], width: usize, row: usize, col: usize) -> (i32, i32, i32) {
    let n = if row > 0 {
        sample(plane, width, row - 1, col)
    } else {
        0
    };
    let w = if col > 0 {
        sample(plane, width, row, col - 1)
    } else {
        0
    };
    let nw = if row > 0 && col > 0 {
        sample(plane, width, row - 1, col - 1)
    } else {
        0
    };
    (n, w, nw)
}

fn check_plane(plane: &[u8], width: usize) -> Result<()> {
    if width == 0 || plane.len() % width != 0 {
        return Err(Error::OddLength(plane.len()));
    }
    Ok(())
}

/// Replace every sample by its prediction residual mod 256.
///
/// # Errors
/// Returns [`Error::OddLength`] if the plane is not a whole number of
/// `width`-sized rows.
pub fn residuals(plane: &[u8], width: usize, scheme: Predictor) -> Result<Vec<u8>> {
    check_plane(plane, width)?;
    let mut out = Vec::with_capacity(plane.len());
    for row in 0..plane.len() / width {
        for col in 0..width {
            let (n, w, nw) = neighbors(plane, width, row, col);
            let predicted = scheme.predict(n, w, nw);
            let residual = (sample(plane, width, row, col) - predicted).rem_euclid(256);
            out.push(residual as u8);
        }
    }
    Ok(out)
}

/// Rebuild the original plane from its residuals; inverse of
/// [`residuals`]. Predictions are taken from already-reconstructed
/// neighbors, so the two stay in lockstep.
///
/// # Errors
/// Returns [`Error::OddLength`] on a ragged plane, as [`residuals`].
pub fn reconstruct(residuals: &[u8], width: usize, scheme: Predictor) -> Result<Vec<u8>> {
    check_plane(residuals, width)?;
    let mut out = vec![0u8; residuals.len()];
    for row in 0..residuals.len() / width {
        for col in 0..width {
            let (n, w, nw) = neighbors(&out, width, row, col);
            let predicted = scheme.predict(n, w, nw);
            let value = (residuals[row * width + col] as i32 + predicted).rem_euclid(256);
            out[row * width + col] = value as u8;
        }
    }
    Ok(out)
}
