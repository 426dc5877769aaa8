//! Vector quantization via the Linde-Buzo-Gray algorithm.
//!
//! Builds a codebook of representative 3-component vectors (e.g. RGB
//! pixels) by repeatedly splitting every codevector with a small
//! epsilon perturbation and relaxing the result with Lloyd iterations
//! until the average distortion stops improving.

use crate::error::{Error, Result};

/// A 3-component sample vector.
pub type Vector = [f64; 3];

/// Squared Euclidean distance between two vectors.
pub fn distance_squared(a: &Vector, b: &Vector) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}

fn centroid(vectors: &[Vector]) -> Vector {
    let size = vectors.len() as f64;
    let mut avg = [0.0; 3];
    for vector in vectors {
        for (slot, component) in avg.iter_mut().zip(vector.iter()) {
            *slot += component / size;
        }
    }
    avg
}

fn nearest(codebook: &[Vector], vector: &Vector) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (index, code) in codebook.iter().enumerate() {
        let dist = distance_squared(vector, code);
        if dist < best_dist {
            best_dist = dist;
            best = index;
        }
    }
    best
}

fn average_distortion(assigned: &[usize], codebook: &[Vector], data: &[Vector]) -> f64 {
    let size = data.len() as f64;
    assigned
        .iter()
        .zip(data.iter())
        .map(|(&index, vector)| distance_squared(&codebook[index], vector) / size)
        .sum()
}

fn split_codebook(
    data: &[Vector],
    codebook: Vec<Vector>,
    epsilon: f64,
    initial_avg_dist: f64,
) -> (Vec<Vector>, f64) {
    let mut codebook: Vec<Vector> = codebook
        .into_iter()
        .flat_map(|code| {
            let up = code.map(|x| x * (1.0 + epsilon));
            let down = code.map(|x| x * (1.0 - epsilon));
            [up, down]
        })
        .collect();

    let mut avg_dist = 0.0;
    let mut err = epsilon + 1.0;
    while err > epsilon {
        // Lloyd step: assign every vector to its nearest codevector,
        // then move each codevector to the centroid of its cell.
        let assigned: Vec<usize> = data.iter().map(|v| nearest(&codebook, v)).collect();
        for index in 0..codebook.len() {
            let cell: Vec<Vector> = assigned
                .iter()
                .zip(data.iter())
                .filter(|(&a, _)| a == index)
                .map(|(_, v)| *v)
                .collect();
            if !cell.is_empty() {
                codebook[index] = centroid(&cell);
            }
        }
        let assigned: Vec<usize> = data.iter().map(|v| nearest(&codebook, v)).collect();

        let prev_avg_dist = if avg_dist > 0.0 {
            avg_dist
        } else {
            initial_avg_dist
        };
        avg_dist = average_distortion(&assigned, &codebook, data);
        if prev_avg_dist <= 0.0 {
            break;
        }
        err = (prev_avg_dist - avg_dist) / prev_avg_dist;
    }

    (codebook, avg_dist)
}

/// Generate a codebook of at least `size` codevectors (the splitting
/// doubles the codebook, so the result is the next power of two).
/// Components are floored to whole values at the end, matching their
/// eventual use as quantized sample values.
///
/// # Errors
/// Returns [`Error::EmptyInput`] if `data` is empty.
pub fn generate_codebook(data: &[Vector], size: usize, epsilon: f64) -> Result<Vec<Vector>> {
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    let c0 = centroid(data);
    let mut avg_dist: f64 = data
        .iter()
        .map(|v| distance_squared(&c0, v) / data.len() as f64)
        .sum();
    let mut codebook = vec![c0];
    while codebook.len() < size {
        let (next, dist) = split_codebook(data, codebook, epsilon, avg_dist);
        codebook = next;
        avg_dist = dist;
    }
    Ok(codebook
        .into_iter()
        .map(|code| code.map(f64::floor))
        .collect())
}

/// Map every vector to its nearest codevector.
pub fn quantize(data: &[Vector], codebook: &[Vector]) -> Vec<Vector> {
    data.iter()
        .map(|vector| codebook[nearest(codebook, vector)])
        .collect()
}

/// Mean squared error between an original and its quantized version.
pub fn mse(original: &[Vector], quantized: &[Vector]) -> f64 {
    let size = original.len() as f64;
    original
        .iter()
        .zip(quantized.iter())
        .map(|(a, b)| distance_squared(a, b) / size)
        .sum()
}

/// Signal-to-noise ratio of a quantized signal given its MSE.
pub fn snr(original: &[Vector], mse: f64) -> f64 {
    let size = original.len() as f64;
    let power: f64 = original
        .iter()
        .map(|v| v.iter().map(|x| x * x).sum::<f64>() / size)
        .sum();
    power / mse
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clustered_data() -> Vec<Vector> {
        let mut data = Vec::new();
        for i in 0..20 {
            let jitter = (i % 5) as f64;
            data.push([10.0 + jitter, 10.0, 10.0]);
            data.push([200.0 + jitter, 200.0, 200.0]);
        }
        data
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            generate_codebook(&[], 2, 1e-5),
            Err(Error::EmptyInput)
        ));
    }

    #[test]
    fn test_codebook_size_rounds_to_power_of_two() {
        let data = clustered_data();
        assert_eq!(generate_codebook(&data, 1, 1e-5).unwrap().len(), 1);
        assert_eq!(generate_codebook(&data, 2, 1e-5).unwrap().len(), 2);
        assert_eq!(generate_codebook(&data, 3, 1e-5).unwrap().len(), 4);
    }

    #[test]
    fn test_two_clusters_found() {
        let data = clustered_data();
        let codebook = generate_codebook(&data, 2, 1e-5).unwrap();
        let mut firsts: Vec<f64> = codebook.iter().map(|c| c[0]).collect();
        firsts.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert!((firsts[0] - 12.0).abs() < 3.0);
        assert!((firsts[1] - 202.0).abs() < 3.0);
    }

    #[test]
    fn test_quantization_reduces_to_codebook() {
        let data = clustered_data();
        let codebook = generate_codebook(&data, 2, 1e-5).unwrap();
        let quantized = quantize(&data, &codebook);
        for vector in &quantized {
            assert!(codebook.contains(vector));
        }
        // Distortion against the two found centroids stays small for
        // such tight clusters.
        assert!(mse(&data, &quantized) < 16.0);
    }

    #[test]
    fn test_identical_data_degenerates_cleanly() {
        let data = vec![[50.0, 60.0, 70.0]; 8];
        let codebook = generate_codebook(&data, 4, 1e-5).unwrap();
        assert_eq!(codebook.len(), 4);
        let quantized = quantize(&data, &codebook);
        assert!(mse(&data, &quantized) < 1.0);
    }
}
