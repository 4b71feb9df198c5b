// src/resources/embeddings.rs — Vector operations

/// Compute cosine similarity between two vectors.
///
/// The epsilon in the denominator guards divide-by-zero on a zero vector;
/// mismatched lengths and empty inputs compare as 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    dot / (norm_a * norm_b + 1e-12)
}
