//! Dense vector math shared by the bag-of-words and TF-IDF scorers.

/// Dot product over the common prefix of two vectors.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean norm.
pub fn l2_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity, 0.0 when either vector has zero norm. Rounding
/// error is clamped so the result stays within [-1, 1].
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot(a, b) / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Widen a count vector for the float routines above.
pub fn to_f64(counts: &[u32]) -> Vec<f64> {
    counts.iter().map(|&c| c as f64).collect()
}
