use crate::scoring::extractor::SkillSet;

/// Jaccard index |A ∩ B| / |A ∪ B|. Two empty sets score 0.0, not NaN.
pub fn jaccard_similarity(a: &SkillSet, b: &SkillSet) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}
