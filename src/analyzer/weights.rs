use num::Num;

/// Weight calculation engine trait.
///
/// Implement it to plug a different weighting scheme into the vocabulary
/// builder. `N` is the output parameter type; the default engine provides
/// f64 and f32.
pub trait WeightEngine<N>
where
    N: Num,
{
    /// Inverse document frequency for one term:
    /// `1 + log10(total_docs / df)`.
    ///
    /// Guarded: `None` when `df` is zero. Any entry actually present in a DF
    /// table has `df >= 1`, so the guard only trips on misuse.
    fn idf(df: u64, total_docs: u64) -> Option<N>;
}

/// Default engine, textbook base-10 IDF.
#[derive(Debug)]
pub struct DefaultWeightEngine;

impl WeightEngine<f64> for DefaultWeightEngine {
    fn idf(df: u64, total_docs: u64) -> Option<f64> {
        if df == 0 {
            return None;
        }
        Some(1.0 + (total_docs as f64 / df as f64).log10())
    }
}

impl WeightEngine<f32> for DefaultWeightEngine {
    fn idf(df: u64, total_docs: u64) -> Option<f32> {
        if df == 0 {
            return None;
        }
        Some((1.0 + (total_docs as f64 / df as f64).log10()) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rare_term_in_ten_docs_weighs_two() {
        let idf: f64 = DefaultWeightEngine::idf(1, 10).unwrap();
        assert!((idf - 2.0).abs() < 1e-12);
    }

    #[test]
    fn ubiquitous_term_weighs_one() {
        let idf: f64 = DefaultWeightEngine::idf(10, 10).unwrap();
        assert!((idf - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_df_is_guarded() {
        assert_eq!(<DefaultWeightEngine as WeightEngine<f64>>::idf(0, 10), None);
        assert_eq!(<DefaultWeightEngine as WeightEngine<f32>>::idf(0, 10), None);
    }

    #[test]
    fn f32_impl_tracks_f64() {
        let wide: f64 = DefaultWeightEngine::idf(3, 120).unwrap();
        let narrow: f32 = DefaultWeightEngine::idf(3, 120).unwrap();
        assert!((wide as f32 - narrow).abs() < 1e-6);
    }
}
