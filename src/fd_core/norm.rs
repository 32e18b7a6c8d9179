use crate::fd_core::grid::Vector;

/// Sum of absolute values.
pub fn one_norm(v: &Vector) -> f64 {
    v.iter().map(|x| x.abs()).sum()
}

/// Euclidean norm.
pub fn two_norm(v: &Vector) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Largest absolute value; NaN if any entry is NaN.
pub fn uniform_norm(v: &Vector) -> f64 {
    v.iter().fold(0.0, |max, &x| {
        let a = x.abs();
        if a.is_nan() || a > max {
            a
        } else {
            max
        }
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormTriple {
    pub one: f64,
    pub two: f64,
    pub uniform: f64,
}

impl NormTriple {
    /// All three norms of `v`, each divided by `scale`.
    pub fn scaled(v: &Vector, scale: f64) -> Self {
        NormTriple {
            one: one_norm(v) / scale,
            two: two_norm(v) / scale,
            uniform: uniform_norm(v) / scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn norms_of_small_vector() {
        let v = Vector::from_vec(vec![3.0, -4.0, 0.0]);

        assert_relative_eq!(one_norm(&v), 7.0);
        assert_relative_eq!(two_norm(&v), 5.0);
        assert_relative_eq!(uniform_norm(&v), 4.0);
    }

    #[test]
    fn scaled_norms_keep_ordering() {
        let v = Vector::from_vec(vec![0.25, -1.5, 0.75, 2.0, -0.125]);
        let n = NormTriple::scaled(&v, 4.0);
        let len = v.len() as f64;

        assert!(n.uniform >= 0.0);
        assert!(n.uniform <= n.two && n.two <= n.one);
        assert!(n.two <= len.sqrt() * n.uniform + 1e-15);
        assert!(n.one <= len * n.uniform + 1e-15);
        assert_relative_eq!(n.uniform, 0.5);
    }

    #[test]
    fn nan_entry_poisons_every_norm() {
        let v = Vector::from_vec(vec![0.5, f64::NAN, 0.25]);
        assert!(uniform_norm(&v).is_nan());

        let n = NormTriple::scaled(&v, 1.0);
        assert!(n.one.is_nan() && n.two.is_nan() && n.uniform.is_nan());

        let trailing = Vector::from_vec(vec![f64::NAN, 2.0, -3.0]);
        assert!(uniform_norm(&trailing).is_nan());
    }

    #[test]
    fn zero_vector_has_zero_norms() {
        let n = NormTriple::scaled(&Vector::zeros(10), 100.0);
        assert_eq!(n, NormTriple { one: 0.0, two: 0.0, uniform: 0.0 });
    }
}
