//! Signals over graph vertices.
//!
//! A signal holds one real value per node, addressed positionally: node `i` is
//! index `i`. Filters and transforms never mutate their input signal; they return
//! a new one.

use crate::error::{GspError, Result};
use crate::types::{Node, NodeValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signal(Vec<f64>);

impl Signal {
    /// Zero signal over `size` nodes.
    pub fn new(size: usize) -> Self {
        Self(vec![0.0; size])
    }

    pub fn from_vec(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    pub fn get(&self, node: Node) -> Option<f64> {
        self.0.get(node).copied()
    }

    /// Set the value at `node`.
    pub fn set(&mut self, node: Node, value: f64) -> Result<()> {
        let size = self.0.len();
        match self.0.get_mut(node) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(GspError::NodeOutOfRange { node, size }),
        }
    }

    /// Overwrite the first `values.len()` samples positionally.
    pub fn set_values(&mut self, values: &[f64]) -> Result<()> {
        if values.len() > self.0.len() {
            return Err(GspError::DimensionMismatch {
                expected: self.0.len(),
                actual: values.len(),
            });
        }
        self.0[..values.len()].copy_from_slice(values);
        Ok(())
    }

    /// Arithmetic mean; 0 for an empty signal.
    pub fn mean(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        self.0.iter().sum::<f64>() / self.0.len() as f64
    }

    /// Population variance; 0 for an empty signal.
    pub fn variance(&self) -> f64 {
        if self.0.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        self.0
            .iter()
            .map(|value| {
                let diff = value - mean;
                diff * diff
            })
            .sum::<f64>()
            / self.0.len() as f64
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Rescale in place to mean 0 and standard deviation 1.
    ///
    /// Empty and constant signals are rejected and left untouched. A spread
    /// within rounding noise of the mean counts as constant.
    pub fn normalize(&mut self) -> Result<()> {
        let Some(&first) = self.0.first() else {
            return Err(GspError::DegenerateSignal {
                reason: "cannot normalize an empty signal".to_string(),
            });
        };
        if self.0.iter().all(|&value| value == first) {
            return Err(GspError::DegenerateSignal {
                reason: format!("every sample equals {}", first),
            });
        }
        let mean = self.mean();
        let std_dev = self.std_dev();
        if !std_dev.is_finite() || std_dev <= f64::EPSILON * mean.abs().max(1.0) {
            return Err(GspError::DegenerateSignal {
                reason: format!("standard deviation is {}", std_dev),
            });
        }
        for value in &mut self.0 {
            *value = (*value - mean) / std_dev;
        }
        Ok(())
    }

    /// Samples as `(node, value)` pairs for rendering.
    pub fn node_values(&self) -> Vec<NodeValue> {
        self.0
            .iter()
            .enumerate()
            .map(|(node, &value)| NodeValue { node, value })
            .collect()
    }
}

impl From<Vec<f64>> for Signal {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl FromIterator<f64> for Signal {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<Node> for Signal {
    type Output = f64;

    fn index(&self, node: Node) -> &f64 {
        &self.0[node]
    }
}

impl<'a> IntoIterator for &'a Signal {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:.4}", value)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_is_zero() {
        let signal = Signal::new(3);
        assert_eq!(signal.as_slice(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_set_and_get() {
        let mut signal = Signal::new(3);
        signal.set(1, 4.5).unwrap();
        assert_eq!(signal.get(1), Some(4.5));
        assert_eq!(signal[1], 4.5);
        assert_eq!(signal.get(3), None);
        assert_eq!(
            signal.set(3, 1.0),
            Err(GspError::NodeOutOfRange { node: 3, size: 3 })
        );
    }

    #[test]
    fn test_set_values_prefix() {
        let mut signal = Signal::new(4);
        signal.set_values(&[1.0, 2.0]).unwrap();
        assert_eq!(signal.as_slice(), &[1.0, 2.0, 0.0, 0.0]);
        assert!(signal.set_values(&[1.0; 5]).is_err());
    }

    #[test]
    fn test_statistics() {
        let signal = Signal::from(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_abs_diff_eq!(signal.mean(), 5.0);
        assert_abs_diff_eq!(signal.variance(), 4.0);
        assert_abs_diff_eq!(signal.std_dev(), 2.0);
        assert_eq!(Signal::new(0).mean(), 0.0);
    }

    #[test]
    fn test_normalize() {
        let mut signal = Signal::from(vec![1.0, 2.0, 3.0, 10.0]);
        signal.normalize().unwrap();
        assert_abs_diff_eq!(signal.mean(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(signal.std_dev(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalize_constant_rejected() {
        let mut signal = Signal::from(vec![3.0, 3.0, 3.0]);
        assert!(matches!(
            signal.normalize(),
            Err(GspError::DegenerateSignal { .. })
        ));
        assert_eq!(signal.as_slice(), &[3.0, 3.0, 3.0]);
        assert!(Signal::new(0).normalize().is_err());
    }

    #[test]
    fn test_normalize_inexact_constant_rejected() {
        // 0.1 has no exact binary form, so the computed mean drifts off the samples
        let mut signal = Signal::from(vec![0.1; 3]);
        assert!(matches!(
            signal.normalize(),
            Err(GspError::DegenerateSignal { .. })
        ));
        assert_eq!(signal.as_slice(), &[0.1, 0.1, 0.1]);
    }

    #[test]
    fn test_node_values() {
        let signal = Signal::from(vec![0.5, -1.0]);
        let pairs = signal.node_values();
        assert_eq!(pairs[1], NodeValue { node: 1, value: -1.0 });
    }

    #[test]
    fn test_display_and_serde() {
        let signal: Signal = vec![1.0, 2.5].into_iter().collect();
        assert_eq!(signal.to_string(), "[1.0000 2.5000]");
        assert_eq!(serde_json::to_string(&signal).unwrap(), "[1.0,2.5]");
    }
}
