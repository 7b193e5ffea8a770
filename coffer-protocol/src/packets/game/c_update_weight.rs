//! Weight update packet.

use serde::Serialize;

/// Updates the carried weight shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CUpdateWeight {
    /// Carried weight in whole kilograms.
    pub weight: i32,
}

impl CUpdateWeight {
    /// Creates a weight update, dropping the fractional part of `weight`.
    #[must_use]
    pub fn new(weight: f64) -> Self {
        Self {
            weight: weight as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_rounds_toward_zero() {
        assert_eq!(CUpdateWeight::new(4.9).weight, 4);
        assert_eq!(CUpdateWeight::new(-0.5).weight, 0);
    }
}
