use std::fmt;

use crate::config::MultiplyConfig;

/// Selectable dense multiplication algorithm.
///
/// Every variant computes the same product `C = A @ B`; they differ only in
/// loop order and memory access pattern. Results agree to floating-point
/// tolerance for identical inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Triple loop in `i, j, k` order.
    Standard,
    /// Loop order `i, k, j`: `A[i][k]` is read once and row `k` of `B` is
    /// streamed into row `i` of `C`.
    RowOriented,
    /// `i, j, k` partitioned into cubes of side `block_size`, row-oriented
    /// within each cube.
    Tiled { block_size: usize },
    /// Recursive seven-product divide and conquer, falling back to the
    /// standard loop at or below `threshold`.
    Strassen { threshold: usize },
}

impl Strategy {
    /// Tiled strategy with the default block size.
    pub fn tiled() -> Self {
        Strategy::Tiled {
            block_size: MultiplyConfig::DEFAULT_BLOCK_SIZE,
        }
    }

    /// Strassen strategy with the default base-case threshold.
    pub fn strassen() -> Self {
        Strategy::Strassen {
            threshold: MultiplyConfig::DEFAULT_STRASSEN_THRESHOLD,
        }
    }

    /// One instance of every strategy, parameterized from `config`.
    pub fn all(config: &MultiplyConfig) -> [Strategy; 4] {
        [
            Strategy::Standard,
            Strategy::RowOriented,
            Strategy::Tiled {
                block_size: config.block_size,
            },
            Strategy::Strassen {
                threshold: config.strassen_threshold,
            },
        ]
    }

    /// Short stable identifier (e.g. "standard", "tiled").
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Standard => "standard",
            Strategy::RowOriented => "row_oriented",
            Strategy::Tiled { .. } => "tiled",
            Strategy::Strassen { .. } => "strassen",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Tiled { block_size } => write!(f, "tiled(block_size={})", block_size),
            Strategy::Strassen { threshold } => write!(f, "strassen(threshold={})", threshold),
            other => write!(f, "{}", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Strategy::Standard.name(), "standard");
        assert_eq!(Strategy::RowOriented.name(), "row_oriented");
        assert_eq!(Strategy::tiled().name(), "tiled");
        assert_eq!(Strategy::strassen().name(), "strassen");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Strategy::tiled(), Strategy::Tiled { block_size: 32 });
        assert_eq!(Strategy::strassen(), Strategy::Strassen { threshold: 64 });
    }

    #[test]
    fn test_all_uses_config() {
        let config = MultiplyConfig::new().with_block_size(4).with_strassen_threshold(1);
        let all = Strategy::all(&config);
        assert_eq!(all[0], Strategy::Standard);
        assert_eq!(all[1], Strategy::RowOriented);
        assert_eq!(all[2], Strategy::Tiled { block_size: 4 });
        assert_eq!(all[3], Strategy::Strassen { threshold: 1 });
    }

    #[test]
    fn test_display() {
        assert_eq!(Strategy::Standard.to_string(), "standard");
        assert_eq!(
            Strategy::Tiled { block_size: 8 }.to_string(),
            "tiled(block_size=8)"
        );
    }
}
