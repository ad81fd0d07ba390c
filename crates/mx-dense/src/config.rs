/// Tunables for the blocked and recursive multiply strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplyConfig {
    /// Side length of the cubes the tiled strategy partitions `i, j, k` into.
    pub block_size: usize,
    /// Order at or below which Strassen falls back to the standard loop.
    pub strassen_threshold: usize,
}

impl MultiplyConfig {
    pub const DEFAULT_BLOCK_SIZE: usize = 32;
    pub const DEFAULT_STRASSEN_THRESHOLD: usize = 64;

    pub fn new() -> Self {
        MultiplyConfig {
            block_size: Self::DEFAULT_BLOCK_SIZE,
            strassen_threshold: Self::DEFAULT_STRASSEN_THRESHOLD,
        }
    }

    /// Returns a copy with the tiled block size replaced.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Returns a copy with the Strassen base-case threshold replaced.
    pub fn with_strassen_threshold(mut self, threshold: usize) -> Self {
        self.strassen_threshold = threshold;
        self
    }
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = MultiplyConfig::default();
        assert_eq!(c.block_size, 32);
        assert_eq!(c.strassen_threshold, 64);
    }

    #[test]
    fn test_builders() {
        let c = MultiplyConfig::new()
            .with_block_size(8)
            .with_strassen_threshold(2);
        assert_eq!(c.block_size, 8);
        assert_eq!(c.strassen_threshold, 2);
    }
}
