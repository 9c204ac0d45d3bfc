//! Configuration for matrix multiplication

/// How `multiply_with` schedules its work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplyStrategy {
    /// Single-threaded row-by-row product
    Sequential,
    /// Rows of the left operand split across rayon workers
    Parallel,
    /// Parallel once the left operand is large enough, sequential otherwise
    Auto,
}

/// System parameters for performance tuning
#[derive(Debug, Clone)]
pub struct SystemParameters {
    /// Number of threads to use
    pub n_threads: usize,
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            n_threads: num_cpus::get(), // Use all available cores
        }
    }
}

/// Configuration for sparse matrix multiplication
#[derive(Debug, Clone)]
pub struct MultiplyConfig {
    /// System parameters for performance tuning
    pub system_params: SystemParameters,

    /// Scheduling strategy
    pub strategy: MultiplyStrategy,

    /// Minimum number of stored entries in the left operand before
    /// [`MultiplyStrategy::Auto`] goes parallel
    pub parallel_nnz_threshold: usize,
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self {
            system_params: SystemParameters::default(),
            strategy: MultiplyStrategy::Auto,
            parallel_nnz_threshold: 4096,
        }
    }
}

impl MultiplyConfig {
    /// Create a config that always uses the given strategy
    pub fn for_strategy(strategy: MultiplyStrategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Override the number of worker threads
    pub fn with_threads(mut self, n_threads: usize) -> Self {
        self.system_params.n_threads = n_threads.max(1);
        self
    }

    /// Decide whether a product whose left operand stores `lhs_nnz`
    /// entries should run on the parallel kernel
    pub fn use_parallel(&self, lhs_nnz: usize) -> bool {
        match self.strategy {
            MultiplyStrategy::Sequential => false,
            MultiplyStrategy::Parallel => true,
            MultiplyStrategy::Auto => {
                self.system_params.n_threads > 1 && lhs_nnz >= self.parallel_nnz_threshold
            }
        }
    }
}
