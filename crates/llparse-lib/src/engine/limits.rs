/// Resource limits for a grammar run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum total node evaluations (default: 1,000,000).
    pub(crate) exec_fuel: u32,
    /// Maximum nesting of node evaluations (default: 8192). Stops runaway
    /// recursion such as a left-recursive rule; the native stack grows on
    /// demand, so this does not depend on the thread's stack size.
    pub(crate) recursion_limit: u32,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            exec_fuel: 1_000_000,
            recursion_limit: 8192,
        }
    }
}

impl ParseLimits {
    /// Create new limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u32) -> Self {
        self.exec_fuel = fuel;
        self
    }

    /// Set the recursion limit.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }
}
