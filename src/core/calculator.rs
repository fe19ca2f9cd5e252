//! Arithmetic helpers used to exercise the test harness.

/// Stateless helper with a plain `add`
#[derive(Debug, Default, Clone, Copy)]
pub struct Helper;

impl Helper {
    pub fn new() -> Self {
        Self
    }

    /// Wraps around on overflow
    pub fn add(&self, a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }
}

/// Backend that performs the actual addition for a [`Calculator`]
pub trait CalculatorService: Send + Sync {
    fn add(&self, a: i32, b: i32) -> i32;
}

/// Service that adds with [`Helper`]
#[derive(Debug, Default, Clone, Copy)]
pub struct HelperCalculatorService;

impl CalculatorService for HelperCalculatorService {
    fn add(&self, a: i32, b: i32) -> i32 {
        Helper.add(a, b)
    }
}

/// Forwards every call to its service and returns the answer unchanged
pub struct Calculator<S: CalculatorService> {
    service: S,
}

impl<S: CalculatorService> Calculator<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        self.service.add(a, b)
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

impl Default for Calculator<HelperCalculatorService> {
    fn default() -> Self {
        Self::new(HelperCalculatorService)
    }
}
