// calculator.rs

use tracing::{debug, warn};

use crate::error::CalcError;
use crate::history::History;

/// Truncated on purpose: recorded areas must keep this exact value.
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14159;

/// Arithmetic helpers that record every successful computation.
///
/// Failing calls return [`CalcError::InvalidArgument`] and leave the
/// history untouched.
#[derive(Debug, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self { history: History::new() }
    }

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        let result = a + b;
        self.record(format!("{a} + {b} = {result}"));
        result
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        let result = a - b;
        self.record(format!("{a} - {b} = {result}"));
        result
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        let result = a * b;
        self.record(format!("{a} * {b} = {result}"));
        result
    }

    pub fn divide(&mut self, a: f64, b: f64) -> Result<f64, CalcError> {
        if b == 0.0 {
            warn!(a, "rejected division by zero");
            return Err(CalcError::invalid_argument("Cannot divide by zero"));
        }
        let result = a / b;
        self.record(format!("{a} / {b} = {result}"));
        Ok(result)
    }

    pub fn area_of_circle(&mut self, radius: f64) -> Result<f64, CalcError> {
        if radius < 0.0 {
            warn!(radius, "rejected negative radius");
            return Err(CalcError::invalid_argument("Radius cannot be negative"));
        }
        // A = PI * r^2
        let result = PI * radius * radius;
        self.record(format!("Area of circle with radius {radius} = {result}"));
        Ok(result)
    }

    /// Copy of the history; later operations do not show up in it.
    pub fn history(&self) -> Vec<String> {
        self.history.snapshot()
    }

    pub fn clear_history(&mut self) {
        if !self.history.is_empty() {
            debug!(cleared = self.history.len(), "clearing history");
            self.history.clear();
        }
    }

    pub fn search_history(&self, term: &str) -> Vec<String> {
        self.history.search(term)
    }

    /// Borrowed view for callers that only print.
    pub fn log(&self) -> &History {
        &self.history
    }

    fn record(&mut self, entry: String) {
        debug!(%entry, "recorded operation");
        self.history.add(entry);
    }
}
