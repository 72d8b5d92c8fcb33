//! Reactive update handlers keyed by output id.
//!
//! The page posts the current values of a handler's named inputs to
//! `/api/update`; the registry finds the handler for the requested output and
//! returns the new output value.

use radrisk_common::error::ApiError;
use radrisk_common::CalculatorInput;
use serde_json::{Map, Value};

pub const DOSE_OUTPUT: &str = "dose-output";
pub const FLIGHTS_INPUT: &str = "flights-slider";
pub const XRAYS_INPUT: &str = "xray-slider";

pub type Inputs = Map<String, Value>;

type Handler = Box<dyn Fn(&[i64]) -> Result<Value, ApiError> + Send + Sync>;

pub struct Callback {
    pub output: String,
    pub inputs: Vec<String>,
    handler: Handler,
}

#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `output`. Input values reach the handler in the
    /// order given here. Re-registering an output replaces the old handler.
    pub fn register<F>(&mut self, output: &str, inputs: &[&str], handler: F)
    where
        F: Fn(&[i64]) -> Result<Value, ApiError> + Send + Sync + 'static,
    {
        if let Some(pos) = self.callbacks.iter().position(|c| c.output == output) {
            tracing::warn!("Replacing callback for output '{}'", output);
            self.callbacks.remove(pos);
        }
        self.callbacks.push(Callback {
            output: output.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            handler: Box::new(handler),
        });
    }

    pub fn get(&self, output: &str) -> Option<&Callback> {
        self.callbacks.iter().find(|c| c.output == output)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.callbacks.iter().map(|c| c.output.as_str())
    }

    pub fn dispatch(&self, output: &str, inputs: &Inputs) -> Result<Value, ApiError> {
        let callback = self
            .get(output)
            .ok_or_else(|| ApiError::NotFound(format!("No callback registered for output '{}'", output)))?;

        let values = callback
            .inputs
            .iter()
            .map(|name| integer_input(inputs, name))
            .collect::<Result<Vec<i64>, ApiError>>()?;

        tracing::debug!(output, ?values, "Dispatching callback");
        (callback.handler)(&values)
    }
}

fn integer_input(inputs: &Inputs, name: &str) -> Result<i64, ApiError> {
    let value = inputs
        .get(name)
        .ok_or_else(|| ApiError::BadRequest(format!("Missing input '{}'", name)))?;
    value
        .as_i64()
        .ok_or_else(|| ApiError::BadRequest(format!("Input '{}' must be an integer, got {}", name, value)))
}

/// The registry served by the site: the dose calculator wired to its two sliders.
pub fn default_registry() -> CallbackRegistry {
    let mut registry = CallbackRegistry::new();
    registry.register(DOSE_OUTPUT, &[FLIGHTS_INPUT, XRAYS_INPUT], |values| {
        let input = CalculatorInput::new(values[0], values[1])?;
        Ok(Value::String(input.message()))
    });
    registry
}
