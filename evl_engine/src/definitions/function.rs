//! Function definition metadata
//!
//! Only the call signature matters to the front-end: parameter names,
//! laziness, and var-arg placement. Function bodies are downstream.

use serde::{Deserialize, Serialize};

/// One declared parameter of a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionParameter {
    name: String,
    is_var_arg: bool,
    is_lazy: bool,
}

impl FunctionParameter {
    /// A plain required parameter
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_var_arg: false,
            is_lazy: false,
        }
    }

    /// A parameter that absorbs all remaining arguments
    pub fn var_arg(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_var_arg: true,
            is_lazy: false,
        }
    }

    /// A parameter whose argument is passed unevaluated
    pub fn lazy(name: &str) -> Self {
        Self {
            name: name.to_string(),
            is_var_arg: false,
            is_lazy: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_var_arg(&self) -> bool {
        self.is_var_arg
    }

    pub fn is_lazy(&self) -> bool {
        self.is_lazy
    }
}

/// Error raised when a parameter list is structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("var-arg parameter '{parameter}' must be the last parameter")]
pub struct InvalidFunctionParameters {
    pub parameter: String,
}

/// Metadata describing one function's call signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    parameters: Vec<FunctionParameter>,
}

impl FunctionDefinition {
    /// Create a definition, rejecting var-arg parameters in non-final
    /// position.
    pub fn new(parameters: Vec<FunctionParameter>) -> Result<Self, InvalidFunctionParameters> {
        let last = parameters.len().saturating_sub(1);
        for (index, parameter) in parameters.iter().enumerate() {
            if parameter.is_var_arg() && index != last {
                return Err(InvalidFunctionParameters {
                    parameter: parameter.name().to_string(),
                });
            }
        }
        Ok(Self { parameters })
    }

    pub fn parameters(&self) -> &[FunctionParameter] {
        &self.parameters
    }

    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the final parameter absorbs remaining arguments
    pub fn has_var_args(&self) -> bool {
        self.parameters
            .last()
            .map(FunctionParameter::is_var_arg)
            .unwrap_or(false)
    }

    /// Parameter definition governing the argument at `index`; var-arg
    /// overflow arguments map onto the final parameter.
    pub fn parameter_for_argument(&self, index: usize) -> Option<&FunctionParameter> {
        if index < self.parameters.len() {
            self.parameters.get(index)
        } else if self.has_var_args() {
            self.parameters.last()
        } else {
            None
        }
    }

    /// Whether the argument at `index` is passed unevaluated
    pub fn is_argument_lazy(&self, index: usize) -> bool {
        self.parameter_for_argument(index)
            .map(FunctionParameter::is_lazy)
            .unwrap_or(false)
    }
}
