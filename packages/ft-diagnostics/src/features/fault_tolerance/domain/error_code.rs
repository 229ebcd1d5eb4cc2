use std::fmt;

use serde::{Deserialize, Serialize};

use crate::features::diagnostics::JavaErrorCode;

/// Codes of the diagnostics produced by the fault tolerance rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FaultToleranceErrorCode {
    /// `fallbackMethod` names no method of the enclosing type
    FallbackMethodDoesNotExist,
    /// `@Asynchronous` on a method with an unsupported return type
    FaultToleranceDefinitionException,
}

impl FaultToleranceErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FallbackMethodDoesNotExist => "FALLBACK_METHOD_DOES_NOT_EXIST",
            Self::FaultToleranceDefinitionException => "FAULT_TOLERANCE_DEFINITION_EXCEPTION",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "FALLBACK_METHOD_DOES_NOT_EXIST" => Some(Self::FallbackMethodDoesNotExist),
            "FAULT_TOLERANCE_DEFINITION_EXCEPTION" => Some(Self::FaultToleranceDefinitionException),
            _ => None,
        }
    }
}

impl JavaErrorCode for FaultToleranceErrorCode {
    fn code(&self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for FaultToleranceErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
