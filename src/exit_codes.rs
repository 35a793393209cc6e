//! Exit codes for the Infosweb CLI
//!
//! Automation (for example an Okta Workflows invocation) distinguishes
//! failure kinds by these codes.

/// Process exit codes
///
/// 1-3 are the documented failure kinds. The remaining codes follow BSD
/// sysexits.h for conditions outside that contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoswebExitCode {
    /// Success (0) - Command completed successfully
    Success = 0,

    /// API error (1) - Remote API returned a non-success response
    ApiError = 1,

    /// Transport error (2) - Connection, DNS or timeout failure
    TransportError = 2,

    /// Configuration error (3) - Missing credentials or invalid settings
    ConfigError = 3,

    /// Command line usage error (64)
    UsageError = 64,

    /// Internal software error (70) - Unexpected application error
    SoftwareError = 70,
}

impl InfoswebExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<InfoswebExitCode> for i32 {
    fn from(code: InfoswebExitCode) -> Self {
        code.code()
    }
}
