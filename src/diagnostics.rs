// ABOUTME: Diagnostics accumulator for non-fatal warnings during a command.
// ABOUTME: Collects warnings that shouldn't fail a deployment but should be shown to users.

/// Collects non-fatal warnings during scaffolding and deployment.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A non-fatal warning collected during a command.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Create a dependency toggle warning.
    pub fn dependency_toggle(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::DependencyToggle,
            message: message.into(),
        }
    }

    /// Create a dependency install warning.
    pub fn install(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::Install,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Removing or re-adding the bundled SDK failed; the directory may be left without it.
    DependencyToggle,
    /// Installing a new function's dependencies failed.
    Install,
}
