//! Thread-local context tracking for crash reports.
//!
//! Records which calculation phase and which CLI command were running, so a
//! panic report can say where it happened. Guards restore the previous
//! context on drop.

use std::cell::RefCell;
use std::path::PathBuf;

thread_local! {
    static CURRENT_CONTEXT: RefCell<CalculationContext> = const { RefCell::new(CalculationContext::new()) };
}

/// Snapshot of what savingscalc was doing.
#[derive(Debug, Clone, Default)]
pub struct CalculationContext {
    pub phase: Option<CalculationPhase>,
    pub command: Option<String>,
    /// Configuration file in effect, if one was loaded
    pub config_file: Option<PathBuf>,
}

impl CalculationContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            command: None,
            config_file: None,
        }
    }
}

/// Stages of a single recomputation plus the steps around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationPhase {
    /// Reading the configuration file
    ConfigLoading,
    /// Parsing and validating raw input values
    InputValidation,
    Normalizing,
    Projecting,
    BreakEven,
    Roi,
    Charting,
    /// Writing the report
    OutputGeneration,
}

impl std::fmt::Display for CalculationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigLoading => write!(f, "config_loading"),
            Self::InputValidation => write!(f, "input_validation"),
            Self::Normalizing => write!(f, "normalizing"),
            Self::Projecting => write!(f, "projecting"),
            Self::BreakEven => write!(f, "break_even"),
            Self::Roi => write!(f, "roi"),
            Self::Charting => write!(f, "charting"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard for restoring the calculation context on drop.
pub struct ContextGuard {
    previous: CalculationContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update_context(apply: impl FnOnce(&mut CalculationContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut *ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current phase. The previous phase comes back when the guard drops.
///
/// ```ignore
/// let _phase = set_phase(CalculationPhase::Projecting);
/// ```
#[must_use]
pub fn set_phase(phase: CalculationPhase) -> ContextGuard {
    update_context(|ctx| ctx.phase = Some(phase))
}

#[must_use]
pub fn set_command(name: impl Into<String>) -> ContextGuard {
    let name = name.into();
    update_context(|ctx| ctx.command = Some(name))
}

#[must_use]
pub fn set_config_file(path: impl Into<PathBuf>) -> ContextGuard {
    let path = path.into();
    update_context(|ctx| ctx.config_file = Some(path))
}

pub fn get_current_context() -> CalculationContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Clear the context for this thread (for testing).
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = CalculationContext::new();
    });
}
