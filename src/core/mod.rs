pub mod errors;
pub mod types;

pub use errors::{CalculatorError, InputField, Result};
pub use types::{
    BreakEven, CalculatorInput, CalculatorOutput, FrequencyUnit, HorizonTotals, ProductivityItem,
    RoiRatio, SavingsData, TimeUnit, YearlySavingsItem,
};
