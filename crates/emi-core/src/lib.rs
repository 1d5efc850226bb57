pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "amortisation")]
pub mod amortisation;

#[cfg(feature = "render")]
pub mod render;

pub use error::EmiError;
pub use types::*;

#[cfg(feature = "amortisation")]
pub use amortisation::schedule::{build_schedule, compute_loan, Installment, Loan, LoanInput};

#[cfg(feature = "render")]
pub use render::html::{render_table, TableOptions};

/// Standard result type for all emi operations
pub type EmiResult<T> = Result<T, EmiError>;
