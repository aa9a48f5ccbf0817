//! Domain layer: parameter declarations and argument coercion
//!
//! This layer is independent of external concerns (no I/O, no process state).

pub mod arguments;
pub mod coercer;
pub mod error;
pub mod param;
pub mod usage;

pub use arguments::ParsedArguments;
pub use coercer::coerce_arguments;
pub use error::{ArgError, ArgResult, SpecError};
pub use param::{validate_params, ParamSpec, Role, Value, ValueType};
pub use usage::{render_help, usage_line, wants_help};
