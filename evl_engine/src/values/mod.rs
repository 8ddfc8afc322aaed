//! Value contracts shared between the front-end and the evaluator
//!
//! The front-end owns the value *types* — the evaluation value itself, the
//! numeric context, the standard constants, and the converter/accessor
//! seams — while the arithmetic on them lives downstream.

pub mod accessor;
pub mod constants;
pub mod converter;
pub mod math;
pub mod value;

pub use accessor::{
    default_data_accessor_supplier, DataAccessor, DataAccessorSupplier, MapBasedDataAccessor,
};
pub use constants::{standard_constant, standard_constants, standard_constants_map};
pub use converter::{DefaultValueConverter, RawValue, ValueConverter};
pub use math::MathContext;
pub use value::EvaluationValue;
