//! Return distribution models.
//!
//! Each submodule holds one concrete model; [`model_enum`] wraps them
//! in the [`ReturnModel`] static dispatch enum the engine consumes.
//!
//! | Model | State | Parameters |
//! |-------|-------|------------|
//! | [`NormalModel`] | stateless | mean, std_dev |
//! | [`StudentTModel`] | stateless | degrees_of_freedom, location, scale |
//! | [`GarchModel`] | conditional variance | omega, alpha, beta |
//! | [`EmpiricalModel`] | stateless | sample pool |

pub mod empirical;
pub mod garch;
pub mod model_enum;
pub mod normal;
pub mod student_t;

pub use empirical::EmpiricalModel;
pub use garch::GarchModel;
pub use model_enum::{DistributionKind, ReturnModel};
pub use normal::{standard_normal, NormalModel};
pub use student_t::StudentTModel;
