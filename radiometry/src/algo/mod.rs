//! Numerical building blocks shared by the radiometric models.

pub mod roots;
pub mod trapezoid;

pub use roots::{bisect, Root, RootError};
pub use trapezoid::{trap_integrate, trap_integrate_product};
