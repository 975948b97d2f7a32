pub mod baseer;
pub mod raqib;

pub use baseer::Baseer;
pub use raqib::Raqib;
