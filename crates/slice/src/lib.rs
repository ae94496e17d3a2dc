mod errors;
mod iter;
mod range;
mod spec;


pub use errors::*;
pub use iter::*;
pub use range::*;
pub use spec::*;
