mod access;
mod errors;
mod view;
mod window;


pub use access::*;
pub use errors::*;
pub use view::*;
pub use window::*;
