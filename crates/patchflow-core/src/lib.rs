pub mod consts;
pub mod error;
pub mod field;
pub mod frame;
pub mod io;
pub mod matcher;
pub mod visualize;
