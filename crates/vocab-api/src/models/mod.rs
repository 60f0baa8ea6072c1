//! Model module

mod response;

pub use response::WordDto;
