mod error;
mod record;
mod value;

pub use error::{Result, StoreError};
pub use record::Record;
pub use value::Value;
