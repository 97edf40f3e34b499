mod fixture;
mod match_record;
mod raw;
mod team;

pub use fixture::*;
pub use match_record::*;
pub use raw::*;
pub use team::*;
