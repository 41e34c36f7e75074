pub use self::json::JsonBody;
pub use self::param::param;

pub mod json;
pub mod param;
