mod direction;
mod execute;
mod order;
mod response;
mod unique;
mod window;

pub use direction::SortDirective;
pub use execute::{UniqueValues, UniqueValuesRequest};
pub use order::order;
pub use response::ResultPage;
pub use unique::unique;
pub use window::{PageRequest, window};
