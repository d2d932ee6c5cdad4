pub mod appreciation;
pub mod price;
pub mod property;

pub use appreciation::interpret_appreciation;
pub use price::{normalize_price, OFF_MARKET};
pub use property::PropertyRecord;
