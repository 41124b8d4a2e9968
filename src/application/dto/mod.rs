pub mod pagination;
pub mod users;

pub use pagination::SearchPageDto;
pub use users::{UserDto, UserWithCursorDto};
