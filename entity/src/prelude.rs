pub use super::bootcamp::Entity as Bootcamp;
pub use super::course::Entity as Course;
pub use super::review::Entity as Review;
pub use super::user::Entity as User;
