pub use super::forum::Entity as Forum;
pub use super::post::Entity as Post;
pub use super::topic::Entity as Topic;
pub use super::user::Entity as User;
