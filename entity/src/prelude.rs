pub use super::course::Entity as Course;
pub use super::department::Entity as Department;
pub use super::student::Entity as Student;
