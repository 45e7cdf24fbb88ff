pub mod assignment;
pub mod complete;
pub mod course;
pub mod dashboard;
pub mod dispatch;
pub mod enroll;
pub mod history;
pub mod lesson;
pub mod progress;
pub mod quiz;
pub mod schema;
pub mod shared;
