pub mod directors;
pub mod movies;
pub mod reviews;
pub mod users;
