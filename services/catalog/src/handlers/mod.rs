pub mod account;
pub mod director;
pub mod movie;
pub mod review;
