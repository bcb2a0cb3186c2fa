pub mod birthday;
pub mod notification;
pub mod profile_directory;
pub mod seed;
