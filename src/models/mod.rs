pub mod birthday;
pub mod department;
pub mod duty_schedule;
pub mod employee;
