pub mod bookings;
pub mod categories;
pub mod contractors;
pub mod customers;
pub mod services;
pub mod users;
