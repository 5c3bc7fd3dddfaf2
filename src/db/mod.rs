pub mod bookingdb;
pub mod cache;
pub mod categorydb;
pub mod contractordb;
pub mod customerdb;
pub mod db;
pub mod servicedb;
pub mod userdb;
