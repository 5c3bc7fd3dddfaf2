pub mod bookingmodel;
pub mod catalogmodel;
pub mod contractormodel;
pub mod customermodel;
pub mod usermodel;
