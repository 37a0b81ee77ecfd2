pub mod contractdb;
pub mod db;
pub mod paymentdb;
pub mod profiledb;
pub mod reportdb;
