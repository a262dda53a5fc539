pub mod db;
pub mod host;
