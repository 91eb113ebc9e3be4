pub mod coordinate;
pub mod date_extremes;
pub mod error;
pub mod into_observation_time;
pub mod level;
pub mod observation_time;
pub mod record;
pub mod value;
pub mod var_code;
