pub mod factory;
pub mod hare_race;
pub mod wet_grass;
