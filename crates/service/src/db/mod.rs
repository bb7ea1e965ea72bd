pub mod animal_service;
pub mod car_service;
