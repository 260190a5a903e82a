pub mod entity;
pub mod kind;
pub mod repository;
pub mod value_object;
