pub mod consts;
pub mod effects;
pub mod handlers;
pub mod models;
pub mod responses;
pub mod services;
pub mod view;
