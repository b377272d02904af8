pub mod app;
pub mod config;
pub mod controller;
pub mod dao;
pub mod deadline;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod ordering;
pub mod state;
pub mod storage;
pub mod surface;
pub mod tags;
pub mod ui;
pub mod views;

pub use app::router;
pub use config::{ClientConfig, ServiceConfig};
pub use controller::Controller;
pub use dao::{DaoError, ToDoItemDao, ToDoRepository};
pub use models::ToDoItem;
pub use state::AppState;
pub use storage::load_data;
