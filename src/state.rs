use crate::models::AppData;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub default_deployment: String,
    pub data: Arc<Mutex<AppData>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, default_deployment: impl Into<String>, data: AppData) -> Self {
        Self {
            data_path,
            default_deployment: default_deployment.into(),
            data: Arc::new(Mutex::new(data)),
        }
    }
}
