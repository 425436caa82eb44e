use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub port: Option<u16>,

    pub database_url: String,

    pub seed_data_url: String,
    pub admin_token: String,
}
