use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Config {
    pub max_expense_amount: f64,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            max_expense_amount: env::var("MAX_EXPENSE_AMOUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000_000.0),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
