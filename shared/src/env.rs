use std::env;

pub enum Environment {
    Development,
    Production,
}

/// Decide the runtime environment from the `ENV` variable,
/// falling back to the build profile.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV") {
        Err(_) => default_env,
        Ok(v) => match v.as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        },
    }
}
