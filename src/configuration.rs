use config::ConfigError;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub auth: AuthSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub port: u16,
}

/// Authentication settings
///
/// Constructed once at startup and shared by reference with both the
/// credential verifier and the token codec. None of these values may
/// change within a process lifetime: in particular, replacing `secret`
/// invalidates every outstanding session token, since token validity is
/// determined purely by signature verification against this key. That is
/// an intentional property of the stateless design, not a bug.
#[derive(serde::Deserialize, Clone)]
pub struct AuthSettings {
    /// HMAC secret for token signing
    pub secret: String,
    /// Session token lifetime in seconds (e.g., 1800 for 30 minutes)
    pub token_ttl_seconds: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration").required(false))
        // APP__AUTH__SECRET=... overrides auth.secret
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;
    settings.try_deserialize::<Settings>()
}
