//! Tests for configuration

#[cfg(test)]
mod tests {
    use crate::config::*;
    use std::io::Write;

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.company.name, "Propdesk Funding");
    }

    #[test]
    fn api_config_defaults_from_empty_toml() {
        let config: ApiConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn company_config_from_toml() {
        let config: CompanyConfig = toml::from_str(r#"name = "Acme Funding""#).unwrap();
        assert_eq!(config.name, "Acme Funding");
    }

    #[test]
    fn full_config_from_toml() {
        let toml_str = r#"
[api]
base_url = "https://desk.example.com/"
timeout_secs = 10

[company]
name = "Acme Funding"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "https://desk.example.com/");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.company.name, "Acme Funding");
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "[api]\nbase_url = \"http://desk.internal:9100\"").unwrap();
        writeln!(file, "[company]\nname = \"Tempfile Funding\"").unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.api.base_url, "http://desk.internal:9100");
        assert_eq!(config.company.name, "Tempfile Funding");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn load_missing_file_falls_back_to_defaults() {
        let config = Config::load("/definitely/not/here/config.toml").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
    }
}
