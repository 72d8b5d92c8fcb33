#[cfg(test)]
mod tests {
    use super::super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.profile, Profile::Local);
        assert_eq!(config.port(), 8050);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.site.models, RiskModel::ALL.to_vec());
        assert_eq!(config.site.hormesis, HormesisVariant::Exponential);
    }

    #[test]
    fn test_deploy_profile_port() {
        let config = Config::parse("profile = \"deploy\"", Format::Toml).unwrap();
        assert_eq!(config.port(), 10000);
    }

    #[test]
    fn test_port_env_overrides_file_and_profile() {
        let config = Config::parse("profile = \"deploy\"\n[server]\nport = 9000\n", Format::Toml)
            .unwrap()
            .with_port_override(Some("4321"))
            .unwrap();
        assert_eq!(config.port(), 4321);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::default().with_port_override(Some("eighty")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "eighty"));
        assert!(Config::default().with_port_override(Some("70000")).is_err());
    }

    #[test]
    fn test_formats_agree() {
        let toml_src = r#"
            [site]
            title = "Dose Explorer"
            models = ["lnt", "hormesis"]
            hormesis = "piecewise"
        "#;
        let yaml_src = "site:\n  title: Dose Explorer\n  models: [lnt, hormesis]\n  hormesis: piecewise\n";
        let json_src = r#"{"site": {"title": "Dose Explorer", "models": ["lnt", "hormesis"], "hormesis": "piecewise"}}"#;

        let a = Config::parse(toml_src, Format::Toml).unwrap().site;
        let b = Config::parse(yaml_src, Format::Yaml).unwrap().site;
        let c = Config::parse(json_src, Format::Json).unwrap().site;
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.models, vec![RiskModel::Lnt, RiskModel::Hormesis]);
        assert_eq!(a.hormesis, HormesisVariant::Piecewise);
    }

    #[test]
    fn test_unknown_model_rejected() {
        let err = Config::parse("[site]\nmodels = [\"quadratic\"]\n", Format::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(Format::from_path(Path::new("radrisk.TOML")).unwrap(), Format::Toml);
        assert_eq!(Format::from_path(Path::new("conf/site.yml")).unwrap(), Format::Yaml);
        assert!(matches!(
            Format::from_path(Path::new("radrisk.ini")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let err = Config::from_path("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_listen_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        assert_eq!(config.listen_addr().unwrap().to_string(), "127.0.0.1:8050");
        config.server.host = "not-an-ip".to_string();
        assert!(matches!(config.listen_addr(), Err(ConfigError::InvalidHost(_))));
    }

    #[test]
    fn test_load_from_explicit_file_then_port() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.yaml");
        fs::write(&path, "profile: deploy\nserver:\n  port: 9000\nsite:\n  title: Field Guide\n").unwrap();
        let explicit = path.to_str().unwrap();

        let config = Config::load_from(Some(explicit), Path::new("unused.toml"), None).unwrap();
        assert_eq!(config.site.title, "Field Guide");
        assert_eq!(config.port(), 9000);

        let config = Config::load_from(Some(explicit), Path::new("unused.toml"), Some("7001")).unwrap();
        assert_eq!(config.profile, Profile::Deploy);
        assert_eq!(config.port(), 7001);
    }

    #[test]
    fn test_load_from_default_path() {
        let dir = TempDir::new().unwrap();
        let default_path = dir.path().join("radrisk.toml");

        let config = Config::load_from(None, &default_path, None).unwrap();
        assert_eq!(config.port(), 8050);
        assert_eq!(config.site, SiteConfig::default());

        fs::write(&default_path, "[site]\ntitle = \"From disk\"\n").unwrap();
        let config = Config::load_from(None, &default_path, Some("8123")).unwrap();
        assert_eq!(config.site.title, "From disk");
        assert_eq!(config.port(), 8123);
    }

    #[test]
    fn test_load_from_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let default_path = dir.path().join("radrisk.toml");
        fs::write(&default_path, "").unwrap();
        let missing = dir.path().join("nope.toml");

        let err = Config::load_from(missing.to_str(), &default_path, None).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_bad_port_after_file() {
        let dir = TempDir::new().unwrap();
        let default_path = dir.path().join("radrisk.toml");
        let err = Config::load_from(None, &default_path, Some("")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }
}
