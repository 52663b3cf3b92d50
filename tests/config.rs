#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo::libs::config::Config;
    use todo::libs::data_storage::{DataStorage, STORE_FILE_NAME};
    use todo::libs::reconcile::{ConflictStrategy, ImportMode};

    struct ConfigTestContext {
        temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("config.json");
            ConfigTestContext { temp_dir, path }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.import.mode, ImportMode::Merge);
        assert_eq!(config.conflict_strategy(), ConflictStrategy::Skip);
        assert_eq!(config.export.file, "todo_export.csv");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.import.mode = ImportMode::Replace;
        config.import.conflict = "newer".to_string();
        config.export.file = "backup.csv".to_string();

        config.save_to(&ctx.path).unwrap();
        let loaded = Config::read_from(&ctx.path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.conflict_strategy(), ConflictStrategy::Newer);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, r#"{ "import": { "conflict": "update" } }"#).unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config.import.mode, ImportMode::Merge);
        assert_eq!(config.conflict_strategy(), ConflictStrategy::Update);
        assert_eq!(config.export.file, "todo_export.csv");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unknown_conflict_name_is_kept(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, r#"{ "import": { "conflict": "overwrite" } }"#).unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config.conflict_strategy(), ConflictStrategy::Unknown("overwrite".to_string()));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unparsable_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, "import = merge").unwrap();
        assert!(Config::read_from(&ctx.path).is_err());

        fs::write(&ctx.path, r#"{ "import": { "mode": "append" } }"#).unwrap();
        assert!(Config::read_from(&ctx.path).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_storage_creates_directory(ctx: &mut ConfigTestContext) {
        let base = ctx.temp_dir.path().join("data");
        let storage = DataStorage::at(&base);

        let path = storage.get_path(STORE_FILE_NAME).unwrap();
        assert!(base.is_dir());
        assert_eq!(path, base.join("todo.json"));
    }
}
