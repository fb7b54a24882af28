use stepwise_core::{FormConfig, FormStore, FormStoreBuilder, params::CreateForm};
use tempfile::TempDir;

/// Helper function to create a test store
pub async fn create_test_store() -> (TempDir, FormStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = FormStoreBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create store");
    (temp_dir, store)
}

/// Parameters for a form with the given step titles
pub fn form_params(name: &str, titles: &[&str]) -> CreateForm {
    CreateForm {
        name: name.to_string(),
        config: FormConfig::new(titles.iter().map(|t| t.to_string()).collect()),
    }
}
